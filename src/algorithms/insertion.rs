//! Insertion sort: shift-and-insert, O(n²) worst/average, O(n) on
//! already-sorted input. Serves as the correctness baseline for the others.

use std::cmp::Ordering;

pub fn insertion_sort<T, F>(data: &mut [T], cmp: F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    for i in 1..data.len() {
        let current = data[i].clone();
        let mut j = i;
        while j > 0 && cmp(&data[j - 1], &current) == Ordering::Greater {
            data[j] = data[j - 1].clone();
            j -= 1;
        }
        data[j] = current;
    }
}
