//! Heap sort: in-place binary max-heap build plus extract, O(n log n)
//! regardless of input order, O(1) auxiliary space.

use std::cmp::Ordering;

pub fn heap_sort<T, F>(data: &mut [T], cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let n = data.len();
    if n <= 1 {
        return;
    }

    for root in (0..n / 2).rev() {
        sift_down(data, root, n, &cmp);
    }

    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, 0, end, &cmp);
    }
}

fn sift_down<T, F>(data: &mut [T], mut root: usize, end: usize, cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return;
        }
        let right = left + 1;
        let mut largest = root;
        if cmp(&data[left], &data[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < end && cmp(&data[right], &data[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }
        data.swap(root, largest);
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut data = vec![9, 4, 7, 1, 8, 2];
        heap_sort(&mut data, |a, b| a.cmp(b));
        assert_eq!(data, vec![1, 2, 4, 7, 8, 9]);
    }

    #[test]
    fn test_sorted_and_reversed() {
        let mut sorted: Vec<i32> = (0..200).collect();
        heap_sort(&mut sorted, |a, b| a.cmp(b));
        assert_eq!(sorted, (0..200).collect::<Vec<_>>());

        let mut reversed: Vec<i32> = (0..200).rev().collect();
        heap_sort(&mut reversed, |a, b| a.cmp(b));
        assert_eq!(reversed, (0..200).collect::<Vec<_>>());
    }

    #[test]
    fn test_duplicates() {
        let mut data = vec![5, 3, 5, 3, 5, 1];
        heap_sort(&mut data, |a, b| a.cmp(b));
        assert_eq!(data, vec![1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = vec![];
        heap_sort(&mut empty, |a, b| a.cmp(b));
        assert!(empty.is_empty());

        let mut single = vec![0];
        heap_sort(&mut single, |a, b| a.cmp(b));
        assert_eq!(single, vec![0]);
    }
}
