//! Merge sort: top-down divide and conquer with an O(n) auxiliary buffer,
//! O(n log n) regardless of input order. Not in place.

use std::cmp::Ordering;

pub fn merge_sort<T, F>(data: &mut [T], cmp: F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let n = data.len();
    if n <= 1 {
        return;
    }
    let mut aux: Vec<T> = Vec::with_capacity(n);
    sort_range(data, &mut aux, 0, n, &cmp);
}

fn sort_range<T, F>(data: &mut [T], aux: &mut Vec<T>, lo: usize, hi: usize, cmp: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(data, aux, lo, mid, cmp);
    sort_range(data, aux, mid, hi, cmp);
    merge(data, aux, lo, mid, hi, cmp);
}

fn merge<T, F>(data: &mut [T], aux: &mut Vec<T>, lo: usize, mid: usize, hi: usize, cmp: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    aux.clear();
    aux.extend_from_slice(&data[lo..hi]);

    let split = mid - lo;
    let len = hi - lo;
    let mut i = 0;
    let mut j = split;
    for slot in data[lo..hi].iter_mut() {
        let take_left =
            i < split && (j >= len || cmp(&aux[i], &aux[j]) != Ordering::Greater);
        if take_left {
            *slot = aux[i].clone();
            i += 1;
        } else {
            *slot = aux[j].clone();
            j += 1;
        }
    }
}
