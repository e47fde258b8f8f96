//! Quicksort, in two pivot flavors.
//!
//! [`quick_sort`] uses the Lomuto partition with a fixed last-element pivot:
//! O(n log n) on average and deliberately O(n²) on pre-sorted or reverse
//! input, which is exactly what the worst-case benchmark probes.
//! [`quick_sort_median3`] picks the median of the first, middle, and last
//! elements instead, the mitigation strategy under test.
//!
//! Both recurse only into the smaller partition and loop on the larger, so
//! the stack stays logarithmic even on the quadratic inputs.

use std::cmp::Ordering;

pub fn quick_sort<T, F>(data: &mut [T], cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let n = data.len();
    sort_lomuto(data, 0, n, &cmp);
}

pub fn quick_sort_median3<T, F>(data: &mut [T], cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let n = data.len();
    sort_median3(data, 0, n, &cmp);
}

// Ranges are half-open [lo, hi) throughout.

fn sort_lomuto<T, F>(data: &mut [T], mut lo: usize, mut hi: usize, cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    while hi - lo > 1 {
        let p = lomuto_partition(data, lo, hi, cmp);
        if p - lo < hi - (p + 1) {
            sort_lomuto(data, lo, p, cmp);
            lo = p + 1;
        } else {
            sort_lomuto(data, p + 1, hi, cmp);
            hi = p;
        }
    }
}

/// Lomuto scheme with the last element as pivot.
fn lomuto_partition<T, F>(data: &mut [T], lo: usize, hi: usize, cmp: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let pivot = hi - 1;
    let mut i = lo;
    for j in lo..pivot {
        if cmp(&data[j], &data[pivot]) != Ordering::Greater {
            data.swap(i, j);
            i += 1;
        }
    }
    data.swap(i, pivot);
    i
}

fn sort_median3<T, F>(data: &mut [T], mut lo: usize, mut hi: usize, cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    while hi - lo > 3 {
        let p = median3_partition(data, lo, hi, cmp);
        if p - lo < hi - (p + 1) {
            sort_median3(data, lo, p, cmp);
            lo = p + 1;
        } else {
            sort_median3(data, p + 1, hi, cmp);
            hi = p;
        }
    }
    sort_small(data, lo, hi, cmp);
}

/// Median-of-three partition; requires `hi - lo >= 4`.
///
/// Ordering first/middle/last leaves sentinels at both ends, so the inward
/// scans cannot run off the range.
fn median3_partition<T, F>(data: &mut [T], lo: usize, hi: usize, cmp: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let last = hi - 1;
    let mid = lo + (hi - lo) / 2;

    if cmp(&data[lo], &data[mid]) == Ordering::Greater {
        data.swap(lo, mid);
    }
    if cmp(&data[lo], &data[last]) == Ordering::Greater {
        data.swap(lo, last);
    }
    if cmp(&data[mid], &data[last]) == Ordering::Greater {
        data.swap(mid, last);
    }

    // Stash the median next to the end and scan inward.
    data.swap(mid, last - 1);
    let pivot = last - 1;
    let mut i = lo;
    let mut j = last - 1;
    loop {
        i += 1;
        while cmp(&data[i], &data[pivot]) == Ordering::Less {
            i += 1;
        }
        j -= 1;
        while cmp(&data[j], &data[pivot]) == Ordering::Greater {
            j -= 1;
        }
        if i < j {
            data.swap(i, j);
        } else {
            break;
        }
    }
    data.swap(i, last - 1);
    i
}

/// Direct sort for ranges of at most three elements.
fn sort_small<T, F>(data: &mut [T], lo: usize, hi: usize, cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    for i in (lo + 1)..hi {
        let mut j = i;
        while j > lo && cmp(&data[j - 1], &data[j]) == Ordering::Greater {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}
