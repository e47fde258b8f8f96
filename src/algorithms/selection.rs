//! Selection sort: repeated min-scan, O(n²) regardless of input order.

use std::cmp::Ordering;

pub fn selection_sort<T, F>(data: &mut [T], cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let n = data.len();
    for i in 0..n {
        let mut min_index = i;
        for j in (i + 1)..n {
            if cmp(&data[j], &data[min_index]) == Ordering::Less {
                min_index = j;
            }
        }
        if min_index != i {
            data.swap(i, min_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6];
        selection_sort(&mut data, |a, b| a.cmp(b));
        assert_eq!(data, vec![1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn test_reversed() {
        let mut data: Vec<i32> = (0..64).rev().collect();
        selection_sort(&mut data, |a, b| a.cmp(b));
        assert_eq!(data, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = vec![];
        selection_sort(&mut empty, |a, b| a.cmp(b));
        assert!(empty.is_empty());

        let mut single = vec![1];
        selection_sort(&mut single, |a, b| a.cmp(b));
        assert_eq!(single, vec![1]);
    }
}
