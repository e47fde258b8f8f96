//! Counting sort: frequency histogram over an integer-mapped key,
//! O(n + k) where k is the observed key range.
//!
//! Placement walks the input backward through prefix sums, the textbook
//! stable construction. The key range is capped so a stray key cannot ask
//! for an absurd histogram allocation.

/// Upper bound on `max - min + 1` before the sort refuses to run.
pub const MAX_KEY_RANGE: i64 = 1 << 26;

pub fn counting_sort<T, K>(data: &mut Vec<T>, key_of: K) -> Result<(), String>
where
    K: Fn(&T) -> i64,
{
    let n = data.len();
    if n <= 1 {
        return Ok(());
    }

    let keys: Vec<i64> = data.iter().map(&key_of).collect();
    let mut min = keys[0];
    let mut max = keys[0];
    for &k in &keys[1..] {
        if k < min {
            min = k;
        }
        if k > max {
            max = k;
        }
    }

    let range = max
        .checked_sub(min)
        .and_then(|r| r.checked_add(1))
        .ok_or_else(|| "key range overflows".to_string())?;
    if range > MAX_KEY_RANGE {
        return Err(format!(
            "key range {} exceeds counting sort limit {}",
            range, MAX_KEY_RANGE
        ));
    }
    let range = range as usize;

    let mut counts = vec![0usize; range];
    for &k in &keys {
        counts[(k - min) as usize] += 1;
    }
    for i in 1..range {
        counts[i] += counts[i - 1];
    }

    let mut output: Vec<Option<T>> = Vec::with_capacity(n);
    output.resize_with(n, || None);
    for (item, k) in data.drain(..).zip(keys).rev() {
        let slot = (k - min) as usize;
        counts[slot] -= 1;
        output[counts[slot]] = Some(item);
    }
    data.extend(output.into_iter().flatten());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut data = vec![30000i64, 5000, 47000];
        counting_sort(&mut data, |&v| v).unwrap();
        assert_eq!(data, vec![5000, 30000, 47000]);
    }

    #[test]
    fn test_negative_keys() {
        let mut data = vec![3i64, -1, 0, -5, 2];
        counting_sort(&mut data, |&v| v).unwrap();
        assert_eq!(data, vec![-5, -1, 0, 2, 3]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let mut data = vec![(2, "a"), (1, "b"), (2, "c"), (1, "d")];
        counting_sort(&mut data, |&(k, _)| k as i64).unwrap();
        assert_eq!(data, vec![(1, "b"), (1, "d"), (2, "a"), (2, "c")]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i64> = vec![];
        counting_sort(&mut empty, |&v| v).unwrap();
        assert!(empty.is_empty());

        let mut single = vec![9i64];
        counting_sort(&mut single, |&v| v).unwrap();
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_range_limit() {
        let mut data = vec![0i64, MAX_KEY_RANGE + 1];
        assert!(counting_sort(&mut data, |&v| v).is_err());
        // Input left intact on refusal.
        assert_eq!(data.len(), 2);
    }
}
