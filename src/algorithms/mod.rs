//! The sorting strategies under benchmark.
//!
//! Every algorithm is a free function generic over the element type and a
//! comparator (or, for counting sort, a key-to-integer function), so one
//! implementation serves every sortable field. [`Algorithm`] is the runtime
//! selector that dispatches a dataset and a [`SortKey`] to the right function.

pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use counting::counting_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::{quick_sort, quick_sort_median3};
pub use selection::selection_sort;

use std::fmt;
use std::str::FromStr;

use crate::key::{KeyDomain, SortKey};
use crate::record::Record;

/// Identifier for one of the seven sorting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Insertion,
    Selection,
    Counting,
    Heap,
    Merge,
    Quick,
    QuickMedian3,
}

impl Algorithm {
    /// All algorithms, in reporting order.
    pub fn all() -> Vec<Algorithm> {
        vec![
            Algorithm::Insertion,
            Algorithm::Selection,
            Algorithm::Counting,
            Algorithm::Heap,
            Algorithm::Merge,
            Algorithm::Quick,
            Algorithm::QuickMedian3,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Counting => "counting",
            Algorithm::Heap => "heap",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::QuickMedian3 => "quick-median3",
        }
    }

    /// Whether this algorithm can sort keys of the given domain.
    ///
    /// Counting sort needs a bounded integer encoding of the key, which text
    /// does not have.
    pub fn supports(&self, domain: KeyDomain) -> bool {
        match self {
            Algorithm::Counting => domain != KeyDomain::Text,
            _ => true,
        }
    }

    /// Sorts `records` ascending by `key` using this algorithm.
    ///
    /// Positions are permuted in place; field contents never change. The
    /// empty and single-record datasets are valid no-ops.
    pub fn run(&self, records: &mut Vec<Record>, key: &SortKey) -> Result<(), String> {
        if !self.supports(key.domain) {
            return Err(format!(
                "{} sort does not support the {} domain",
                self.name(),
                key.domain
            ));
        }
        let cmp = |a: &Record, b: &Record| key.compare(a, b);
        match self {
            Algorithm::Insertion => insertion_sort(records, cmp),
            Algorithm::Selection => selection_sort(records, cmp),
            Algorithm::Heap => heap_sort(records, cmp),
            Algorithm::Merge => merge_sort(records, cmp),
            Algorithm::Quick => quick_sort(records, cmp),
            Algorithm::QuickMedian3 => quick_sort_median3(records, cmp),
            Algorithm::Counting => {
                // Supported domains always rank; the fallback is unreachable.
                return counting_sort(records, |r| key.integer_rank(r).unwrap_or(0));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "insertion" => Ok(Algorithm::Insertion),
            "selection" => Ok(Algorithm::Selection),
            "counting" => Ok(Algorithm::Counting),
            "heap" => Ok(Algorithm::Heap),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            "quick-median3" | "quick_median3" | "median3" => Ok(Algorithm::QuickMedian3),
            other => Err(format!("unknown algorithm: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_counting_rejects_text() {
        assert!(!Algorithm::Counting.supports(KeyDomain::Text));
        assert!(Algorithm::Counting.supports(KeyDomain::Integer));
        assert!(Algorithm::Counting.supports(KeyDomain::Date));
        assert!(Algorithm::Quick.supports(KeyDomain::Text));
    }

    #[test]
    fn test_run_rejects_unsupported_domain() {
        let mut records = vec![Record::from_strs(&["Anfield"])];
        let key = SortKey::new(0, KeyDomain::Text);
        assert!(Algorithm::Counting.run(&mut records, &key).is_err());
    }
}
