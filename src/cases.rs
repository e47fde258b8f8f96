//! Canonical input orderings for a benchmark run.
//!
//! For a given key, the three cases are permutations of the same record
//! multiset: AVERAGE is the dataset's arrival order, BEST is pre-sorted
//! ascending by the key, and WORST is BEST reversed. BEST is built with the
//! library comparator, never with the algorithm under test, so "sort once to
//! build the case, then re-sort to measure" holds for every algorithm.

use std::fmt;
use std::str::FromStr;

use crate::key::SortKey;
use crate::record::Record;

/// One of the three canonical orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseKind {
    Best,
    Average,
    Worst,
}

impl CaseKind {
    /// All cases, in run order.
    pub fn all() -> Vec<CaseKind> {
        vec![CaseKind::Best, CaseKind::Average, CaseKind::Worst]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CaseKind::Best => "best",
            CaseKind::Average => "average",
            CaseKind::Worst => "worst",
        }
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "best" => Ok(CaseKind::Best),
            "average" => Ok(CaseKind::Average),
            "worst" => Ok(CaseKind::Worst),
            other => Err(format!("unknown case: {}", other)),
        }
    }
}

/// Builds the `kind` ordering of `records` for `key`.
///
/// Always returns a fresh copy so one run's in-place permutation cannot leak
/// into the next.
pub fn build_case(kind: CaseKind, records: &[Record], key: &SortKey) -> Vec<Record> {
    let mut case = records.to_vec();
    match kind {
        CaseKind::Average => {}
        CaseKind::Best => case.sort_by(|a, b| key.compare(a, b)),
        CaseKind::Worst => {
            case.sort_by(|a, b| key.compare(a, b));
            case.reverse();
        }
    }
    case
}
