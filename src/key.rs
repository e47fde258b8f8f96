//! Sort key extraction and normalization.
//!
//! A [`SortKey`] names a field index and the domain its values are read as.
//! Extraction follows a silent-degrade policy: malformed fields map to a
//! sentinel instead of aborting a benchmark run. Integers with quotes and
//! thousands separators are cleaned before parsing, text keys are quote
//! stripped and case folded, and dates use the fixed `dd/mm/yyyy` format with
//! unparsable values pinned to a fixed sentinel date below any real match
//! date.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::record::Record;

/// Calendar format used by the `full_date` column.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Value domain a sortable field is interpreted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDomain {
    Integer,
    Text,
    Date,
}

impl KeyDomain {
    pub fn all() -> Vec<KeyDomain> {
        vec![KeyDomain::Integer, KeyDomain::Text, KeyDomain::Date]
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeyDomain::Integer => "integer",
            KeyDomain::Text => "text",
            KeyDomain::Date => "date",
        }
    }
}

impl fmt::Display for KeyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for KeyDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(KeyDomain::Integer),
            "text" | "string" => Ok(KeyDomain::Text),
            "date" => Ok(KeyDomain::Date),
            other => Err(format!("unknown key domain: {}", other)),
        }
    }
}

/// A comparable value extracted from one record field.
///
/// A single `SortKey` always yields a single variant across a dataset, so the
/// cross-variant ordering of the derive is never observed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyValue {
    Int(i64),
    Text(String),
    Date(NaiveDate),
}

/// Field index plus value domain; determines the comparator and, for
/// distribution sorts, the key-to-integer mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: usize,
    pub domain: KeyDomain,
}

impl SortKey {
    pub fn new(field: usize, domain: KeyDomain) -> Self {
        Self { field, domain }
    }

    /// Extracts the comparable value for this key from `record`.
    ///
    /// Missing or malformed fields degrade to a sentinel (0, empty string,
    /// lowest date) rather than failing.
    pub fn extract(&self, record: &Record) -> KeyValue {
        let raw = record.field(self.field).unwrap_or("");
        match self.domain {
            KeyDomain::Integer => KeyValue::Int(parse_integer(raw)),
            KeyDomain::Text => KeyValue::Text(normalize_text(raw)),
            KeyDomain::Date => KeyValue::Date(parse_date(raw)),
        }
    }

    /// Total comparator over records for this key.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.extract(a).cmp(&self.extract(b))
    }

    /// Key-to-integer mapping used by distribution sorts.
    ///
    /// Text has no bounded integer encoding that agrees with its lexical
    /// order, so it is rejected here and surfaces as a configuration error
    /// before any run starts.
    pub fn integer_rank(&self, record: &Record) -> Result<i64, String> {
        let raw = record.field(self.field).unwrap_or("");
        match self.domain {
            KeyDomain::Integer => Ok(parse_integer(raw)),
            KeyDomain::Date => Ok(parse_date(raw).num_days_from_ce() as i64),
            KeyDomain::Text => Err("text keys have no integer rank".to_string()),
        }
    }

    /// Checks that this key's field index exists in every record.
    pub fn validate(&self, records: &[Record]) -> Result<(), String> {
        for record in records {
            if self.field >= record.arity() {
                return Err(format!(
                    "field index {} out of range for record with {} fields",
                    self.field,
                    record.arity()
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field #{} ({})", self.field, self.domain)
    }
}

/// Strips quotes and thousands separators, then parses. Non-numeric input
/// (or an overflowing value) degrades to 0.
pub fn parse_integer(raw: &str) -> i64 {
    let cleaned = raw.trim().trim_matches('"').trim();
    let negative = cleaned.starts_with('-');
    let digits: String = cleaned.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    let value = digits.parse::<i64>().unwrap_or(0);
    if negative { -value } else { value }
}

/// Strips quote characters and folds case; comparisons are then byte-wise.
fn normalize_text(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|&c| c != '"')
        .collect::<String>()
        .to_lowercase()
}

/// Parses `dd/mm/yyyy`; unparsable dates pin to the sentinel so the
/// comparator stays total across every algorithm.
fn parse_date(raw: &str) -> NaiveDate {
    let cleaned = raw.trim().trim_matches('"');
    NaiveDate::parse_from_str(cleaned, DATE_FORMAT).unwrap_or_else(|_| lowest_date())
}

/// Sentinel for malformed dates: sorts before any real date, and its
/// days-from-CE rank (1) keeps counting sort's key range bounded.
fn lowest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).expect("valid date")
}
