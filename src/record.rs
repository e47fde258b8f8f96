//! Tabular record model.
//!
//! A [`Record`] is a fixed-arity tuple of string fields. Sorting only ever
//! permutes record positions; field contents are never touched.

use std::fmt;

/// One row of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Convenience constructor for literals in demos and tests.
    pub fn from_strs(fields: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Returns the field at `index`, or `None` when the index is out of range.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|s| s.as_str())
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_access() {
        let record = Record::from_strs(&["1", "Old Trafford", "73000"]);
        assert_eq!(record.arity(), 3);
        assert_eq!(record.field(1), Some("Old Trafford"));
        assert_eq!(record.field(3), None);
    }

    #[test]
    fn test_display_joins_with_commas() {
        let record = Record::from_strs(&["a", "b", "c"]);
        assert_eq!(record.to_string(), "a,b,c");
    }
}
