use sortbench::{KeyValue, Record, SortKey};

/// Header for the small hand-written fixture dataset.
pub fn fixture_header() -> Record {
    Record::from_strs(&["id", "venue", "attendance", "full_date"])
}

/// A handful of rows with quoted attendance, mixed-case venues, and dates
/// out of order.
pub fn fixture_rows() -> Vec<Record> {
    vec![
        Record::from_strs(&["1", "Old Trafford", "\"73,671\"", "14/05/2023"]),
        Record::from_strs(&["2", "Anfield", "\"53,094\"", "11/08/2022"]),
        Record::from_strs(&["3", "old trafford", "\"30,000\"", "01/01/2023"]),
        Record::from_strs(&["4", "Villa Park", "\"42,657\"", "25/12/2022"]),
        Record::from_strs(&["5", "Emirates Stadium", "\"60,260\"", "14/05/2023"]),
    ]
}

pub const VENUE: usize = 1;
pub const ATTENDANCE: usize = 2;
pub const FULL_DATE: usize = 3;

/// Extracted key sequence of `records` for `key`.
pub fn key_sequence(records: &[Record], key: &SortKey) -> Vec<KeyValue> {
    records.iter().map(|r| key.extract(r)).collect()
}

/// True when the extracted keys are in non-decreasing order.
pub fn is_sorted_by_key(records: &[Record], key: &SortKey) -> bool {
    records
        .windows(2)
        .all(|w| key.compare(&w[0], &w[1]) != std::cmp::Ordering::Greater)
}

/// Multiset fingerprint: every record rendered to its CSV line, sorted.
pub fn multiset(records: &[Record]) -> Vec<String> {
    let mut lines: Vec<String> = records.iter().map(|r| r.to_string()).collect();
    lines.sort();
    lines
}
