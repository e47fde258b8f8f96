//! Preprocessing pipeline: projection, date derivation, row filters.
//!
//! Turns a raw match export into the normalized record set the benchmark
//! consumes. Column order in the output follows `keep_columns`, with the
//! derived `full_date` column appended last.

use std::fmt;

use chrono::NaiveDate;

use crate::csv::CsvData;
use crate::key::{parse_integer, DATE_FORMAT};
use crate::record::Record;

/// Verbose calendar format of the raw export, e.g. `Friday, August 11, 2023`.
pub const VERBOSE_DATE_FORMAT: &str = "%A, %B %d, %Y";

/// Name of the derived column appended by the pipeline.
pub const FULL_DATE_COLUMN: &str = "full_date";

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Columns to keep, by header name, in output order.
    pub keep_columns: Vec<String>,
    /// Column holding the verbose weekday/month date (without the year).
    pub date_column: String,
    /// Column holding the four-digit year.
    pub year_column: String,
    /// Keep only rows whose league column contains this substring.
    pub league_column: String,
    pub league_contains: Option<String>,
    /// Keep only rows with a parsable attendance above this threshold.
    pub attendance_column: String,
    pub min_attendance: Option<i64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            keep_columns: [
                "id",
                "home",
                "away",
                "date",
                "year",
                "time (utc)",
                "attendance",
                "venue",
                "league",
                "home_score",
                "away_score",
                "home_goal_scorers",
                "away_goal_scorers",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            date_column: "date".to_string(),
            year_column: "year".to_string(),
            league_column: "league".to_string(),
            league_contains: Some("English Premier League".to_string()),
            attendance_column: "attendance".to_string(),
            min_attendance: Some(20_000),
        }
    }
}

/// Row accounting for one pipeline pass.
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    pub rows_in: usize,
    pub rows_out: usize,
    pub dropped_bad_date: usize,
    pub dropped_by_league: usize,
    pub dropped_by_attendance: usize,
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows in, {} out ({} bad date, {} league filter, {} attendance filter)",
            self.rows_in,
            self.rows_out,
            self.dropped_bad_date,
            self.dropped_by_league,
            self.dropped_by_attendance
        )
    }
}

pub struct PipelineOutput {
    pub header: Record,
    pub rows: Vec<Record>,
    pub stats: PipelineStats,
}

/// Runs projection, `full_date` derivation, and the configured filters.
///
/// A missing configured column is a configuration error. Rows whose date
/// cannot be parsed are dropped and counted rather than aborting the pass.
pub fn preprocess(data: &CsvData, config: &PipelineConfig) -> Result<PipelineOutput, String> {
    let keep_indices: Vec<usize> = config
        .keep_columns
        .iter()
        .map(|name| column_index(&data.header, name))
        .collect::<Result<_, _>>()?;

    // Positions within the projected layout.
    let date_pos = keep_position(config, &config.date_column)?;
    let year_pos = keep_position(config, &config.year_column)?;
    let league_pos = match &config.league_contains {
        Some(_) => Some(keep_position(config, &config.league_column)?),
        None => None,
    };
    let attendance_pos = match config.min_attendance {
        Some(_) => Some(keep_position(config, &config.attendance_column)?),
        None => None,
    };

    let mut header_fields: Vec<String> = config.keep_columns.clone();
    header_fields.push(FULL_DATE_COLUMN.to_string());
    let header = Record::new(header_fields);

    let mut stats = PipelineStats {
        rows_in: data.rows.len(),
        ..Default::default()
    };
    let mut rows = Vec::new();

    for row in &data.rows {
        let mut fields: Vec<String> = keep_indices
            .iter()
            .map(|&i| row.field(i).unwrap_or("").to_string())
            .collect();

        let full_date = match derive_full_date(&fields[date_pos], &fields[year_pos]) {
            Some(date) => date,
            None => {
                stats.dropped_bad_date += 1;
                continue;
            }
        };
        fields.push(full_date);

        if let (Some(pos), Some(needle)) = (league_pos, &config.league_contains) {
            if !fields[pos].contains(needle.as_str()) {
                stats.dropped_by_league += 1;
                continue;
            }
        }

        if let (Some(pos), Some(min)) = (attendance_pos, config.min_attendance) {
            let raw = &fields[pos];
            if raw.is_empty() || parse_integer(raw) <= min {
                stats.dropped_by_attendance += 1;
                continue;
            }
        }

        rows.push(Record::new(fields));
    }

    stats.rows_out = rows.len();
    Ok(PipelineOutput { header, rows, stats })
}

fn column_index(header: &Record, name: &str) -> Result<usize, String> {
    header
        .fields()
        .iter()
        .position(|f| f == name)
        .ok_or_else(|| format!("column {:?} not found in header", name))
}

fn keep_position(config: &PipelineConfig, name: &str) -> Result<usize, String> {
    config
        .keep_columns
        .iter()
        .position(|c| c == name)
        .ok_or_else(|| format!("column {:?} is not in the kept column list", name))
}

/// `"Friday, August 11"` + `"2023"` -> `11/08/2023`.
fn derive_full_date(date_field: &str, year_field: &str) -> Option<String> {
    let stripped: String = date_field.chars().filter(|&c| c != '"').collect();
    let verbose = format!("{}, {}", stripped.trim(), year_field.trim());
    NaiveDate::parse_from_str(&verbose, VERBOSE_DATE_FORMAT)
        .ok()
        .map(|d| d.format(DATE_FORMAT).to_string())
}
