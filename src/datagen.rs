//! Seeded synthetic match datasets for demos and stress tests.
//!
//! Records use the normalized schema `[id, home, away, venue, attendance,
//! full_date]`. Attendance is emitted quoted with a thousands separator, the
//! way the raw exports carry it, so the generator also exercises key
//! normalization.

use chrono::{Duration, NaiveDate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::key::DATE_FORMAT;
use crate::record::Record;

pub const VENUE_FIELD: usize = 3;
pub const ATTENDANCE_FIELD: usize = 4;
pub const FULL_DATE_FIELD: usize = 5;

const VENUES: [&str; 8] = [
    "Old Trafford",
    "Anfield",
    "Emirates Stadium",
    "Stamford Bridge",
    "Etihad Stadium",
    "Villa Park",
    "St James' Park",
    "Goodison Park",
];

const TEAMS: [&str; 8] = [
    "Manchester United",
    "Liverpool",
    "Arsenal",
    "Chelsea",
    "Manchester City",
    "Aston Villa",
    "Newcastle United",
    "Everton",
];

pub fn header() -> Record {
    Record::from_strs(&["id", "home", "away", "venue", "attendance", "full_date"])
}

/// Generates `n` match records from a fixed seed.
pub fn synthetic_matches(n: usize, seed: u64) -> Vec<Record> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let season_start = NaiveDate::from_ymd_opt(2022, 8, 1).expect("valid date");

    (0..n)
        .map(|i| {
            let home = rng.random_range(0..TEAMS.len());
            let mut away = rng.random_range(0..TEAMS.len());
            if away == home {
                away = (away + 1) % TEAMS.len();
            }
            let attendance: u32 = rng.random_range(20_000..=76_000);
            let date = season_start + Duration::days(rng.random_range(0..300));

            Record::new(vec![
                (i + 1).to_string(),
                TEAMS[home].to_string(),
                TEAMS[away].to_string(),
                VENUES[home].to_string(),
                format!("\"{},{:03}\"", attendance / 1000, attendance % 1000),
                date.format(DATE_FORMAT).to_string(),
            ])
        })
        .collect()
}
