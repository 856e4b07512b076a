//! Year extraction from free-form GEDCOM dates
//!
//! Dates in real files take every shape (`ABT 1850`, `BET 1840 AND 1845`,
//! `12 MAR 1901`, `(in her youth)`). Only the year is interpreted: the first
//! maximal run of exactly four ASCII digits.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Sentinel upper bound meaning "no upper bound"
pub const OPEN_END: i32 = -1;

/// The year of a free-form date, if it contains one
pub fn derive_year(date: &str) -> Option<i32> {
    DIGIT_RUN
        .find_iter(date)
        .map(|run| run.as_str())
        .find(|run| run.len() == 4)
        .and_then(|run| run.parse().ok())
}

/// Inclusive range check; `to == -1` leaves the range open-ended
pub fn year_in_range(year: Option<i32>, from: i32, to: i32) -> bool {
    match year {
        Some(year) => year >= from && (to == OPEN_END || year <= to),
        None => false,
    }
}
