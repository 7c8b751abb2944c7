use crate::models::PlanEntry;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use tracing::warn;

pub const TRACK_COUNT: u8 = 4;
pub const PLAN_DAYS: usize = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    Empty,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Empty => write!(f, "reading plan has no entries"),
        }
    }
}

impl std::error::Error for PlanError {}

/// The ordered plan table. Non-empty by construction, so every modulo lookup
/// below is defined.
#[derive(Debug, Clone)]
pub struct ReadingPlan {
    entries: Vec<PlanEntry>,
}

impl ReadingPlan {
    pub fn new(entries: Vec<PlanEntry>) -> Result<Self, PlanError> {
        if entries.is_empty() {
            return Err(PlanError::Empty);
        }
        if entries.len() != PLAN_DAYS {
            warn!(
                "reading plan has {} entries instead of {PLAN_DAYS}; lookups wrap early",
                entries.len()
            );
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Total completable units: one per (day, track) pair. A toggle marks the
    /// whole composite today/tomorrow reading, so passes do not multiply this.
    pub fn total_units(&self) -> usize {
        self.entries.len() * TRACK_COUNT as usize
    }

    /// Composite labels for the given date: today's entry and tomorrow's,
    /// joined per track, so each day shows two days' worth of reading.
    pub fn reading_for(&self, date: NaiveDate) -> [String; 4] {
        self.reading_at(day_of_year(date) as usize)
    }

    pub fn reading_at(&self, index: usize) -> [String; 4] {
        let today = &self.entries[index % self.entries.len()];
        let tomorrow = &self.entries[(index + 1) % self.entries.len()];
        [1u8, 2, 3, 4].map(|track| format!("{} / {}", today.track(track), tomorrow.track(track)))
    }
}

/// Zero-based offset of the date within its calendar year, from calendar
/// fields rather than timestamp subtraction, so DST shifts cannot skew it.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal0()
}
