use crate::plan::TRACK_COUNT;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Stable key for one (calendar day, track) pair. Keying off `NaiveDate` means
/// time-of-day can never leak into the key.
pub fn reading_key(day: NaiveDate, track: u8) -> String {
    format!("{}-{}", day.format("%Y-%m-%d"), track)
}

/// Per-(day, track) completion flags. Absent key means not completed. Records
/// are created on first toggle and flipped afterwards, never removed.
#[derive(Debug, Clone, Default)]
pub struct CompletionStore {
    records: BTreeMap<String, bool>,
}

impl CompletionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the flag and returns its new value.
    pub fn toggle(&mut self, day: NaiveDate, track: u8) -> bool {
        let flag = self.records.entry(reading_key(day, track)).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn is_completed(&self, day: NaiveDate, track: u8) -> bool {
        self.records
            .get(&reading_key(day, track))
            .copied()
            .unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        self.records.values().filter(|done| **done).count()
    }

    /// Percentage of the plan's units completed, rounded to one decimal place.
    pub fn progress(&self, plan_len: usize) -> f64 {
        let total = plan_len * TRACK_COUNT as usize;
        if total == 0 {
            return 0.0;
        }
        let percent = self.completed_count() as f64 * 100.0 / total as f64;
        (percent * 10.0).round() / 10.0
    }
}
