use serde::{Deserialize, Serialize};

/// One day of the reading plan: four parallel reference strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEntry {
    pub track1: String,
    pub track2: String,
    pub track3: String,
    pub track4: String,
}

impl PlanEntry {
    /// Track numbers are 1-4; handlers validate before indexing.
    pub fn track(&self, track: u8) -> &str {
        match track {
            1 => &self.track1,
            2 => &self.track2,
            3 => &self.track3,
            _ => &self.track4,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date: String,
    pub track: u8,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub cursor: String,
    #[serde(default)]
    pub shift: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrackReading {
    pub track: u8,
    pub label: String,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayResponse {
    pub date: String,
    pub readings: Vec<TrackReading>,
    pub progress: ProgressResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

/// A 7-column month grid. `cells` holds `leading_blanks` nulls followed by the
/// day numbers 1..=days_in_month, in render order.
#[derive(Debug, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub cells: Vec<Option<u32>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub cursor: String,
    pub today: String,
    pub grid: MonthGrid,
}
