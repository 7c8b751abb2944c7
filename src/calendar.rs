use crate::models::MonthGrid;
use chrono::{Datelike, Duration, Months, NaiveDate};

/// Grid for the month containing `cursor`: leading blanks for the weekday of
/// the 1st (Sunday-first), then the day numbers.
pub fn month_grid(cursor: NaiveDate) -> MonthGrid {
    let first = cursor.with_day(1).unwrap_or(cursor);
    // last day of the month via "day 0" of the next month
    let last = first + Months::new(1) - Duration::days(1);
    let leading_blanks = first.weekday().num_days_from_sunday();
    let days_in_month = last.day();

    let cells = (0..leading_blanks)
        .map(|_| None)
        .chain((1..=days_in_month).map(Some))
        .collect();

    MonthGrid {
        year: first.year(),
        month: first.month(),
        leading_blanks,
        days_in_month,
        cells,
    }
}

/// Moves the cursor by whole months, keeping the day-of-month. When the target
/// month is shorter, the date rolls forward into the following month, matching
/// the JS `Date.setMonth` overflow rule (Jan 31 + 1 month lands on Mar 3).
pub fn change_month(cursor: NaiveDate, direction: i32) -> NaiveDate {
    let months = cursor.year() as i64 * 12 + cursor.month0() as i64 + direction as i64;
    let year = months.div_euclid(12) as i32;
    let month = months.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(cursor);
    first + Duration::days(cursor.day() as i64 - 1)
}
