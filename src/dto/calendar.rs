//! DTOs for the month calendar.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from adjacent months.
    pub in_month: bool,
    pub is_today: bool,
    pub has_appointments: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

/// Sunday-first weeks covering a whole month.
#[derive(Debug, Serialize)]
pub struct CalendarMonthPageData {
    pub month: MonthRef,
    pub previous: MonthRef,
    pub next: MonthRef,
    pub weeks: Vec<Vec<CalendarDay>>,
}
