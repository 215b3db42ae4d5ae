use chrono::{Datelike, Days, Months, NaiveDate};

use crate::clock::Clock;
use crate::dto::calendar::{CalendarDay, CalendarMonthPageData, MonthRef};
use crate::repository::AppointmentReader;
use crate::services::{ServiceError, ServiceResult};

const DAYS_PER_WEEK: usize = 7;

fn month_ref(date: NaiveDate) -> MonthRef {
    MonthRef {
        year: date.year(),
        month: date.month(),
    }
}

fn invalid_month(year: i32, month: u32) -> ServiceError {
    ServiceError::Form(format!("invalid month {year}-{month:02}"))
}

/// Builds the Sunday-first month grid with a marker on every day that has
/// at least one appointment.
pub fn load_calendar_month<R, C>(
    repo: &R,
    clock: &C,
    year: i32,
    month: u32,
) -> ServiceResult<CalendarMonthPageData>
where
    R: AppointmentReader + ?Sized,
    C: Clock + ?Sized,
{
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| invalid_month(year, month))?;
    let next_first = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| invalid_month(year, month))?;
    let previous_first = first
        .checked_sub_months(Months::new(1))
        .ok_or_else(|| invalid_month(year, month))?;
    let last = next_first
        .pred_opt()
        .ok_or_else(|| invalid_month(year, month))?;

    let lead = u64::from(first.weekday().num_days_from_sunday());
    let trail = u64::from(6 - last.weekday().num_days_from_sunday());
    let start = first
        .checked_sub_days(Days::new(lead))
        .ok_or_else(|| invalid_month(year, month))?;
    let end = last
        .checked_add_days(Days::new(trail))
        .ok_or_else(|| invalid_month(year, month))?;

    let today = clock.today();
    let mut days = Vec::new();
    for date in start.iter_days().take_while(|d| *d <= end) {
        days.push(CalendarDay {
            date,
            in_month: date.month() == month && date.year() == year,
            is_today: date == today,
            has_appointments: repo.has_appointments_on(date)?,
        });
    }

    let weeks = days
        .chunks(DAYS_PER_WEEK)
        .map(<[CalendarDay]>::to_vec)
        .collect();

    Ok(CalendarMonthPageData {
        month: month_ref(first),
        previous: month_ref(previous_first),
        next: month_ref(next_first),
        weeks,
    })
}
