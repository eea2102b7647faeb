//! Calendar arithmetic for billing schedules: advancing a date by one
//! billing period and finding the next due date strictly in the future.

use chrono::{Datelike, NaiveDate};

use crate::models::Frequency;

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Advance a date by one billing period.
///
/// Monthly increments the month (rolling the year at December) and clamps
/// the day to the length of the target month. Annual increments the year
/// keeping month and day; Feb 29 falls back to Feb 28 in non-leap years.
/// Defined for every valid calendar date.
pub fn advance_one_period(d: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Monthly => {
            let (year, month) = if d.month() == 12 {
                (d.year() + 1, 1)
            } else {
                (d.year(), d.month() + 1)
            };
            let day = d.day().min(days_in_month(year, month));
            NaiveDate::from_ymd_opt(year, month, day).expect("clamped day is valid")
        }
        Frequency::Annual => NaiveDate::from_ymd_opt(d.year() + 1, d.month(), d.day())
            .unwrap_or_else(|| {
                NaiveDate::from_ymd_opt(d.year() + 1, d.month(), 28).expect("day 28 is valid")
            }),
    }
}

/// Next billing date strictly after `today`.
///
/// Rolls forward from the start date through every elapsed period, so
/// decades-old subscriptions resolve without the caller enumerating
/// periods. A start date still in the future is returned unchanged.
/// Returns `None` when the start date is absent.
pub fn next_due(start: Option<NaiveDate>, frequency: Frequency, today: NaiveDate) -> Option<NaiveDate> {
    let mut d = start?;
    while d <= today {
        d = advance_one_period(d, frequency);
    }
    Some(d)
}
