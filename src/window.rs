//! Symbolic time windows and their resolution to concrete instant ranges.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, OffsetDateTime};

/// A symbolic filter over when transactions occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFilter {
    /// No time filtering.
    All,
    /// The last 7 days.
    Week,
    /// The last 30 days.
    Month,
    /// The last 6 calendar months.
    SixMonth,
}

impl TimeFilter {
    /// The filter selected when the caller has not chosen one.
    pub fn default_preset() -> Self {
        Self::Month
    }

    /// The stable key used in serialized data and queries.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Week => "week",
            Self::Month => "month",
            Self::SixMonth => "six-month",
        }
    }

    /// The label shown in the filter picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Overall",
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::SixMonth => "Last 6 months",
        }
    }

    /// Resolve the filter into a concrete range of instants ending at `now`.
    ///
    /// Returns `None` for [TimeFilter::All], meaning no time bounds at all.
    /// Both ends of the returned range are inclusive. [TimeFilter::Week] and
    /// [TimeFilter::Month] look back a fixed 7 and 30 days.
    /// [TimeFilter::SixMonth] steps back six calendar months, clamping the
    /// day to the length of the target month (e.g. 31 October back to
    /// 30 April).
    ///
    /// `now` is always supplied by the caller, never read from the wall
    /// clock, so windows are reproducible.
    pub fn resolve(self, now: OffsetDateTime) -> Option<RangeInclusive<OffsetDateTime>> {
        match self {
            Self::All => None,
            Self::Week => Some(now - Duration::days(7)..=now),
            Self::Month => Some(now - Duration::days(30)..=now),
            Self::SixMonth => Some(months_back(now, 6)..=now),
        }
    }
}

/// The same instant `months` calendar months earlier, with the day clamped
/// to the length of the target month.
fn months_back(now: OffsetDateTime, months: i32) -> OffsetDateTime {
    let date = now.date();
    let total_months = date.year() * 12 + i32::from(month_number(date.month())) - 1 - months;
    let year = total_months.div_euclid(12);
    let month = month_from_number((total_months.rem_euclid(12) + 1) as u8);
    let day = date.day().min(last_day_of_month(year, month));
    let start = Date::from_calendar_date(year, month, day).expect("invalid window start date");

    now.replace_date(start)
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn month_number(month: Month) -> u8 {
    match month {
        Month::January => 1,
        Month::February => 2,
        Month::March => 3,
        Month::April => 4,
        Month::May => 5,
        Month::June => 6,
        Month::July => 7,
        Month::August => 8,
        Month::September => 9,
        Month::October => 10,
        Month::November => 11,
        Month::December => 12,
    }
}

fn month_from_number(month: u8) -> Month {
    match month {
        1 => Month::January,
        2 => Month::February,
        3 => Month::March,
        4 => Month::April,
        5 => Month::May,
        6 => Month::June,
        7 => Month::July,
        8 => Month::August,
        9 => Month::September,
        10 => Month::October,
        11 => Month::November,
        12 => Month::December,
        _ => panic!("invalid month number {month}"),
    }
}
