//! # Ethiopic Calendar Conversion
//!
//! Gregorian → Ethiopian civil calendar conversion for report displays.
//!
//! The daily sales and expense reports show dates in both calendars;
//! this conversion used to live inline in one report screen and is a
//! pure utility here.
//!
//! ## The Ethiopian Civil Calendar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  13 months per year:                                                    │
//! │    • Months 1-12: 30 days each (Meskerem ... Nehase)                   │
//! │    • Month 13 (Pagume): 5 days, 6 in a leap year                       │
//! │                                                                         │
//! │  Leap years follow a plain 4-year cycle (year % 4 == 3),               │
//! │  with no century exception - simpler than the Gregorian rule.          │
//! │                                                                         │
//! │  New Year (1 Meskerem) falls on Gregorian Sep 11, or Sep 12 in the     │
//! │  year before a Gregorian leap year.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Algorithm
//! Both calendars are mapped through the Julian day number (JDN): the
//! Gregorian date is converted to its JDN with the standard civil
//! formula, then the offset from the Ethiopic epoch (JDN 1723856,
//! Amete Mihret) is decomposed over the 1461-day 4-year cycle.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Julian day number of the Ethiopic epoch (Amete Mihret era).
const ETHIOPIC_EPOCH_JDN: i64 = 1_723_856;

/// The 13 Ethiopian month names, in order.
const MONTH_NAMES: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miyazya", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

// =============================================================================
// Ethiopic Date
// =============================================================================

/// A date in the Ethiopian civil calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EthiopicDate {
    /// Amete Mihret year.
    pub year: i32,
    /// Month 1-13 (13 = Pagume).
    pub month: u32,
    /// Day 1-30 (1-5/6 within Pagume).
    pub day: u32,
}

impl EthiopicDate {
    /// Converts a Gregorian date to its Ethiopian civil equivalent.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use suq_core::ethiopic::EthiopicDate;
    ///
    /// // Ethiopian New Year 2016
    /// let date = NaiveDate::from_ymd_opt(2023, 9, 12).unwrap();
    /// let eth = EthiopicDate::from_gregorian(date);
    /// assert_eq!((eth.year, eth.month, eth.day), (2016, 1, 1));
    /// ```
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let jdn = gregorian_jdn(date.year() as i64, date.month() as i64, date.day() as i64);
        let offset = jdn - ETHIOPIC_EPOCH_JDN;

        // Decompose over the 1461-day (4 × 365 + 1) leap cycle
        let cycle = offset.div_euclid(1461);
        let r = offset.rem_euclid(1461);
        let n = r % 365 + 365 * (r / 1460);

        let year = 4 * cycle + r / 365 - r / 1460;
        let month = n / 30 + 1;
        let day = n % 30 + 1;

        EthiopicDate {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        }
    }

    /// The month's name from the fixed 13-name table.
    ///
    /// The fields are public, so an out-of-range month is clamped into
    /// the table rather than indexing past it.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month.clamp(1, 13) as usize - 1]
    }

    /// Whether this date's year is an Ethiopian leap year
    /// (Pagume has 6 days).
    pub const fn is_leap_year(&self) -> bool {
        self.year % 4 == 3
    }

    /// Renders the date as `"{day} {monthName} {year}"`.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EthiopicDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

/// Julian day number of a Gregorian calendar date (civil formula).
fn gregorian_jdn(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

// =============================================================================
// Unit Tests
// =============================================================================
