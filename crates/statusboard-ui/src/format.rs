//! Date and time strings for the board.
//!
//! All functions are pure so they can be checked against fixed instants.

use std::fmt::Display;

use chrono::{DateTime, Locale, TimeZone, Timelike};

const TIME_FORMAT: &str = "%-I:%M";
const TIME_FORMAT_PADDED: &str = "%I:%M";
const MERIDIEM_FORMAT: &str = "%p";

/// Weekday, month, day, year. The order is fixed for every locale; only the
/// names are localized, so a French board reads `mardi, janvier 7, 2025`
/// rather than the locale's native `mardi 7 janvier 2025`.
const DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// How the board renders wall-clock values.
#[derive(Debug, Clone, Copy)]
pub struct ClockFormat {
    pub locale: Locale,
    /// Zero-pad the hour: `03:47 PM` rather than `3:47 PM`.
    pub pad_hour: bool,
}

impl Default for ClockFormat {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            pad_hour: false,
        }
    }
}

impl ClockFormat {
    pub fn new(locale: Locale, pad_hour: bool) -> Self {
        Self { locale, pad_hour }
    }

    /// Hour and minute on a 12-hour clock with an AM/PM marker, e.g.
    /// `3:47 PM`. Seconds are never shown.
    pub fn time<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        let fmt = if self.pad_hour {
            TIME_FORMAT_PADDED
        } else {
            TIME_FORMAT
        };
        let clock = at.format_localized(fmt, self.locale).to_string();
        format!("{clock} {}", self.meridiem(at))
    }

    /// The locale's marker, or `AM`/`PM` for locales that have none
    /// (de_DE, fr_FR and most 24-hour locales).
    fn meridiem<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        let marker = at
            .format_localized(MERIDIEM_FORMAT, self.locale)
            .to_string();
        let marker = marker.trim();
        if !marker.is_empty() {
            return marker.to_string();
        }
        let fallback = if at.hour() < 12 { "AM" } else { "PM" };
        fallback.to_string()
    }

    /// Full weekday, full month, day and year, e.g. `Tuesday, January 7, 2025`.
    pub fn date<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        at.format_localized(DATE_FORMAT, self.locale).to_string()
    }

    /// The line shown under the clock once a status has been set.
    pub fn updated_line<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        format!("Status updated at {}", self.time(at))
    }
}
