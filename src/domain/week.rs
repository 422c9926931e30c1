//! # Week Identity
//!
//! A reporting week is identified by its Monday. Everything else (ISO week
//! number, Sunday, the log file name) is derived from that date.
//! Weeks whose Monday or Sunday falls outside the `NaiveDate` range do not exist.

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

/// Date format used in the report header ("10-06-2024").
pub const HEADER_DATE_FORMAT: &str = "%d-%m-%Y";

/// Date format used in the file name ("10-06_2024").
pub const FILE_DATE_FORMAT: &str = "%d-%m_%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekId {
    monday: NaiveDate,
    sunday: NaiveDate,
}

impl WeekId {
    /// Returns the week containing `date`, i.e. the most recent Monday on or before it.
    ///
    /// `None` when that Monday or the following Sunday is not representable.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        let offset = date.weekday().num_days_from_monday();
        let monday = date.checked_sub_days(Days::new(u64::from(offset)))?;
        let sunday = monday.checked_add_days(Days::new(6))?;
        Some(Self { monday, sunday })
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn sunday(&self) -> NaiveDate {
        self.sunday
    }

    /// ISO-8601 week number (1..=53) of the Monday.
    pub fn iso_week(&self) -> u32 {
        self.monday.iso_week().week()
    }

    /// ISO-8601 week-based year. Differs from [`WeekId::year`] for weeks that
    /// straddle New Year (Monday 2024-12-30 is week 1 of 2025).
    pub fn iso_year(&self) -> i32 {
        self.monday.iso_week().year()
    }

    /// Calendar year of the Monday. This is the year printed in the header and file name.
    pub fn year(&self) -> i32 {
        self.monday.year()
    }

    /// e.g. `week_24_10-06_2024.md`
    pub fn file_name(&self) -> String {
        format!(
            "week_{}_{}.md",
            self.iso_week(),
            self.monday.format(FILE_DATE_FORMAT)
        )
    }

    pub fn from_label(&self) -> String {
        self.monday.format(HEADER_DATE_FORMAT).to_string()
    }

    pub fn to_label(&self) -> String {
        self.sunday().format(HEADER_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Week {}", self.year(), self.iso_week())
    }
}
