//! Calendar month keys for the partitioned booking ledger.
//!
//! Each month maps to exactly one partition. The twelve keys are known at
//! boot, which lets the partition registry materialize every handle up
//! front instead of lazily creating them on first access.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A calendar month, the unit of time-based sharding for bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The month of the current civil date (UTC).
    pub fn current() -> Self {
        Self::from_index(Utc::now().month())
    }

    /// Maps a 1-based calendar month number to a `Month`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `1..=12`. Callers pass values obtained
    /// from `chrono`, which guarantees the range.
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index as usize) - 1]
    }

    /// The month preceding this one, wrapping December ← January.
    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 11) % 12]
    }

    /// Lowercase month name, the canonical wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }

    /// Name of the partition table backing this month.
    pub fn table_name(self) -> String {
        format!("bookings_{}", self.as_str())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Month {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::validation(format!("Unknown month: '{s}'")))
    }
}

/// Selects which partition(s) a read targets.
///
/// Writes never take a selector; they always go to the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthSelector {
    /// The current civil month.
    Current,
    /// One named month (historical, read-only).
    Month(Month),
    /// All twelve partitions.
    All,
}

impl FromStr for MonthSelector {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            Ok(MonthSelector::All)
        } else if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("current") {
            Ok(MonthSelector::Current)
        } else {
            Ok(MonthSelector::Month(trimmed.parse()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("January".parse::<Month>().unwrap(), Month::January);
        assert_eq!("DECEMBER".parse::<Month>().unwrap(), Month::December);
        assert!("smarch".parse::<Month>().is_err());
    }

    #[test]
    fn previous_wraps_at_year_boundary() {
        assert_eq!(Month::January.previous(), Month::December);
        assert_eq!(Month::July.previous(), Month::June);
    }

    #[test]
    fn table_names_are_month_scoped() {
        assert_eq!(Month::March.table_name(), "bookings_march");
    }

    #[test]
    fn selector_parses_all_and_named() {
        assert_eq!("all".parse::<MonthSelector>().unwrap(), MonthSelector::All);
        assert_eq!(
            "current".parse::<MonthSelector>().unwrap(),
            MonthSelector::Current
        );
        assert_eq!(
            "june".parse::<MonthSelector>().unwrap(),
            MonthSelector::Month(Month::June)
        );
    }
}
