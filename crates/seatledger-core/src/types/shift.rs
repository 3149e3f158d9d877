//! The fixed enumeration of seat shift windows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A shift window during which a seat can be occupied.
///
/// Serialized by its human-readable window label, which is what the
/// admin clients send and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shift {
    /// Morning half-day.
    #[serde(rename = "6:30 AM to 2 PM")]
    Morning,
    /// Evening half-day.
    #[serde(rename = "2 PM to 9:30 PM")]
    Evening,
    /// Full working day.
    #[serde(rename = "6:30 AM to 9:30 PM")]
    FullDay,
    /// Round-the-clock access.
    #[serde(rename = "24 Hours")]
    TwentyFourHours,
}

impl Shift {
    /// All shift windows, in display order.
    pub const ALL: [Shift; 4] = [
        Shift::Morning,
        Shift::Evening,
        Shift::FullDay,
        Shift::TwentyFourHours,
    ];

    /// The window label, the canonical wire form.
    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning => "6:30 AM to 2 PM",
            Shift::Evening => "2 PM to 9:30 PM",
            Shift::FullDay => "6:30 AM to 9:30 PM",
            Shift::TwentyFourHours => "24 Hours",
        }
    }
}

impl Default for Shift {
    fn default() -> Self {
        Shift::FullDay
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shift {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shift::ALL
            .iter()
            .copied()
            .find(|shift| shift.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::validation(format!("Unknown shift window: '{s}'")))
    }
}
