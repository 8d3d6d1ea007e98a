//! Relative time windows ("last 7 days", "6 months").

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowUnit {
    Hours,
    Days,
    Months,
}

/// A span of time measured back from "now".
///
/// Months are calendar-agnostic: whole years count 365 days each, any other month
/// count is 30 days per month. That makes 6m = 180d, 12m = 365d and 24m = 730d.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub amount: u32,
    pub unit: WindowUnit,
}

impl TimeWindow {
    /// The windows offered by the dashboard filters.
    pub const PRESETS: [TimeWindow; 12] = [
        TimeWindow::hours(1),
        TimeWindow::hours(12),
        TimeWindow::hours(24),
        TimeWindow::days(3),
        TimeWindow::days(7),
        TimeWindow::days(15),
        TimeWindow::days(30),
        TimeWindow::days(45),
        TimeWindow::days(60),
        TimeWindow::months(6),
        TimeWindow::months(12),
        TimeWindow::months(24),
    ];

    pub const fn hours(amount: u32) -> Self {
        Self {
            amount,
            unit: WindowUnit::Hours,
        }
    }

    pub const fn days(amount: u32) -> Self {
        Self {
            amount,
            unit: WindowUnit::Days,
        }
    }

    pub const fn months(amount: u32) -> Self {
        Self {
            amount,
            unit: WindowUnit::Months,
        }
    }

    /// Length of the window. Amounts past what `TimeDelta` can hold saturate to
    /// [`TimeDelta::MAX`], which lets every order through.
    pub fn duration(&self) -> TimeDelta {
        let amount = i64::from(self.amount);
        let delta = match self.unit {
            WindowUnit::Hours => TimeDelta::try_hours(amount),
            WindowUnit::Days => TimeDelta::try_days(amount),
            WindowUnit::Months if amount % 12 == 0 => TimeDelta::try_days(amount / 12 * 365),
            WindowUnit::Months => TimeDelta::try_days(amount * 30),
        };
        delta.unwrap_or(TimeDelta::MAX)
    }
}

impl Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suffix = match self.unit {
            WindowUnit::Hours => 'h',
            WindowUnit::Days => 'd',
            WindowUnit::Months => 'm',
        };
        write!(f, "{}{}", self.amount, suffix)
    }
}
