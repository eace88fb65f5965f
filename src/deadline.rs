use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Unit of a task offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    Days,
    Weeks,
    Months,
}

/// Whether a task falls before or after the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Before,
    After,
}

/// A signed distance from the event date, e.g. "6 months before".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub amount: u32,
    pub unit: OffsetUnit,
    pub direction: Direction,
}

impl Offset {
    pub const fn before(amount: u32, unit: OffsetUnit) -> Self {
        Self { amount, unit, direction: Direction::Before }
    }

    pub const fn after(amount: u32, unit: OffsetUnit) -> Self {
        Self { amount, unit, direction: Direction::After }
    }

    pub const fn months_before(amount: u32) -> Self {
        Self::before(amount, OffsetUnit::Months)
    }

    pub const fn weeks_before(amount: u32) -> Self {
        Self::before(amount, OffsetUnit::Weeks)
    }

    pub const fn days_before(amount: u32) -> Self {
        Self::before(amount, OffsetUnit::Days)
    }

    pub const fn weeks_after(amount: u32) -> Self {
        Self::after(amount, OffsetUnit::Weeks)
    }

    /// Moves `event_date` by this offset.
    ///
    /// Month steps clamp to the last day of the target month, so
    /// 2025-03-31 one month before is 2025-02-28. A result outside the
    /// representable calendar range falls back to `event_date`.
    pub fn apply(&self, event_date: NaiveDate) -> NaiveDate {
        let shifted = match (self.unit, self.direction) {
            (OffsetUnit::Months, Direction::Before) => {
                event_date.checked_sub_months(Months::new(self.amount))
            }
            (OffsetUnit::Months, Direction::After) => {
                event_date.checked_add_months(Months::new(self.amount))
            }
            (unit, direction) => {
                let days = match unit {
                    OffsetUnit::Weeks => u64::from(self.amount) * 7,
                    _ => u64::from(self.amount),
                };
                match direction {
                    Direction::Before => event_date.checked_sub_days(Days::new(days)),
                    Direction::After => event_date.checked_add_days(Days::new(days)),
                }
            }
        };
        shifted.unwrap_or(event_date)
    }
}

/// Returns the deadline for a task `offset` away from `event_date`, formatted `YYYY-MM-DD`.
pub fn calculate_deadline(event_date: NaiveDate, offset: Offset) -> String {
    offset.apply(event_date).format("%Y-%m-%d").to_string()
}
