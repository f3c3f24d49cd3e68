use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// An inclusive [start, end] date window. Always `start <= end`, always
/// inside the dashboard's global bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Earliest selectable date (also the fixed history fetch start).
    pub fn global_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2010, 1, 1).expect("valid constant date")
    }

    /// Latest selectable date.
    pub fn global_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid constant date")
    }

    /// Validated constructor: ordered endpoints within the global bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::ValidationError(format!(
                "start date ({start}) must not be after end date ({end})"
            )));
        }
        if start < Self::global_start() || end > Self::global_end() {
            return Err(CoreError::ValidationError(format!(
                "range [{start}, {end}] is outside the supported window [{}, {}]",
                Self::global_start(),
                Self::global_end()
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Default window: the full global bound.
impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: Self::global_start(),
            end: Self::global_end(),
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
