//! Identifier types used throughout the domain layer
//!
//! Habit and owner ids are plain integers in storage, wrapped here so an
//! owner id can't be passed where a habit id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use chrono::{Local, NaiveDate};

use crate::domain::DomainError;

/// Unique identifier for a habit
///
/// Assigned by the store on creation. Ids are monotonic and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub i64);

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HabitId {
    type Err = DomainError;

    /// Parse a habit id typed by a user (e.g. the `3` in `/check 3`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidHabitId(trimmed.to_string()))
    }
}

impl From<i64> for HabitId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Identifier of the user who owns habits and logs
///
/// Opaque to the core: it is only ever compared for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub i64);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OwnerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Today's date on the host's local clock
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date supplied by a caller
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date", s.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_habit_id() {
        assert_eq!("42".parse::<HabitId>().unwrap(), HabitId(42));
        assert_eq!(" 7 ".parse::<HabitId>().unwrap(), HabitId(7));
    }

    #[test]
    fn test_non_numeric_habit_id() {
        let err = "abc".parse::<HabitId>().unwrap_err();
        assert_eq!(err, DomainError::InvalidHabitId("abc".to_string()));
        assert!("".parse::<HabitId>().is_err());
        assert!("1.5".parse::<HabitId>().is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-01").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(parse_date("03/01/2024").is_err());
    }
}
