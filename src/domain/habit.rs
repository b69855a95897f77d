//! Habit entity and related functionality
//!
//! This module defines the Habit struct that represents something a user
//! wants to track, along with the validation applied to new habits.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::domain::{HabitId, OwnerId, DomainError};

const MAX_NAME_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 500;

/// A habit represents something the user wants to do regularly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Store-assigned identifier
    pub id: HabitId,
    /// User this habit belongs to
    pub owner_id: OwnerId,
    /// Display name (e.g., "Drink 8 glasses of water")
    pub name: String,
    /// Free-form description, empty when not given
    pub description: String,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
    /// Only active habits are listed or eligible for logging
    pub is_active: bool,
}

impl Habit {
    /// Create a habit from existing data (used when loading from database)
    pub fn from_existing(
        id: HabitId,
        owner_id: OwnerId,
        name: String,
        description: String,
        created_at: DateTime<Utc>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            description,
            created_at,
            is_active,
        }
    }
}

/// A validated habit that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewHabit {
    pub owner_id: OwnerId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl NewHabit {
    /// Validate user input and stamp the creation time
    ///
    /// Name and description are stored trimmed and their limits apply to
    /// the trimmed text. The name must not be empty after trimming.
    pub fn new(owner_id: OwnerId, name: &str, description: &str) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;
        let description = Self::validate_description(description)?;

        Ok(Self {
            owner_id,
            name,
            description,
            created_at: Utc::now(),
        })
    }

    fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::InvalidHabitName(format!(
                "Habit name cannot be longer than {} characters",
                MAX_NAME_LEN
            )));
        }

        Ok(trimmed.to_string())
    }

    fn validate_description(description: &str) -> Result<String, DomainError> {
        let trimmed = description.trim();

        if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(DomainError::InvalidDescription(format!(
                "Description cannot be longer than {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }

        Ok(trimmed.to_string())
    }
}
