//! Handler for `/addhabit`

use serde::{Deserialize, Serialize};
use crate::domain::{HabitId, OwnerId};
use crate::storage::{StorageError, HabitStorage};

/// Parameters for creating a new habit
#[derive(Debug, Deserialize)]
pub struct CreateHabitParams {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    pub habit_id: HabitId,
    pub name: String,
    pub message: String,
}

/// Create a new habit using the provided storage
pub fn create_habit<S: HabitStorage>(
    storage: &S,
    owner_id: OwnerId,
    params: CreateHabitParams,
) -> Result<CreateHabitResponse, StorageError> {
    let habit_id = storage.add_habit(owner_id, &params.name, &params.description)?;
    let name = params.name.trim().to_string();

    Ok(CreateHabitResponse {
        habit_id,
        message: format!(
            "✅ Added habit '{}' (ID: {}). Use /check {} to mark it done today!",
            name, habit_id, habit_id
        ),
        name,
    })
}
