//! Handler for `/habits`

use serde::Serialize;
use crate::domain::{HabitId, OwnerId};
use crate::storage::{StorageError, HabitStorage};

/// Information about a habit in the list
#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub habit_id: HabitId,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitSummary>,
    pub message: String,
}

/// List the owner's active habits, newest first
pub fn list_habits<S: HabitStorage>(
    storage: &S,
    owner_id: OwnerId,
) -> Result<ListHabitsResponse, StorageError> {
    let habits: Vec<HabitSummary> = storage
        .list_habits(owner_id)?
        .into_iter()
        .map(|habit| HabitSummary {
            habit_id: habit.id,
            name: habit.name,
            description: habit.description,
            created_at: habit.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    let message = if habits.is_empty() {
        "You don't have any habits yet. Add one with /addhabit <habit name>".to_string()
    } else {
        let lines = habits
            .iter()
            .map(|h| {
                if h.description.is_empty() {
                    format!("{}. {}", h.habit_id, h.name)
                } else {
                    format!("{}. {} - {}", h.habit_id, h.name, h.description)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("📋 Your habits ({}):\n{}", habits.len(), lines)
    };

    Ok(ListHabitsResponse { habits, message })
}
