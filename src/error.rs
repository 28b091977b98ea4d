use thiserror::Error;

use crate::models::MealSlot;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("No recipes available for {0} (check the catalog and dislike filters)")]
    EmptyCategory(MealSlot),

    #[error("Day count must be at least 1, got {0}")]
    InvalidDayCount(i64),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
