use std::path::PathBuf;

use thiserror::Error;

use crate::models::Category;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),

    #[error("{category} item not found: {name}")]
    ItemNotFound { category: Category, name: String },

    #[error("Your selections exceed your budget (${total:.2} > ${budget:.2})")]
    BudgetExceeded { total: f64, budget: f64 },

    #[error("No budget has been set")]
    MissingBudget,

    #[error("No {0} item selected")]
    IncompleteSelection(Category),

    #[error("No saved menu found at {}", .0.display())]
    SaveNotFound(PathBuf),

    #[error("The saved menu file is corrupted or invalid: {0}")]
    CorruptSave(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Cannot {action} while in {state} state")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
