use dialoguer::{Confirm, Input};

use crate::error::{PlannerError, Result};
use crate::models::{Catalog, Category};
use crate::state::parse_budget;

/// Prompt for a budget until a positive number is entered.
pub fn prompt_budget() -> Result<f64> {
    loop {
        let input: String = Input::new()
            .with_prompt("Enter your budget: $")
            .interact_text()?;

        match parse_budget(&input) {
            Ok(budget) => return Ok(budget),
            Err(PlannerError::InvalidBudget(reason)) => println!("{} Please try again.", reason),
            Err(e) => return Err(e),
        }
    }
}

/// Prompt for an item in `category` until a known name is entered.
///
/// Matching is case-insensitive; near misses get a "did you mean" confirmation.
pub fn prompt_item(catalog: &Catalog, category: Category) -> Result<usize> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("Select a {} item", category.key()))
            .interact_text()?;

        match catalog.resolve(category, &input) {
            Ok(index) => return Ok(index),
            Err(PlannerError::ItemNotFound { .. }) => {}
            Err(e) => return Err(e),
        }

        if let Some(suggestion) = catalog.suggest(category, &input) {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", suggestion))
                .default(true)
                .interact()?;

            if confirm {
                return catalog.resolve(category, suggestion);
            }
        }

        println!("Invalid choice, please try again.");
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Free-text prompt used by the form's budget field.
pub fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}
