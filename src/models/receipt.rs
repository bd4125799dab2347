use serde::{Deserialize, Serialize};

use crate::models::{Category, MenuItem};

/// One line of a receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    pub category: Category,
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl ReceiptLine {
    pub fn new(category: Category, item: &MenuItem) -> Self {
        Self {
            category,
            name: item.name.clone(),
            price: item.price,
            description: item.description.clone(),
        }
    }
}

/// Read-only snapshot of a complete, affordable order.
///
/// Only produced by [`crate::state::OrderSession::confirm`], so `remaining`
/// is never negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Food, drink, and dessert lines in that order.
    pub lines: [ReceiptLine; 3],
    pub total: f64,
    pub budget: f64,
    pub remaining: f64,
}

impl Receipt {
    /// Record suitable for persisting this receipt.
    pub fn to_saved(&self) -> SavedSelection {
        let [food, drink, dessert] = &self.lines;
        SavedSelection {
            food: food.name.clone(),
            drink: drink.name.clone(),
            dessert: dessert.name.clone(),
            budget: self.budget,
        }
    }
}

/// The single-slot persisted record of the last selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSelection {
    pub food: String,
    pub drink: String,
    pub dessert: String,
    pub budget: f64,
}

impl SavedSelection {
    /// Saved name for a category.
    pub fn name(&self, category: Category) -> &str {
        match category {
            Category::Food => &self.food,
            Category::Drink => &self.drink,
            Category::Dessert => &self.dessert,
        }
    }
}

/// Format an amount as dollars with two decimals.
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(9.0), "$9.00");
        assert_eq!(format_money(12.5), "$12.50");
        assert_eq!(format_money(0.0), "$0.00");
    }
}
