use std::fmt;

use serde::{Deserialize, Serialize};

/// The three courses every menu is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Drink,
    Dessert,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 3] = [Category::Food, Category::Drink, Category::Dessert];

    /// Lowercase key used in saved records and catalog files.
    pub fn key(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Drink => "drink",
            Category::Dessert => "dessert",
        }
    }

    /// Title-cased label for display.
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Drink => "Drink",
            Category::Dessert => "Dessert",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::Food => 0,
            Category::Drink => 1,
            Category::Dessert => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single entry on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl MenuItem {
    pub fn new(name: &str, price: f64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            description: description.to_string(),
        }
    }

    /// Canonical key for lookups (trimmed, lowercase name).
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }

    /// Basic validation: non-empty name and a finite, non-negative price.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.price.is_finite() && self.price >= 0.0
    }
}

/// Normalize user-typed or stored item names for lookup.
///
/// Inner whitespace is collapsed so "ice   cream" matches "Ice Cream".
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
