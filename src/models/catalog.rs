use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::item::{normalize_name, Category, MenuItem};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// The built-in menu: (category, name, price, description).
const DEFAULT_MENU: &[(Category, &str, f64, &str)] = &[
    (Category::Food, "Burger", 5.0, "Juicy beef burger with cheese"),
    (Category::Food, "Pizza", 8.0, "Wood-fired margherita pizza"),
    (Category::Food, "Salad", 6.0, "Fresh garden salad with vinaigrette"),
    (Category::Drink, "Water", 1.0, "Refreshing spring water"),
    (Category::Drink, "Soda", 2.0, "Chilled fizzy soda"),
    (Category::Drink, "Juice", 3.0, "Freshly squeezed orange juice"),
    (Category::Dessert, "Ice Cream", 4.0, "Creamy vanilla ice cream"),
    (Category::Dessert, "Cake", 5.0, "Rich chocolate cake"),
    (Category::Dessert, "Pie", 3.0, "Homemade apple pie"),
];

/// On-disk shape of a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    pub food: Vec<MenuItem>,
    pub drink: Vec<MenuItem>,
    pub dessert: Vec<MenuItem>,
}

/// Immutable menu catalog with a case-insensitive lookup table per category.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: [Vec<MenuItem>; 3],
    /// Normalized name -> index into `items`, per category.
    lookup: [HashMap<String, usize>; 3],
}

impl Catalog {
    /// Build a catalog, validating every category.
    ///
    /// Each category must be non-empty, names must be unique (case-insensitive)
    /// and prices finite and non-negative.
    pub fn new(food: Vec<MenuItem>, drink: Vec<MenuItem>, dessert: Vec<MenuItem>) -> Result<Self> {
        let items = [food, drink, dessert];
        let mut lookup: [HashMap<String, usize>; 3] = Default::default();

        for category in Category::ALL {
            let list = &items[category.index()];
            if list.is_empty() {
                return Err(PlannerError::InvalidCatalog(format!(
                    "{} category has no items",
                    category
                )));
            }

            let table = &mut lookup[category.index()];
            for (i, item) in list.iter().enumerate() {
                if !item.is_valid() {
                    return Err(PlannerError::InvalidCatalog(format!(
                        "{} item '{}' has an empty name or invalid price",
                        category, item.name
                    )));
                }
                if table.insert(item.key(), i).is_some() {
                    return Err(PlannerError::InvalidCatalog(format!(
                        "duplicate {} item '{}'",
                        category, item.name
                    )));
                }
            }
        }

        Ok(Self { items, lookup })
    }

    /// Items of a category in menu order.
    pub fn items(&self, category: Category) -> &[MenuItem] {
        &self.items[category.index()]
    }

    /// Item at `index` within a category.
    pub fn item(&self, category: Category, index: usize) -> Option<&MenuItem> {
        self.items[category.index()].get(index)
    }

    /// Find an item by name (case-insensitive, whitespace-tolerant).
    pub fn find(&self, category: Category, name: &str) -> Option<(usize, &MenuItem)> {
        let index = *self.lookup[category.index()].get(&normalize_name(name))?;
        Some((index, &self.items[category.index()][index]))
    }

    /// Resolve a name to its index, or `ItemNotFound`.
    pub fn resolve(&self, category: Category, name: &str) -> Result<usize> {
        self.find(category, name)
            .map(|(index, _)| index)
            .ok_or_else(|| PlannerError::ItemNotFound {
                category,
                name: name.trim().to_string(),
            })
    }

    /// Closest item name to `input` by Jaro-Winkler similarity, if any is close enough.
    pub fn suggest(&self, category: Category, input: &str) -> Option<&str> {
        let needle = normalize_name(input);
        if needle.is_empty() {
            return None;
        }

        self.items(category)
            .iter()
            .map(|item| (item, jaro_winkler(&item.key(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(item, _)| item.name.as_str())
    }

    /// Total number of items across all categories.
    pub fn len(&self) -> usize {
        self.items.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let mut items: [Vec<MenuItem>; 3] = Default::default();
        let mut lookup: [HashMap<String, usize>; 3] = Default::default();

        for &(category, name, price, description) in DEFAULT_MENU {
            let list = &mut items[category.index()];
            let item = MenuItem::new(name, price, description);
            lookup[category.index()].insert(item.key(), list.len());
            list.push(item);
        }

        Self { items, lookup }
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = PlannerError;

    fn try_from(file: CatalogFile) -> Result<Self> {
        Catalog::new(file.food, file.drink, file.dessert)
    }
}

/// Load and validate a catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path.as_ref())?;
    let file: CatalogFile = serde_json::from_str(&content)
        .map_err(|e| PlannerError::InvalidCatalog(e.to_string()))?;
    let catalog = Catalog::try_from(file)?;

    tracing::debug!(
        path = %path.as_ref().display(),
        items = catalog.len(),
        "loaded catalog"
    );
    Ok(catalog)
}
