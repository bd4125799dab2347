use crate::error::{PlannerError, Result};
use crate::models::{Catalog, Category, MenuItem, Receipt, ReceiptLine, SavedSelection};

/// Parse a user-entered budget.
///
/// Accepts an optional leading `$`; the value must be finite and strictly positive.
pub fn parse_budget(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let number = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();

    let budget: f64 = number
        .parse()
        .map_err(|_| PlannerError::InvalidBudget("Please enter a numeric value.".to_string()))?;

    validate_budget(budget)?;
    Ok(budget)
}

fn validate_budget(budget: f64) -> Result<()> {
    if !budget.is_finite() {
        return Err(PlannerError::InvalidBudget(
            "Please enter a numeric value.".to_string(),
        ));
    }
    if budget <= 0.0 {
        return Err(PlannerError::InvalidBudget(
            "Budget must be greater than zero.".to_string(),
        ));
    }
    Ok(())
}

/// One planning round: a budget plus at most one selection per category.
///
/// The session borrows the catalog and records selections as indices into it.
#[derive(Debug, Clone)]
pub struct OrderSession<'a> {
    catalog: &'a Catalog,
    budget: Option<f64>,
    selections: [Option<usize>; 3],
}

impl<'a> OrderSession<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            budget: None,
            selections: [None; 3],
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn budget(&self) -> Option<f64> {
        self.budget
    }

    /// Set the budget. On failure the previous budget is kept.
    pub fn set_budget(&mut self, budget: f64) -> Result<()> {
        validate_budget(budget)?;
        self.budget = Some(budget);
        tracing::debug!(budget, "budget set");
        Ok(())
    }

    /// Parse and set the budget from raw user input.
    pub fn set_budget_input(&mut self, input: &str) -> Result<f64> {
        let budget = parse_budget(input)?;
        self.set_budget(budget)?;
        Ok(budget)
    }

    /// Select the item at `index` in a category, replacing any prior choice.
    pub fn select(&mut self, category: Category, index: usize) -> Result<&'a MenuItem> {
        let catalog = self.catalog;
        let item = catalog
            .item(category, index)
            .ok_or_else(|| PlannerError::ItemNotFound {
                category,
                name: format!("#{}", index + 1),
            })?;

        self.selections[category.index()] = Some(index);
        tracing::debug!(category = category.key(), item = %item.name, "item selected");
        Ok(item)
    }

    /// Select an item by name (case-insensitive), replacing any prior choice.
    pub fn select_by_name(&mut self, category: Category, name: &str) -> Result<&'a MenuItem> {
        let index = self.catalog.resolve(category, name)?;
        self.select(category, index)
    }

    /// Currently selected item for a category.
    pub fn selection(&self, category: Category) -> Option<&'a MenuItem> {
        let catalog = self.catalog;
        self.selections[category.index()].and_then(|i| catalog.item(category, i))
    }

    /// First category without a selection, if any.
    pub fn missing(&self) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| self.selections[c.index()].is_none())
    }

    /// True when every category has a selection.
    pub fn is_complete(&self) -> bool {
        self.missing().is_none()
    }

    /// Sum of the selected prices (partial selections included).
    pub fn total(&self) -> f64 {
        Category::ALL
            .into_iter()
            .filter_map(|c| self.selection(c))
            .map(|item| item.price)
            .sum()
    }

    /// True when the session is complete, has a budget, and fits in it.
    pub fn is_affordable(&self) -> bool {
        match self.budget {
            Some(budget) => self.is_complete() && self.total() <= budget,
            None => false,
        }
    }

    /// Derive a receipt without touching the session.
    pub fn receipt(&self) -> Result<Receipt> {
        let budget = self.budget.ok_or(PlannerError::MissingBudget)?;
        let lines = self.lines()?;

        let total: f64 = lines.iter().map(|line| line.price).sum();
        if total > budget {
            return Err(PlannerError::BudgetExceeded { total, budget });
        }

        Ok(Receipt {
            lines,
            total,
            budget,
            remaining: budget - total,
        })
    }

    /// Validate the order against the budget.
    ///
    /// An over-budget order clears all selections and keeps the budget.
    pub fn confirm(&mut self) -> Result<Receipt> {
        match self.receipt() {
            Ok(receipt) => {
                tracing::info!(
                    total = receipt.total,
                    remaining = receipt.remaining,
                    "order confirmed"
                );
                Ok(receipt)
            }
            Err(e) => {
                if matches!(e, PlannerError::BudgetExceeded { .. }) {
                    tracing::info!("{}", e);
                    self.clear_selections();
                }
                Err(e)
            }
        }
    }

    /// Drop all selections, keeping the budget.
    pub fn clear_selections(&mut self) {
        self.selections = [None; 3];
    }

    /// Drop selections and budget.
    pub fn reset(&mut self) {
        self.clear_selections();
        self.budget = None;
    }

    /// Record for persistence; requires a budget and a complete selection.
    pub fn to_saved(&self) -> Result<SavedSelection> {
        let budget = self.budget.ok_or(PlannerError::MissingBudget)?;
        let [food, drink, dessert] = self.lines()?;
        Ok(SavedSelection {
            food: food.name,
            drink: drink.name,
            dessert: dessert.name,
            budget,
        })
    }

    /// Replace budget and selections with a saved record.
    ///
    /// Everything is validated against the catalog first; on any error the
    /// session is left untouched.
    pub fn restore(&mut self, saved: &SavedSelection) -> Result<()> {
        validate_budget(saved.budget).map_err(|_| {
            PlannerError::CorruptSave(format!("invalid budget {}", saved.budget))
        })?;

        let mut selections = [None; 3];
        for category in Category::ALL {
            let index = self.catalog.resolve(category, saved.name(category))?;
            selections[category.index()] = Some(index);
        }

        self.budget = Some(saved.budget);
        self.selections = selections;
        Ok(())
    }

    fn lines(&self) -> Result<[ReceiptLine; 3]> {
        let line = |category: Category| {
            self.selection(category)
                .map(|item| ReceiptLine::new(category, item))
                .ok_or(PlannerError::IncompleteSelection(category))
        };

        Ok([
            line(Category::Food)?,
            line(Category::Drink)?,
            line(Category::Dessert)?,
        ])
    }
}
