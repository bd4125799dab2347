use crate::error::{PlannerError, Result};
use crate::models::{format_money, Catalog, Category, Receipt, SavedSelection};
use crate::state::session::OrderSession;

/// Where a planning round currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerState {
    /// Welcome screen; nothing planned yet.
    Entry,
    /// Budget and selections are editable.
    Selecting,
    /// All three categories chosen; about to be validated.
    Complete,
    /// Order fits the budget.
    Confirmed(Receipt),
    /// Order exceeded the budget; selections were cleared.
    Rejected { total: f64, budget: f64 },
}

impl PlannerState {
    pub fn name(&self) -> &'static str {
        match self {
            PlannerState::Entry => "entry",
            PlannerState::Selecting => "selecting",
            PlannerState::Complete => "complete",
            PlannerState::Confirmed(_) => "confirmed",
            PlannerState::Rejected { .. } => "rejected",
        }
    }
}

/// Screen the front-end should present next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Welcome,
    Menu,
    Selection(Category),
    Receipt,
}

/// Feedback the front-end should surface to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Info(String),
    Error(String),
}

impl Message {
    /// User-facing message for a recoverable error.
    pub fn from_error(error: &PlannerError) -> Self {
        let text = match error {
            PlannerError::InvalidBudget(reason) => reason.clone(),
            PlannerError::BudgetExceeded { .. } => {
                "Your selections exceed your budget. Please choose other items.".to_string()
            }
            PlannerError::MissingBudget => {
                "Please set a budget before completing your order.".to_string()
            }
            PlannerError::SaveNotFound(_) => {
                "No saved menu found. Please save a receipt first.".to_string()
            }
            PlannerError::CorruptSave(_) => {
                "The saved menu file is corrupted or invalid.".to_string()
            }
            PlannerError::Io(e) => format!("Could not access the saved menu file: {}", e),
            PlannerError::ItemNotFound { category, name } => format!(
                "The saved {} '{}' is no longer on the menu.",
                category.key(),
                name
            ),
            other => other.to_string(),
        };
        Message::Error(text)
    }
}

/// Result of a transition: the next view plus an optional message.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub view: View,
    pub message: Option<Message>,
}

impl Outcome {
    fn show(view: View) -> Self {
        Self {
            view,
            message: None,
        }
    }

    pub(crate) fn info(view: View, text: impl Into<String>) -> Self {
        Self {
            view,
            message: Some(Message::Info(text.into())),
        }
    }

    pub(crate) fn error(view: View, error: &PlannerError) -> Self {
        Self {
            view,
            message: Some(Message::from_error(error)),
        }
    }
}

/// Planner workflow as a pure state machine.
///
/// Every transition either returns the next [`Outcome`] or fails with
/// `InvalidTransition`, leaving the state untouched. User mistakes (bad
/// budget, stale save) are reported inside the outcome, not as errors.
#[derive(Debug, Clone)]
pub struct PlannerMachine<'a> {
    session: OrderSession<'a>,
    state: PlannerState,
    browsing: Option<Category>,
}

impl<'a> PlannerMachine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            session: OrderSession::new(catalog),
            state: PlannerState::Entry,
            browsing: None,
        }
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn session(&self) -> &OrderSession<'a> {
        &self.session
    }

    /// View matching the current state.
    pub fn view(&self) -> View {
        match &self.state {
            PlannerState::Entry => View::Welcome,
            PlannerState::Selecting => match self.browsing {
                Some(category) => View::Selection(category),
                None => View::Menu,
            },
            PlannerState::Complete | PlannerState::Rejected { .. } => View::Menu,
            PlannerState::Confirmed(_) => View::Receipt,
        }
    }

    /// Receipt of a confirmed order.
    pub fn receipt(&self) -> Option<&Receipt> {
        match &self.state {
            PlannerState::Confirmed(receipt) => Some(receipt),
            _ => None,
        }
    }

    /// Welcome -> menu.
    pub fn proceed(&mut self) -> Result<Outcome> {
        self.ensure(matches!(self.state, PlannerState::Entry), "proceed")?;
        self.state = PlannerState::Selecting;
        Ok(Outcome::show(View::Menu))
    }

    /// Set the budget from raw input; a bad value keeps the previous budget.
    pub fn set_budget(&mut self, input: &str) -> Result<Outcome> {
        self.ensure_menu("set budget")?;
        match self.session.set_budget_input(input) {
            Ok(budget) => Ok(Outcome::info(
                View::Menu,
                format!("Your budget has been set to {}", format_money(budget)),
            )),
            Err(e) => {
                tracing::debug!(input, error = %e, "budget rejected");
                Ok(Outcome::error(View::Menu, &e))
            }
        }
    }

    /// Open the option list for a category.
    pub fn browse(&mut self, category: Category) -> Result<Outcome> {
        self.ensure_menu("browse")?;
        self.browsing = Some(category);
        Ok(Outcome::show(View::Selection(category)))
    }

    /// Leave an option list without choosing.
    pub fn back(&mut self) -> Result<Outcome> {
        self.ensure(
            self.state == PlannerState::Selecting && self.browsing.is_some(),
            "go back",
        )?;
        self.browsing = None;
        Ok(Outcome::show(View::Menu))
    }

    /// Choose an item; completing the order validates it immediately.
    pub fn select(&mut self, category: Category, index: usize) -> Result<Outcome> {
        self.ensure(self.state == PlannerState::Selecting, "select")?;
        self.session.select(category, index)?;
        self.browsing = None;

        if self.session.is_complete() {
            self.checkout()
        } else {
            Ok(Outcome::show(View::Menu))
        }
    }

    /// Validate a complete order against the budget.
    pub fn checkout(&mut self) -> Result<Outcome> {
        self.ensure_menu("check out")?;

        if let Some(category) = self.session.missing() {
            return Ok(Outcome::error(
                View::Menu,
                &PlannerError::IncompleteSelection(category),
            ));
        }
        if self.session.budget().is_none() {
            return Ok(Outcome::error(View::Menu, &PlannerError::MissingBudget));
        }

        self.state = PlannerState::Complete;
        match self.session.confirm() {
            Ok(receipt) => {
                self.state = PlannerState::Confirmed(receipt);
                Ok(Outcome::show(View::Receipt))
            }
            Err(PlannerError::BudgetExceeded { total, budget }) => {
                self.state = PlannerState::Rejected { total, budget };
                Ok(Outcome::error(
                    View::Menu,
                    &PlannerError::BudgetExceeded { total, budget },
                ))
            }
            Err(e) => {
                self.state = PlannerState::Selecting;
                Err(e)
            }
        }
    }

    /// Dismiss a rejection and return to editing.
    pub fn acknowledge(&mut self) -> Result<Outcome> {
        self.ensure(
            matches!(self.state, PlannerState::Rejected { .. }),
            "acknowledge",
        )?;
        self.state = PlannerState::Selecting;
        Ok(Outcome::show(View::Menu))
    }

    /// Record to persist for the confirmed order.
    pub fn saved_record(&self) -> Result<SavedSelection> {
        match &self.state {
            PlannerState::Confirmed(receipt) => Ok(receipt.to_saved()),
            other => Err(PlannerError::InvalidTransition {
                state: other.name(),
                action: "save",
            }),
        }
    }

    /// Restore a saved record from the welcome view.
    ///
    /// A record naming items the catalog no longer has is refused and the
    /// machine stays on the welcome view.
    pub fn load(&mut self, saved: &SavedSelection) -> Result<Outcome> {
        self.ensure(matches!(self.state, PlannerState::Entry), "load")?;
        match self.session.restore(saved) {
            Ok(()) => {
                self.state = PlannerState::Selecting;
                Ok(Outcome::info(
                    View::Menu,
                    "Previous menu plan loaded successfully.",
                ))
            }
            Err(e) => {
                tracing::warn!(error = %e, "saved selection rejected");
                Ok(Outcome::error(View::Welcome, &e))
            }
        }
    }

    /// Start over: clear budget and selections and return to the welcome view.
    pub fn restart(&mut self) -> Result<Outcome> {
        self.ensure(
            matches!(
                self.state,
                PlannerState::Selecting | PlannerState::Confirmed(_)
            ),
            "restart",
        )?;
        self.session.reset();
        self.browsing = None;
        self.state = PlannerState::Entry;
        Ok(Outcome::show(View::Welcome))
    }

    fn ensure_menu(&self, action: &'static str) -> Result<()> {
        self.ensure(
            self.state == PlannerState::Selecting && self.browsing.is_none(),
            action,
        )
    }

    fn ensure(&self, allowed: bool, action: &'static str) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            Err(PlannerError::InvalidTransition {
                state: self.state.name(),
                action,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selecting(catalog: &Catalog) -> PlannerMachine<'_> {
        let mut machine = PlannerMachine::new(catalog);
        machine.proceed().unwrap();
        machine
    }

    #[test]
    fn test_starts_at_welcome() {
        let catalog = Catalog::default();
        let machine = PlannerMachine::new(&catalog);
        assert_eq!(machine.state(), &PlannerState::Entry);
        assert_eq!(machine.view(), View::Welcome);
    }

    #[test]
    fn test_invalid_transition_leaves_state() {
        let catalog = Catalog::default();
        let mut machine = PlannerMachine::new(&catalog);

        let err = machine.select(Category::Food, 0).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::InvalidTransition { state: "entry", action: "select" }
        ));
        assert!(machine.set_budget("10").is_err());
        assert!(machine.acknowledge().is_err());
        assert!(machine.restart().is_err());
        assert_eq!(machine.state(), &PlannerState::Entry);
    }

    #[test]
    fn test_bad_budget_is_a_message() {
        let catalog = Catalog::default();
        let mut machine = selecting(&catalog);
        machine.set_budget("12").unwrap();

        let outcome = machine.set_budget("-4").unwrap();
        assert_eq!(outcome.view, View::Menu);
        assert!(matches!(outcome.message, Some(Message::Error(_))));
        assert_eq!(machine.session().budget(), Some(12.0));
    }

    #[test]
    fn test_browse_and_back() {
        let catalog = Catalog::default();
        let mut machine = selecting(&catalog);

        let outcome = machine.browse(Category::Drink).unwrap();
        assert_eq!(outcome.view, View::Selection(Category::Drink));
        assert_eq!(machine.view(), View::Selection(Category::Drink));
        assert!(machine.set_budget("5").is_err());

        machine.back().unwrap();
        assert_eq!(machine.view(), View::Menu);
        assert!(machine.back().is_err());
    }

    #[test]
    fn test_complete_without_budget_keeps_choices() {
        let catalog = Catalog::default();
        let mut machine = selecting(&catalog);
        machine.select(Category::Food, 0).unwrap();
        machine.select(Category::Drink, 0).unwrap();
        let outcome = machine.select(Category::Dessert, 0).unwrap();

        assert_eq!(
            outcome.message,
            Some(Message::from_error(&PlannerError::MissingBudget))
        );
        assert_eq!(machine.state(), &PlannerState::Selecting);
        assert!(machine.session().is_complete());

        machine.set_budget("20").unwrap();
        let outcome = machine.checkout().unwrap();
        assert_eq!(outcome.view, View::Receipt);
    }

    #[test]
    fn test_checkout_incomplete() {
        let catalog = Catalog::default();
        let mut machine = selecting(&catalog);
        machine.set_budget("20").unwrap();
        machine.select(Category::Food, 0).unwrap();

        let outcome = machine.checkout().unwrap();
        assert_eq!(
            outcome.message,
            Some(Message::Error("No Drink item selected".to_string()))
        );
        assert_eq!(machine.state(), &PlannerState::Selecting);
    }

    #[test]
    fn test_saved_record_only_when_confirmed() {
        let catalog = Catalog::default();
        let mut machine = selecting(&catalog);
        assert!(machine.saved_record().is_err());

        machine.set_budget("10").unwrap();
        machine.select(Category::Food, 0).unwrap();
        machine.select(Category::Drink, 0).unwrap();
        machine.select(Category::Dessert, 2).unwrap();

        let record = machine.saved_record().unwrap();
        assert_eq!(record.food, "Burger");
        assert_eq!(record.drink, "Water");
        assert_eq!(record.dessert, "Pie");
        assert_eq!(record.budget, 10.0);
    }
}
