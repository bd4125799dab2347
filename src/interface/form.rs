use std::path::Path;

use dialoguer::Select;

use crate::error::{PlannerError, Result};
use crate::interface::prompts::prompt_text;
use crate::interface::render::{display_message, display_receipt, display_summary, item_label};
use crate::models::{Catalog, Category};
use crate::state::{load_selection, save_selection, Outcome, PlannerMachine, PlannerState, View};

const WELCOME_OPTIONS: [&str; 3] = ["Proceed", "Load Previous Menu", "Exit"];
const MENU_OPTIONS: [&str; 7] = [
    "Set Budget",
    "Choose Food",
    "Choose Drink",
    "Choose Dessert",
    "View Receipt",
    "Start Over",
    "Exit",
];
const RECEIPT_OPTIONS: [&str; 3] = ["Save Receipt", "Plan Another Menu", "Exit"];

/// Whether the form loop keeps running after an action.
enum Flow {
    Continue,
    Exit,
}

/// Run the view-driven planner until the user exits.
///
/// Each view presents discrete options; the state machine decides which view
/// comes next. `save_path` is the single-slot receipt file.
pub fn run_form(catalog: &Catalog, save_path: &Path) -> Result<()> {
    let mut machine = PlannerMachine::new(catalog);
    println!("Welcome to the Menu Planner!");

    loop {
        let flow = match machine.view() {
            View::Welcome => welcome_view(&mut machine, save_path)?,
            View::Menu => menu_view(&mut machine)?,
            View::Selection(category) => selection_view(&mut machine, category)?,
            View::Receipt => receipt_view(&mut machine, save_path)?,
        };

        if let Flow::Exit = flow {
            println!("Thank you for using the menu planner. Goodbye!");
            return Ok(());
        }
    }
}

fn welcome_view(machine: &mut PlannerMachine<'_>, save_path: &Path) -> Result<Flow> {
    println!();
    match choose("Welcome", &WELCOME_OPTIONS)? {
        0 => apply(machine.proceed()?),
        1 => apply(load_previous(machine, save_path)?),
        _ => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

fn menu_view(machine: &mut PlannerMachine<'_>) -> Result<Flow> {
    display_summary(machine.session());

    match choose("Menu", &MENU_OPTIONS)? {
        0 => {
            let input = prompt_text("Enter your budget: $")?;
            apply(machine.set_budget(&input)?);
        }
        1 => apply(machine.browse(Category::Food)?),
        2 => apply(machine.browse(Category::Drink)?),
        3 => apply(machine.browse(Category::Dessert)?),
        4 => apply(machine.checkout()?),
        5 => apply(machine.restart()?),
        _ => return Ok(Flow::Exit),
    }

    if let PlannerState::Rejected { .. } = machine.state() {
        machine.acknowledge()?;
    }
    Ok(Flow::Continue)
}

fn selection_view(machine: &mut PlannerMachine<'_>, category: Category) -> Result<Flow> {
    let items = machine.session().catalog().items(category);
    let mut options: Vec<String> = items.iter().map(item_label).collect();
    options.push("Back".to_string());

    let selection = choose(&format!("Select a {}", category), &options)?;
    if selection < items.len() {
        apply(machine.select(category, selection)?);
        if let PlannerState::Rejected { .. } = machine.state() {
            machine.acknowledge()?;
        }
    } else {
        apply(machine.back()?);
    }
    Ok(Flow::Continue)
}

fn receipt_view(machine: &mut PlannerMachine<'_>, save_path: &Path) -> Result<Flow> {
    if let Some(receipt) = machine.receipt() {
        display_receipt(receipt);
    }

    match choose("Receipt", &RECEIPT_OPTIONS)? {
        0 => apply(save_receipt(machine, save_path)?),
        1 => apply(machine.restart()?),
        _ => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

/// Restore the saved receipt from the welcome view.
///
/// A missing, corrupt or unreadable file is reported on the welcome view and
/// leaves the machine untouched.
pub fn load_previous(machine: &mut PlannerMachine<'_>, save_path: &Path) -> Result<Outcome> {
    if *machine.state() != PlannerState::Entry {
        return Err(PlannerError::InvalidTransition {
            state: machine.state().name(),
            action: "load",
        });
    }

    match load_selection(save_path) {
        Ok(saved) => machine.load(&saved),
        Err(e) => {
            tracing::warn!(path = %save_path.display(), error = %e, "could not load saved selection");
            Ok(Outcome::error(machine.view(), &e))
        }
    }
}

/// Write the confirmed receipt to the save file.
///
/// A write failure is reported on the receipt view; the order stays confirmed.
pub fn save_receipt(machine: &PlannerMachine<'_>, save_path: &Path) -> Result<Outcome> {
    let record = machine.saved_record()?;

    match save_selection(save_path, &record) {
        Ok(()) => Ok(Outcome::info(
            machine.view(),
            format!("Your receipt has been saved as {}.", save_path.display()),
        )),
        Err(e) => {
            tracing::warn!(path = %save_path.display(), error = %e, "could not save selection");
            Ok(Outcome::error(machine.view(), &e))
        }
    }
}

fn apply(outcome: Outcome) {
    if let Some(message) = &outcome.message {
        display_message(message);
    }
}

fn choose<T: ToString>(prompt: &str, options: &[T]) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact()?)
}
