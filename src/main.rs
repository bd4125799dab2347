use clap::Parser;
use std::path::Path;

use menu_planner_rs::cli::{Cli, Command};
use menu_planner_rs::error::{PlannerError, Result};
use menu_planner_rs::interface::{
    display_menu, display_receipt, prompt_budget, prompt_item, prompt_yes_no, run_form,
};
use menu_planner_rs::logging::init_tracing;
use menu_planner_rs::models::{load_catalog, Catalog, Category};
use menu_planner_rs::state::OrderSession;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => Catalog::default(),
    };

    match cli.command.unwrap_or_default() {
        Command::Console => cmd_console(&catalog),
        Command::Form => cmd_form(&catalog, &cli.file),
        Command::Menu => {
            display_menu(&catalog);
            Ok(())
        }
    }
}

/// Typed-prompt planner: budget, three courses, receipt, repeat.
fn cmd_console(catalog: &Catalog) -> Result<()> {
    let mut session = OrderSession::new(catalog);

    loop {
        session.reset();
        session.set_budget(prompt_budget()?)?;

        let receipt = loop {
            println!();
            display_menu(catalog);

            for category in Category::ALL {
                let index = prompt_item(catalog, category)?;
                session.select(category, index)?;
            }

            match session.confirm() {
                Ok(receipt) => break receipt,
                Err(PlannerError::BudgetExceeded { .. }) => {
                    println!();
                    println!("Your selections exceed your budget. Please try again.");
                }
                Err(e) => return Err(e),
            }
        };

        display_receipt(&receipt);

        if !prompt_yes_no("Would you like to plan another menu?", true)? {
            println!("Thank you for using the menu planner. Goodbye!");
            return Ok(());
        }
    }
}

/// Screen-driven planner with save/load of the last receipt.
fn cmd_form(catalog: &Catalog, save_path: &Path) -> Result<()> {
    run_form(catalog, save_path)
}
