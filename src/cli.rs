use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::state::DEFAULT_SAVE_FILE;

/// Menu Planner — pick a food, drink, and dessert that fit your budget.
#[derive(Parser, Debug)]
#[command(name = "menu_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved receipt JSON file.
    #[arg(short, long, default_value = DEFAULT_SAVE_FILE)]
    pub file: PathBuf,

    /// Optional catalog JSON file replacing the built-in menu.
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan with typed prompts, one course after another.
    Console,

    /// Plan through menu screens, with save and load of the last receipt.
    Form,

    /// Print the menu and exit.
    Menu,
}

impl Default for Command {
    fn default() -> Self {
        Command::Form
    }
}
