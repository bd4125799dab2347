use std::fmt::Write;

use crate::models::{format_money, Catalog, Category, MenuItem, Receipt};
use crate::state::{Message, OrderSession};

/// One-line label for a menu option.
pub fn item_label(item: &MenuItem) -> String {
    if item.description.is_empty() {
        format!("{} ({})", item.name, format_money(item.price))
    } else {
        format!(
            "{} ({}) - {}",
            item.name,
            format_money(item.price),
            item.description
        )
    }
}

/// Full menu listing, grouped by category.
pub fn format_menu(catalog: &Catalog) -> String {
    let mut out = String::from("Menu:\n");
    for category in Category::ALL {
        let _ = writeln!(out, "\n{}:", category);
        for item in catalog.items(category) {
            let _ = writeln!(out, "  {}", item_label(item));
        }
    }
    out
}

/// Live summary of the budget and current choices.
pub fn format_summary(session: &OrderSession<'_>) -> String {
    let mut out = String::new();
    match session.budget() {
        Some(budget) => {
            let _ = writeln!(out, "Budget: {}", format_money(budget));
        }
        None => out.push_str("Budget: not set\n"),
    }

    for category in Category::ALL {
        match session.selection(category) {
            Some(item) => {
                let _ = writeln!(
                    out,
                    "{}: {} - {}",
                    category,
                    item.name,
                    format_money(item.price)
                );
            }
            None => {
                let _ = writeln!(out, "{}: None", category);
            }
        }
    }

    let _ = writeln!(out, "Total so far: {}", format_money(session.total()));
    out
}

/// Receipt text: one line per item, then total and remaining budget.
pub fn format_receipt(receipt: &Receipt) -> String {
    let width = receipt
        .lines
        .iter()
        .map(|line| line.category.label().len())
        .max()
        .unwrap_or(4);

    let mut out = String::from("Receipt:\n");
    for line in &receipt.lines {
        let _ = write!(
            out,
            "  {:<width$}  {} - {}",
            format!("{}:", line.category),
            line.name,
            format_money(line.price),
            width = width + 1
        );
        if !line.description.is_empty() {
            let _ = write!(out, " ({})", line.description);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "\nTotal Cost: {}", format_money(receipt.total));
    let _ = writeln!(out, "Remaining Budget: {}", format_money(receipt.remaining));
    out
}

pub fn display_menu(catalog: &Catalog) {
    println!("{}", format_menu(catalog));
}

pub fn display_summary(session: &OrderSession<'_>) {
    println!();
    print!("{}", format_summary(session));
    println!();
}

pub fn display_receipt(receipt: &Receipt) {
    println!();
    print!("{}", format_receipt(receipt));
    println!();
}

/// Print a state-machine message; errors go to stderr.
pub fn display_message(message: &Message) {
    match message {
        Message::Info(text) => println!("{}", text),
        Message::Error(text) => eprintln!("Error: {}", text),
    }
}
