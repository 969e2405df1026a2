//! Terminal rendering for the interactive front-end
//!
//! Color-coded views over menu snapshots: welcome banner, grouped menu
//! sections, per-category price summaries, and status lines. Prices
//! render with the kitchen's "R" currency prefix, as entered.

use crate::query;
use crate::types::{Category, CategoryFilter, MenuItem};
use colored::*;

/// Show welcome banner
pub fn show_banner(version: &str) {
    let width = 64;

    println!("\n{}", "=".repeat(width).yellow());
    println!("{}", format!("  ChefDeck {} - Kitchen Menu Manager", version).bold().yellow());
    println!("{}", "  One chef, one menu, zero servers".dimmed());
    println!("{}\n", "=".repeat(width).yellow());
    println!(
        "Log in with {} (type {} for commands, {} to quit)\n",
        "login <username> <password>".green(),
        "help".green(),
        "exit".green()
    );
}

/// Render the menu through a browse filter
///
/// The full menu renders as category sections in canonical order with
/// empty sections skipped; a single-category filter renders just that
/// section.
pub fn render_menu(menu: &[MenuItem], filter: CategoryFilter) {
    let matching = query::items_matching_filter(menu, filter);

    if matching.is_empty() {
        match filter {
            CategoryFilter::All => println!("{}", "No dishes on the menu yet.".yellow()),
            CategoryFilter::Only(category) => {
                println!("{}", format!("No {} on the menu yet.", category.plural_label().to_lowercase()).yellow());
            }
        }
        return;
    }

    println!(
        "\n{}",
        format!("Total Menu Items: {}", matching.len()).bold().yellow()
    );

    match filter {
        CategoryFilter::All => {
            for group in query::group_by_category(menu, &Category::ALL) {
                render_section(group.category, &group.items);
            }
        }
        CategoryFilter::Only(category) => {
            render_section(category, &matching);
        }
    }

    println!();
}

/// Render per-category dish counts and average prices
pub fn render_summary(menu: &[MenuItem]) {
    println!("\n{}", "Menu Summary:".bold().yellow());
    println!("{}", "=".repeat(40).yellow());

    for category in Category::ALL {
        let count = query::items_in_category(menu, category).len();
        let average = query::average_price(menu, category);

        println!(
            "  {:<10} {:>3} dishes   avg {}",
            category.plural_label(),
            count.to_string().green(),
            format!("R{}", average).green()
        );
    }

    println!();
}

/// Show an error line
pub fn show_error(message: &str) {
    println!("{}", format!("Error: {}", message).red());
}

/// Show a success line
pub fn show_success(message: &str) {
    println!("{}", message.green());
}

/// Show a warning line
pub fn show_warning(message: &str) {
    println!("{}", format!("Warning: {}", message).yellow());
}

fn render_section(category: Category, items: &[&MenuItem]) {
    println!(
        "\n{}",
        format!("{} ({})", category.plural_label(), items.len())
            .bold()
            .yellow()
    );
    println!("{}", "-".repeat(40).yellow());

    for item in items {
        println!(
            "  {}  {}",
            item.name.bold(),
            format!("R{}", item.price).green()
        );
        println!("    {}", item.description.dimmed());
        println!("    {}", format!("id {}", item.id).dimmed());
    }
}
