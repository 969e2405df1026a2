//! Category query engine
//!
//! Pure, stateless functions over a menu snapshot. No hidden state and
//! no I/O, so every function here is safe to call repeatedly from any
//! view that needs a derived slice of the menu.
//!
//! Complexity: every query is a single O(n) pass over the snapshot.

use crate::types::{Category, CategoryFilter, MenuItem};

/// A non-empty run of dishes sharing one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    /// The shared category
    pub category: Category,

    /// Dishes in insertion order
    pub items: Vec<&'a MenuItem>,
}

/// Dishes in one category, insertion order preserved
pub fn items_in_category(menu: &[MenuItem], category: Category) -> Vec<&MenuItem> {
    menu.iter().filter(|item| item.category == category).collect()
}

/// Dishes matching a browse filter
///
/// `All` returns the entire menu unchanged in order; a category filter
/// delegates to [`items_in_category`].
pub fn items_matching_filter(menu: &[MenuItem], filter: CategoryFilter) -> Vec<&MenuItem> {
    match filter {
        CategoryFilter::All => menu.iter().collect(),
        CategoryFilter::Only(category) => items_in_category(menu, category),
    }
}

/// Average price for a category, formatted to two decimal places
///
/// Prices are stored as text and parsed defensively: a price that is
/// not a number contributes 0 to the sum but still counts toward the
/// divisor. An empty category yields "0.00".
pub fn average_price(menu: &[MenuItem], category: Category) -> String {
    let items = items_in_category(menu, category);
    if items.is_empty() {
        return "0.00".to_string();
    }

    let sum: f64 = items.iter().map(|item| parse_price(&item.price)).sum();
    format_amount(sum / items.len() as f64)
}

/// Group the menu by the given categories, in the given order
///
/// Categories with zero dishes are skipped, so callers never render an
/// empty section.
pub fn group_by_category<'a>(
    menu: &'a [MenuItem],
    categories: &[Category],
) -> Vec<CategoryGroup<'a>> {
    categories
        .iter()
        .filter_map(|&category| {
            let items = items_in_category(menu, category);
            if items.is_empty() {
                None
            } else {
                Some(CategoryGroup { category, items })
            }
        })
        .collect()
}

/// Parse a price string, falling back to 0 for anything non-numeric
pub fn parse_price(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

// Half-up at two decimals; ties must not round to even.
fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0 + 0.5).floor() / 100.0;
    format!("{:.2}", rounded)
}
