//! Menu data model
//!
//! A dish entry, its closed category set, and the browse filter.
//! These types mirror the persisted wire format exactly: the menu is
//! stored as a JSON array of objects whose fields are all strings,
//! including `price`.

use crate::errors::{MenuError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Dish categories
///
/// A closed set. The serialized names ("Starter", "Main", "Dessert")
/// are part of the wire format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Opening course
    Starter,

    /// Main course
    Main,

    /// Sweet course
    Dessert,
}

impl Category {
    /// Canonical category order used for grouping and summaries
    pub const ALL: [Category; 3] = [Category::Starter, Category::Main, Category::Dessert];

    /// Display name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Category::Starter => "Starter",
            Category::Main => "Main",
            Category::Dessert => "Dessert",
        }
    }

    /// Section heading used when rendering a grouped menu
    pub fn plural_label(&self) -> &'static str {
        match self {
            Category::Starter => "Starters",
            Category::Main => "Mains",
            Category::Dessert => "Desserts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "starter" | "starters" => Ok(Category::Starter),
            "main" | "mains" => Ok(Category::Main),
            "dessert" | "desserts" => Ok(Category::Dessert),
            other => Err(MenuError::Validation {
                reason: format!("unknown category '{}'", other),
            }),
        }
    }
}

/// Browse filter: everything, or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// The entire menu, unfiltered
    All,

    /// Only dishes in one category
    Only(Category),
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.parse()?))
        }
    }
}

/// A single dish on the menu
///
/// `id` is the only field guaranteed unique; it is assigned at creation
/// and is the sole key for removal. `price` stays textual at rest, so
/// downstream consumers parse it defensively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier, stable for the dish's lifetime
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description shown under the name
    pub description: String,

    /// Which course section the dish belongs to
    pub category: Category,

    /// Price as entered, e.g. "25" or "12.50"
    pub price: String,
}

impl MenuItem {
    /// Create a dish with a freshly generated unique id
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        price: impl Into<String>,
    ) -> Self {
        MenuItem {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            category,
            price: price.into(),
        }
    }

    /// Check that every required field is present
    ///
    /// Presence checks only; the price is not required to be numeric
    /// here, consumers fall back to 0 when it isn't.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(MenuError::Validation {
                reason: "id must not be empty".to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(MenuError::Validation {
                reason: "name must not be empty".to_string(),
            });
        }
        if self.description.trim().is_empty() {
            return Err(MenuError::Validation {
                reason: "description must not be empty".to_string(),
            });
        }
        if self.price.trim().is_empty() {
            return Err(MenuError::Validation {
                reason: "price must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
