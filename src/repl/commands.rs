//! Command grammar for the interactive session
//!
//! Parses chef input into commands and executes them against the menu
//! store and the query engine. Everything that reads or changes the
//! menu is gated behind the login; help, login, status, and exit are
//! always available.

use crate::repl::display;
use crate::repl::session::ChefSession;
use crate::storage::KeyValueStore;
use crate::store::MenuStore;
use crate::types::{Category, CategoryFilter, MenuItem};
use anyhow::Result;
use colored::*;

const ADD_USAGE: &str = "add <name> | <description> | <category> | <price>";

/// Session command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Login { username: String, password: String },
    Logout,
    Add { name: String, description: String, category: String, price: String },
    Remove { id: String },
    Menu { filter: Option<String> },
    Summary,
    Status,
    Clear,
    Exit,
    Malformed { usage: &'static str },
    Unknown { input: String },
}

/// Parse an input line into a command
///
/// Lexical only: category and filter words are validated at execution
/// time so the chef gets a menu-specific message, not a parse error.
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };

    match keyword.to_lowercase().as_str() {
        "help" | "h" | "?" => Command::Help,
        "login" => {
            let args: Vec<&str> = rest.split_whitespace().collect();
            match args.as_slice() {
                [username, password] => Command::Login {
                    username: (*username).to_string(),
                    password: (*password).to_string(),
                },
                _ => Command::Malformed {
                    usage: "login <username> <password>",
                },
            }
        }
        "logout" => Command::Logout,
        "add" => {
            let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
            match fields.as_slice() {
                [name, description, category, price] => Command::Add {
                    name: (*name).to_string(),
                    description: (*description).to_string(),
                    category: (*category).to_string(),
                    price: (*price).to_string(),
                },
                _ => Command::Malformed { usage: ADD_USAGE },
            }
        }
        "remove" | "rm" => {
            if rest.is_empty() || rest.contains(char::is_whitespace) {
                Command::Malformed { usage: "remove <id>" }
            } else {
                Command::Remove {
                    id: rest.to_string(),
                }
            }
        }
        "menu" | "list" => Command::Menu {
            filter: rest.split_whitespace().next().map(str::to_string),
        },
        "summary" => Command::Summary,
        "status" => Command::Status,
        "clear" | "cls" => Command::Clear,
        "exit" | "quit" | "q" => Command::Exit,
        _ => Command::Unknown {
            input: trimmed.to_string(),
        },
    }
}

/// Execute a command
///
/// Returns true if the session should continue, false on exit.
pub async fn execute<S: KeyValueStore>(
    command: Command,
    store: &mut MenuStore<S>,
    session: &mut ChefSession,
) -> Result<bool> {
    session.record_command();

    match command {
        Command::Help => {
            show_help();
            Ok(true)
        }
        Command::Exit => {
            println!("{}", "Goodbye, chef!".green());
            Ok(false)
        }
        Command::Login { username, password } => {
            if session.login(&username, &password) {
                display::show_success("Welcome, Chef!");
            } else {
                display::show_error("Access denied: invalid username or password.");
            }
            Ok(true)
        }
        Command::Logout => {
            session.logout();
            println!("Logged out.");
            Ok(true)
        }
        Command::Add {
            name,
            description,
            category,
            price,
        } => {
            if !require_login(session) {
                return Ok(true);
            }

            let category: Category = match category.parse() {
                Ok(category) => category,
                Err(e) => {
                    display::show_error(&e.to_string());
                    return Ok(true);
                }
            };

            let item = MenuItem::new(name, description, category, price);
            match store.add_item(item).await {
                Ok(()) => display::show_success("Menu item added!"),
                Err(e) => display::show_error(&e.to_string()),
            }
            Ok(true)
        }
        Command::Remove { id } => {
            if !require_login(session) {
                return Ok(true);
            }

            match store.remove_item(&id).await {
                Ok(true) => display::show_success("Menu item removed!"),
                Ok(false) => display::show_warning(&format!("no dish with id {}", id)),
                Err(e) => display::show_error(&e.to_string()),
            }
            Ok(true)
        }
        Command::Menu { filter } => {
            if !require_login(session) {
                return Ok(true);
            }

            let filter = match filter {
                None => CategoryFilter::All,
                Some(raw) => match raw.parse::<CategoryFilter>() {
                    Ok(filter) => filter,
                    Err(e) => {
                        display::show_error(&e.to_string());
                        return Ok(true);
                    }
                },
            };

            display::render_menu(store.current_menu(), filter);
            Ok(true)
        }
        Command::Summary => {
            if !require_login(session) {
                return Ok(true);
            }

            display::render_summary(store.current_menu());
            Ok(true)
        }
        Command::Status => {
            show_status(store, session);
            Ok(true)
        }
        Command::Clear => {
            print!("\x1B[2J\x1B[1;1H"); // ANSI escape codes to clear screen
            Ok(true)
        }
        Command::Malformed { usage } => {
            println!("Usage: {}", usage.cyan());
            Ok(true)
        }
        Command::Unknown { input } => {
            println!("{}", format!("Unknown command: {}", input).red());
            println!("Type {} for available commands", "help".cyan());
            Ok(true)
        }
    }
}

fn require_login(session: &ChefSession) -> bool {
    if session.is_logged_in() {
        return true;
    }

    display::show_error("please log in first (login <username> <password>)");
    false
}

/// Display help information
fn show_help() {
    println!("\n{}", "Available Commands:".bold().yellow());
    println!("{}", "=".repeat(60).yellow());

    let commands = vec![
        ("help, h, ?", "Show this help message"),
        ("login <user> <pass>", "Log in as the chef"),
        ("logout", "Log out"),
        (ADD_USAGE, "Add a dish to the menu"),
        ("remove <id>", "Remove a dish by id"),
        ("menu [all|starter|main|dessert]", "Browse the menu"),
        ("summary", "Dish counts and average price per category"),
        ("status", "Show session status"),
        ("clear, cls", "Clear screen"),
        ("exit, quit, q", "Exit"),
    ];

    for (cmd, desc) in commands {
        println!("  {:<34} {}", cmd.green(), desc);
    }

    println!();
}

/// Display session status
fn show_status<S: KeyValueStore>(store: &MenuStore<S>, session: &ChefSession) {
    println!("\n{}", "Session Status:".bold().yellow());
    println!("{}", "=".repeat(40).yellow());

    let login_state = if session.is_logged_in() {
        "Logged in".green()
    } else {
        "Logged out".red()
    };

    println!("  Chef:             {}", login_state);
    println!("  Store:            {}", store.state().display_name().green());
    println!("  Dishes:           {}", store.len().to_string().green());
    println!("  Commands Run:     {}", session.command_count().to_string().green());
    println!("  Session Duration: {}s", session.session_duration().to_string().green());
    println!();
}
