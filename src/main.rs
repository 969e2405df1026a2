//! ChefDeck - Main CLI Entry Point

use anyhow::Result;
use chefdeck::config::Config;
use chefdeck::repl::{display, ReplSession};
use chefdeck::storage::{FileStore, MENU_STORAGE_KEY};
use chefdeck::store::{InitOutcome, MenuStore};
use chefdeck::types::{Category, CategoryFilter, MenuItem};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

/// ChefDeck - Local-first menu manager for a one-chef kitchen
#[derive(Parser, Debug)]
#[command(name = "chefdeck")]
#[command(version)]
#[command(about = "Manage a restaurant menu from the terminal", long_about = None)]
struct Args {
    /// Data directory (defaults to the configured dir, then ~/.chefdeck)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Subcommand; no subcommand starts the interactive session
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive session
    Start,

    /// Add a dish to the menu
    Add {
        /// Dish name
        name: String,
        /// Short description
        description: String,
        /// starter, main, or dessert
        category: String,
        /// Price, e.g. 25 or 12.50
        price: String,
    },

    /// Remove a dish by id
    Remove {
        /// Dish id as shown in the menu listing
        id: String,
    },

    /// Print the menu, optionally filtered by category
    List {
        /// all, starter, main, or dessert
        #[arg(default_value = "all")]
        filter: String,
    },

    /// Print dish counts and average prices per category
    Summary,

    /// Display current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load()?;
    let data_dir = match &args.data_dir {
        Some(dir) => dir.clone(),
        None => config.data_dir()?,
    };

    let storage = FileStore::new(&data_dir)?;
    let (mut store, mut events) = MenuStore::new(storage);

    let outcome = store.initialize().await?;
    if outcome == InitOutcome::RecoveredFromCorrupt {
        display::show_warning("stored menu was corrupt; starting with an empty menu");
    }

    match args.command {
        None | Some(Commands::Start) => {
            let mut repl = ReplSession::with_history(data_dir.join("history.txt"))?;
            repl.run(&mut store, &mut events).await
        }
        Some(Commands::Add {
            name,
            description,
            category,
            price,
        }) => {
            let category: Category = category.parse()?;
            let item = MenuItem::new(name, description, category, price);
            let id = item.id.clone();

            store.add_item(item).await?;
            println!("Added dish {}", id.green());
            Ok(())
        }
        Some(Commands::Remove { id }) => {
            if store.remove_item(&id).await? {
                println!("Removed dish {}", id.green());
            } else {
                println!("{}", format!("No dish with id {}", id).yellow());
            }
            Ok(())
        }
        Some(Commands::List { filter }) => {
            let filter: CategoryFilter = filter.parse()?;
            display::render_menu(store.current_menu(), filter);
            Ok(())
        }
        Some(Commands::Summary) => {
            display::render_summary(store.current_menu());
            Ok(())
        }
        Some(Commands::Config) => {
            println!("Config file: {}", Config::config_path()?.display());
            println!("Data dir:    {}", data_dir.display());
            println!("Menu file:   {}", store.storage().path_for(MENU_STORAGE_KEY).display());
            Ok(())
        }
    }
}
