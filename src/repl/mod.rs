//! Interactive session module
//!
//! The terminal stand-in for the app's screens: a welcome banner, a
//! login gate, and dish management commands in a read-eval loop. All
//! menu state lives in the store; this module only renders snapshots
//! and relays commands.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

// Re-export commonly used types
pub use commands::Command;
pub use input::InputHandler;
pub use session::{verify_credentials, ChefSession};

use crate::storage::KeyValueStore;
use crate::store::{MenuEvent, MenuStore};
use anyhow::Result;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Interactive session coordinator
///
/// Owns input handling and chef session state; borrows the menu store
/// for the duration of the loop so there is exactly one writer.
pub struct ReplSession {
    input: InputHandler,
    session: ChefSession,
}

impl ReplSession {
    /// Create a session without persistent command history
    pub fn new() -> Result<Self> {
        Ok(ReplSession {
            input: InputHandler::new()?,
            session: ChefSession::new(),
        })
    }

    /// Create a session with command history persisted at `history_path`
    pub fn with_history(history_path: PathBuf) -> Result<Self> {
        Ok(ReplSession {
            input: InputHandler::with_history(history_path)?,
            session: ChefSession::new(),
        })
    }

    /// Run the read-eval loop until exit or EOF
    ///
    /// The store must already be initialized. Storage warnings emitted
    /// by the store surface between commands; other events are already
    /// reflected in the snapshots the commands render.
    pub async fn run<S: KeyValueStore>(
        &mut self,
        store: &mut MenuStore<S>,
        events: &mut mpsc::Receiver<MenuEvent>,
    ) -> Result<()> {
        display::show_banner(env!("CARGO_PKG_VERSION"));
        self.drain_warnings(events);

        loop {
            let line = match self.input.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(_) => break, // interrupt
            };

            if line.is_empty() {
                continue;
            }

            let command = commands::parse(&line);
            let keep_going = commands::execute(command, store, &mut self.session).await?;
            self.drain_warnings(events);

            if !keep_going {
                break;
            }
        }

        self.input.save_history()?;
        Ok(())
    }

    fn drain_warnings(&self, events: &mut mpsc::Receiver<MenuEvent>) {
        while let Ok(event) = events.try_recv() {
            if let MenuEvent::StorageWarning { message } = event {
                display::show_warning(&message);
            }
        }
    }
}
