//! Change events for menu observers
//!
//! Publisher-subscriber channel in front of the store. A view
//! subscribes once and re-renders on every event; mutation events
//! carry the new snapshot so observers never read stale state.
//! The channel is bounded and emission never blocks a mutation.

use crate::types::MenuItem;
use tokio::sync::mpsc;

/// Menu lifecycle and change events
#[derive(Debug, Clone)]
pub enum MenuEvent {
    /// Initial load finished
    Loaded { menu: Vec<MenuItem> },

    /// A dish was appended to the menu
    ItemAdded { item: MenuItem, menu: Vec<MenuItem> },

    /// A dish was removed by id
    ItemRemoved { id: String, menu: Vec<MenuItem> },

    /// Non-fatal storage problem, e.g. a corrupt blob that was reset
    StorageWarning { message: String },
}

/// Event bus publishing menu events to subscribers
pub struct MenuEventBus {
    sender: mpsc::Sender<MenuEvent>,
}

impl MenuEventBus {
    /// Create a new event bus with a bounded channel
    ///
    /// Channel capacity: 100 events. When the subscriber falls that far
    /// behind, new events are dropped rather than blocking a mutation.
    pub fn new() -> (Self, mpsc::Receiver<MenuEvent>) {
        let (sender, receiver) = mpsc::channel(100);
        (MenuEventBus { sender }, receiver)
    }

    /// Emit an event to the subscriber
    ///
    /// Complexity: O(1), non-blocking send.
    pub fn emit(&self, event: MenuEvent) {
        let _ = self.sender.try_send(event);
    }

    /// Clone the sender for multi-producer usage
    pub fn clone_sender(&self) -> mpsc::Sender<MenuEvent> {
        self.sender.clone()
    }
}

impl Clone for MenuEventBus {
    fn clone(&self) -> Self {
        MenuEventBus {
            sender: self.sender.clone(),
        }
    }
}
