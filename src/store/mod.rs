//! Menu store: the single source of truth
//!
//! Owns the canonical in-memory menu, loads it from storage once at
//! startup, and writes the full serialized menu back through on every
//! mutation. Invariant: in-memory and persisted state match after
//! every completed operation; a failed write rolls the in-memory
//! change back.
//!
//! Mutations take `&mut self` and await their write before returning,
//! so callers that issue one operation at a time (the whole front-end)
//! get write ordering for free.

pub mod events;
pub mod state;

// Re-export commonly used types
pub use events::{MenuEvent, MenuEventBus};
pub use state::StoreState;

use crate::errors::{MenuError, Result};
use crate::storage::{KeyValueStore, MENU_STORAGE_KEY};
use crate::types::MenuItem;
use tokio::sync::mpsc;

/// Outcome of the initial load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// A stored menu was found and parsed; carries the dish count
    Loaded(usize),

    /// Nothing stored yet; starting with an empty menu
    StartedEmpty,

    /// The stored blob was unreadable and was reset to an empty menu
    RecoveredFromCorrupt,
}

/// The authoritative menu container
///
/// Constructed once at process start and handed to every consumer.
/// Reads are synchronous against the in-memory copy; mutations are
/// async because they persist before reporting success.
pub struct MenuStore<S: KeyValueStore> {
    /// Lifecycle state
    state: StoreState,

    /// Canonical menu, insertion order preserved
    menu: Vec<MenuItem>,

    /// Persistence adapter
    storage: S,

    /// Change notification bus
    events: MenuEventBus,
}

impl<S: KeyValueStore> MenuStore<S> {
    /// Create an uninitialized store over a storage adapter
    ///
    /// Returns the store and the event subscription. Call
    /// [`MenuStore::initialize`] before mutating.
    pub fn new(storage: S) -> (Self, mpsc::Receiver<MenuEvent>) {
        let (events, receiver) = MenuEventBus::new();

        let store = MenuStore {
            state: StoreState::Uninitialized,
            menu: Vec::new(),
            storage,
            events,
        };

        (store, receiver)
    }

    /// Load the persisted menu and transition to `Ready`
    ///
    /// An absent blob starts an empty menu. A corrupt blob is reset to
    /// an empty menu with a warning event instead of failing startup;
    /// the outcome reports which of the three cases happened. Only an
    /// adapter read failure leaves the store uninitialized.
    pub async fn initialize(&mut self) -> Result<InitOutcome> {
        let outcome = match self.storage.get(MENU_STORAGE_KEY).await? {
            None => {
                self.menu = Vec::new();
                InitOutcome::StartedEmpty
            }
            Some(blob) => match serde_json::from_str::<Vec<MenuItem>>(&blob) {
                Ok(menu) => {
                    let count = menu.len();
                    self.menu = menu;
                    InitOutcome::Loaded(count)
                }
                Err(e) => {
                    let corrupt = MenuError::CorruptState {
                        reason: e.to_string(),
                    };

                    self.menu = Vec::new();
                    self.events.emit(MenuEvent::StorageWarning {
                        message: format!("{}; starting with an empty menu", corrupt),
                    });
                    InitOutcome::RecoveredFromCorrupt
                }
            },
        };

        self.state = StoreState::Ready;
        self.events.emit(MenuEvent::Loaded {
            menu: self.menu.clone(),
        });

        Ok(outcome)
    }

    /// Append a dish to the menu and persist
    ///
    /// The caller supplies a complete dish, id included. Validation
    /// failures leave the store untouched. The append is rolled back
    /// if the write-through fails.
    pub async fn add_item(&mut self, item: MenuItem) -> Result<()> {
        self.require_ready()?;
        item.validate()?;

        self.menu.push(item.clone());

        if let Err(e) = self.write_through().await {
            self.menu.pop();
            return Err(e);
        }

        self.events.emit(MenuEvent::ItemAdded {
            item,
            menu: self.menu.clone(),
        });

        Ok(())
    }

    /// Remove the dish with the given id and persist
    ///
    /// Removing an id that is not on the menu is a no-op, not an
    /// error; the return value says whether anything was removed. A
    /// failed write-through reinserts the dish at its original index.
    pub async fn remove_item(&mut self, id: &str) -> Result<bool> {
        self.require_ready()?;

        let Some(index) = self.menu.iter().position(|item| item.id == id) else {
            return Ok(false);
        };

        let removed = self.menu.remove(index);

        if let Err(e) = self.write_through().await {
            self.menu.insert(index, removed);
            return Err(e);
        }

        self.events.emit(MenuEvent::ItemRemoved {
            id: removed.id,
            menu: self.menu.clone(),
        });

        Ok(true)
    }

    /// Current in-memory snapshot, insertion order preserved
    ///
    /// Synchronous and read-only; no I/O.
    pub fn current_menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Number of dishes on the menu
    pub fn len(&self) -> usize {
        self.menu.len()
    }

    /// Check whether the menu has no dishes
    pub fn is_empty(&self) -> bool {
        self.menu.is_empty()
    }

    /// Current lifecycle state
    pub fn state(&self) -> StoreState {
        self.state
    }

    /// Borrow the storage adapter
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // Serialize the whole menu and write it under the fixed key.
    async fn write_through(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.menu)?;
        self.storage.set(MENU_STORAGE_KEY, &blob).await
    }

    fn require_ready(&self) -> Result<()> {
        if self.state.is_ready() {
            Ok(())
        } else {
            Err(MenuError::NotReady)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::types::Category;

    fn dish(id: &str, name: &str, category: Category, price: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            category,
            price: price.to_string(),
        }
    }

    async fn ready_store() -> (MenuStore<MemoryStore>, mpsc::Receiver<MenuEvent>) {
        let (mut store, receiver) = MenuStore::new(MemoryStore::new());
        store.initialize().await.unwrap();
        (store, receiver)
    }

    #[tokio::test]
    async fn test_mutation_before_initialize_fails() {
        let (mut store, _events) = MenuStore::new(MemoryStore::new());

        let err = store
            .add_item(dish("1", "Soup", Category::Starter, "25"))
            .await
            .unwrap_err();
        assert!(matches!(err, MenuError::NotReady));

        let err = store.remove_item("1").await.unwrap_err();
        assert!(matches!(err, MenuError::NotReady));
    }

    #[tokio::test]
    async fn test_initialize_without_stored_menu() {
        let (mut store, _events) = MenuStore::new(MemoryStore::new());

        let outcome = store.initialize().await.unwrap();

        assert_eq!(outcome, InitOutcome::StartedEmpty);
        assert!(store.is_empty());
        assert!(store.state().is_ready());
    }

    #[tokio::test]
    async fn test_initialize_loads_stored_menu() {
        let stored = serde_json::to_string(&vec![
            dish("1", "Soup", Category::Starter, "25"),
            dish("2", "Cake", Category::Dessert, "15"),
        ])
        .unwrap();

        let storage = MemoryStore::with_value(MENU_STORAGE_KEY, &stored);
        let (mut store, _events) = MenuStore::new(storage);

        let outcome = store.initialize().await.unwrap();

        assert_eq!(outcome, InitOutcome::Loaded(2));
        assert_eq!(store.len(), 2);
        assert_eq!(store.current_menu()[0].name, "Soup");
        assert_eq!(store.current_menu()[1].name, "Cake");
    }

    #[tokio::test]
    async fn test_initialize_recovers_from_corrupt_blob() {
        let storage = MemoryStore::with_value(MENU_STORAGE_KEY, "{not json[");
        let (mut store, mut events) = MenuStore::new(storage);

        let outcome = store.initialize().await.unwrap();

        assert_eq!(outcome, InitOutcome::RecoveredFromCorrupt);
        assert!(store.is_empty());
        assert!(store.state().is_ready());

        // Warning event first, then the load snapshot
        assert!(matches!(
            events.recv().await.unwrap(),
            MenuEvent::StorageWarning { .. }
        ));
        assert!(matches!(events.recv().await.unwrap(), MenuEvent::Loaded { .. }));
    }

    #[tokio::test]
    async fn test_add_appends_and_persists() {
        let (mut store, _events) = ready_store().await;

        store
            .add_item(dish("1", "Soup", Category::Starter, "25"))
            .await
            .unwrap();

        assert_eq!(store.len(), 1);

        // The persisted blob matches the in-memory menu
        let blob = store.storage().raw_value(MENU_STORAGE_KEY).unwrap();
        let persisted: Vec<MenuItem> = serde_json::from_str(blob).unwrap();
        assert_eq!(persisted, store.current_menu());
    }

    #[tokio::test]
    async fn test_add_preserves_insertion_order() {
        let (mut store, _events) = ready_store().await;

        store
            .add_item(dish("1", "Soup", Category::Starter, "25"))
            .await
            .unwrap();
        store
            .add_item(dish("2", "Cake", Category::Dessert, "15"))
            .await
            .unwrap();

        let names: Vec<&str> = store.current_menu().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Cake"]);
    }

    #[tokio::test]
    async fn test_add_rejects_incomplete_dish() {
        let (mut store, _events) = ready_store().await;

        let mut incomplete = dish("1", "Soup", Category::Starter, "25");
        incomplete.description = String::new();

        let err = store.add_item(incomplete).await.unwrap_err();
        assert!(matches!(err, MenuError::Validation { .. }));

        // Nothing changed in memory or storage
        assert!(store.is_empty());
        assert!(store.storage().raw_value(MENU_STORAGE_KEY).is_none());
    }

    #[tokio::test]
    async fn test_add_rolls_back_on_write_failure() {
        let stored =
            serde_json::to_string(&vec![dish("1", "Soup", Category::Starter, "25")]).unwrap();
        let mut storage = MemoryStore::with_value(MENU_STORAGE_KEY, &stored);
        storage.fail_writes(true);

        let (mut store, _events) = MenuStore::new(storage);
        store.initialize().await.unwrap();

        let err = store
            .add_item(dish("2", "Cake", Category::Dessert, "15"))
            .await
            .unwrap_err();
        assert!(matches!(err, MenuError::StorageWrite { .. }));

        // In-memory menu still matches what storage holds
        let ids: Vec<&str> = store.current_menu().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[tokio::test]
    async fn test_remove_existing_dish() {
        let (mut store, _events) = ready_store().await;

        store
            .add_item(dish("1", "Soup", Category::Starter, "25"))
            .await
            .unwrap();
        store
            .add_item(dish("2", "Cake", Category::Dessert, "15"))
            .await
            .unwrap();

        let removed = store.remove_item("1").await.unwrap();

        assert!(removed);
        assert_eq!(store.len(), 1);
        assert_eq!(store.current_menu()[0].id, "2");

        let blob = store.storage().raw_value(MENU_STORAGE_KEY).unwrap();
        let persisted: Vec<MenuItem> = serde_json::from_str(blob).unwrap();
        assert_eq!(persisted, store.current_menu());
    }

    #[tokio::test]
    async fn test_remove_absent_id_is_noop() {
        let (mut store, _events) = ready_store().await;

        store
            .add_item(dish("1", "Soup", Category::Starter, "25"))
            .await
            .unwrap();

        let removed = store.remove_item("no-such-id").await.unwrap();

        assert!(!removed);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_rolls_back_on_write_failure() {
        let stored = serde_json::to_string(&vec![
            dish("1", "Soup", Category::Starter, "25"),
            dish("2", "Steak", Category::Main, "120"),
            dish("3", "Cake", Category::Dessert, "15"),
        ])
        .unwrap();

        let mut storage = MemoryStore::with_value(MENU_STORAGE_KEY, &stored);
        storage.fail_writes(true);

        let (mut store, _events) = MenuStore::new(storage);
        store.initialize().await.unwrap();

        let err = store.remove_item("2").await.unwrap_err();
        assert!(matches!(err, MenuError::StorageWrite { .. }));

        // The dish is back at its original position
        let ids: Vec<&str> = store.current_menu().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_events_carry_new_snapshot() {
        let (mut store, mut events) = ready_store().await;

        // Drain the Loaded event from initialize
        assert!(matches!(events.recv().await.unwrap(), MenuEvent::Loaded { .. }));

        store
            .add_item(dish("1", "Soup", Category::Starter, "25"))
            .await
            .unwrap();

        match events.recv().await.unwrap() {
            MenuEvent::ItemAdded { item, menu } => {
                assert_eq!(item.id, "1");
                assert_eq!(menu.len(), 1);
            }
            other => panic!("unexpected event: {:?}", other),
        }

        store.remove_item("1").await.unwrap();

        match events.recv().await.unwrap() {
            MenuEvent::ItemRemoved { id, menu } => {
                assert_eq!(id, "1");
                assert!(menu.is_empty());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
