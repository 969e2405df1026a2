//! Store lifecycle states
//!
//! The store starts `Uninitialized` and becomes `Ready` once the
//! initial load from storage completes. Mutations are only valid in
//! `Ready`; attempting one earlier fails with `NotReady` instead of
//! queueing, so the behavior is deterministic.

/// Lifecycle state of the menu store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreState {
    /// Constructed, initial load not finished yet
    Uninitialized,

    /// Loaded and accepting mutations
    Ready,
}

impl StoreState {
    /// Check whether mutations are allowed
    pub fn is_ready(&self) -> bool {
        matches!(self, StoreState::Ready)
    }

    /// Human-readable state name
    pub fn display_name(&self) -> &'static str {
        match self {
            StoreState::Uninitialized => "Uninitialized",
            StoreState::Ready => "Ready",
        }
    }
}
