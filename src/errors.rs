//! Error types for the ChefDeck menu core
//!
//! Every error is local to a single store or query operation; none are
//! fatal to the process. The interactive front-end reports them and
//! keeps running.

use thiserror::Error;

/// Main error type for menu store operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// A required field was missing, empty, or unrecognized
    #[error("{reason}")]
    Validation { reason: String },

    /// The persisted menu blob failed to parse
    #[error("Stored menu is corrupt: {reason}")]
    CorruptState { reason: String },

    /// The storage adapter rejected a write
    #[error("Failed to persist menu: {reason}")]
    StorageWrite { reason: String },

    /// The storage adapter failed during load
    #[error("Failed to load menu: {reason}")]
    StorageRead { reason: String },

    /// A mutation was attempted before the store finished loading
    #[error("Menu store is not initialized yet")]
    NotReady,

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for menu operations
pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = MenuError::Validation {
            reason: "name must not be empty".to_string(),
        };
        assert_eq!(err.to_string(), "name must not be empty");
    }

    #[test]
    fn test_corrupt_state_error_display() {
        let err = MenuError::CorruptState {
            reason: "expected value at line 1".to_string(),
        };
        assert!(err.to_string().contains("corrupt"));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_not_ready_error_display() {
        let err = MenuError::NotReady;
        assert!(err.to_string().contains("not initialized"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: MenuError = serde_err.into();
        assert!(matches!(err, MenuError::Serialization(_)));
    }
}
