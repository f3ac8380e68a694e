/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key contains characters that cannot name a slot
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Slot lock was poisoned by a panicking writer
    #[error("Session storage lock poisoned")]
    Poisoned,

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for harmony_core::HarmonyError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(io) => harmony_core::HarmonyError::Io(io),
            other => harmony_core::HarmonyError::storage(other.to_string()),
        }
    }
}

/// Slot keys become file names, so only a conservative character set is allowed
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_keys() {
        assert!(validate_key("user").is_ok());
        assert!(validate_key("ui.theme").is_ok());
        assert!(validate_key("session_v2-backup").is_ok());
    }

    #[test]
    fn rejects_path_like_keys() {
        for key in ["", "../user", "a/b", ".hidden", "with space"] {
            assert!(
                matches!(validate_key(key), Err(StorageError::InvalidKey(_))),
                "{key:?} should be rejected"
            );
        }
    }

    #[test]
    fn converts_into_core_error() {
        let err: harmony_core::HarmonyError = StorageError::InvalidKey("x/y".into()).into();
        assert!(matches!(err, harmony_core::HarmonyError::Storage(_)));
    }
}
