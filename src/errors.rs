use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Illegal value: {0}")]
    IllegalValue(String),

    #[error("Contact {0:?} already exists")]
    DuplicateContact(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Failures of the storage contract.
///
/// `InvalidFilePath` only ever comes out of storage construction, while
/// `Operation` only ever comes out of `load` and `save`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Invalid storage file path {path:?}: {reason}")]
    InvalidFilePath { path: String, reason: String },

    #[error("Storage operation failed: {0}")]
    Operation(String),
}

impl StorageError {
    pub fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        StorageError::InvalidFilePath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub fn operation(message: impl Into<String>) -> Self {
        StorageError::Operation(message.into())
    }

    /// An invalid storage path is a special case of an illegal value.
    pub fn is_illegal_value(&self) -> bool {
        matches!(self, StorageError::InvalidFilePath { .. })
    }

    pub fn is_operation(&self) -> bool {
        matches!(self, StorageError::Operation(_))
    }
}

impl AppError {
    /// Errors the session can report and carry on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Storage(e) if e.is_operation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_invalid_path_message() {
        let err = StorageError::invalid_path("book.txt", "must end in .json");

        assert!(err.is_illegal_value());
        assert!(!err.is_operation());
        assert_eq!(
            format!("{}", err),
            "Invalid storage file path \"book.txt\": must end in .json"
        );
    }

    #[test]
    fn storage_operation_errors_are_recoverable() {
        let err = AppError::from(StorageError::operation("disk full"));

        assert!(err.is_recoverable());
        assert_eq!(format!("{}", err), "Storage operation failed: disk full");
    }

    #[test]
    fn other_errors_are_not_recoverable() {
        let invalid = AppError::from(StorageError::invalid_path("", "empty"));
        let missing = AppError::NotFound("Contact".to_string());

        assert!(!invalid.is_recoverable());
        assert!(!missing.is_recoverable());
        assert_eq!(format!("{}", missing), "Contact Not found");
    }
}
