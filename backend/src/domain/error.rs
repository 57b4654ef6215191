use shared::ErrorKind;

use crate::storage::StorageError;

/// Errors returned by the domain services
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// A required input field was missing or malformed
    #[error("{0}")]
    Validation(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Category reported to API callers
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Storage(_) => ErrorKind::Io,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_kinds() {
        assert_eq!(DomainError::validation("Name is required").kind(), ErrorKind::Validation);
        assert_eq!(DomainError::not_found("Activity", "a1").kind(), ErrorKind::NotFound);

        let io = DomainError::from(StorageError::Io {
            path: PathBuf::from("activities.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(io.kind(), ErrorKind::Io);
        assert!(io.to_string().contains("activities.json"));
    }

    #[test]
    fn test_not_found_message() {
        let error = DomainError::not_found("Staff", "staff::42");
        assert_eq!(error.to_string(), "Staff not found: staff::42");
    }
}
