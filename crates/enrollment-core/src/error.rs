//! Error types for the store layer

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while looking up or mutating a collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No entity with the given id
    #[error("{kind} {id} does not exist")]
    NotFound { kind: &'static str, id: String },

    /// Create attempted with an id that is already taken
    #[error("{kind} {id} already exists")]
    Conflict { kind: &'static str, id: String },
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn conflict(kind: &'static str, id: impl ToString) -> Self {
        StoreError::Conflict {
            kind,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::not_found("Course", 261207);
        assert_eq!(err.to_string(), "Course 261207 does not exist");
    }

    #[test]
    fn test_conflict_display() {
        let err = StoreError::conflict("Student", "650610001");
        assert_eq!(err.to_string(), "Student 650610001 already exists");
    }
}
