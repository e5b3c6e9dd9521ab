//! Error types for the portal ecosystem.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Message raised by the `Student_Achievement` insert trigger when a student
/// already has a document with the same title.
const DUPLICATE_DOCUMENT_MARKER: &str = "Документ с таким названием уже загружен";

/// Unified error type for the portal ecosystem.
#[derive(Error, Debug)]
pub enum Error {
    /// Database query or connection failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The insert was rejected because the student already uploaded a
    /// document with this title.
    #[error("Документ с таким названием уже загружен")]
    DuplicateDocument,

    /// Form input failed validation. The message is user-facing.
    #[error("{message}")]
    Validation {
        /// User-facing description of the failed rule.
        message: String,
    },

    /// No authenticated student in the session.
    #[error("Unauthorized")]
    Unauthorized,

    /// Requested entity does not exist.
    #[error("{what} not found")]
    NotFound {
        /// What was being looked up.
        what: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session store failure.
    #[error("Session error: {message}")]
    Session {
        /// Error message from the session layer.
        message: String,
    },
}

impl Error {
    /// Creates a validation error with the given user-facing message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a session error.
    #[must_use]
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
        }
    }

    /// Converts a database error, recognizing the duplicate-document trigger.
    ///
    /// The uniqueness of `document_title` per student is enforced by a
    /// database trigger; it surfaces as a generic database error whose
    /// message carries the trigger text.
    #[must_use]
    pub fn from_db(error: sqlx::Error) -> Self {
        if let Some(db_error) = error.as_database_error() {
            if is_duplicate_message(db_error.message()) {
                return Self::DuplicateDocument;
            }
        }
        Self::Database(error)
    }

    /// Returns `true` if this error is a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns `true` if this error is the duplicate-document rejection.
    #[must_use]
    pub fn is_duplicate_document(&self) -> bool {
        matches!(self, Self::DuplicateDocument)
    }
}

/// Returns `true` if a raw database error message is the duplicate-document
/// trigger rejection.
#[must_use]
pub fn is_duplicate_message(message: &str) -> bool {
    message.contains(DUPLICATE_DOCUMENT_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_duplicate_document_trigger_text() {
        assert!(is_duplicate_message(
            "1644 (45000): Документ с таким названием уже загружен"
        ));
    }

    #[test]
    fn ignores_unrelated_database_errors() {
        assert!(!is_duplicate_message(
            "1062 (23000): Duplicate entry 'a@b.ru' for key 'Student.email'"
        ));
        assert!(!is_duplicate_message("Connection refused"));
    }

    #[test]
    fn validation_error_displays_its_message() {
        let error = Error::validation("Телефон должен быть в формате +7XXXXXXXXXX");
        assert_eq!(
            error.to_string(),
            "Телефон должен быть в формате +7XXXXXXXXXX"
        );
        assert!(error.is_validation());
    }
}
