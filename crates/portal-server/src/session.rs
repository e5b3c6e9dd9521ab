//! Session helpers: the authenticated-student marker and flash messages.
//!
//! Presence of the student marker in the server-side session is the entire
//! access-control model; every protected handler checks it and bounces to
//! `/login` when it is absent. Flash messages queue up in the session and
//! drain on the next page load, mirroring the classic redirect-then-render
//! flow.

use portal_core::{Error, Result, SessionStudent};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

const STUDENT_KEY: &str = "student";
const FLASH_KEY: &str = "_flashes";

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

/// A one-shot message rendered on the next page load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    /// Severity.
    pub level: FlashLevel,
    /// User-facing text.
    pub message: String,
}

impl Flash {
    /// Creates a flash message.
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// The authenticated student, when the session carries one.
pub async fn current_student(session: &Session) -> Option<SessionStudent> {
    session.get(STUDENT_KEY).await.ok().flatten()
}

/// Stores the authenticated-student marker.
///
/// # Errors
///
/// Returns a session error when the store rejects the write.
pub async fn store_student(session: &Session, student: &SessionStudent) -> Result<()> {
    session
        .insert(STUDENT_KEY, student)
        .await
        .map_err(|e| Error::session(e.to_string()))
}

/// Queues a flash message. A failing session write only loses the message,
/// so it is logged rather than propagated.
pub async fn flash(session: &Session, level: FlashLevel, message: impl Into<String>) {
    let mut flashes = peek_flashes(session).await;
    flashes.push(Flash::new(level, message));
    if let Err(error) = session.insert(FLASH_KEY, &flashes).await {
        tracing::warn!(error = %error, "Failed to queue flash message");
    }
}

/// Drains the queued flash messages.
pub async fn take_flashes(session: &Session) -> Vec<Flash> {
    session
        .remove::<Vec<Flash>>(FLASH_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

async fn peek_flashes(session: &Session) -> Vec<Flash> {
    session
        .get::<Vec<Flash>>(FLASH_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_levels_serialize_lowercase() {
        let flash = Flash::new(FlashLevel::Success, "Вход выполнен успешно!");
        let json = serde_json::to_value(&flash).unwrap();
        assert_eq!(json["level"], "success");
        assert_eq!(json["message"], "Вход выполнен успешно!");
    }
}
