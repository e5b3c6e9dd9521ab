//! Session-gated informational pages.

use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde_json::json;
use tower_sessions::Session;

use crate::session;

async fn page(session: Session, name: &'static str) -> Response {
    let Some(student) = session::current_student(&session).await else {
        return Redirect::to("/login").into_response();
    };

    let flashes = session::take_flashes(&session).await;
    Json(json!({ "page": name, "student": student, "flashes": flashes })).into_response()
}

/// `GET /notifications`.
pub async fn notifications(session: Session) -> Response {
    page(session, "notifications").await
}

/// `GET /messages`.
pub async fn messages(session: Session) -> Response {
    page(session, "messages").await
}

/// `GET /grades`.
pub async fn grades(session: Session) -> Response {
    page(session, "grades").await
}

/// `GET /materials`.
pub async fn materials(session: Session) -> Response {
    page(session, "materials").await
}

/// `GET /decanat`.
pub async fn decanat(session: Session) -> Response {
    page(session, "decanat").await
}

/// `GET /stipendii`.
pub async fn stipendii(session: Session) -> Response {
    page(session, "stipendii").await
}
