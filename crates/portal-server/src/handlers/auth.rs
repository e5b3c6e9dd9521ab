//! Login, logout, and the root redirect.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use portal_core::forms::LoginForm;
use portal_core::SessionStudent;
use serde_json::json;
use tower_sessions::Session;

use crate::session::{self, FlashLevel};
use crate::state::AppState;

/// `GET /`: already-authenticated students land on their profile.
pub async fn index(session: Session) -> Redirect {
    if session::current_student(&session).await.is_some() {
        Redirect::to("/profile")
    } else {
        Redirect::to("/login")
    }
}

/// `GET /login`: login page payload.
pub async fn login_page(session: Session) -> Response {
    let flashes = session::take_flashes(&session).await;
    Json(json!({ "page": "login", "flashes": flashes })).into_response()
}

/// `POST /login`: credential check against the database.
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    match portal_db::students::authenticate(&state.pool, &form.email, &form.password).await {
        Ok(Some(student)) => {
            let marker = SessionStudent::from(&student);
            if let Err(error) = session::store_student(&session, &marker).await {
                tracing::error!(error = %error, "Failed to persist login session");
                session::flash(&session, FlashLevel::Error, "Ошибка при входе в систему").await;
                return Redirect::to("/login").into_response();
            }

            tracing::info!(student_id = student.id, "Student logged in");
            session::flash(&session, FlashLevel::Success, "Вход выполнен успешно!").await;
            Redirect::to("/profile").into_response()
        }
        Ok(None) => {
            session::flash(&session, FlashLevel::Error, "Неверный email или пароль").await;
            Redirect::to("/login").into_response()
        }
        Err(error) => {
            tracing::error!(error = %error, "Login query failed");
            session::flash(&session, FlashLevel::Error, "Ошибка при входе в систему").await;
            Redirect::to("/login").into_response()
        }
    }
}

/// `GET /logout`: drops the student marker.
pub async fn logout(session: Session) -> Redirect {
    session.clear().await;
    session::flash(&session, FlashLevel::Success, "Вы вышли из системы").await;
    Redirect::to("/login")
}
