//! Profile page and the contact/password/photo update flows.
//!
//! Update handlers all follow one shape: validate, pre-check uniqueness,
//! write, refresh the session, flash, redirect. The check-then-write
//! sequences run as separate autocommit statements.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use portal_core::forms::{PasswordUpdateForm, PhotoUploadForm, ProfileUpdateForm};
use portal_core::{validation, Result, SessionStudent, StudentRecord};
use serde_json::{json, Value};
use sqlx::MySqlPool;
use tower_sessions::Session;

use crate::session::{self, Flash, FlashLevel};
use crate::state::AppState;

/// `GET /profile`: the full joined student record with derived fields.
pub async fn profile(State(state): State<Arc<AppState>>, session: Session) -> Response {
    let Some(current) = session::current_student(&session).await else {
        return Redirect::to("/login").into_response();
    };

    match portal_db::students::fetch_profile(&state.pool, current.id).await {
        Ok(Some(student)) => {
            let flashes = session::take_flashes(&session).await;
            Json(json!({
                "page": "profile",
                "student": profile_view(&student),
                "flashes": flashes,
            }))
            .into_response()
        }
        Ok(None) => {
            session::flash(&session, FlashLevel::Error, "Данные студента не найдены").await;
            Redirect::to("/login").into_response()
        }
        Err(error) => {
            tracing::error!(error = %error, student_id = current.id, "Profile query failed");
            let mut flashes = session::take_flashes(&session).await;
            flashes.push(Flash::new(
                FlashLevel::Error,
                "Ошибка при загрузке данных профиля",
            ));
            Json(json!({ "page": "profile", "student": Value::Null, "flashes": flashes }))
                .into_response()
        }
    }
}

/// `POST /update_profile`: contact details with validation and uniqueness
/// pre-checks.
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<ProfileUpdateForm>,
) -> Response {
    let Some(current) = session::current_student(&session).await else {
        return Redirect::to("/login").into_response();
    };

    let email = form.email.trim().to_string();
    let phone = form.phone.trim().to_string();
    let address = form.address.trim().to_string();

    let checks = [
        validation::validate_email(&email),
        validation::validate_phone(&phone),
        validation::validate_address(&address),
    ];
    for check in checks {
        if let Err(error) = check {
            session::flash(&session, FlashLevel::Error, error.to_string()).await;
            return Redirect::to("/profile").into_response();
        }
    }

    match apply_contact_update(&state.pool, &session, &current, &email, &phone, &address).await {
        Ok(Some(conflict)) => session::flash(&session, FlashLevel::Error, conflict).await,
        Ok(None) => {
            session::flash(&session, FlashLevel::Success, "Профиль успешно обновлен!").await;
        }
        Err(error) => {
            tracing::error!(error = %error, student_id = current.id, "Profile update failed");
            session::flash(&session, FlashLevel::Error, "Ошибка при обновлении профиля").await;
        }
    }

    Redirect::to("/profile").into_response()
}

/// `POST /update_password`: confirm-match check, current-password
/// pre-check, update.
pub async fn update_password(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<PasswordUpdateForm>,
) -> Response {
    let Some(current) = session::current_student(&session).await else {
        return Redirect::to("/login").into_response();
    };

    if form.new_password != form.confirm_password {
        session::flash(
            &session,
            FlashLevel::Error,
            "Новый пароль и подтверждение не совпадают",
        )
        .await;
        return Redirect::to("/profile").into_response();
    }

    match change_password(&state.pool, current.id, &form).await {
        Ok(true) => session::flash(&session, FlashLevel::Success, "Пароль успешно изменен!").await,
        Ok(false) => session::flash(&session, FlashLevel::Error, "Текущий пароль неверен").await,
        Err(error) => {
            tracing::error!(error = %error, student_id = current.id, "Password update failed");
            session::flash(&session, FlashLevel::Error, "Ошибка при изменении пароля").await;
        }
    }

    Redirect::to("/profile").into_response()
}

/// `POST /upload_photo`: URL validation and update.
pub async fn upload_photo(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<PhotoUploadForm>,
) -> Response {
    let Some(current) = session::current_student(&session).await else {
        return Redirect::to("/login").into_response();
    };

    let photo_url = form.photo_url.trim().to_string();
    if let Err(error) = validation::validate_photo_url(&photo_url) {
        session::flash(&session, FlashLevel::Error, error.to_string()).await;
        return Redirect::to("/profile").into_response();
    }

    match set_photo(&state.pool, &session, &current, &photo_url).await {
        Ok(()) => {
            session::flash(
                &session,
                FlashLevel::Success,
                "Фото профиля успешно обновлено!",
            )
            .await;
        }
        Err(error) => {
            tracing::error!(error = %error, student_id = current.id, "Photo update failed");
            session::flash(
                &session,
                FlashLevel::Error,
                "Ошибка при обновлении фото профиля",
            )
            .await;
        }
    }

    Redirect::to("/profile").into_response()
}

/// Runs the uniqueness pre-checks and the update. Returns the user-facing
/// conflict message when the email or phone belongs to another student.
async fn apply_contact_update(
    pool: &MySqlPool,
    session: &Session,
    current: &SessionStudent,
    email: &str,
    phone: &str,
    address: &str,
) -> Result<Option<&'static str>> {
    if portal_db::students::email_taken_by_other(pool, email, current.id).await? {
        return Ok(Some("Этот email уже используется другим пользователем"));
    }
    if portal_db::students::phone_taken_by_other(pool, phone, current.id).await? {
        return Ok(Some("Этот телефон уже используется другим пользователем"));
    }

    portal_db::students::update_contact(pool, current.id, email, phone, address).await?;

    let mut refreshed = current.clone();
    refreshed.email = email.to_string();
    session::store_student(session, &refreshed).await?;

    Ok(None)
}

async fn change_password(
    pool: &MySqlPool,
    student_id: i64,
    form: &PasswordUpdateForm,
) -> Result<bool> {
    if !portal_db::students::password_matches(pool, student_id, &form.current_password).await? {
        return Ok(false);
    }
    portal_db::students::update_password(pool, student_id, &form.new_password).await?;
    Ok(true)
}

async fn set_photo(
    pool: &MySqlPool,
    session: &Session,
    current: &SessionStudent,
    photo_url: &str,
) -> Result<()> {
    portal_db::students::update_photo(pool, current.id, photo_url).await?;

    let mut refreshed = current.clone();
    refreshed.photo = Some(photo_url.to_string());
    session::store_student(session, &refreshed).await?;

    Ok(())
}

fn profile_view(student: &StudentRecord) -> Value {
    json!({
        "id": student.id,
        "surname": student.surname,
        "first_name": student.first_name,
        "middle_name": student.middle_name,
        "full_name": student.full_name(),
        "email": student.email,
        "phone": student.phone,
        "address": student.address,
        "profile_photo": student.profile_photo,
        "birth_date_str": student.birth_date_str(),
        "group_name": student.group_name,
        "course": student.course,
        "specialty_name": student.specialty_name,
        "cod_specialty": student.cod_specialty,
        "form_study_name": student.form_study_name,
        "tutor": student.tutor_full_name(),
        "created_year": student.enrollment_year(),
        "graduation_year": student.graduation_year(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn profile_view_carries_derived_fields() {
        let student = StudentRecord {
            id: 1,
            surname: "Иванов".to_string(),
            first_name: "Пётр".to_string(),
            middle_name: None,
            email: "ivanov@edu.ru".to_string(),
            phone: None,
            address: None,
            profile_photo: None,
            birth_date: NaiveDate::from_ymd_opt(2003, 4, 9),
            created_at: NaiveDate::from_ymd_opt(2021, 9, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            group_name: "ИС-21".to_string(),
            course: 3,
            specialty_name: "Информационные системы".to_string(),
            cod_specialty: "09.03.02".to_string(),
            form_study_name: "Очная".to_string(),
            tutor_surname: "Петрова".to_string(),
            tutor_first_name: "Анна".to_string(),
            tutor_middle_name: None,
        };

        let view = profile_view(&student);
        assert_eq!(view["full_name"], "Иванов Пётр");
        assert_eq!(view["birth_date_str"], "09.04.2003");
        assert_eq!(view["created_year"], 2021);
        assert_eq!(view["graduation_year"], 2025);
        assert_eq!(view["tutor"], "Петрова Анна");
    }
}
