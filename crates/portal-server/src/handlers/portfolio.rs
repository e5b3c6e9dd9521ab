//! The portfolio/rating page and the achievement mutations.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use portal_core::forms::{AchievementForm, FilterParams};
use portal_core::{
    period, portfolio, CategoryReport, Error, FilteredAchievement, PortfolioData, Result,
};
use serde_json::json;
use sqlx::MySqlPool;
use tower_sessions::Session;

use crate::response::ApiError;
use crate::session::{self, Flash, FlashLevel};
use crate::state::AppState;

/// `GET /portfolio`: the assembled rating page.
pub async fn portfolio_page(State(state): State<Arc<AppState>>, session: Session) -> Response {
    let Some(current) = session::current_student(&session).await else {
        return Redirect::to("/login").into_response();
    };

    match build_portfolio(&state.pool, current.id).await {
        Ok(data) => {
            let flashes = session::take_flashes(&session).await;
            Json(json!({
                "page": "portfolio",
                "student": current,
                "data": data,
                "flashes": flashes,
            }))
            .into_response()
        }
        Err(error) => {
            tracing::error!(error = %error, student_id = current.id, "Portfolio assembly failed");
            let mut flashes = session::take_flashes(&session).await;
            flashes.push(Flash::new(
                FlashLevel::Error,
                "Ошибка при загрузке данных рейтинга",
            ));
            Json(json!({
                "page": "portfolio",
                "student": current,
                "data": PortfolioData::empty(),
                "flashes": flashes,
            }))
            .into_response()
        }
    }
}

/// `POST /add_achievement`: claim a criterion instance.
pub async fn add_achievement(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<AchievementForm>,
) -> Response {
    let Some(current) = session::current_student(&session).await else {
        return Redirect::to("/login").into_response();
    };

    let result = portal_db::achievements::insert(
        &state.pool,
        current.id,
        form.criteria_id,
        form.period_id,
        form.quantity,
        &form.document_title,
    )
    .await;

    match result {
        Ok(()) => {
            session::flash(&session, FlashLevel::Success, "Достижение успешно добавлено!").await;
        }
        Err(Error::DuplicateDocument) => {
            session::flash(
                &session,
                FlashLevel::Error,
                "Ошибка: Такой документ уже существует!",
            )
            .await;
        }
        Err(error) => {
            tracing::error!(error = %error, student_id = current.id, "Achievement insert failed");
            session::flash(
                &session,
                FlashLevel::Error,
                "Ошибка при добавлении достижения",
            )
            .await;
        }
    }

    Redirect::to("/portfolio").into_response()
}

/// `GET /delete_achievement/:id`: delete, only when owned by the session
/// student.
pub async fn delete_achievement(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(achievement_id): Path<i64>,
) -> Response {
    let Some(current) = session::current_student(&session).await else {
        return Redirect::to("/login").into_response();
    };

    match portal_db::achievements::delete_owned(&state.pool, achievement_id, current.id).await {
        Ok(true) => session::flash(&session, FlashLevel::Success, "Достижение удалено").await,
        Ok(false) => {
            session::flash(
                &session,
                FlashLevel::Error,
                "Достижение не найдено или недоступно",
            )
            .await;
        }
        Err(error) => {
            tracing::error!(error = %error, student_id = current.id, "Achievement delete failed");
            session::flash(
                &session,
                FlashLevel::Error,
                "Ошибка при удалении достижения",
            )
            .await;
        }
    }

    Redirect::to("/portfolio").into_response()
}

/// `GET /filter_achievements`: history filtered by optional period and
/// category (AJAX).
pub async fn filter_achievements(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(params): Query<FilterParams>,
) -> std::result::Result<Json<Vec<FilteredAchievement>>, ApiError> {
    let Some(current) = session::current_student(&session).await else {
        return Err(ApiError(Error::Unauthorized));
    };

    let achievements = portal_db::achievements::filtered(
        &state.pool,
        current.id,
        params.period(),
        params.category(),
    )
    .await?;
    Ok(Json(achievements))
}

/// Assembles the rating page: categories, resolved current period,
/// per-category folds, full history, and the peer-rank analysis.
async fn build_portfolio(pool: &MySqlPool, student_id: i64) -> Result<PortfolioData> {
    let categories = portal_db::criteria::categories(pool).await?;
    let periods = portal_db::periods::list(pool).await?;

    let today = chrono::Local::now().date_naive();
    let current_period = period::resolve_current_period(&periods, today).cloned();
    // With no periods at all the scope filter matches nothing.
    let period_filter = current_period.as_ref().map_or(0, |p| p.id);

    let mut reports = Vec::with_capacity(categories.len());
    for category in &categories {
        let achievements =
            portal_db::achievements::for_category(pool, student_id, category.id, period_filter)
                .await?;
        reports.push(CategoryReport::build(category, achievements));
    }
    let total_points = portfolio::overall_total(&reports);

    let recent_achievements = portal_db::achievements::recent(pool, student_id).await?;

    let analysis = match &current_period {
        Some(period) => portal_db::analysis::course_rating(pool, student_id, period.id).await?,
        None => Vec::new(),
    };

    Ok(PortfolioData {
        categories: reports,
        total_points,
        periods,
        current_period,
        recent_achievements,
        analysis,
    })
}
