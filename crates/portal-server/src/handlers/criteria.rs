//! Criteria lookup endpoints used by the achievement form (AJAX).
//!
//! These were never session-gated in the portal and remain open.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use portal_core::{CriteriaDetail, CriteriaRow, LevelType};
use serde::Serialize;

use crate::response::ApiError;
use crate::state::AppState;

/// The structured criteria payload: criteria and levels keyed by id.
#[derive(Debug, Serialize)]
pub struct CriteriaData {
    /// Criteria of the category, keyed by criterion id.
    pub sections: BTreeMap<i64, CriteriaDetail>,
    /// All levels, keyed by level id.
    pub levels: BTreeMap<i64, LevelType>,
}

/// `GET /get_criteria/:cod`: flat criteria list for a category.
///
/// Lookup failures degrade to an empty list; the form simply shows no
/// options.
pub async fn get_criteria(
    State(state): State<Arc<AppState>>,
    Path(category_cod): Path<String>,
) -> Json<Vec<CriteriaRow>> {
    match portal_db::criteria::for_category(&state.pool, &category_cod).await {
        Ok(criteria) => Json(criteria),
        Err(error) => {
            tracing::error!(error = %error, %category_cod, "Criteria lookup failed");
            Json(Vec::new())
        }
    }
}

/// `GET /get_criteria_data/:cod`: criteria plus levels, keyed by id.
pub async fn get_criteria_data(
    State(state): State<Arc<AppState>>,
    Path(category_cod): Path<String>,
) -> Result<Json<CriteriaData>, ApiError> {
    let criteria = portal_db::criteria::details_for_category(&state.pool, &category_cod).await?;
    let levels = portal_db::criteria::levels(&state.pool).await?;

    let sections = criteria
        .into_iter()
        .map(|criterion| (criterion.id, criterion))
        .collect();
    let levels = levels.into_iter().map(|level| (level.id, level)).collect();

    Ok(Json(CriteriaData { sections, levels }))
}
