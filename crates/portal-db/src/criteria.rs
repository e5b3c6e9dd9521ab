//! Activity categories, rating criteria, and level lookups.

use portal_core::{ActivityCategory, CriteriaDetail, CriteriaRow, LevelType, Result};
use sqlx::MySqlPool;

/// All activity categories.
///
/// # Errors
///
/// Returns a database error when the query fails.
pub async fn categories(pool: &MySqlPool) -> Result<Vec<ActivityCategory>> {
    let categories =
        sqlx::query_as::<_, ActivityCategory>("SELECT id, naming, cod FROM Activity_Category")
            .fetch_all(pool)
            .await?;
    Ok(categories)
}

/// Criteria for a category code, ordered by section then points descending.
///
/// # Errors
///
/// Returns a database error when the query fails.
pub async fn for_category(pool: &MySqlPool, category_cod: &str) -> Result<Vec<CriteriaRow>> {
    let criteria = sqlx::query_as::<_, CriteriaRow>(
        r"
        SELECT rc.id, rc.section_naming, rc.description_text,
               lt.title AS level, rc.points
        FROM Rating_Criteria rc
        JOIN Activity_Category ac ON rc.category_id = ac.id
        JOIN level_type lt ON rc.level_type_id = lt.id
        WHERE ac.cod = ?
        ORDER BY rc.section_naming, rc.points DESC
        ",
    )
    .bind(category_cod)
    .fetch_all(pool)
    .await?;
    Ok(criteria)
}

/// Full criteria detail for a category code, for the structured lookup.
///
/// # Errors
///
/// Returns a database error when the query fails.
pub async fn details_for_category(
    pool: &MySqlPool,
    category_cod: &str,
) -> Result<Vec<CriteriaDetail>> {
    let criteria = sqlx::query_as::<_, CriteriaDetail>(
        r"
        SELECT rc.id, rc.section_naming, rc.description_text,
               rc.level_type_id, rc.points,
               COALESCE(rc.achievement_type, 'other') AS achievement_type,
               lt.title AS level_title
        FROM Rating_Criteria rc
        JOIN Activity_Category ac ON rc.category_id = ac.id
        JOIN level_type lt ON rc.level_type_id = lt.id
        WHERE ac.cod = ?
        ORDER BY rc.section_naming, rc.points DESC
        ",
    )
    .bind(category_cod)
    .fetch_all(pool)
    .await?;
    Ok(criteria)
}

/// All criteria levels.
///
/// # Errors
///
/// Returns a database error when the query fails.
pub async fn levels(pool: &MySqlPool) -> Result<Vec<LevelType>> {
    let levels = sqlx::query_as::<_, LevelType>("SELECT id, title FROM level_type ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(levels)
}
