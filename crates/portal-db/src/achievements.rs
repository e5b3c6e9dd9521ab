//! Student achievement queries: per-category scope, history, filter, claim,
//! and the ownership-guarded delete.

use portal_core::{CategoryAchievement, Error, FilteredAchievement, RecentAchievement, Result};
use sqlx::{MySql, MySqlPool, QueryBuilder};

/// A student's achievements inside one category, scoped to one period.
///
/// # Errors
///
/// Returns a database error when the query fails.
pub async fn for_category(
    pool: &MySqlPool,
    student_id: i64,
    category_id: i64,
    period_id: i64,
) -> Result<Vec<CategoryAchievement>> {
    let achievements = sqlx::query_as::<_, CategoryAchievement>(
        r"
        SELECT rc.section_naming, rc.description_text, lt.title AS level,
               rc.points, sa.quantity, (rc.points * sa.quantity) AS total,
               sa.created_at, sa.document_title
        FROM Student_Achievement sa
        JOIN Rating_Criteria rc ON sa.criteria_id = rc.id
        JOIN level_type lt ON rc.level_type_id = lt.id
        WHERE sa.student_id = ? AND rc.category_id = ? AND sa.period_id = ?
        ",
    )
    .bind(student_id)
    .bind(category_id)
    .bind(period_id)
    .fetch_all(pool)
    .await?;
    Ok(achievements)
}

/// The full achievement history of a student, newest first.
///
/// # Errors
///
/// Returns a database error when the query fails.
pub async fn recent(pool: &MySqlPool, student_id: i64) -> Result<Vec<RecentAchievement>> {
    let achievements = sqlx::query_as::<_, RecentAchievement>(
        r"
        SELECT sa.id, sa.quantity, sa.document_title, sa.created_at,
               rc.description_text, rc.points,
               ac.naming AS category_name,
               ap.naming AS period_name,
               lt.title AS level_title
        FROM Student_Achievement sa
        JOIN Rating_Criteria rc ON sa.criteria_id = rc.id
        JOIN Activity_Category ac ON rc.category_id = ac.id
        JOIN Academic_Period ap ON sa.period_id = ap.id
        JOIN level_type lt ON rc.level_type_id = lt.id
        WHERE sa.student_id = ?
        ORDER BY sa.created_at DESC
        ",
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;
    Ok(achievements)
}

/// The achievement history with optional period and category filters.
///
/// # Errors
///
/// Returns a database error when the query fails.
pub async fn filtered(
    pool: &MySqlPool,
    student_id: i64,
    period_id: Option<i64>,
    category_cod: Option<&str>,
) -> Result<Vec<FilteredAchievement>> {
    let mut builder: QueryBuilder<MySql> = QueryBuilder::new(
        r"
        SELECT sa.id, sa.quantity, sa.created_at, sa.document_title,
               rc.description_text, rc.points,
               ac.naming AS category_name, ac.cod AS category_cod,
               lt.title AS level_title
        FROM Student_Achievement sa
        JOIN Rating_Criteria rc ON sa.criteria_id = rc.id
        JOIN Activity_Category ac ON rc.category_id = ac.id
        JOIN level_type lt ON rc.level_type_id = lt.id
        WHERE sa.student_id = ",
    );
    builder.push_bind(student_id);

    if let Some(period_id) = period_id {
        builder.push(" AND sa.period_id = ");
        builder.push_bind(period_id);
    }
    if let Some(category_cod) = category_cod {
        builder.push(" AND ac.cod = ");
        builder.push_bind(category_cod);
    }

    builder.push(" ORDER BY sa.created_at DESC");

    let achievements = builder
        .build_query_as::<FilteredAchievement>()
        .fetch_all(pool)
        .await?;
    Ok(achievements)
}

/// Claims an achievement for a student.
///
/// # Errors
///
/// Returns [`Error::DuplicateDocument`] when the insert trips the
/// duplicate-title trigger, otherwise the database error.
pub async fn insert(
    pool: &MySqlPool,
    student_id: i64,
    criteria_id: i64,
    period_id: i64,
    quantity: i32,
    document_title: &str,
) -> Result<()> {
    sqlx::query(
        r"
        INSERT INTO Student_Achievement
            (student_id, criteria_id, period_id, quantity, document_title, created_at)
        VALUES (?, ?, ?, ?, ?, NOW())
        ",
    )
    .bind(student_id)
    .bind(criteria_id)
    .bind(period_id)
    .bind(quantity)
    .bind(document_title)
    .execute(pool)
    .await
    .map_err(Error::from_db)?;
    Ok(())
}

/// Deletes an achievement only when it belongs to the student.
///
/// Returns whether a row was removed; deleting someone else's achievement
/// is a no-op.
///
/// # Errors
///
/// Returns a database error when the delete fails.
pub async fn delete_owned(pool: &MySqlPool, achievement_id: i64, student_id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM Student_Achievement WHERE id = ? AND student_id = ?")
        .bind(achievement_id)
        .bind(student_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
