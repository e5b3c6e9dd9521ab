//! Peer-rank analysis via the external stored procedure.

use portal_core::{CourseRatingRow, Result};
use sqlx::MySqlPool;

/// Course standings for a student's period, computed by the database.
///
/// The procedure is external and opaque; its result set is decoded into
/// [`CourseRatingRow`].
///
/// # Errors
///
/// Returns a database error when the call fails.
pub async fn course_rating(
    pool: &MySqlPool,
    student_id: i64,
    period_id: i64,
) -> Result<Vec<CourseRatingRow>> {
    let rows = sqlx::query_as::<_, CourseRatingRow>("CALL GetCourseRatingAnalysis(?, ?)")
        .bind(student_id)
        .bind(period_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}
