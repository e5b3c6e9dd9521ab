//! Academic-period queries.

use portal_core::{AcademicPeriod, Result};
use sqlx::MySqlPool;

/// All academic periods, most recently started first.
///
/// Dates ride along so the current period can be resolved without a second
/// round trip.
///
/// # Errors
///
/// Returns a database error when the query fails.
pub async fn list(pool: &MySqlPool) -> Result<Vec<AcademicPeriod>> {
    let periods = sqlx::query_as::<_, AcademicPeriod>(
        "SELECT id, naming, start_date, end_date FROM Academic_Period ORDER BY start_date DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(periods)
}
