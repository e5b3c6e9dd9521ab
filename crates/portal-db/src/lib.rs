//! # Portal DB
//!
//! SQL access layer for the student portal. One module per entity; every
//! query is parameterized and runs as a single autocommit statement against
//! a shared [`MySqlPool`].
//!
//! The schema (tables, the duplicate-document trigger, and the
//! `GetCourseRatingAnalysis` procedure) lives in the database; this crate
//! only projects it.

#![warn(clippy::all)]

pub mod achievements;
pub mod analysis;
pub mod criteria;
pub mod periods;
pub mod students;

use portal_core::{Error, Result};
use sqlx::mysql::MySqlPoolOptions;
pub use sqlx::MySqlPool;

/// Creates a lazily connecting pool.
///
/// No connection is attempted until the first query, so the server starts
/// (and stays up) while the database is down; requests fail individually
/// until it returns.
///
/// # Errors
///
/// Returns a configuration error when the database URL cannot be parsed.
pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<MySqlPool> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy(database_url)
        .map_err(|e| Error::config(format!("invalid database URL: {e}")))
}

/// Verifies the database is reachable.
///
/// # Errors
///
/// Returns the underlying driver error when the round trip fails.
pub async fn ping(pool: &MySqlPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
