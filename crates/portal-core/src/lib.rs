//! # Portal Core
//!
//! Core types and logic for the student portal.
//!
//! This crate provides the foundational pieces used across the portal
//! services:
//! - Unified error type
//! - Database row models and session types
//! - Form payloads and input validation
//! - Academic-period resolution and portfolio aggregation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod forms;
pub mod models;
pub mod period;
pub mod portfolio;
pub mod validation;

pub use error::{Error, Result};
pub use models::{
    AcademicPeriod, ActivityCategory, CategoryAchievement, CourseRatingRow, CriteriaDetail,
    CriteriaRow, FilteredAchievement, LevelType, RecentAchievement, SessionStudent, StudentRecord,
};
pub use period::resolve_current_period;
pub use portfolio::{overall_total, CategoryReport, PortfolioData};
