//! # Portal Server
//!
//! HTTP layer of the student portal: session-gated page and form routes
//! plus the AJAX lookups, served over a shared MySQL pool.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod handlers;
pub mod response;
pub mod server;
pub mod session;
pub mod state;

pub use server::{Server, ServerConfig};
pub use state::AppState;
