//! hrm-server — HR management REST API
//!
//! Long-running service that:
//! - Serves the department / employee / leave management API
//! - Persists to PostgreSQL through a single connection pool
//! - Computes dashboard aggregates with plain SQL

pub mod api;
pub mod config;
pub mod db;
pub mod state;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
