//! Shared types for the HRM system
//!
//! Domain models, the unified error system and small utilities used by
//! both `hrm-server` and `hrm-client`. Database derives (`sqlx`) are
//! gated behind the `db` feature so the client crate stays light.

pub mod error;
pub mod models;
pub mod util;

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
