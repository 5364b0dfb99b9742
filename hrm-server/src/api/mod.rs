//! API routes for hrm-server

pub mod dashboard;
pub mod department;
pub mod employee;
pub mod health;
pub mod leave;

use axum::Router;
use axum::routing::get;
use shared::error::{AppError, ErrorCode};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Handler result: bare JSON entity on success, enveloped error body
/// on failure
pub(crate) type ApiResult<T> = Result<axum::Json<T>, AppError>;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .merge(department::router())
        .merge(employee::router())
        .merge(leave::router())
        .merge(dashboard::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Map a database error onto the domain error space
///
/// Unique and foreign-key violations are recognized by constraint name
/// so clients get a stable error code instead of a driver message.
/// Everything else is logged and reported as a generic database error.
pub(crate) fn db_err(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &err {
        match db.constraint() {
            Some("employees_employee_id_key") => {
                return AppError::new(ErrorCode::EmployeeIdExists);
            }
            Some("employees_email_key") => {
                return AppError::new(ErrorCode::EmployeeEmailExists);
            }
            Some("leave_types_code_key") => {
                return AppError::new(ErrorCode::LeaveTypeCodeExists);
            }
            Some("leave_applications_employee_id_fkey")
            | Some("leave_balances_employee_id_fkey") => {
                return AppError::new(ErrorCode::EmployeeNotFound);
            }
            Some("leave_applications_leave_type_id_fkey") => {
                return AppError::new(ErrorCode::LeaveTypeNotFound);
            }
            _ => {}
        }
    }
    tracing::error!(error = %err, "database operation failed");
    AppError::new(ErrorCode::DatabaseError)
}
