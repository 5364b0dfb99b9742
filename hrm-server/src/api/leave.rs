//! Leave type, application and balance endpoints

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use shared::error::{AppError, ErrorCode};
use shared::models::leave_application::{
    LeaveApplication, LeaveApplicationCreate, LeaveStatusUpdate,
};
use shared::models::leave_balance::{LeaveBalance, LeaveBalanceUpdate};
use shared::models::leave_type::{LeaveType, LeaveTypeCreate};
use shared::util::leave_days;

use super::{ApiResult, db_err};
use crate::db;
use crate::db::leave::StatusTransition;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/leave-types", get(list_types).post(create_type))
        .route(
            "/api/leave-applications",
            get(list_applications).post(create_application),
        )
        .route("/api/leave-applications/{id}/status", put(update_status))
        .route("/api/leave-balances", get(list_balances))
        .route("/api/leave-balances/{employee_id}", put(update_balance))
}

// ── Leave types ──

async fn list_types(State(state): State<AppState>) -> ApiResult<Vec<LeaveType>> {
    let types = db::leave::list_types(&state.pool).await.map_err(db_err)?;
    Ok(Json(types))
}

async fn create_type(
    State(state): State<AppState>,
    Json(payload): Json<LeaveTypeCreate>,
) -> ApiResult<LeaveType> {
    payload.validate()?;
    let leave_type = db::leave::create_type(&state.pool, &payload)
        .await
        .map_err(db_err)?;
    Ok(Json(leave_type))
}

// ── Leave applications ──

async fn list_applications(State(state): State<AppState>) -> ApiResult<Vec<LeaveApplication>> {
    let applications = db::leave::list_applications(&state.pool)
        .await
        .map_err(db_err)?;
    Ok(Json(applications))
}

async fn create_application(
    State(state): State<AppState>,
    Json(payload): Json<LeaveApplicationCreate>,
) -> ApiResult<LeaveApplication> {
    payload.validate()?;
    let days = leave_days(payload.start_date, payload.end_date);
    let application = db::leave::create_application(&state.pool, &payload, days)
        .await
        .map_err(db_err)?;
    Ok(Json(application))
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<LeaveStatusUpdate>,
) -> ApiResult<LeaveApplication> {
    payload.validate()?;
    match db::leave::update_status(&state.pool, id, payload.status, &payload.approver)
        .await
        .map_err(db_err)?
    {
        StatusTransition::Updated(application) => Ok(Json(*application)),
        StatusTransition::NotFound => {
            Err(AppError::new(ErrorCode::LeaveApplicationNotFound).with_detail("id", id))
        }
        StatusTransition::NotPending => {
            Err(AppError::new(ErrorCode::LeaveNotPending).with_detail("id", id))
        }
    }
}

// ── Leave balances ──

async fn list_balances(State(state): State<AppState>) -> ApiResult<Vec<LeaveBalance>> {
    let balances = db::leave::list_balances(&state.pool)
        .await
        .map_err(db_err)?;
    Ok(Json(balances))
}

async fn update_balance(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(payload): Json<LeaveBalanceUpdate>,
) -> ApiResult<LeaveBalance> {
    payload.validate()?;
    match db::leave::update_balance(&state.pool, &employee_id, &payload)
        .await
        .map_err(db_err)?
    {
        Some(balance) => Ok(Json(balance)),
        None => Err(
            AppError::new(ErrorCode::LeaveBalanceNotFound).with_detail("employeeId", employee_id)
        ),
    }
}
