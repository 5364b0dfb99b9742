//! Employee endpoints

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::employee::{Employee, EmployeeCreate, EmployeeTerminate, EmployeeUpdate};

use super::{ApiResult, db_err};
use crate::db;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/employees", get(list).post(create))
        .route("/api/employees/{id}", put(update).delete(delete))
        .route("/api/employees/{id}/terminate", put(terminate))
}

async fn list(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    let employees = db::employee::list(&state.pool).await.map_err(db_err)?;
    Ok(Json(employees))
}

async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeCreate>,
) -> ApiResult<Employee> {
    payload.validate()?;
    let employee = db::employee::create(&state.pool, &payload)
        .await
        .map_err(db_err)?;
    Ok(Json(employee))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> ApiResult<Employee> {
    payload.validate()?;
    match db::employee::update(&state.pool, id, &payload)
        .await
        .map_err(db_err)?
    {
        Some(employee) => Ok(Json(employee)),
        None => Err(AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", id)),
    }
}

async fn terminate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeTerminate>,
) -> ApiResult<Employee> {
    payload.validate()?;
    match db::employee::terminate(
        &state.pool,
        id,
        payload.termination_date,
        &payload.termination_reason,
    )
    .await
    .map_err(db_err)?
    {
        Some(employee) => Ok(Json(employee)),
        None => Err(AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", id)),
    }
}

async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, AppError> {
    db::employee::delete(&state.pool, id).await.map_err(db_err)?;
    // Deleting an absent employee is not an error
    Ok(ApiResponse::message("Employee deleted"))
}
