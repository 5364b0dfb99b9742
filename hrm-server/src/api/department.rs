//! Department endpoints

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::department::{Department, DepartmentCreate, DepartmentUpdate};

use super::{ApiResult, db_err};
use crate::db;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/departments", get(list).post(create))
        .route("/api/departments/{id}", put(update).delete(delete))
}

async fn list(State(state): State<AppState>) -> ApiResult<Vec<Department>> {
    let departments = db::department::list(&state.pool).await.map_err(db_err)?;
    Ok(Json(departments))
}

async fn create(
    State(state): State<AppState>,
    Json(payload): Json<DepartmentCreate>,
) -> ApiResult<Department> {
    payload.validate()?;
    if let Some(parent_id) = payload.parent_id {
        ensure_parent_exists(&state, parent_id).await?;
    }
    let department = db::department::create(&state.pool, &payload)
        .await
        .map_err(db_err)?;
    Ok(Json(department))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DepartmentUpdate>,
) -> ApiResult<Department> {
    payload.validate()?;
    if let Some(parent_id) = payload.parent_id {
        ensure_parent_exists(&state, parent_id).await?;

        let parents: HashMap<i64, Option<i64>> = db::department::parent_map(&state.pool)
            .await
            .map_err(db_err)?
            .into_iter()
            .collect();
        if creates_cycle(&parents, id, parent_id) {
            return Err(AppError::new(ErrorCode::DepartmentParentCycle)
                .with_detail("id", id)
                .with_detail("parentId", parent_id));
        }
    }
    match db::department::update(&state.pool, id, &payload)
        .await
        .map_err(db_err)?
    {
        Some(department) => Ok(Json(department)),
        None => Err(AppError::new(ErrorCode::DepartmentNotFound).with_detail("id", id)),
    }
}

async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, AppError> {
    if let Some(department) = db::department::get(&state.pool, id)
        .await
        .map_err(db_err)?
    {
        let children = db::department::child_count(&state.pool, id)
            .await
            .map_err(db_err)?;
        if children > 0 {
            return Err(AppError::new(ErrorCode::DepartmentHasChildren)
                .with_detail("id", id)
                .with_detail("children", children));
        }
        if department.employee_count > 0 {
            return Err(AppError::new(ErrorCode::DepartmentHasEmployees)
                .with_detail("id", id)
                .with_detail("employeeCount", department.employee_count));
        }
        db::department::delete(&state.pool, id).await.map_err(db_err)?;
    }
    // Deleting an absent department is not an error
    Ok(ApiResponse::message("Department deleted"))
}

async fn ensure_parent_exists(state: &AppState, parent_id: i64) -> Result<(), AppError> {
    if db::department::get(&state.pool, parent_id)
        .await
        .map_err(db_err)?
        .is_none()
    {
        return Err(
            AppError::new(ErrorCode::DepartmentParentNotFound).with_detail("parentId", parent_id)
        );
    }
    Ok(())
}

/// Would re-parenting `id` under `new_parent` close a cycle?
///
/// Walks the parent chain from `new_parent`; hitting `id` means the
/// chain would loop back through the department being updated.
fn creates_cycle(parents: &HashMap<i64, Option<i64>>, id: i64, new_parent: i64) -> bool {
    let mut current = Some(new_parent);
    let mut hops = 0;
    while let Some(node) = current {
        if node == id {
            return true;
        }
        // Bounded walk; a corrupt chain longer than the table loops
        hops += 1;
        if hops > parents.len() {
            return true;
        }
        current = parents.get(&node).copied().flatten();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(edges: &[(i64, Option<i64>)]) -> HashMap<i64, Option<i64>> {
        edges.iter().copied().collect()
    }

    #[test]
    fn test_self_parent_is_cycle() {
        let parents = map(&[(1, None)]);
        assert!(creates_cycle(&parents, 1, 1));
    }

    #[test]
    fn test_child_as_parent_is_cycle() {
        // 2 -> 1; re-parenting 1 under 2 loops
        let parents = map(&[(1, None), (2, Some(1))]);
        assert!(creates_cycle(&parents, 1, 2));
    }

    #[test]
    fn test_deep_descendant_is_cycle() {
        // 3 -> 2 -> 1
        let parents = map(&[(1, None), (2, Some(1)), (3, Some(2))]);
        assert!(creates_cycle(&parents, 1, 3));
    }

    #[test]
    fn test_sibling_is_not_cycle() {
        let parents = map(&[(1, None), (2, Some(1)), (3, Some(1))]);
        assert!(!creates_cycle(&parents, 2, 3));
    }

    #[test]
    fn test_reparent_under_root_is_not_cycle() {
        let parents = map(&[(1, None), (2, Some(1)), (3, Some(2))]);
        assert!(!creates_cycle(&parents, 3, 1));
    }
}
