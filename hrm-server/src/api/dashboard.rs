//! Dashboard endpoints
//!
//! Aggregation happens in SQL; this module only turns the rollup rows
//! into percentages.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Datelike, Utc};
use shared::models::dashboard::{DashboardStats, DepartmentAttendance, LeaveDistribution};
use shared::util::days_in_month;

use super::{ApiResult, db_err};
use crate::db;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard/stats", get(stats))
        .route("/api/dashboard/attendance", get(attendance))
        .route("/api/dashboard/leaves", get(leaves))
}

async fn stats(State(state): State<AppState>) -> ApiResult<DashboardStats> {
    let total_employees = db::dashboard::active_employee_count(&state.pool)
        .await
        .map_err(db_err)?;
    let monthly_leaves = db::dashboard::monthly_leave_count(&state.pool)
        .await
        .map_err(db_err)?;
    let pending_requests = db::dashboard::pending_request_count(&state.pool)
        .await
        .map_err(db_err)?;

    let rollup = db::dashboard::department_rollup(&state.pool)
        .await
        .map_err(db_err)?;
    let days = current_month_days();
    let rates: Vec<f64> = rollup
        .iter()
        .map(|r| attendance_rate(r.headcount, r.leave_days, days))
        .collect();
    let average_attendance = if rates.is_empty() {
        100.0
    } else {
        rates.iter().sum::<f64>() / rates.len() as f64
    };

    Ok(Json(DashboardStats {
        total_employees,
        monthly_leaves,
        average_attendance,
        pending_requests,
    }))
}

async fn attendance(State(state): State<AppState>) -> ApiResult<Vec<DepartmentAttendance>> {
    let rollup = db::dashboard::department_rollup(&state.pool)
        .await
        .map_err(db_err)?;
    let days = current_month_days();
    let departments = rollup
        .into_iter()
        .map(|r| DepartmentAttendance {
            attendance: attendance_rate(r.headcount, r.leave_days, days),
            name: r.name,
            leave_days: r.leave_days,
        })
        .collect();
    Ok(Json(departments))
}

async fn leaves(State(state): State<AppState>) -> ApiResult<Vec<LeaveDistribution>> {
    let distribution = db::dashboard::leave_distribution(&state.pool)
        .await
        .map_err(db_err)?;
    Ok(Json(distribution))
}

fn current_month_days() -> u32 {
    let today = Utc::now().date_naive();
    days_in_month(today.year(), today.month())
}

/// Attendance rate in percent for one department this month.
///
/// The available workdays are headcount times the calendar days of the
/// month; the rate is clamped to 0..100 and an empty department reads
/// as fully present.
fn attendance_rate(headcount: i64, leave_days: i64, month_days: u32) -> f64 {
    if headcount <= 0 {
        return 100.0;
    }
    let capacity = (headcount * i64::from(month_days)) as f64;
    let rate = 100.0 * (1.0 - leave_days as f64 / capacity);
    rate.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_department_is_fully_present() {
        assert_eq!(attendance_rate(0, 0, 30), 100.0);
    }

    #[test]
    fn test_no_leave_is_fully_present() {
        assert_eq!(attendance_rate(12, 0, 30), 100.0);
    }

    #[test]
    fn test_rate_scales_with_leave_days() {
        // 10 people, 30-day month, 30 leave days taken
        let rate = attendance_rate(10, 30, 30);
        assert!((rate - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_rate_clamped_at_zero() {
        assert_eq!(attendance_rate(1, 1000, 30), 0.0);
    }
}
