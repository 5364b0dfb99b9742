//! Dashboard aggregate queries
//!
//! All aggregation is delegated to the database engine; the handlers
//! only turn rollup rows into percentages.

use shared::models::dashboard::LeaveDistribution;
use sqlx::PgPool;

/// Per-department rollup for the current month
#[derive(Debug, sqlx::FromRow)]
pub struct DepartmentRollup {
    pub name: String,
    /// Active headcount
    pub headcount: i64,
    /// Approved leave days starting this month
    pub leave_days: i64,
}

/// Active employee headcount
pub async fn active_employee_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE active")
        .fetch_one(pool)
        .await
}

/// Applications starting in the current month
pub async fn monthly_leave_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM leave_applications
        WHERE date_trunc('month', start_date) = date_trunc('month', CURRENT_DATE)
        "#,
    )
    .fetch_one(pool)
    .await
}

/// Applications still pending review
pub async fn pending_request_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM leave_applications WHERE status = 'pending'")
        .fetch_one(pool)
        .await
}

/// Active headcount and approved leave days per department, this month
pub async fn department_rollup(pool: &PgPool) -> Result<Vec<DepartmentRollup>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT e.department AS name,
               COUNT(DISTINCT e.id) AS headcount,
               COALESCE(SUM(la.days), 0)::BIGINT AS leave_days
        FROM employees e
        LEFT JOIN leave_applications la
            ON la.employee_id = e.employee_id
            AND la.status = 'approved'
            AND date_trunc('month', la.start_date) = date_trunc('month', CURRENT_DATE)
        WHERE e.active
        GROUP BY e.department
        ORDER BY e.department
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Leave-type distribution for the current month
pub async fn leave_distribution(pool: &PgPool) -> Result<Vec<LeaveDistribution>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT lt.name AS name, COALESCE(SUM(la.days), 0)::BIGINT AS value
        FROM leave_applications la
        JOIN leave_types lt ON lt.id = la.leave_type_id
        WHERE date_trunc('month', la.start_date) = date_trunc('month', CURRENT_DATE)
        GROUP BY lt.name
        ORDER BY value DESC, lt.name
        "#,
    )
    .fetch_all(pool)
    .await
}
