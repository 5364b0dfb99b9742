//! Leave type / application / balance database operations

use shared::models::leave_application::{
    LeaveApplication, LeaveApplicationCreate, LeaveStatus,
};
use shared::models::leave_balance::{LeaveBalance, LeaveBalanceUpdate};
use shared::models::leave_type::{LeaveType, LeaveTypeCreate};
use sqlx::PgPool;

// ── Leave types ──

pub async fn list_types(pool: &PgPool) -> Result<Vec<LeaveType>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM leave_types ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn create_type(pool: &PgPool, data: &LeaveTypeCreate) -> Result<LeaveType, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO leave_types (
            name, code, unit, need_proof, affect_attendance,
            is_paid, max_days, advance_apply, can_split
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.code)
    .bind(&data.unit)
    .bind(data.need_proof)
    .bind(data.affect_attendance)
    .bind(data.is_paid)
    .bind(&data.max_days)
    .bind(&data.advance_apply)
    .bind(data.can_split)
    .fetch_one(pool)
    .await
}

// ── Leave applications ──

/// Joined select used by every application read
const SELECT_APPLICATION: &str = r#"
    SELECT la.id, la.employee_id, e.name AS employee, lt.name AS leave_type,
           la.start_date, la.end_date, la.start_time, la.end_time,
           la.days, la.reason, la.deputy, la.status, la.approver
    FROM leave_applications la
    JOIN employees e ON e.employee_id = la.employee_id
    JOIN leave_types lt ON lt.id = la.leave_type_id
"#;

/// List all applications joined with employee and leave-type names
pub async fn list_applications(pool: &PgPool) -> Result<Vec<LeaveApplication>, sqlx::Error> {
    let sql = format!("{SELECT_APPLICATION} ORDER BY la.id");
    sqlx::query_as(&sql).fetch_all(pool).await
}

/// Insert an application (status pending) and re-read the joined row
pub async fn create_application(
    pool: &PgPool,
    data: &LeaveApplicationCreate,
    days: i64,
) -> Result<LeaveApplication, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO leave_applications (
            employee_id, leave_type_id, start_date, end_date,
            start_time, end_time, days, reason, deputy
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id
        "#,
    )
    .bind(&data.employee_id)
    .bind(data.leave_type_id)
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(&data.start_time)
    .bind(&data.end_time)
    .bind(days)
    .bind(&data.reason)
    .bind(&data.deputy)
    .fetch_one(&mut *tx)
    .await?;

    let sql = format!("{SELECT_APPLICATION} WHERE la.id = $1");
    let application: LeaveApplication =
        sqlx::query_as(&sql).bind(id).fetch_one(&mut *tx).await?;

    tx.commit().await?;
    Ok(application)
}

/// Outcome of a guarded status transition
pub enum StatusTransition {
    /// Transitioned; joined row after the update
    Updated(Box<LeaveApplication>),
    /// No row with this id
    NotFound,
    /// Row exists but is not pending
    NotPending,
}

/// Approve/reject a pending application
///
/// The `status = 'pending'` guard makes the transition one-way; a
/// second call reports [`StatusTransition::NotPending`].
pub async fn update_status(
    pool: &PgPool,
    id: i64,
    status: LeaveStatus,
    approver: &str,
) -> Result<StatusTransition, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query(
        r#"
        UPDATE leave_applications
        SET status = $1, approver = $2
        WHERE id = $3 AND status = 'pending'
        "#,
    )
    .bind(status)
    .bind(approver)
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if rows == 0 {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM leave_applications WHERE id = $1)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        return Ok(if exists {
            StatusTransition::NotPending
        } else {
            StatusTransition::NotFound
        });
    }

    let sql = format!("{SELECT_APPLICATION} WHERE la.id = $1");
    let application: LeaveApplication =
        sqlx::query_as(&sql).bind(id).fetch_one(&mut *tx).await?;

    tx.commit().await?;
    Ok(StatusTransition::Updated(Box::new(application)))
}

// ── Leave balances ──

/// Joined select used by every balance read
const SELECT_BALANCE: &str = r#"
    SELECT b.id, b.employee_id, e.name AS employee,
           b.annual_leave, b.annual_leave_used,
           b.sick_leave, b.sick_leave_used,
           b.compensatory_leave, b.compensatory_leave_used
    FROM leave_balances b
    JOIN employees e ON e.employee_id = b.employee_id
"#;

/// List all balances joined with employee names
pub async fn list_balances(pool: &PgPool) -> Result<Vec<LeaveBalance>, sqlx::Error> {
    let sql = format!("{SELECT_BALANCE} ORDER BY b.id");
    sqlx::query_as(&sql).fetch_all(pool).await
}

/// Full replace of the six counters for one employee (business key);
/// `None` when no balance row exists for the employee
pub async fn update_balance(
    pool: &PgPool,
    employee_id: &str,
    data: &LeaveBalanceUpdate,
) -> Result<Option<LeaveBalance>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query(
        r#"
        UPDATE leave_balances
        SET annual_leave = $1, annual_leave_used = $2,
            sick_leave = $3, sick_leave_used = $4,
            compensatory_leave = $5, compensatory_leave_used = $6
        WHERE employee_id = $7
        "#,
    )
    .bind(data.annual_leave)
    .bind(data.annual_leave_used)
    .bind(data.sick_leave)
    .bind(data.sick_leave_used)
    .bind(data.compensatory_leave)
    .bind(data.compensatory_leave_used)
    .bind(employee_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if rows == 0 {
        return Ok(None);
    }

    let sql = format!("{SELECT_BALANCE} WHERE b.employee_id = $1");
    let balance: LeaveBalance = sqlx::query_as(&sql)
        .bind(employee_id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(Some(balance))
}
