//! Employee database operations

use chrono::NaiveDate;
use shared::models::employee::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::PgPool;

/// List all employees, ordered by id
pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Insert an employee; created active
pub async fn create(pool: &PgPool, data: &EmployeeCreate) -> Result<Employee, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO employees (
            name, employee_id, department, position, email,
            phone, join_date, address, notes
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.employee_id)
    .bind(&data.department)
    .bind(&data.position)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(data.join_date)
    .bind(&data.address)
    .bind(&data.notes)
    .fetch_one(pool)
    .await
}

/// Full replace of mutable fields by id; `None` when the id does not exist
pub async fn update(
    pool: &PgPool,
    id: i64,
    data: &EmployeeUpdate,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE employees
        SET name = $1, employee_id = $2, department = $3, position = $4,
            email = $5, phone = $6, join_date = $7, address = $8, notes = $9
        WHERE id = $10
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.employee_id)
    .bind(&data.department)
    .bind(&data.position)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(data.join_date)
    .bind(&data.address)
    .bind(&data.notes)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Soft-delete transition: active=false plus termination fields
pub async fn terminate(
    pool: &PgPool,
    id: i64,
    termination_date: NaiveDate,
    termination_reason: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE employees
        SET active = FALSE, termination_date = $1, termination_reason = $2
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(termination_date)
    .bind(termination_reason)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Hard delete by id; tolerant of missing rows
pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(rows)
}
