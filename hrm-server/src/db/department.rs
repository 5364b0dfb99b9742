//! Department database operations

use shared::models::department::{Department, DepartmentCreate, DepartmentUpdate};
use sqlx::PgPool;

/// Joined select used by every department read
const SELECT_JOINED: &str = r#"
    SELECT d.id, d.name, d.lead_name, d.parent_id, d.employee_count,
           d.description, parent.name AS parent_name
    FROM departments d
    LEFT JOIN departments parent ON parent.id = d.parent_id
"#;

/// List all departments, top-level first, then by id
pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} ORDER BY (d.parent_id IS NULL) DESC, d.id");
    sqlx::query_as(&sql).fetch_all(pool).await
}

/// Read one department by primary key
pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Department>, sqlx::Error> {
    let sql = format!("{SELECT_JOINED} WHERE d.id = $1");
    sqlx::query_as(&sql).bind(id).fetch_optional(pool).await
}

/// Insert a department and re-read it by primary key
pub async fn create(pool: &PgPool, data: &DepartmentCreate) -> Result<Department, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO departments (name, lead_name, parent_id, description)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&data.name)
    .bind(&data.lead_name)
    .bind(data.parent_id)
    .bind(data.description.as_deref().unwrap_or(""))
    .fetch_one(&mut *tx)
    .await?;

    let sql = format!("{SELECT_JOINED} WHERE d.id = $1");
    let department: Department = sqlx::query_as(&sql).bind(id).fetch_one(&mut *tx).await?;

    tx.commit().await?;
    Ok(department)
}

/// Full replace by id; `None` when the id does not exist
pub async fn update(
    pool: &PgPool,
    id: i64,
    data: &DepartmentUpdate,
) -> Result<Option<Department>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query(
        r#"
        UPDATE departments
        SET name = $1, lead_name = $2, parent_id = $3, description = $4
        WHERE id = $5
        "#,
    )
    .bind(&data.name)
    .bind(&data.lead_name)
    .bind(data.parent_id)
    .bind(data.description.as_deref().unwrap_or(""))
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if rows == 0 {
        return Ok(None);
    }

    let sql = format!("{SELECT_JOINED} WHERE d.id = $1");
    let department: Department = sqlx::query_as(&sql).bind(id).fetch_one(&mut *tx).await?;

    tx.commit().await?;
    Ok(Some(department))
}

/// Delete by id; tolerant of missing rows
pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM departments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(rows)
}

/// Number of departments referencing this one as parent
pub async fn child_count(pool: &PgPool, id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM departments WHERE parent_id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Id-indexed parent arena, used for acyclicity validation
pub async fn parent_map(pool: &PgPool) -> Result<Vec<(i64, Option<i64>)>, sqlx::Error> {
    sqlx::query_as("SELECT id, parent_id FROM departments")
        .fetch_all(pool)
        .await
}
