use crate::error::ApiError;
use crate::model::employee::{CreateEmployee, Employee};
use actix_web::{HttpResponse, web};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};
use validator::Validate;

/// Create Employee
///
/// Uniqueness is checked against current persisted state: business key first,
/// then email, so the caller learns which field collided.
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation failure or duplicate employee_id/email", body = Object, example = json!({
            "detail": "Employee with ID 'EMP-001' already exists"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let existing_id = sqlx::query_scalar::<_, i64>("SELECT id FROM employees WHERE employee_id = ?")
        .bind(&payload.employee_id)
        .fetch_optional(pool.get_ref())
        .await?;
    if existing_id.is_some() {
        return Err(ApiError::Conflict(format!(
            "Employee with ID '{}' already exists",
            payload.employee_id
        )));
    }

    let existing_email = sqlx::query_scalar::<_, i64>("SELECT id FROM employees WHERE email = ?")
        .bind(&payload.email)
        .fetch_optional(pool.get_ref())
        .await?;
    if existing_email.is_some() {
        return Err(ApiError::Conflict(format!(
            "Employee with email '{}' already exists",
            payload.email
        )));
    }

    let created_at = Utc::now().naive_utc();
    let result = sqlx::query(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&payload.employee_id)
    .bind(&payload.full_name)
    .bind(&payload.email)
    .bind(&payload.department)
    .bind(created_at)
    .execute(pool.get_ref())
    .await?;

    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?")
        .bind(result.last_insert_rowid())
        .fetch_one(pool.get_ref())
        .await?;

    info!(id = employee.id, employee_id = %employee.employee_id, "Employee created");

    Ok(HttpResponse::Created().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employee records", body = [Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees")
        .fetch_all(pool.get_ref())
        .await?;

    debug!(count = employees.len(), "Fetched employees");

    Ok(HttpResponse::Ok().json(employees))
}

/// Delete Employee
///
/// Cascades to the employee's attendance rows (ON DELETE CASCADE).
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id", Path, description = "Employee surrogate ID")
    ),
    responses(
        (status = 204, description = "Employee and its attendance deleted"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 42 not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!(
            "Employee with ID {} not found",
            id
        )));
    }

    info!(id, "Employee deleted");

    Ok(HttpResponse::NoContent().finish())
}

/// List Departments
///
/// Distinct department values presently in use.
#[utoipa::path(
    get,
    path = "/api/employees/departments",
    responses(
        (status = 200, description = "Distinct department names", body = [String])
    ),
    tag = "Employee"
)]
pub async fn list_departments(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let departments = sqlx::query_scalar::<_, String>("SELECT DISTINCT department FROM employees")
        .fetch_all(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(departments))
}
