use crate::error::ApiError;
use crate::model::attendance::{Attendance, AttendanceRecord, MarkAttendance};
use crate::model::employee::Employee;
use actix_web::{HttpResponse, web};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    pub date: Option<NaiveDate>,
}

/// Mark Attendance
///
/// One mark per employee per calendar date. There is no update-in-place:
/// marking the same day twice is always a conflict, never an overwrite.
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance marked", body = AttendanceRecord),
        (status = 400, description = "Already marked for that date", body = Object, example = json!({
            "detail": "Attendance already marked for employee John Doe on 2024-01-10"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 42 not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?")
        .bind(payload.employee_id)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Employee with ID {} not found", payload.employee_id))
        })?;

    let existing = sqlx::query_as::<_, Attendance>(
        "SELECT * FROM attendance WHERE employee_id = ? AND date = ?",
    )
    .bind(payload.employee_id)
    .bind(payload.date)
    .fetch_optional(pool.get_ref())
    .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict(format!(
            "Attendance already marked for employee {} on {}",
            employee.full_name, payload.date
        )));
    }

    let created_at = Utc::now().naive_utc();
    let result = sqlx::query(
        r#"
        INSERT INTO attendance (employee_id, date, status, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(payload.employee_id)
    .bind(payload.date)
    .bind(payload.status)
    .bind(created_at)
    .execute(pool.get_ref())
    .await?;

    info!(
        employee_id = payload.employee_id,
        date = %payload.date,
        status = %payload.status,
        "Attendance marked"
    );

    let record = AttendanceRecord {
        id: result.last_insert_rowid(),
        employee_id: payload.employee_id,
        employee_name: employee.full_name,
        date: payload.date,
        status: payload.status,
        created_at,
    };

    Ok(HttpResponse::Created().json(record))
}

/// Get Employee Attendance
///
/// All rows for one employee, most recent date first.
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee surrogate ID")
    ),
    responses(
        (status = 200, description = "Attendance history, date descending", body = [AttendanceRecord]),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 42 not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn get_employee_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?")
        .bind(employee_id)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Employee with ID {} not found", employee_id)))?;

    let attendances = sqlx::query_as::<_, Attendance>(
        "SELECT * FROM attendance WHERE employee_id = ? ORDER BY date DESC",
    )
    .bind(employee_id)
    .fetch_all(pool.get_ref())
    .await?;

    let records: Vec<AttendanceRecord> = attendances
        .into_iter()
        .map(|att| AttendanceRecord::from_attendance(att, employee.full_name.clone()))
        .collect();

    Ok(HttpResponse::Ok().json(records))
}

/// Get All Attendance
///
/// Cross-employee report: attendance joined to employees for the display name,
/// optionally restricted to one exact date.
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(
        ("date", Query, description = "Exact date filter (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Joined attendance rows, date descending", body = [AttendanceRecord])
    ),
    tag = "Attendance"
)]
pub async fn get_all_attendance(
    pool: web::Data<SqlitePool>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, ApiError> {
    const BASE_SQL: &str = "SELECT a.id, a.employee_id, e.full_name AS employee_name, \
                            a.date, a.status, a.created_at \
                            FROM attendance a \
                            JOIN employees e ON a.employee_id = e.id";

    debug!(date = ?query.date, "Fetching attendance report");

    let records = match query.date {
        Some(date) => {
            let sql = format!("{} WHERE a.date = ? ORDER BY a.date DESC", BASE_SQL);
            sqlx::query_as::<_, AttendanceRecord>(&sql)
                .bind(date)
                .fetch_all(pool.get_ref())
                .await?
        }
        None => {
            let sql = format!("{} ORDER BY a.date DESC", BASE_SQL);
            sqlx::query_as::<_, AttendanceRecord>(&sql)
                .fetch_all(pool.get_ref())
                .await?
        }
    };

    Ok(HttpResponse::Ok().json(records))
}
