use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Stored and transported as the exact strings "Present" / "Absent"; anything
/// else fails deserialization before business logic runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type,
    ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "2024-01-10", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Present")]
    pub status: AttendanceStatus,
}

/// Response view: an attendance row enriched with the employee's display name.
/// The name is not stored on the attendance table, it is joined at read time.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "John Doe")]
    pub employee_name: String,
    #[schema(example = "2024-01-10", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[schema(example = "2024-01-10T09:00:00", value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
}

impl AttendanceRecord {
    pub fn from_attendance(attendance: Attendance, employee_name: String) -> Self {
        Self {
            id: attendance.id,
            employee_id: attendance.employee_id,
            employee_name,
            date: attendance.date,
            status: attendance.status,
            created_at: attendance.created_at,
        }
    }
}
