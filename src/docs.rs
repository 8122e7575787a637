use crate::model::attendance::{AttendanceRecord, AttendanceStatus, MarkAttendance};
use crate::model::employee::{CreateEmployee, Employee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

Lightweight employee and attendance record keeping.

- **Employee Management**: create, list and delete employees; list departments in use
- **Attendance Management**: one mark per employee per day, per-employee history, daily report

Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::delete_employee,
        crate::api::employee::list_departments,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::get_employee_attendance,
        crate::api::attendance::get_all_attendance
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            MarkAttendance,
            AttendanceRecord,
            AttendanceStatus
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;
