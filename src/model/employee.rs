use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "EMP-001",
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "created_at": "2024-01-01T09:00:00"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    /// Business key, unique and immutable once assigned.
    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    /// Free text, not a closed set; distinct values are queried live.
    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "2024-01-01T09:00:00", value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[validate(length(min = 1, max = 50, message = "employee_id must be 1-50 characters"))]
    #[schema(example = "EMP-001", value_type = String)]
    pub employee_id: String,

    #[validate(length(min = 1, max = 200, message = "full_name must be 1-200 characters"))]
    #[schema(example = "John Doe", value_type = String)]
    pub full_name: String,

    #[validate(email(message = "email must be a valid address"))]
    #[schema(example = "john.doe@company.com", format = "email", value_type = String)]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "department must be 1-100 characters"))]
    #[schema(example = "Engineering", value_type = String)]
    pub department: String,
}
