use anyhow::Context;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

// The uniqueness and referential rules live here as real constraints;
// the application-level checks in the handlers are only a friendlier
// fast path in front of them (see error.rs).
const CREATE_EMPLOYEES: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id TEXT    NOT NULL UNIQUE,
    full_name   TEXT    NOT NULL,
    email       TEXT    NOT NULL UNIQUE,
    department  TEXT    NOT NULL,
    created_at  DATETIME NOT NULL
)
"#;

const CREATE_ATTENDANCE: &str = r#"
CREATE TABLE IF NOT EXISTS attendance (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id INTEGER NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
    date        DATE    NOT NULL,
    status      TEXT    NOT NULL CHECK (status IN ('Present', 'Absent')),
    created_at  DATETIME NOT NULL,
    UNIQUE (employee_id, date)
)
"#;

pub async fn init_db(database_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .context("invalid DATABASE_URL")?
        .create_if_missing(true)
        // Required for ON DELETE CASCADE, off by default in SQLite.
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    create_schema(&pool).await?;

    Ok(pool)
}

pub async fn create_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(CREATE_EMPLOYEES).execute(pool).await?;
    sqlx::query(CREATE_ATTENDANCE).execute(pool).await?;
    Ok(())
}
