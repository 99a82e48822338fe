// src/database.rs
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Transaction;

const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS products (
        id TEXT PRIMARY KEY,
        product_name TEXT NOT NULL,
        product_type TEXT NOT NULL,
        dimensions TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        date TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS conrods (
        id TEXT PRIMARY KEY,
        sr_no INTEGER NOT NULL,
        name TEXT NOT NULL,
        dimensions TEXT NOT NULL,
        pin TEXT NOT NULL,
        ball_bearing TEXT NOT NULL
    )"#,
    "CREATE UNIQUE INDEX IF NOT EXISTS conrods_sr_no_key ON conrods (sr_no)",
    r#"CREATE TABLE IF NOT EXISTS production (
        id TEXT PRIMARY KEY,
        conrod_id TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        date TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS bills (
        id TEXT PRIMARY KEY,
        invoice_no TEXT NOT NULL,
        product_id TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        amount REAL NOT NULL
    )"#,
];

/// Opens the pool and makes sure every table exists.
///
/// In-memory databases live and die with their connection, so they get a
/// single connection that is never recycled.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(10));

    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?
    };

    init_schema(&pool).await?;
    Ok(pool)
}

/// Opens a transaction that takes the write lock up front.
///
/// Workflows read before they write; a deferred `BEGIN` would fail with
/// SQLITE_BUSY on the upgrade when another writer got there first. With
/// `BEGIN IMMEDIATE` writers queue on the busy timeout instead.
pub async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("Schema ready");
    Ok(())
}
