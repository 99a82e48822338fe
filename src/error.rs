// src/error.rs
use axum::{response::{IntoResponse, Response}, Json};
use http::StatusCode;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(sqlx::Error),
    NotFound(String),
    ValidationError(String),
    Conflict(String),
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn db(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DatabaseError(e) => write!(f, "database error: {e}"),
            AppError::NotFound(msg)
            | AppError::ValidationError(msg)
            | AppError::Conflict(msg)
            | AppError::Internal(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::DatabaseError(e) => {
                tracing::error!(error = %e, "Database error");
                "Database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                msg.clone()
            }
            AppError::NotFound(msg) | AppError::ValidationError(msg) | AppError::Conflict(msg) => msg.clone(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("Stored dimensions are unreadable: {err}"))
    }
}

/// Maps a unique-constraint violation to a 409, everything else passes through.
pub fn map_unique_violation(err: sqlx::Error, message: &str) -> AppError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::conflict(message),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_keeps_message() {
        let (status, body) = body_json(AppError::not_found("Production record not found")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Production record not found");
    }

    #[tokio::test]
    async fn database_errors_are_generic() {
        let (status, body) = body_json(AppError::db(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Database error occurred");
    }

    #[test]
    fn validation_and_conflict_statuses() {
        assert_eq!(AppError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(AppError::internal("x").status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_unique_errors_pass_through() {
        let err = map_unique_violation(sqlx::Error::RowNotFound, "dup");
        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn duplicate_serial_number_is_a_conflict() {
        let pool = crate::database::create_pool("sqlite::memory:").await.unwrap();
        let insert = "INSERT INTO conrods (id, sr_no, name, dimensions, pin, ball_bearing) \
                      VALUES (?, 1, 'C1', '{}', 'PinA', 'BBA')";
        sqlx::query(insert).bind("a").execute(&pool).await.unwrap();
        let err = sqlx::query(insert).bind("b").execute(&pool).await.unwrap_err();

        let mapped = map_unique_violation(err, "Serial number already taken, retry");
        assert_eq!(mapped.status(), StatusCode::CONFLICT);
        assert!(matches!(mapped, AppError::Conflict(ref msg) if msg == "Serial number already taken, retry"));
    }
}
