// src/handlers/conrod.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, instrument};
use uuid::Uuid;

use crate::dtos::conrod::CreateConrodRequest;
use crate::dtos::DeletedResponse;
use crate::database;
use crate::error::{map_unique_violation, AppError};
use crate::models::conrod::{Conrod, ConrodRow};
use crate::state::AppState;

const CONROD_COLUMNS: &str = "id, sr_no, name, dimensions, pin, ball_bearing";

// GET /conrods - List recipes by serial number
#[instrument(skip(state))]
pub async fn list_conrods(State(state): State<AppState>) -> Result<Json<Vec<Conrod>>, AppError> {
    let rows = sqlx::query_as::<_, ConrodRow>(&format!(
        "SELECT {CONROD_COLUMNS} FROM conrods ORDER BY sr_no"
    ))
    .fetch_all(&state.db_pool)
    .await
    .map_err(|e| {
        error!(?e, "Failed to fetch conrods");
        AppError::db(e)
    })?;

    let conrods = rows
        .into_iter()
        .map(Conrod::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(conrods))
}

// POST /conrods - Create recipe with the next serial number
#[instrument(skip_all)]
pub async fn create_conrod(
    State(AppState { db_pool }): State<AppState>,
    Json(payload): Json<CreateConrodRequest>,
) -> Result<(StatusCode, Json<Conrod>), AppError> {
    payload.validate().map_err(AppError::validation)?;

    let mut tx = database::begin_write(&db_pool).await?;

    // Serial numbers are never handed out twice, even after deletes.
    let (sr_no,) = sqlx::query_as::<_, (i64,)>("SELECT COALESCE(MAX(sr_no), 0) + 1 FROM conrods")
        .fetch_one(&mut *tx)
        .await?;

    let conrod = Conrod {
        id: Uuid::new_v4().to_string(),
        sr_no,
        name: payload.name,
        dimensions: payload.dimensions,
        pin: payload.pin,
        ball_bearing: payload.ball_bearing,
    };

    sqlx::query(
        "INSERT INTO conrods (id, sr_no, name, dimensions, pin, ball_bearing)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&conrod.id)
    .bind(conrod.sr_no)
    .bind(&conrod.name)
    .bind(serde_json::to_string(&conrod.dimensions)?)
    .bind(&conrod.pin)
    .bind(&conrod.ball_bearing)
    .execute(&mut *tx)
    .await
    .map_err(|e| map_unique_violation(e, "Serial number already taken, retry"))?;

    tx.commit().await?;

    tracing::info!(id = %conrod.id, sr_no = conrod.sr_no, name = %conrod.name, "Conrod created");
    Ok((StatusCode::CREATED, Json(conrod)))
}

// DELETE /conrods/:id
#[instrument(skip(state))]
pub async fn delete_conrod(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    let result = sqlx::query("DELETE FROM conrods WHERE id = ?")
        .bind(&id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Conrod not found"));
    }

    Ok(Json(DeletedResponse { id }))
}

pub(crate) async fn find_conrod(
    conn: &mut sqlx::SqliteConnection,
    id: &str,
) -> Result<Option<Conrod>, AppError> {
    let row = sqlx::query_as::<_, ConrodRow>(&format!(
        "SELECT {CONROD_COLUMNS} FROM conrods WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(Conrod::try_from).transpose()?)
}
