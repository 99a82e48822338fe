// src/handlers/production.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::{error, instrument, warn};
use uuid::Uuid;

use crate::dtos::production::CreateProductionRequest;
use crate::dtos::{DeletedResponse, UpdateQuantityRequest};
use crate::database;
use crate::error::AppError;
use crate::handlers::{conrod::find_conrod, product};
use crate::models::product::{Product, ProductSpec, ProductType};
use crate::models::production::ProductionRecord;
use crate::state::AppState;

// GET /production
#[instrument(skip(state))]
pub async fn list_production(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductionRecord>>, AppError> {
    let records = sqlx::query_as::<_, ProductionRecord>(
        "SELECT id, conrod_id, quantity, date FROM production ORDER BY rowid",
    )
    .fetch_all(&state.db_pool)
    .await
    .map_err(|e| {
        error!(?e, "Failed to fetch production records");
        AppError::db(e)
    })?;

    Ok(Json(records))
}

// POST /production - Consume raw materials, log the run, stock the conrods.
// All writes share one transaction; any failure leaves inventory untouched.
#[instrument(skip_all)]
pub async fn create_production(
    State(AppState { db_pool }): State<AppState>,
    Json(req): Json<CreateProductionRequest>,
) -> Result<(StatusCode, Json<ProductionRecord>), AppError> {
    req.validate().map_err(AppError::validation)?;

    let mut tx = database::begin_write(&db_pool).await?;

    let conrod = find_conrod(&mut tx, &req.conrod_id)
        .await?
        .ok_or_else(|| AppError::not_found("Conrod not found"))?;

    let pin = product::find_by_name(&mut tx, &conrod.pin, ProductType::Pins)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Pin '{}' not found in inventory", conrod.pin)))?;
    let ball_bearing = product::find_by_name(&mut tx, &conrod.ball_bearing, ProductType::BallBearings)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!(
                "Ball bearing '{}' not found in inventory",
                conrod.ball_bearing
            ))
        })?;

    consume(&mut tx, &pin.id, &pin.product_name, req.quantity).await?;
    consume(&mut tx, &ball_bearing.id, &ball_bearing.product_name, req.quantity).await?;

    let record = ProductionRecord {
        id: Uuid::new_v4().to_string(),
        conrod_id: conrod.id.clone(),
        quantity: req.quantity,
        date: req.date.unwrap_or_else(|| Utc::now().date_naive()),
    };

    sqlx::query("INSERT INTO production (id, conrod_id, quantity, date) VALUES (?, ?, ?, ?)")
        .bind(&record.id)
        .bind(&record.conrod_id)
        .bind(record.quantity)
        .bind(record.date)
        .execute(&mut *tx)
        .await?;

    match product::find_by_name(&mut tx, &conrod.name, ProductType::Conrod).await? {
        Some(existing) => {
            product::adjust_quantity(&mut tx, &existing.id, req.quantity).await?;
        }
        None => {
            let finished = Product {
                id: Uuid::new_v4().to_string(),
                product_name: conrod.name.clone(),
                spec: ProductSpec::Conrod(conrod.dimensions),
                quantity: req.quantity,
                date: record.date,
            };
            product::insert_product(&mut tx, &finished).await?;
        }
    }

    tx.commit().await?;

    tracing::info!(id = %record.id, conrod = %conrod.name, "Production recorded");
    Ok((StatusCode::CREATED, Json(record)))
}

// PATCH /production/:id - Set quantity
#[instrument(skip(state, payload))]
pub async fn update_production_quantity(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> Result<Json<ProductionRecord>, AppError> {
    let record = sqlx::query_as::<_, ProductionRecord>(
        "UPDATE production SET quantity = ? WHERE id = ? RETURNING id, conrod_id, quantity, date",
    )
    .bind(payload.quantity)
    .bind(&id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Production record not found"))?;

    Ok(Json(record))
}

// DELETE /production/:id - Removes the record only; consumed materials stay consumed.
#[instrument(skip(state))]
pub async fn delete_production(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    let result = sqlx::query("DELETE FROM production WHERE id = ?")
        .bind(&id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Production record not found"));
    }

    Ok(Json(DeletedResponse { id }))
}

async fn consume(
    conn: &mut SqliteConnection,
    product_id: &str,
    name: &str,
    quantity: i64,
) -> Result<(), AppError> {
    let remaining = product::adjust_quantity(conn, product_id, -quantity).await?;
    if remaining < 0 {
        warn!(product = %name, remaining, "Raw material stock went negative");
    }
    Ok(())
}

/// Adds `delta` to a production record's quantity.
/// Returns `None` when the record does not exist.
pub(crate) async fn adjust_production(
    conn: &mut SqliteConnection,
    id: &str,
    delta: i64,
) -> Result<Option<ProductionRecord>, AppError> {
    let record = sqlx::query_as::<_, ProductionRecord>(
        "UPDATE production SET quantity = quantity + ? WHERE id = ?
         RETURNING id, conrod_id, quantity, date",
    )
    .bind(delta)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(record)
}
