// src/handlers/bill.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, instrument, warn};
use uuid::Uuid;

use crate::dtos::bill::{CreateBillRequest, DeleteBillResponse};
use crate::database;
use crate::error::AppError;
use crate::handlers::production::adjust_production;
use crate::models::bill::Bill;
use crate::state::AppState;

// GET /bills
#[instrument(skip(state))]
pub async fn list_bills(State(state): State<AppState>) -> Result<Json<Vec<Bill>>, AppError> {
    let bills = sqlx::query_as::<_, Bill>(
        "SELECT id, invoice_no, product_id, quantity, amount FROM bills ORDER BY rowid",
    )
    .fetch_all(&state.db_pool)
    .await
    .map_err(|e| {
        error!(?e, "Failed to fetch bills");
        AppError::db(e)
    })?;

    Ok(Json(bills))
}

// POST /bills - Record the bill and draw its quantity from the production record.
// There is no sufficiency check: production quantity may go negative.
#[instrument(skip_all)]
pub async fn create_bill(
    State(AppState { db_pool }): State<AppState>,
    Json(req): Json<CreateBillRequest>,
) -> Result<(StatusCode, Json<Bill>), AppError> {
    req.validate().map_err(AppError::validation)?;

    let bill = Bill {
        id: Uuid::new_v4().to_string(),
        invoice_no: req.invoice_no,
        product_id: req.product_id,
        quantity: req.quantity,
        amount: req.amount,
    };

    let mut tx = database::begin_write(&db_pool).await?;

    sqlx::query(
        "INSERT INTO bills (id, invoice_no, product_id, quantity, amount) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&bill.id)
    .bind(&bill.invoice_no)
    .bind(&bill.product_id)
    .bind(bill.quantity)
    .bind(bill.amount)
    .execute(&mut *tx)
    .await?;

    match adjust_production(&mut tx, &bill.product_id, -bill.quantity).await? {
        Some(record) if record.quantity < 0 => {
            warn!(production_id = %record.id, remaining = record.quantity, "Billed more than was produced");
        }
        Some(_) => {}
        None => {
            warn!(production_id = %bill.product_id, "Bill references a missing production record");
        }
    }

    tx.commit().await?;

    tracing::info!(id = %bill.id, invoice = %bill.invoice_no, "Bill created");
    Ok((StatusCode::CREATED, Json(bill)))
}

// DELETE /bills/:id - Remove the bill and return its quantity to production.
#[instrument(skip(state))]
pub async fn delete_bill(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteBillResponse>, AppError> {
    let mut tx = database::begin_write(&state.db_pool).await?;

    let bill = sqlx::query_as::<_, Bill>(
        "DELETE FROM bills WHERE id = ? RETURNING id, invoice_no, product_id, quantity, amount",
    )
    .bind(&id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| AppError::not_found("Bill not found"))?;

    let updated = adjust_production(&mut tx, &bill.product_id, bill.quantity).await?;
    if updated.is_none() {
        warn!(production_id = %bill.product_id, "Production record gone, nothing restored");
    }

    tx.commit().await?;

    Ok(Json(DeleteBillResponse {
        deleted_bill_id: bill.id,
        updated_production_record: updated,
    }))
}
