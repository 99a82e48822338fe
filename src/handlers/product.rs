// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::{error, instrument};
use uuid::Uuid;

use crate::dtos::product::CreateProductRequest;
use crate::dtos::{DeletedResponse, UpdateQuantityRequest};
use crate::error::AppError;
use crate::models::product::{Product, ProductRow, ProductType};
use crate::state::AppState;

const PRODUCT_COLUMNS: &str = "id, product_name, product_type, dimensions, quantity, date";

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    match sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY rowid"
    ))
    .fetch_all(&state.db_pool)
    .await
    {
        Ok(rows) => {
            let products = rows
                .into_iter()
                .map(Product::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Json(products))
        }
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e.into())
        }
    }
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    payload.validate().map_err(AppError::validation)?;

    let product = Product {
        id: Uuid::new_v4().to_string(),
        product_name: payload.product_name,
        spec: payload.spec,
        quantity: payload.quantity,
        date: payload.date.unwrap_or_else(|| Utc::now().date_naive()),
    };

    let mut conn = state.db_pool.acquire().await?;
    insert_product(&mut *conn, &product).await?;

    tracing::info!(id = %product.id, name = %product.product_name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

// PATCH /products/:id - Set quantity
#[instrument(skip(state, payload))]
pub async fn update_product_quantity(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> Result<Json<Product>, AppError> {
    let row = sqlx::query_as::<_, ProductRow>(&format!(
        "UPDATE products SET quantity = ? WHERE id = ? RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(payload.quantity)
    .bind(&id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(Product::try_from(row)?))
}

// DELETE /products/:id - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(&id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Product not found"));
    }

    Ok(Json(DeletedResponse { id }))
}

pub(crate) async fn insert_product(conn: &mut SqliteConnection, product: &Product) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO products (id, product_name, product_type, dimensions, quantity, date)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&product.id)
    .bind(&product.product_name)
    .bind(product.product_type())
    .bind(product.spec.dimensions_json()?)
    .bind(product.quantity)
    .bind(product.date)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// First product (in insertion order) with the given name and type.
pub(crate) async fn find_by_name(
    conn: &mut SqliteConnection,
    name: &str,
    product_type: ProductType,
) -> Result<Option<ProductRow>, AppError> {
    let row = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products
         WHERE product_name = ? AND product_type = ?
         ORDER BY rowid LIMIT 1"
    ))
    .bind(name)
    .bind(product_type)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

/// Adds `delta` to a product's quantity and returns the new value.
pub(crate) async fn adjust_quantity(
    conn: &mut SqliteConnection,
    id: &str,
    delta: i64,
) -> Result<i64, AppError> {
    let (quantity,) = sqlx::query_as::<_, (i64,)>(
        "UPDATE products SET quantity = quantity + ? WHERE id = ? RETURNING quantity",
    )
    .bind(delta)
    .bind(id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(quantity)
}
