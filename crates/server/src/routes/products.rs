use axum::extract::{Path, State};
use axum::http::StatusCode;

use models::{NewProduct, Product, ProductPatch};

use crate::errors::ApiError;
use crate::extract::Json;
use crate::routes::parse_id;
use crate::state::AppState;

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.products.list().await)
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<NewProduct>,
) -> (StatusCode, Json<Product>) {
    let product = state.products.create(input).await;
    (StatusCode::CREATED, Json(product))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id::<Product>(&id)?;
    Ok(Json(state.products.get(id).await?))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id::<Product>(&id)?;
    Ok(Json(state.products.update(id, patch).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id::<Product>(&id)?;
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
