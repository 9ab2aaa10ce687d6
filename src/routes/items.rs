use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{BulkInsertResponse, Product, ProductDetailResponse, ProductInput, ProductQuery},
    queries::product_queries,
};

pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>> {
    let keyword = params.q.unwrap_or_default();
    let products = product_queries::search(&state.db, &keyword).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductDetailResponse>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    let images = product_queries::find_images_by_product_id(&state.db, id).await?;

    Ok(Json(ProductDetailResponse { product, images }))
}

pub async fn bulk_insert_products(
    State(state): State<AppState>,
    Json(payload): Json<Vec<ProductInput>>,
) -> Result<Json<BulkInsertResponse>> {
    if payload.is_empty() {
        return Err(AppError::BadRequest("Product batch is empty".to_string()));
    }

    for product in &payload {
        product.validate().map_err(AppError::BadRequest)?;
    }

    let product_ids = product_queries::bulk_insert(&state.db, &payload).await?;

    tracing::info!("Bulk-inserted {} products", product_ids.len());

    Ok(Json(BulkInsertResponse {
        success: true,
        product_ids,
    }))
}
