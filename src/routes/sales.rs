use axum::{Json, extract::State};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{AddSaleRequest, AddSaleResponse, Sale},
    queries::{product_queries, sale_queries},
    services::pricing,
};

pub async fn add_sale(
    State(state): State<AppState>,
    Json(payload): Json<AddSaleRequest>,
) -> Result<Json<AddSaleResponse>> {
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than zero".to_string(),
        ));
    }

    let product = product_queries::find_by_id(&state.db, payload.product_id)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    let total_price = pricing::compute_total(
        product.price,
        product.discount_percentage,
        payload.quantity,
    );

    sale_queries::insert_sale(&state.db, payload.product_id, payload.quantity, total_price)
        .await?;

    Ok(Json(AddSaleResponse { success: true }))
}

pub async fn list_sales(State(state): State<AppState>) -> Result<Json<Vec<Sale>>> {
    let sales = sale_queries::get_all(&state.db).await?;

    Ok(Json(sales))
}
