use axum::{extract::State, response::Json};

use crate::{
    error::{AppError, AppResult},
    extract::AppJson,
    models::{cart, CartLine, CartQuoteRequest, CartSummary},
    state::AppState,
};

// Prices a storefront cart or a POS ticket against the catalog
pub async fn quote(
    State(state): State<AppState>,
    AppJson(request): AppJson<CartQuoteRequest>,
) -> AppResult<Json<CartSummary>> {
    let mut lines = Vec::with_capacity(request.lines.len());
    for item in request.lines {
        if item.quantity == 0 {
            return Err(AppError::InvalidInput(format!(
                "quantity for {} must be at least 1",
                item.sku
            )));
        }
        let product = state
            .catalog
            .product(&item.sku)
            .ok_or_else(|| AppError::ProductNotFound(item.sku.clone()))?;
        if !product.is_listed() {
            return Err(AppError::InvalidInput(format!("{} is not for sale", product.sku)));
        }
        lines.push(CartLine::new(&product.sku, &product.name, product.price, item.quantity));
    }

    let summary = cart::quote(lines, request.discount_percent, &state.config.pricing)?;
    log::debug!("quoted {} items, total {}", summary.item_count, summary.total);
    Ok(Json(summary))
}
