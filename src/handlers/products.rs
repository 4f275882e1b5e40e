use axum::{
    extract::State,
    response::Json,
};
use serde::Deserialize;

use super::table_page;
use crate::{
    error::AppResult,
    extract::AppQuery,
    models::Product,
    state::AppState,
    table::{Page, TableQuery},
};

#[derive(Deserialize)]
pub struct StorefrontFilter {
    category: Option<String>,
}

// Seller dashboard: every product whatever its status
pub async fn products_list(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TableQuery>,
) -> AppResult<Json<Page<Product>>> {
    let page = table_page(&state.catalog.products, query, state.config.page_size)?;
    Ok(Json(page))
}

// Storefront grid: listed products only, optionally narrowed to a category
pub async fn storefront_products(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<StorefrontFilter>,
    AppQuery(query): AppQuery<TableQuery>,
) -> AppResult<Json<Page<Product>>> {
    let category = filter.category.filter(|c| !c.trim().is_empty());
    let listed: Vec<Product> = state
        .catalog
        .products
        .iter()
        .filter(|p| p.is_listed())
        .filter(|p| match &category {
            Some(c) => p.category.eq_ignore_ascii_case(c.trim()),
            None => true,
        })
        .cloned()
        .collect();

    let page = table_page(&listed, query, state.config.page_size)?;
    Ok(Json(page))
}

// Category chips above the storefront grid
pub async fn storefront_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    let categories = state
        .catalog
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(categories)
}
