use axum::{
    extract::State,
    response::Json,
};

use super::table_page;
use crate::{error::AppResult, extract::AppQuery, models::Order, state::AppState, table::{Page, TableQuery}};

pub async fn orders_list(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TableQuery>,
) -> AppResult<Json<Page<Order>>> {
    let page = table_page(&state.catalog.orders, query, state.config.page_size)?;
    Ok(Json(page))
}
