use axum::{
    extract::State,
    response::Json,
};

use super::table_page;
use crate::{error::AppResult, extract::AppQuery, models::Customer, state::AppState, table::{Page, TableQuery}};

pub async fn customers_list(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TableQuery>,
) -> AppResult<Json<Page<Customer>>> {
    let page = table_page(&state.catalog.customers, query, state.config.page_size)?;
    Ok(Json(page))
}
