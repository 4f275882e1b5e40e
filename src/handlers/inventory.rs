use axum::{
    extract::State,
    response::Json,
};
use serde::Serialize;

use crate::{
    error::AppResult,
    extract::AppQuery,
    models::{InventoryRow, StockState},
    state::AppState,
    table::{Page, TableQuery},
};

#[derive(Serialize)]
pub struct InventoryDisplay {
    #[serde(flatten)]
    pub row: InventoryRow,
    pub available: i32,
    pub stock_state: StockState,
}

impl From<&InventoryRow> for InventoryDisplay {
    fn from(row: &InventoryRow) -> Self {
        Self {
            available: row.available(),
            stock_state: row.stock_state(),
            row: row.clone(),
        }
    }
}

// Handler to display the inventory table
pub async fn items_list(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TableQuery>,
) -> AppResult<Json<Page<InventoryDisplay>>> {
    let view = query.into_view::<InventoryRow>()?;
    let page = view
        .apply(&state.catalog.inventory, state.config.page_size)
        .map(InventoryDisplay::from);
    Ok(Json(page))
}
