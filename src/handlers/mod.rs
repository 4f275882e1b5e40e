pub mod cart;
pub mod customers;
pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod variants;

use crate::{
    error::AppResult,
    table::{Page, TableQuery, TableRow},
};

/// Runs a table request over a fixture slice and returns owned rows.
pub(crate) fn table_page<R>(rows: &[R], query: TableQuery, page_size: usize) -> AppResult<Page<R>>
where
    R: TableRow + Clone,
{
    let view = query.into_view::<R>()?;
    Ok(view.apply(rows, page_size).map(|row| row.clone()))
}
