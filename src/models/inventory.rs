use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::table::{SortDirection, SortKey, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockState {
    InStock,
    LowStock,
    OutOfStock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub sku: String,
    pub name: String,
    pub warehouse: String,
    pub on_hand: i32,
    pub reserved: i32,
    pub reorder_point: i32,
    pub updated_on: NaiveDate,
}

impl InventoryRow {
    pub fn available(&self) -> i32 {
        self.on_hand - self.reserved
    }

    pub fn stock_state(&self) -> StockState {
        let available = self.available();
        if available <= 0 {
            StockState::OutOfStock
        } else if available <= self.reorder_point {
            StockState::LowStock
        } else {
            StockState::InStock
        }
    }
}

impl TableRow for InventoryRow {
    const COLUMNS: &'static [&'static str] =
        &["sku", "name", "warehouse", "on_hand", "reserved", "available", "updated"];
    const DEFAULT_SORT: (&'static str, SortDirection) = ("sku", SortDirection::Asc);

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "sku" => Some(SortKey::text(&self.sku)),
            "name" => Some(SortKey::text(&self.name)),
            "warehouse" => Some(SortKey::text(&self.warehouse)),
            "on_hand" => Some(SortKey::Number(self.on_hand.into())),
            "reserved" => Some(SortKey::Number(self.reserved.into())),
            "available" => Some(SortKey::Number(self.available().into())),
            "updated" => Some(SortKey::Date(self.updated_on)),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(on_hand: i32, reserved: i32) -> InventoryRow {
        InventoryRow {
            sku: "MBA13-MIDNIGHT".into(),
            name: "MacBook Air 13".into(),
            warehouse: "Main".into(),
            on_hand,
            reserved,
            reorder_point: 5,
            updated_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[test]
    fn stock_state_follows_available_quantity() {
        assert_eq!(row(20, 2).stock_state(), StockState::InStock);
        assert_eq!(row(7, 2).stock_state(), StockState::LowStock);
        assert_eq!(row(3, 3).stock_state(), StockState::OutOfStock);
        assert_eq!(row(1, 4).available(), -3);
    }
}
