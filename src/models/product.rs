use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::table::{SortDirection, SortKey, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
}

impl ProductStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Draft => "draft",
            ProductStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: Decimal,
    pub compare_at_price: Option<Decimal>,
    pub stock: i32,
    pub status: ProductStatus,
    pub image_url: String,
    pub rating: Decimal,
    pub created_at: NaiveDate,
}

impl Product {
    pub fn is_listed(&self) -> bool {
        self.status == ProductStatus::Active
    }

    pub fn on_sale(&self) -> bool {
        self.compare_at_price.is_some_and(|was| was > self.price)
    }
}

impl TableRow for Product {
    const COLUMNS: &'static [&'static str] =
        &["name", "sku", "category", "price", "stock", "status", "rating", "created_at"];
    const DEFAULT_SORT: (&'static str, SortDirection) = ("created_at", SortDirection::Desc);

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "name" => Some(SortKey::text(&self.name)),
            "sku" => Some(SortKey::text(&self.sku)),
            "category" => Some(SortKey::text(&self.category)),
            "price" => Some(SortKey::Number(self.price)),
            "stock" => Some(SortKey::Number(self.stock.into())),
            "status" => Some(SortKey::text(self.status.label())),
            "rating" => Some(SortKey::Number(self.rating)),
            "created_at" => Some(SortKey::Date(self.created_at)),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str()]
    }
}
