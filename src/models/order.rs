use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::table::{SortDirection, SortKey, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    Refunded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub placed_on: NaiveDate,
    pub items: u32,
    pub total: Decimal,
    pub status: OrderStatus,
    pub payment: PaymentStatus,
}

impl Order {
    pub fn counts_as_revenue(&self) -> bool {
        self.status != OrderStatus::Cancelled && self.payment == PaymentStatus::Paid
    }
}

impl TableRow for Order {
    const COLUMNS: &'static [&'static str] =
        &["id", "customer", "date", "items", "total", "status"];
    const DEFAULT_SORT: (&'static str, SortDirection) = ("date", SortDirection::Desc);

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "id" => Some(SortKey::text(&self.id)),
            "customer" => Some(SortKey::text(&self.customer_name)),
            "date" => Some(SortKey::Date(self.placed_on)),
            "items" => Some(SortKey::Number(self.items.into())),
            "total" => Some(SortKey::Number(self.total)),
            "status" => Some(SortKey::text(self.status.label())),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer_name.as_str()]
    }
}
