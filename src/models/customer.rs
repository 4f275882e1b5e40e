use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::table::{SortDirection, SortKey, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub orders: u32,
    pub total_spent: Decimal,
    pub joined_on: NaiveDate,
    pub status: CustomerStatus,
}

impl TableRow for Customer {
    const COLUMNS: &'static [&'static str] =
        &["name", "email", "location", "orders", "spent", "joined"];
    const DEFAULT_SORT: (&'static str, SortDirection) = ("name", SortDirection::Asc);

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "name" => Some(SortKey::text(&self.name)),
            "email" => Some(SortKey::text(&self.email)),
            "location" => Some(SortKey::text(&self.location)),
            "orders" => Some(SortKey::Number(self.orders.into())),
            "spent" => Some(SortKey::Number(self.total_spent)),
            "joined" => Some(SortKey::Date(self.joined_on)),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}
