use serde::{Deserialize, Serialize};

use crate::table::{SortDirection, SortKey, TableRow};

/// A product dimension such as Color or Size with the values picked for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantAxis {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub values: Vec<String>,
    #[serde(rename = "useImage")]
    pub use_image: bool,
}

impl VariantAxis {
    pub fn new(id: u64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            values: Vec::new(),
            use_image: false,
        }
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_active(&self) -> bool {
        !self.values.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantOption {
    #[serde(rename = "type")]
    pub axis: String,
    pub value: String,
}

/// One concrete combination of axis values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRow {
    pub id: u64,
    pub image: Option<String>,
    pub options: Vec<VariantOption>,
    pub price: String,
    pub stock: String,
    pub sku: String,
    pub status: bool,
}

impl VariantRow {
    pub fn option(&self, axis: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.axis == axis)
            .map(|o| o.value.as_str())
    }

    pub fn apply(&mut self, patch: RowPatch) {
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(sku) = patch.sku {
            self.sku = sku;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Inline edit of the user-owned fields of a row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RowPatch {
    pub price: Option<String>,
    pub stock: Option<String>,
    pub sku: Option<String>,
    pub status: Option<bool>,
}

impl TableRow for VariantRow {
    const COLUMNS: &'static [&'static str] = &["combination", "price", "stock", "sku", "status"];
    const DEFAULT_SORT: (&'static str, SortDirection) = ("combination", SortDirection::Asc);

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "combination" => {
                let label = self
                    .options
                    .iter()
                    .map(|o| o.value.as_str())
                    .collect::<Vec<_>>()
                    .join(" / ");
                Some(SortKey::text(&label))
            }
            "price" => Some(SortKey::from_display(&self.price)),
            "stock" => Some(SortKey::from_display(&self.stock)),
            "sku" => Some(SortKey::text(&self.sku)),
            "status" => Some(SortKey::Flag(self.status)),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.sku.as_str()];
        fields.extend(self.options.iter().map(|o| o.value.as_str()));
        fields
    }
}
