pub mod cart;
pub mod customer;
pub mod inventory;
pub mod order;
pub mod product;
pub mod variant;

pub use cart::{CartItemRequest, CartLine, CartQuoteRequest, CartSummary};
pub use customer::{Customer, CustomerStatus};
pub use inventory::{InventoryRow, StockState};
pub use order::{Order, OrderStatus, PaymentStatus};
pub use product::{Product, ProductStatus};
pub use variant::{RowPatch, VariantAxis, VariantOption, VariantRow};
