//! In-memory fixtures standing in for a database. Everything here is rebuilt
//! on startup.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{
    Customer, CustomerStatus, InventoryRow, Order, OrderStatus, PaymentStatus, Product,
    ProductStatus, StockState,
};

#[derive(Debug, Clone)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    pub inventory: Vec<InventoryRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub revenue: Decimal,
    pub order_count: usize,
    pub customer_count: usize,
    pub low_stock_count: usize,
    pub orders_by_status: BTreeMap<OrderStatus, usize>,
    pub revenue_by_month: Vec<MonthlyRevenue>,
}

impl Catalog {
    pub fn product(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.sku == sku)
    }

    /// Categories with at least one listed product, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .products
            .iter()
            .filter(|p| p.is_listed())
            .map(|p| p.category.as_str())
            .collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    pub fn summary(&self) -> DashboardSummary {
        let mut orders_by_status = BTreeMap::new();
        let mut by_month: BTreeMap<(i32, u32), Decimal> = BTreeMap::new();
        let mut revenue = Decimal::ZERO;

        for order in &self.orders {
            *orders_by_status.entry(order.status).or_insert(0) += 1;
            if order.counts_as_revenue() {
                revenue += order.total;
                let month = (order.placed_on.year(), order.placed_on.month());
                *by_month.entry(month).or_insert(Decimal::ZERO) += order.total;
            }
        }

        let low_stock_count = self
            .inventory
            .iter()
            .filter(|row| row.stock_state() != StockState::InStock)
            .count();

        DashboardSummary {
            revenue,
            order_count: self.orders.len(),
            customer_count: self.customers.len(),
            low_stock_count,
            orders_by_status,
            revenue_by_month: by_month
                .into_iter()
                .map(|((year, month), revenue)| MonthlyRevenue {
                    month: format!("{year}-{month:02}"),
                    revenue,
                })
                .collect(),
        }
    }

    pub fn fixtures() -> Self {
        Self {
            products: products(),
            orders: orders(),
            customers: customers(),
            inventory: inventory(),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn products() -> Vec<Product> {
    let rows: [(&str, &str, &str, i64, Option<i64>, i32, ProductStatus, i64, NaiveDate); 12] = [
        ("MacBook Air 13", "MBA13", "Laptops", 109_900, Some(119_900), 24, ProductStatus::Active, 48, date(2024, 1, 12)),
        ("MacBook Pro 14", "MBP14", "Laptops", 199_900, None, 8, ProductStatus::Active, 49, date(2024, 2, 3)),
        ("iPad Air", "IPAD-AIR", "Tablets", 59_900, None, 31, ProductStatus::Active, 46, date(2023, 11, 20)),
        ("iPhone 15", "IPH15", "Phones", 79_900, Some(82_900), 0, ProductStatus::Active, 47, date(2023, 9, 22)),
        ("AirPods Pro", "APP2", "Audio", 24_900, None, 55, ProductStatus::Active, 45, date(2023, 10, 2)),
        ("Studio Display", "STD27", "Displays", 159_900, None, 4, ProductStatus::Draft, 42, date(2024, 3, 1)),
        ("Magic Keyboard", "MKB", "Accessories", 9_900, None, 70, ProductStatus::Active, 41, date(2023, 6, 14)),
        ("Magic Mouse", "MMS", "Accessories", 7_900, Some(9_900), 62, ProductStatus::Active, 38, date(2023, 6, 14)),
        ("Leather Sleeve 13", "SLV13", "Accessories", 12_900, None, 17, ProductStatus::Active, 44, date(2024, 1, 30)),
        ("Cotton Tee", "TEE-01", "Apparel", 1_999, None, 140, ProductStatus::Active, 43, date(2024, 2, 18)),
        ("HomePod mini", "HPM", "Audio", 9_900, None, 12, ProductStatus::Archived, 44, date(2022, 11, 8)),
        ("Watch Series 9", "AW9", "Wearables", 39_900, None, 19, ProductStatus::Active, 46, date(2023, 9, 22)),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(idx, (name, sku, category, price, was, stock, status, rating, created_at))| Product {
            id: idx as u32 + 1,
            name: name.to_string(),
            sku: sku.to_string(),
            category: category.to_string(),
            price: money(price),
            compare_at_price: was.map(money),
            stock,
            status,
            image_url: format!("/static/img/products/{}.png", sku.to_lowercase()),
            rating: Decimal::new(rating, 1),
            created_at,
        })
        .collect()
}

fn orders() -> Vec<Order> {
    use OrderStatus::*;
    use PaymentStatus::*;

    let rows: [(&str, &str, &str, NaiveDate, u32, i64, OrderStatus, PaymentStatus); 14] = [
        ("#ORD-1001", "Olivia Martin", "olivia.martin@example.com", date(2024, 1, 4), 2, 134_800, Delivered, Paid),
        ("#ORD-1002", "Jackson Lee", "jackson.lee@example.com", date(2024, 1, 9), 1, 24_900, Delivered, Paid),
        ("#ORD-1003", "Isabella Nguyen", "isabella.nguyen@example.com", date(2024, 1, 17), 3, 31_697, Cancelled, Refunded),
        ("#ORD-1004", "William Kim", "will@example.com", date(2024, 1, 28), 1, 199_900, Delivered, Paid),
        ("#ORD-1005", "Sofia Davis", "sofia.davis@example.com", date(2024, 2, 2), 4, 7_996, Shipped, Paid),
        ("#ORD-1006", "Liam Johnson", "liam@example.com", date(2024, 2, 11), 1, 59_900, Shipped, Paid),
        ("#ORD-1007", "Emma Brown", "emma.brown@example.com", date(2024, 2, 15), 2, 17_800, Processing, Paid),
        ("#ORD-1008", "Noah Wilson", "noah.wilson@example.com", date(2024, 2, 21), 1, 79_900, Pending, Unpaid),
        ("#ORD-1009", "Ava Garcia", "ava.garcia@example.com", date(2024, 2, 27), 2, 49_800, Delivered, Paid),
        ("#ORD-1010", "Olivia Martin", "olivia.martin@example.com", date(2024, 3, 3), 1, 12_900, Processing, Paid),
        ("#ORD-1011", "Lucas Miller", "lucas.miller@example.com", date(2024, 3, 8), 1, 39_900, Pending, Unpaid),
        ("#ORD-1012", "Mia Anderson", "mia.anderson@example.com", date(2024, 3, 12), 5, 9_995, Delivered, Paid),
        ("#ORD-1013", "Jackson Lee", "jackson.lee@example.com", date(2024, 3, 19), 1, 159_900, Cancelled, Refunded),
        ("#ORD-1014", "Ethan Thomas", "ethan.thomas@example.com", date(2024, 3, 25), 2, 117_800, Shipped, Paid),
    ];

    rows.into_iter()
        .map(|(id, name, email, placed_on, items, total, status, payment)| Order {
            id: id.to_string(),
            customer_name: name.to_string(),
            customer_email: email.to_string(),
            placed_on,
            items,
            total: money(total),
            status,
            payment,
        })
        .collect()
}

fn customers() -> Vec<Customer> {
    use CustomerStatus::*;

    let rows: [(&str, &str, &str, &str, u32, i64, NaiveDate, CustomerStatus); 10] = [
        ("Olivia Martin", "olivia.martin@example.com", "+1 555 0101", "Austin, TX", 2, 147_700, date(2023, 4, 2), Active),
        ("Jackson Lee", "jackson.lee@example.com", "+1 555 0102", "Seattle, WA", 2, 24_900, date(2023, 5, 19), Active),
        ("Isabella Nguyen", "isabella.nguyen@example.com", "+1 555 0103", "San Jose, CA", 1, 0, date(2023, 7, 7), Inactive),
        ("William Kim", "will@example.com", "+1 555 0104", "Chicago, IL", 1, 199_900, date(2023, 8, 30), Active),
        ("Sofia Davis", "sofia.davis@example.com", "+1 555 0105", "Denver, CO", 1, 7_996, date(2023, 9, 12), Active),
        ("Liam Johnson", "liam@example.com", "+1 555 0106", "Boston, MA", 1, 59_900, date(2023, 10, 1), Active),
        ("Emma Brown", "emma.brown@example.com", "+1 555 0107", "Portland, OR", 1, 17_800, date(2023, 11, 23), Active),
        ("Noah Wilson", "noah.wilson@example.com", "+1 555 0108", "Miami, FL", 1, 0, date(2024, 1, 5), Active),
        ("Ava Garcia", "ava.garcia@example.com", "+1 555 0109", "Phoenix, AZ", 1, 49_800, date(2024, 1, 21), Active),
        ("Ethan Thomas", "ethan.thomas@example.com", "+1 555 0110", "Atlanta, GA", 1, 117_800, date(2024, 2, 14), Inactive),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(idx, (name, email, phone, location, orders, spent, joined_on, status))| Customer {
            id: idx as u32 + 1,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            location: location.to_string(),
            orders,
            total_spent: money(spent),
            joined_on,
            status,
        })
        .collect()
}

fn inventory() -> Vec<InventoryRow> {
    let rows: [(&str, &str, &str, i32, i32, i32, NaiveDate); 12] = [
        ("MBA13-MIDNIGHT-256GB", "MacBook Air 13 Midnight 256GB", "Main", 14, 2, 5, date(2024, 3, 20)),
        ("MBA13-SILVER-256GB", "MacBook Air 13 Silver 256GB", "Main", 6, 2, 5, date(2024, 3, 20)),
        ("MBA13-MIDNIGHT-512GB", "MacBook Air 13 Midnight 512GB", "East", 4, 0, 5, date(2024, 3, 18)),
        ("MBP14-SPACEGRAY-1TB", "MacBook Pro 14 Space Gray 1TB", "Main", 8, 1, 3, date(2024, 3, 22)),
        ("IPAD-AIR", "iPad Air", "East", 31, 4, 8, date(2024, 3, 11)),
        ("IPH15", "iPhone 15", "Main", 3, 3, 10, date(2024, 3, 24)),
        ("APP2", "AirPods Pro", "West", 55, 6, 12, date(2024, 3, 2)),
        ("MKB", "Magic Keyboard", "West", 70, 0, 15, date(2024, 2, 28)),
        ("MMS", "Magic Mouse", "West", 62, 5, 15, date(2024, 2, 28)),
        ("SLV13", "Leather Sleeve 13", "East", 17, 1, 6, date(2024, 3, 5)),
        ("TEE-01-M", "Cotton Tee M", "Main", 140, 12, 30, date(2024, 3, 15)),
        ("AW9", "Watch Series 9", "Main", 19, 2, 6, date(2024, 3, 9)),
    ];

    rows.into_iter()
        .map(|(sku, name, warehouse, on_hand, reserved, reorder_point, updated_on)| InventoryRow {
            sku: sku.to_string(),
            name: name.to_string(),
            warehouse: warehouse.to_string(),
            on_hand,
            reserved,
            reorder_point,
            updated_on,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_skips_cancelled_and_unpaid_orders() {
        let catalog = Catalog::fixtures();
        let summary = catalog.summary();

        assert_eq!(summary.order_count, 14);
        assert_eq!(summary.customer_count, 10);
        assert_eq!(summary.orders_by_status[&OrderStatus::Cancelled], 2);
        assert_eq!(summary.orders_by_status[&OrderStatus::Delivered], 5);

        let expected: Decimal = catalog
            .orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled && o.payment == PaymentStatus::Paid)
            .map(|o| o.total)
            .sum();
        assert_eq!(summary.revenue, expected);

        let months: Vec<&str> = summary.revenue_by_month.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);
        assert_eq!(summary.revenue_by_month[0].revenue, money(134_800 + 24_900 + 199_900));
    }

    #[test]
    fn low_stock_counts_low_and_empty_rows() {
        // MBA13-SILVER (4 <= 5), MBA13-MIDNIGHT-512GB (4 <= 5), IPH15 (0 available)
        assert_eq!(Catalog::fixtures().summary().low_stock_count, 3);
    }

    #[test]
    fn lookups() {
        let catalog = Catalog::fixtures();
        assert_eq!(catalog.product("MBA13").map(|p| p.id), Some(1));
        assert!(catalog.product("NOPE").is_none());
        assert!(catalog.categories().contains(&"Laptops"));
        // Studio Display is the only display and it is still a draft
        assert!(!catalog.categories().contains(&"Displays"));
    }
}
