use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::Pricing;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub sku: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
}

impl CartLine {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, unit_price: Decimal, quantity: u32) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            unit_price,
            quantity,
            line_total: to_cents(unit_price * Decimal::from(quantity)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Line requested by the storefront cart or the POS screen.
#[derive(Debug, Clone, Deserialize)]
pub struct CartItemRequest {
    pub sku: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CartQuoteRequest {
    pub lines: Vec<CartItemRequest>,
    pub discount_percent: Option<Decimal>,
}

fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Totals a priced cart. Discount applies to the subtotal, tax to the
/// discounted subtotal; shipping is free at or above the threshold and
/// nothing at all for an empty cart.
pub fn quote(lines: Vec<CartLine>, discount_percent: Option<Decimal>, pricing: &Pricing) -> AppResult<CartSummary> {
    let percent = discount_percent.unwrap_or(Decimal::ZERO);
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(AppError::InvalidInput(format!(
            "discount must be between 0 and 100 percent, got {percent}"
        )));
    }

    let item_count = lines
        .iter()
        .try_fold(0u32, |count, l| count.checked_add(l.quantity))
        .ok_or_else(|| AppError::InvalidInput("too many items in cart".to_string()))?;
    let subtotal: Decimal = lines.iter().map(|l| l.line_total).sum();
    let discount = to_cents(subtotal * percent / Decimal::ONE_HUNDRED);
    let discounted = subtotal - discount;

    let shipping = if lines.is_empty() || discounted >= pricing.free_shipping_threshold {
        Decimal::ZERO
    } else {
        pricing.flat_shipping
    };
    let tax = to_cents(discounted * pricing.tax_rate);

    Ok(CartSummary {
        lines,
        item_count,
        subtotal,
        discount,
        shipping,
        tax,
        total: discounted + shipping + tax,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pricing() -> Pricing {
        Pricing::default()
    }

    #[test]
    fn empty_cart_costs_nothing() {
        let summary = quote(Vec::new(), None, &pricing()).unwrap();
        assert_eq!(summary.total, Decimal::ZERO);
        assert_eq!(summary.shipping, Decimal::ZERO);
        assert_eq!(summary.item_count, 0);
    }

    #[test]
    fn small_cart_pays_flat_shipping_and_tax() {
        let lines = vec![CartLine::new("TEE-01", "Tee", Decimal::new(1999, 2), 2)];
        let summary = quote(lines, None, &pricing()).unwrap();
        assert_eq!(summary.subtotal, Decimal::new(3998, 2));
        assert_eq!(summary.shipping, Decimal::new(999, 2));
        // 39.98 * 0.08 = 3.1984
        assert_eq!(summary.tax, Decimal::new(320, 2));
        assert_eq!(summary.total, Decimal::new(5317, 2));
    }

    #[test]
    fn discount_can_drop_below_free_shipping_threshold() {
        let lines = vec![CartLine::new("BAG-01", "Bag", Decimal::new(110, 0), 1)];
        let full = quote(lines.clone(), None, &pricing()).unwrap();
        assert_eq!(full.shipping, Decimal::ZERO);

        let discounted = quote(lines, Some(Decimal::new(20, 0)), &pricing()).unwrap();
        assert_eq!(discounted.discount, Decimal::new(22, 0));
        assert_eq!(discounted.shipping, Decimal::new(999, 2));
        assert_eq!(discounted.tax, Decimal::new(704, 2));
        assert_eq!(discounted.total, Decimal::new(10503, 2));
    }

    #[test]
    fn discount_outside_range_is_rejected() {
        let err = quote(Vec::new(), Some(Decimal::new(101, 0)), &pricing()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn item_count_overflow_is_rejected() {
        let lines = vec![
            CartLine::new("TEE-01", "Tee", Decimal::new(1999, 2), 3_000_000_000),
            CartLine::new("TEE-01", "Tee", Decimal::new(1999, 2), 3_000_000_000),
        ];
        let err = quote(lines, None, &pricing()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
