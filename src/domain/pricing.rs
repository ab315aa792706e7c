use super::customer::CustomerTier;
use super::money::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub const PREMIUM_DISCOUNT_FACTOR: Decimal = dec!(0.85);
pub const VIP_DISCOUNT_FACTOR: Decimal = dec!(0.75);

pub const BULK_QUANTITY_THRESHOLD: u32 = 10;
pub const BULK_QUANTITY_FACTOR: Decimal = dec!(0.90);
pub const MEDIUM_QUANTITY_THRESHOLD: u32 = 5;
pub const MEDIUM_QUANTITY_FACTOR: Decimal = dec!(0.95);

/// Unit prices above this (after tier and quantity discounts) get an extra 2% off.
pub const EXPENSIVE_ITEM_THRESHOLD: Decimal = dec!(100);
pub const EXPENSIVE_ITEM_FACTOR: Decimal = dec!(0.98);

pub const TAX_RATE: Decimal = dec!(0.22);

/// Orders whose taxed total exceeds this get a final 5% off.
pub const LARGE_ORDER_THRESHOLD: Decimal = dec!(500);
pub const LARGE_ORDER_FACTOR: Decimal = dec!(0.95);

/// A product in a cart: unit price and how many units are bought.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub price: Money,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(price: Decimal, quantity: u32) -> Self {
        Self {
            price: Money::new(price),
            quantity,
        }
    }
}

/// Totals of a priced cart. Every amount is already rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingResult {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    pub discount_applied: bool,
}

fn tier_factor(tier: CustomerTier) -> Decimal {
    match tier {
        CustomerTier::Premium => PREMIUM_DISCOUNT_FACTOR,
        CustomerTier::Vip => VIP_DISCOUNT_FACTOR,
        CustomerTier::Basic | CustomerTier::Unknown => Decimal::ONE,
    }
}

fn quantity_factor(quantity: u32) -> Decimal {
    if quantity >= BULK_QUANTITY_THRESHOLD {
        BULK_QUANTITY_FACTOR
    } else if quantity >= MEDIUM_QUANTITY_THRESHOLD {
        MEDIUM_QUANTITY_FACTOR
    } else {
        Decimal::ONE
    }
}

/// Final unit price after tier, quantity and expensive-item discounts, rounded to cents.
///
/// The three steps are applied in that order, each on the running price.
pub fn discounted_unit_price(price: Money, tier: CustomerTier, quantity: u32) -> Money {
    let mut running = price.scale(tier_factor(tier)).scale(quantity_factor(quantity));

    if running.value() > EXPENSIVE_ITEM_THRESHOLD {
        running = running.scale(EXPENSIVE_ITEM_FACTOR);
    }

    running.round_cents()
}

/// Prices a whole cart for the given tier.
///
/// Subtotal, tax and total are rounded at the point they are computed; tax is taken
/// on the rounded subtotal and the large-order discount on the rounded amounts.
pub fn calculate_order_total(items: &[LineItem], tier: CustomerTier) -> PricingResult {
    let subtotal = items
        .iter()
        .map(|item| discounted_unit_price(item.price, tier, item.quantity).times(item.quantity))
        .sum::<Money>()
        .round_cents();

    let tax = subtotal.scale(TAX_RATE).round_cents();
    let undiscounted = subtotal + tax;

    let total = if undiscounted.value() > LARGE_ORDER_THRESHOLD {
        undiscounted.scale(LARGE_ORDER_FACTOR)
    } else {
        undiscounted
    }
    .round_cents();

    PricingResult {
        subtotal,
        tax,
        total,
        discount_applied: total != undiscounted,
    }
}
