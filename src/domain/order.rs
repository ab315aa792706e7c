use super::money::Money;
use crate::error::ValidationError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub const VIP_DISCOUNT_FACTOR: Decimal = dec!(0.85);
pub const LARGE_ORDER_THRESHOLD: Decimal = dec!(500);
pub const LARGE_ORDER_FACTOR: Decimal = dec!(0.90);
pub const TAX_RATE: Decimal = dec!(0.22);

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OrderItem {
    pub name: String,
    pub price: Money,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price: Money::new(price),
            quantity,
        }
    }

    /// Unit price times quantity, unrounded.
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// An incoming order, as submitted by the customer.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct OrderRequest {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub is_vip_customer: bool,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
}

/// Subtotal, tax and total of an order. Never rounded.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// The snapshot handed to the order store once an order is accepted.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OrderRecord {
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    pub vip: bool,
    pub status: OrderStatus,
}

impl OrderRecord {
    pub fn pending(request: &OrderRequest, totals: OrderTotals) -> Self {
        Self {
            customer_name: request.customer_name.clone(),
            customer_email: request.customer_email.clone(),
            items: request.items.clone(),
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            vip: request.is_vip_customer,
            status: OrderStatus::Pending,
        }
    }
}

/// Checks the request, stopping at the first problem found.
pub fn validate_order(request: &OrderRequest) -> Result<(), ValidationError> {
    if request.items.is_empty() {
        return Err(ValidationError::EmptyOrder);
    }
    if request.customer_email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if request.customer_name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    for item in &request.items {
        if !item.price.is_positive() {
            return Err(ValidationError::InvalidPrice(item.name.clone()));
        }
        if item.quantity == 0 {
            return Err(ValidationError::InvalidQuantity(item.name.clone()));
        }
    }

    Ok(())
}

/// Flat sum of the items, then the VIP discount, then the large-order discount.
///
/// Both discounts stack. Nothing is rounded here.
pub fn calculate_order_totals(items: &[OrderItem], vip: bool) -> OrderTotals {
    let mut subtotal: Money = items.iter().map(OrderItem::line_total).sum();

    if vip {
        subtotal = subtotal.scale(VIP_DISCOUNT_FACTOR);
    }

    if subtotal.value() > LARGE_ORDER_THRESHOLD {
        subtotal = subtotal.scale(LARGE_ORDER_FACTOR);
    }

    let tax = subtotal.scale(TAX_RATE);

    OrderTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}
