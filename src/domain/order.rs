use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::menu::MenuItem;

/// A menu item snapshot as it sits in a cart and, once submitted, inside an
/// order. It is a value copy: the price is frozen at selection time and the
/// identity is whatever the client held, not a reference into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl From<&MenuItem> for OrderItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            categories: item.categories.clone(),
            description: item.description.clone(),
            price: item.price.to_f64(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub items: Vec<OrderItem>,
    pub customer_name: Option<String>,
    pub customer_contact: Option<String>,
    pub table_number: Option<String>,
    pub special_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn total(&self) -> BigDecimal {
        compute_total(&self.items)
    }

    /// Short display reference: the last six characters of the identity.
    pub fn reference(&self) -> String {
        let id = self.id.simple().to_string();
        id[id.len() - 6..].to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    pub customer_name: Option<String>,
    pub customer_contact: Option<String>,
    pub table_number: Option<String>,
    pub special_instructions: Option<String>,
    /// `None` lets the store assign the creation time.
    pub created_at: Option<DateTime<Utc>>,
}

/// Sum of item prices rounded to two decimal places. Missing or non-finite
/// prices count as zero. Client-submitted totals never feed into this.
pub fn compute_total(items: &[OrderItem]) -> BigDecimal {
    items
        .iter()
        .filter_map(|item| item.price)
        .filter_map(decimal_from_f64)
        .fold(BigDecimal::zero(), |acc, price| acc + price)
        .with_scale_round(2, RoundingMode::HalfUp)
}

/// Renders an amount with exactly two decimal places, `"0.00"` included,
/// whatever scale the decimal happens to carry.
pub fn format_amount(amount: &BigDecimal) -> String {
    let cents = (amount * BigDecimal::from(100))
        .with_scale_round(0, RoundingMode::HalfUp)
        .to_i128()
        .unwrap_or_default();
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// Converts through the shortest decimal representation of `value`, so that
/// `9.95` becomes exactly `9.95` rather than its binary expansion.
pub fn decimal_from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}
