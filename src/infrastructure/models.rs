use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::menu::MenuItem;
use crate::domain::order::{Order, OrderItem};
use crate::schema::{menu_items, orders};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = menu_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MenuItemRow {
    pub id: Uuid,
    pub name: String,
    pub categories: Option<String>,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItemRow {
    pub id: Uuid,
    pub name: String,
    pub categories: Option<String>,
    pub description: Option<String>,
    pub price: BigDecimal,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            categories: row.categories,
            description: row.description,
            price: row.price,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: Uuid,
    pub items: Value,
    pub customer_name: Option<String>,
    pub customer_contact: Option<String>,
    pub table_number: Option<String>,
    pub special_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// `created_at: None` is written as `DEFAULT`, so the database clock stamps
/// the row.
#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub id: Uuid,
    pub items: Value,
    pub customer_name: Option<String>,
    pub customer_contact: Option<String>,
    pub table_number: Option<String>,
    pub special_instructions: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let items: Vec<OrderItem> = serde_json::from_value(row.items)?;
        Ok(Self {
            id: row.id,
            items,
            customer_name: row.customer_name,
            customer_contact: row.customer_contact,
            table_number: row.table_number,
            special_instructions: row.special_instructions,
            created_at: row.created_at,
        })
    }
}
