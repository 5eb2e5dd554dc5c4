//! The client-side cart: menu item snapshots a guest has picked but not yet
//! ordered. State lives in one storage slot and is written back after every
//! change, so a reload picks up where the guest left off.

mod gateway;
mod storage;

use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::order::{compute_total, OrderItem};
use crate::handlers::menu::MenuItemResponse;
use crate::handlers::orders::{CreateOrderRequest, OrderResponse};

pub use gateway::{HttpOrderGateway, OrderGateway};
pub use storage::{CartStorage, FileStorage, MemoryStorage};

/// Storage slot holding the serialized cart.
pub const CART_SLOT: &str = "selectedMenuItems";

pub type CartEntry = OrderItem;

type Listener = Box<dyn Fn(&[CartEntry]) + Send + Sync>;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Your order is empty")]
    EmptyCart,
    #[error("Cart storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("Cart serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Order service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Order rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Optional details a guest can attach when placing the order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDetails {
    pub customer_name: Option<String>,
    pub customer_contact: Option<String>,
    pub table_number: Option<String>,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub order: OrderResponse,
    /// Cosmetic number for the confirmation screen. Not the order's identity
    /// and not stored anywhere.
    pub display_number: u32,
}

impl From<&MenuItemResponse> for CartEntry {
    fn from(item: &MenuItemResponse) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            categories: item.categories.clone(),
            description: item.description.clone(),
            price: Some(item.price),
        }
    }
}

pub struct Cart<S> {
    storage: S,
    entries: Vec<CartEntry>,
    listeners: Vec<Listener>,
}

impl<S: CartStorage> Cart<S> {
    /// Read the slot once. A missing slot is an empty cart; so is one that no
    /// longer parses, since there is nothing better to recover it into.
    pub fn load(storage: S) -> Result<Self, CartError> {
        let entries = match storage.read(CART_SLOT)? {
            None => Vec::new(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("discarding unreadable cart: {e}");
                Vec::new()
            }),
        };

        Ok(Self {
            storage,
            entries,
            listeners: Vec::new(),
        })
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn total(&self) -> BigDecimal {
        compute_total(&self.entries)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Called with the current entries after every change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&[CartEntry]) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn add(&mut self, entry: CartEntry) -> Result<AddOutcome, CartError> {
        if self.contains(&entry.id) {
            log::info!("{} is already in your order", entry.name);
            return Ok(AddOutcome::AlreadyPresent);
        }

        let name = entry.name.clone();
        let mut next = self.entries.clone();
        next.push(entry);
        self.commit(next)?;
        log::info!("{name} added to order");
        Ok(AddOutcome::Added)
    }

    /// Returns whether an entry was actually dropped.
    pub fn remove(&mut self, id: &str) -> Result<bool, CartError> {
        let next: Vec<CartEntry> = self.entries.iter().filter(|e| e.id != id).cloned().collect();
        if next.len() == self.entries.len() {
            return Ok(false);
        }
        self.commit(next)?;
        log::info!("item removed from order");
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<(), CartError> {
        self.storage.remove(CART_SLOT)?;
        self.entries.clear();
        log::info!("order cleared");
        self.notify();
        Ok(())
    }

    /// Send the cart as an order. The cart is emptied only once the order
    /// service has accepted it; if the request fails it is left as it was.
    /// Once the order is accepted the call succeeds even if the cart cannot
    /// be cleared, so the caller never retries an order that already exists.
    pub async fn submit<G: OrderGateway>(
        &mut self,
        gateway: &G,
        details: OrderDetails,
    ) -> Result<Confirmation, CartError> {
        if self.entries.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let request = CreateOrderRequest {
            items: self.entries.clone(),
            customer_name: details.customer_name,
            customer_contact: details.customer_contact,
            table_number: details.table_number,
            special_instructions: details.special_instructions,
            total_price: self.total().to_f64(),
            timestamp: Some(Utc::now()),
            created_at: None,
        };

        let order = gateway.create_order(&request).await?;
        log::info!("order {} submitted", order.reference);

        if let Err(e) = self.clear() {
            log::warn!("order {} placed but the cart could not be cleared: {e}", order.reference);
        }
        Ok(Confirmation {
            order,
            display_number: display_number(),
        })
    }

    /// Write `next` to the slot, and only then make it the cart's contents.
    fn commit(&mut self, next: Vec<CartEntry>) -> Result<(), CartError> {
        let raw = serde_json::to_string(&next)?;
        self.storage.write(CART_SLOT, &raw)?;
        self.entries = next;
        self.notify();
        Ok(())
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.entries);
        }
    }
}

fn display_number() -> u32 {
    100_000 + (Uuid::new_v4().as_u128() % 900_000) as u32
}
