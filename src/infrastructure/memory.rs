//! Process-local repositories. Used by the HTTP tests and handy for running
//! the service without a database; contents vanish with the process.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::menu::{MenuItem, NewMenuItem};
use crate::domain::order::{NewOrder, Order};
use crate::domain::ports::{MenuRepository, OrderRepository};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, DomainError> {
    mutex
        .lock()
        .map_err(|_| DomainError::StoreUnavailable("in-memory store poisoned".to_string()))
}

#[derive(Default)]
pub struct InMemoryMenuRepository {
    items: Mutex<Vec<MenuItem>>,
}

impl MenuRepository for InMemoryMenuRepository {
    fn list(&self) -> Result<Vec<MenuItem>, DomainError> {
        Ok(lock(&self.items)?.clone())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, DomainError> {
        Ok(lock(&self.items)?.iter().find(|i| i.id == id).cloned())
    }

    fn create(&self, item: NewMenuItem) -> Result<MenuItem, DomainError> {
        let created = MenuItem {
            id: Uuid::new_v4(),
            name: item.name,
            categories: item.categories,
            description: item.description,
            price: item.price,
            created_at: Utc::now(),
        };
        lock(&self.items)?.push(created.clone());
        Ok(created)
    }
}

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
}

impl OrderRepository for InMemoryOrderRepository {
    fn list(&self) -> Result<Vec<Order>, DomainError> {
        let mut orders = lock(&self.orders)?.clone();
        // Stable, so insertion order breaks ties like the SQL ordering does.
        orders.sort_by_key(|o| o.created_at);
        Ok(orders)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        Ok(lock(&self.orders)?.iter().find(|o| o.id == id).cloned())
    }

    fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let created = Order {
            id: Uuid::new_v4(),
            items: order.items,
            customer_name: order.customer_name,
            customer_contact: order.customer_contact,
            table_number: order.table_number,
            special_instructions: order.special_instructions,
            created_at: order.created_at.unwrap_or_else(Utc::now),
        };
        lock(&self.orders)?.push(created.clone());
        Ok(created)
    }

    fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut orders = lock(&self.orders)?;
        let before = orders.len();
        orders.retain(|o| o.id != id);
        Ok(orders.len() < before)
    }
}
