use uuid::Uuid;

use super::errors::DomainError;
use super::menu::{MenuItem, NewMenuItem};
use super::order::{NewOrder, Order};

pub trait MenuRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<MenuItem>, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, DomainError>;
    fn create(&self, item: NewMenuItem) -> Result<MenuItem, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<Order>, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;
    fn create(&self, order: NewOrder) -> Result<Order, DomainError>;
    /// Returns `false` when no order with `id` existed.
    fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
