use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order, OrderItem};
use crate::domain::ports::OrderRepository;

pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    pub fn create_order(&self, order: NewOrder) -> Result<Order, DomainError> {
        validate(&order).inspect_err(|e| log::warn!("rejected order: {e}"))?;
        let created = self.repo.create(order)?;
        log::info!(
            "created order {} with {} item(s), total {}",
            created.id,
            created.items.len(),
            created.total()
        );
        Ok(created)
    }

    pub fn get_order(&self, id: Uuid) -> Result<Order, DomainError> {
        self.repo.find_by_id(id)?.ok_or_else(|| {
            log::debug!("order {id} not found");
            DomainError::NotFound("Order")
        })
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.repo.list()
    }

    /// Completing an order removes it from the store for good.
    pub fn complete_order(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id)? {
            log::debug!("order {id} not found for completion");
            return Err(DomainError::NotFound("Order"));
        }
        log::info!("completed order {id}");
        Ok(())
    }
}

fn validate(order: &NewOrder) -> Result<(), DomainError> {
    if order.items.is_empty() {
        return Err(DomainError::InvalidInput(
            "an order needs at least one item".to_string(),
        ));
    }
    order.items.iter().enumerate().try_for_each(validate_item)
}

fn validate_item((index, item): (usize, &OrderItem)) -> Result<(), DomainError> {
    if item.id.trim().is_empty() {
        return Err(DomainError::InvalidInput(format!("item {index} has no _id")));
    }
    if item.name.trim().is_empty() {
        return Err(DomainError::InvalidInput(format!("item {index} has no name")));
    }
    match item.price {
        Some(price) if !price.is_finite() || price < 0.0 => Err(DomainError::InvalidInput(
            format!("item {index} has an invalid price"),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::infrastructure::memory::InMemoryOrderRepository;

    fn service() -> OrderService {
        OrderService::new(Arc::new(InMemoryOrderRepository::default()))
    }

    fn item(id: &str, name: &str, price: Option<f64>) -> OrderItem {
        OrderItem {
            id: id.to_string(),
            name: name.to_string(),
            categories: None,
            description: None,
            price,
        }
    }

    fn new_order(items: Vec<OrderItem>) -> NewOrder {
        NewOrder {
            items,
            ..NewOrder::default()
        }
    }

    #[test]
    fn create_assigns_id_and_timestamp() {
        let service = service();
        let before = Utc::now();

        let order = service
            .create_order(new_order(vec![item("a", "Soda", Some(2.0))]))
            .expect("create failed");

        assert!(order.created_at >= before);
        assert_eq!(order.items, vec![item("a", "Soda", Some(2.0))]);
        assert_eq!(service.get_order(order.id).expect("get failed"), order);
    }

    #[test]
    fn explicit_creation_time_is_kept() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let order = service()
            .create_order(NewOrder {
                created_at: Some(at),
                ..new_order(vec![item("a", "Soda", Some(2.0))])
            })
            .expect("create failed");

        assert_eq!(order.created_at, at);
    }

    #[test]
    fn metadata_is_persisted() {
        let order = service()
            .create_order(NewOrder {
                customer_name: Some("Ada".to_string()),
                table_number: Some("12".to_string()),
                special_instructions: Some("no onions".to_string()),
                ..new_order(vec![item("a", "Burger", Some(9.5))])
            })
            .expect("create failed");

        assert_eq!(order.customer_name.as_deref(), Some("Ada"));
        assert_eq!(order.table_number.as_deref(), Some("12"));
        assert_eq!(order.special_instructions.as_deref(), Some("no onions"));
        assert_eq!(order.customer_contact, None);
    }

    #[test]
    fn empty_order_is_rejected() {
        let err = service().create_order(new_order(vec![])).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn item_without_id_is_rejected() {
        let err = service()
            .create_order(new_order(vec![item(" ", "Soda", Some(2.0))]))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(msg) if msg.contains("_id")));
    }

    #[test]
    fn negative_item_price_is_rejected() {
        let err = service()
            .create_order(new_order(vec![item("a", "Soda", Some(-1.0))]))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn item_without_price_is_accepted_and_totals_zero() {
        let order = service()
            .create_order(new_order(vec![item("a", "Bread", None)]))
            .expect("create failed");
        assert_eq!(order.total(), BigDecimal::from_str("0.00").expect("valid decimal"));
    }

    #[test]
    fn complete_removes_order_from_listing() {
        let service = service();
        let keep = service
            .create_order(new_order(vec![item("a", "Soda", Some(2.0))]))
            .expect("create failed");
        let done = service
            .create_order(new_order(vec![item("b", "Tea", Some(1.5))]))
            .expect("create failed");

        service.complete_order(done.id).expect("complete failed");

        let remaining: Vec<Uuid> = service
            .list_orders()
            .expect("list failed")
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(remaining, vec![keep.id]);
        assert!(matches!(
            service.get_order(done.id),
            Err(DomainError::NotFound("Order"))
        ));
    }

    #[test]
    fn completing_unknown_order_is_not_found() {
        let err = service().complete_order(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound("Order")));
    }

    #[test]
    fn completing_twice_is_not_found_the_second_time() {
        let service = service();
        let order = service
            .create_order(new_order(vec![item("a", "Soda", Some(2.0))]))
            .expect("create failed");

        service.complete_order(order.id).expect("first completion failed");
        assert!(matches!(
            service.complete_order(order.id),
            Err(DomainError::NotFound(_))
        ));
    }
}
