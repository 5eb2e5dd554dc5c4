use std::collections::BTreeSet;
use std::sync::Arc;

use bigdecimal::{BigDecimal, Zero};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::menu::{MenuItem, NewMenuItem};
use crate::domain::ports::MenuRepository;

pub struct CatalogService {
    repo: Arc<dyn MenuRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn MenuRepository>) -> Self {
        Self { repo }
    }

    pub fn list_items(&self) -> Result<Vec<MenuItem>, DomainError> {
        self.repo.list()
    }

    pub fn list_items_in_category(&self, category: &str) -> Result<Vec<MenuItem>, DomainError> {
        let items = self.repo.list()?;
        Ok(items
            .into_iter()
            .filter(|item| item.has_category(category))
            .collect())
    }

    pub fn get_item(&self, id: Uuid) -> Result<MenuItem, DomainError> {
        self.repo.find_by_id(id)?.ok_or_else(|| {
            log::debug!("menu item {id} not found");
            DomainError::NotFound("Menu item")
        })
    }

    pub fn create_item(&self, item: NewMenuItem) -> Result<MenuItem, DomainError> {
        let item = validate(item).inspect_err(|e| log::warn!("rejected menu item: {e}"))?;
        let created = self.repo.create(item)?;
        log::info!("created menu item {} ({})", created.id, created.name);
        Ok(created)
    }

    pub fn categories(&self) -> Result<BTreeSet<String>, DomainError> {
        Ok(derive_categories(&self.repo.list()?))
    }
}

/// Distinct, non-empty category names across `items`.
pub fn derive_categories(items: &[MenuItem]) -> BTreeSet<String> {
    items
        .iter()
        .flat_map(|item| item.category_names())
        .map(str::to_string)
        .collect()
}

fn validate(mut item: NewMenuItem) -> Result<NewMenuItem, DomainError> {
    item.name = item.name.trim().to_string();
    if item.name.is_empty() {
        return Err(DomainError::InvalidInput("name must not be empty".to_string()));
    }
    if item.price < BigDecimal::zero() {
        return Err(DomainError::InvalidInput("price must not be negative".to_string()));
    }
    Ok(item)
}
