use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::menu::{MenuItem, NewMenuItem};
use crate::domain::ports::MenuRepository;
use crate::schema::menu_items;

use super::models::{MenuItemRow, NewMenuItemRow};

pub struct DieselMenuRepository {
    pool: DbPool,
}

impl DieselMenuRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl MenuRepository for DieselMenuRepository {
    fn list(&self) -> Result<Vec<MenuItem>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = menu_items::table
            .select(MenuItemRow::as_select())
            .order((menu_items::created_at.asc(), menu_items::id.asc()))
            .load(&mut conn)?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = menu_items::table
            .filter(menu_items::id.eq(id))
            .select(MenuItemRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(MenuItem::from))
    }

    fn create(&self, item: NewMenuItem) -> Result<MenuItem, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(menu_items::table)
            .values(&NewMenuItemRow {
                id: Uuid::new_v4(),
                name: item.name,
                categories: item.categories,
                description: item.description,
                price: item.price,
            })
            .returning(MenuItemRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }
}
