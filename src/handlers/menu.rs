use actix_web::{web, HttpResponse};
use bigdecimal::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::application::CatalogService;
use crate::domain::menu::{MenuItem, NewMenuItem};
use crate::domain::order::decimal_from_f64;
use crate::errors::AppError;

use super::parse_id;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateMenuItemRequest {
    pub name: String,
    /// Comma-separated category tags, e.g. "mains,grill".
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl TryFrom<CreateMenuItemRequest> for NewMenuItem {
    type Error = AppError;

    fn try_from(req: CreateMenuItemRequest) -> Result<Self, Self::Error> {
        let price = decimal_from_f64(req.price)
            .ok_or_else(|| AppError::Validation("price must be a finite number".to_string()))?;
        Ok(NewMenuItem {
            name: req.name,
            categories: req.categories,
            description: req.description,
            price,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItemResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            price: item.price.to_f64().unwrap_or_default(),
            name: item.name,
            categories: item.categories,
            description: item.description,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMenuParams {
    /// Only return items tagged with this category.
    pub category: Option<String>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /menu
///
/// Returns every menu item, or only those tagged with `category`.
#[utoipa::path(
    get,
    path = "/menu",
    params(ListMenuParams),
    responses(
        (status = 200, description = "Menu items", body = [MenuItemResponse]),
        (status = 500, description = "Store unavailable"),
    ),
    tag = "menu"
)]
pub async fn list_items(
    catalog: web::Data<CatalogService>,
    query: web::Query<ListMenuParams>,
) -> Result<HttpResponse, AppError> {
    let category = query.into_inner().category;

    let items = web::block(move || match category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => catalog.list_items_in_category(category),
        _ => catalog.list_items(),
    })
    .await??;

    let body: Vec<MenuItemResponse> = items.into_iter().map(MenuItemResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /menu/categories
///
/// Distinct category names across the catalog, sorted.
#[utoipa::path(
    get,
    path = "/menu/categories",
    responses(
        (status = 200, description = "Category names", body = [String]),
        (status = 500, description = "Store unavailable"),
    ),
    tag = "menu"
)]
pub async fn list_categories(
    catalog: web::Data<CatalogService>,
) -> Result<HttpResponse, AppError> {
    let categories = web::block(move || catalog.categories()).await??;
    Ok(HttpResponse::Ok().json(categories))
}

/// GET /menu/{id}
#[utoipa::path(
    get,
    path = "/menu/{id}",
    params(
        ("id" = String, Path, description = "Menu item id"),
    ),
    responses(
        (status = 200, description = "Menu item found", body = MenuItemResponse),
        (status = 404, description = "Menu item not found"),
        (status = 500, description = "Store unavailable"),
    ),
    tag = "menu"
)]
pub async fn get_item(
    catalog: web::Data<CatalogService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner(), "Menu item")?;

    let item = web::block(move || catalog.get_item(id)).await??;

    Ok(HttpResponse::Ok().json(MenuItemResponse::from(item)))
}

/// POST /menu
#[utoipa::path(
    post,
    path = "/menu",
    request_body = CreateMenuItemRequest,
    responses(
        (status = 201, description = "Menu item created", body = MenuItemResponse),
        (status = 400, description = "Malformed or invalid menu item"),
        (status = 500, description = "Store unavailable"),
    ),
    tag = "menu"
)]
pub async fn create_item(
    catalog: web::Data<CatalogService>,
    body: web::Json<CreateMenuItemRequest>,
) -> Result<HttpResponse, AppError> {
    let item = NewMenuItem::try_from(body.into_inner())?;

    let created = web::block(move || catalog.create_item(item)).await??;

    Ok(HttpResponse::Created().json(MenuItemResponse::from(created)))
}
