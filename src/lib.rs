pub mod application;
pub mod cart;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::{CatalogService, OrderService};
use errors::AppError;
use infrastructure::menu_repo::DieselMenuRepository;
use infrastructure::order_repo::DieselOrderRepository;

pub use config::Config;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::menu::list_items,
        handlers::menu::list_categories,
        handlers::menu::get_item,
        handlers::menu::create_item,
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::create_order,
        handlers::orders::complete_order,
    ),
    components(schemas(
        handlers::menu::CreateMenuItemRequest,
        handlers::menu::MenuItemResponse,
        handlers::orders::CreateOrderRequest,
        handlers::orders::OrderResponse,
        handlers::orders::MessageResponse,
        domain::order::OrderItem,
    )),
    tags(
        (name = "menu", description = "Catalog of menu items"),
        (name = "orders", description = "Submitted orders"),
    )
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(
    pool: &DbPool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Register the REST routes and the JSON extractor settings. The services
/// themselves are expected as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(err.to_string()).into()
    }))
    .service(
        web::scope("/menu")
            .route("", web::get().to(handlers::menu::list_items))
            .route("", web::post().to(handlers::menu::create_item))
            .route("/categories", web::get().to(handlers::menu::list_categories))
            .route("/{id}", web::get().to(handlers::menu::get_item)),
    )
    .service(
        web::scope("/order")
            .route("", web::get().to(handlers::orders::list_orders))
            .route("", web::post().to(handlers::orders::create_order))
            .route("/{id}", web::get().to(handlers::orders::get_order))
            .route("/{id}", web::delete().to(handlers::orders::complete_order)),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`, backed by the
/// Postgres repositories.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let catalog = web::Data::new(CatalogService::new(Arc::new(DieselMenuRepository::new(
        pool.clone(),
    ))));
    let orders = web::Data::new(OrderService::new(Arc::new(DieselOrderRepository::new(
        pool,
    ))));
    let openapi = ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .app_data(orders.clone())
            .wrap(Logger::default())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
