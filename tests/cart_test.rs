//! The cart's HTTP order gateway against a real listener backed by the
//! in-memory repositories.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use restaurant_ordering::application::{CatalogService, OrderService};
use restaurant_ordering::cart::{
    Cart, CartEntry, CartError, HttpOrderGateway, MemoryStorage, OrderDetails, OrderGateway,
};
use restaurant_ordering::configure;
use restaurant_ordering::handlers::orders::CreateOrderRequest;
use restaurant_ordering::infrastructure::memory::{
    InMemoryMenuRepository, InMemoryOrderRepository,
};

/// Bind the app on an ephemeral port and return its base URL.
fn spawn_app() -> String {
    let catalog = web::Data::new(CatalogService::new(Arc::new(
        InMemoryMenuRepository::default(),
    )));
    let orders = web::Data::new(OrderService::new(Arc::new(
        InMemoryOrderRepository::default(),
    )));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .app_data(orders.clone())
            .configure(configure)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    format!("http://{addr}")
}

fn soda() -> CartEntry {
    CartEntry {
        id: "a".to_string(),
        name: "Soda".to_string(),
        categories: Some("drinks".to_string()),
        description: None,
        price: Some(2.0),
    }
}

#[actix_web::test]
async fn submitted_cart_is_created_over_http() {
    let gateway = HttpOrderGateway::new(spawn_app());
    let mut cart = Cart::load(MemoryStorage::default()).expect("load cart");
    cart.add(soda()).expect("add soda");

    let confirmation = cart
        .submit(
            &gateway,
            OrderDetails {
                table_number: Some("9".to_string()),
                ..OrderDetails::default()
            },
        )
        .await
        .expect("submit failed");

    assert_eq!(confirmation.order.items, vec![soda()]);
    assert_eq!(confirmation.order.table_number.as_deref(), Some("9"));
    assert_eq!(confirmation.order.total_price, "2.00");
    assert!(cart.is_empty());
}

#[actix_web::test]
async fn rejected_order_carries_server_message() {
    let gateway = HttpOrderGateway::new(spawn_app());
    let request = CreateOrderRequest {
        items: vec![],
        customer_name: None,
        customer_contact: None,
        table_number: None,
        special_instructions: None,
        total_price: None,
        timestamp: None,
        created_at: None,
    };

    let err = gateway.create_order(&request).await.unwrap_err();

    match err {
        CartError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("at least one item"), "message: {message}");
        }
        other => panic!("expected a rejection, got {other:?}"),
    }
}

#[actix_web::test]
async fn unreachable_service_is_a_transport_error() {
    let gateway = HttpOrderGateway::new("http://127.0.0.1:1");
    let mut cart = Cart::load(MemoryStorage::default()).expect("load cart");
    cart.add(soda()).expect("add soda");

    let err = cart
        .submit(&gateway, OrderDetails::default())
        .await
        .unwrap_err();

    assert!(matches!(err, CartError::Transport(_)));
    assert_eq!(cart.entries(), &[soda()]);
}
