use std::future::Future;

use reqwest::Client;
use serde::Deserialize;

use crate::handlers::orders::{CreateOrderRequest, OrderResponse};

use super::CartError;

/// Where a finished cart is sent.
pub trait OrderGateway {
    fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> impl Future<Output = Result<OrderResponse, CartError>> + Send;
}

/// Talks to the service's `POST /order` endpoint.
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpOrderGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Send through a preconfigured client, e.g. one with a request timeout.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl OrderGateway for HttpOrderGateway {
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<OrderResponse, CartError> {
        let resp = self
            .client
            .post(format!("{}/order", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(CartError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let gateway = HttpOrderGateway::new("http://localhost:8080/");
        assert_eq!(gateway.base_url(), "http://localhost:8080");
    }
}
