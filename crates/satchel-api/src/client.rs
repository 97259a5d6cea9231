//! # Storefront Client
//!
//! HTTP client for the two storefront endpoints.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       StorefrontClient                                  │
//! │                                                                         │
//! │  fetch_products()                                                       │
//! │    GET {base}/api/products                                              │
//! │      ├── non-success status  ──► ApiError::CatalogStatus                │
//! │      ├── transport failure   ──► ApiError::Http                         │
//! │      └── 200 + JSON array    ──► Vec<Product>                           │
//! │                                                                         │
//! │  submit_sale(cart)                                                      │
//! │    POST {base}/api/sale  {"cartItems": [...]}                           │
//! │      ├── non-success status  ──► ApiError::SaleStatus                   │
//! │      ├── transport / decode  ──► ApiError::Http                         │
//! │      └── 200 + {"profit"}    ──► SaleResult                             │
//! │                                                                         │
//! │  One reqwest::Client, built once with the configured timeout.           │
//! │  The timeout doubles as the sale submission's only cancellation path.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use satchel_core::{Cart, Product};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::wire::{SaleRequest, SaleResult};

/// HTTP client for the storefront backend.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    client: reqwest::Client,
    base_url: String,
}

impl StorefrontClient {
    /// Builds a client from configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(StorefrontClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetches the full product catalog.
    ///
    /// Called once per page/command; the caller threads the result through
    /// explicitly instead of stashing it in ambient state.
    pub async fn fetch_products(&self) -> ApiResult<Vec<Product>> {
        let url = self.url("api/products");
        debug!(url = %url, "fetching catalog");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "catalog request rejected");
            return Err(ApiError::CatalogStatus {
                status: status.as_u16(),
            });
        }

        let products: Vec<Product> = response.json().await?;
        info!(count = products.len(), "catalog loaded");
        Ok(products)
    }

    /// Submits the cart as an order to the sale endpoint.
    ///
    /// The caller decides what happens to the persisted cart based on the
    /// outcome; this method only speaks HTTP.
    pub async fn submit_sale(&self, cart: &Cart) -> ApiResult<SaleResult> {
        let url = self.url("api/sale");
        let request = SaleRequest::from_cart(cart);
        debug!(url = %url, lines = request.cart_items.len(), "submitting sale");

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "sale submission rejected");
            return Err(ApiError::SaleStatus {
                status: status.as_u16(),
            });
        }

        let result: SaleResult = response.json().await?;
        info!(profit = %result.profit(), "sale recorded");
        Ok(result)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{serve, CapturedSale};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use satchel_core::Money;

    fn catalog_json() -> serde_json::Value {
        serde_json::json!([
            {
                "id": 1,
                "name": "Tote",
                "description": "Everyday carry",
                "price": 10100,
                "image": "images\\tote.jpg",
                "category": "Mini Bags"
            },
            {
                "id": 2,
                "name": "Weekender",
                "description": "Two nights away",
                "price": 45000,
                "image": "images/weekender.jpg",
                "category": "Travel Bags"
            }
        ])
    }

    #[tokio::test]
    async fn test_fetch_products_decodes_catalog() {
        let app = Router::new().route(
            "/api/products",
            get(|| async { Json(catalog_json()) }),
        );
        let base = serve(app).await;

        let client = StorefrontClient::new(&ApiConfig::with_base_url(base)).unwrap();
        let products = client.fetch_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Tote");
        assert_eq!(products[0].price(), Money::from_cents(10100));
        assert_eq!(products[1].category, "Travel Bags");
    }

    #[tokio::test]
    async fn test_fetch_products_non_success_status() {
        let app = Router::new().route(
            "/api/products",
            get(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = serve(app).await;

        let client = StorefrontClient::new(&ApiConfig::with_base_url(base)).unwrap();
        let err = client.fetch_products().await.unwrap_err();

        assert!(matches!(err, ApiError::CatalogStatus { status: 500 }));
        assert!(err.is_catalog_failure());
    }

    #[tokio::test]
    async fn test_submit_sale_sends_backend_payload() {
        let captured = CapturedSale::default();
        let seen = captured.clone();
        let app = Router::new().route(
            "/api/sale",
            post(move |Json(body): Json<serde_json::Value>| async move {
                seen.record(body);
                Json(serde_json::json!({"profit": 50.0}))
            }),
        );
        let base = serve(app).await;

        let mut cart = Cart::new();
        let tote = Product {
            id: 1,
            name: "Tote".to_string(),
            description: String::new(),
            price_cents: 10100,
            image_path: "images/tote.jpg".to_string(),
            category: "Mini Bags".to_string(),
        };
        cart.add_product(&tote).unwrap();
        cart.add_product(&tote).unwrap();

        let client = StorefrontClient::new(&ApiConfig::with_base_url(base)).unwrap();
        let result = client.submit_sale(&cart).await.unwrap();

        assert_eq!(result.profit(), Money::from_cents(5000));

        let body = captured.take().expect("sale endpoint was hit");
        assert_eq!(body["cartItems"][0]["price"], 101.0);
        assert_eq!(body["cartItems"][0]["quantity"], 2);
    }

    #[tokio::test]
    async fn test_submit_sale_non_success_status() {
        let app = Router::new().route(
            "/api/sale",
            post(|| async { (axum::http::StatusCode::BAD_GATEWAY, "down") }),
        );
        let base = serve(app).await;

        let mut cart = Cart::new();
        cart.add_product(&Product {
            id: 1,
            name: "Tote".to_string(),
            description: String::new(),
            price_cents: 10100,
            image_path: String::new(),
            category: String::new(),
        })
        .unwrap();

        let client = StorefrontClient::new(&ApiConfig::with_base_url(base)).unwrap();
        let err = client.submit_sale(&cart).await.unwrap_err();

        assert!(matches!(err, ApiError::SaleStatus { status: 502 }));
    }

    #[tokio::test]
    async fn test_submit_sale_undecodable_body() {
        let app = Router::new().route("/api/sale", post(|| async { "not json" }));
        let base = serve(app).await;

        let mut cart = Cart::new();
        cart.add_product(&Product {
            id: 1,
            name: "Tote".to_string(),
            description: String::new(),
            price_cents: 10100,
            image_path: String::new(),
            category: String::new(),
        })
        .unwrap();

        let client = StorefrontClient::new(&ApiConfig::with_base_url(base)).unwrap();
        let err = client.submit_sale(&cart).await.unwrap_err();

        assert!(matches!(err, ApiError::Http(_)));
    }
}
