// src/api/mod.rs - HTTP gateway to the storefront backend

//! Thin typed wrapper over the backend REST API. Every call site goes through
//! `ApiClient`, which owns URL construction, credential propagation, the
//! request timeout, and the mapping from HTTP status to the error taxonomy.
//! The transport itself sits behind `HttpProvider` so tests can substitute a
//! mock and the web build can use the browser's fetch.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::cart::{CartLine, WishlistLine};
use crate::catalog::{CatalogQuery, Product, ServerPage};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::session::UserRole;
use crate::types::ProductId;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Network request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRequest {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
    pub timeout_ms: Option<u64>,
}

/// Network response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

#[cfg(not(target_arch = "wasm32"))]
pub type DynHttp = dyn HttpProvider + Send + Sync;

#[cfg(target_arch = "wasm32")]
pub type DynHttp = dyn HttpProvider + Sync;

pub type HttpArc = Arc<DynHttp>;

/// Transport abstraction
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait HttpProvider: HttpBounds {
    async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse>;
}

#[cfg(not(target_arch = "wasm32"))]
pub trait HttpBounds: Send + Sync {}

#[cfg(target_arch = "wasm32")]
pub trait HttpBounds: Sync {}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ProductPageResponse {
    #[serde(rename = "sortedProducts")]
    pub sorted_products: Vec<Product>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    pub num_pages: usize,
}

impl From<ProductPageResponse> for ServerPage {
    fn from(response: ProductPageResponse) -> Self {
        ServerPage {
            products: response.sorted_products,
            total_count: response.total_count,
            total_pages: response.num_pages,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CartItemsResponse {
    cart: Vec<CartLine>,
}

#[derive(Debug, Clone, Deserialize)]
struct WishlistItemsResponse {
    wishlist: Vec<WishlistLine>,
}

/// Acknowledgement body mutating endpoints return
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MutationAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginStatus {
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
    #[serde(rename = "userType", default)]
    pub user_type: Option<String>,
}

impl LoginStatus {
    pub fn role(&self) -> UserRole {
        if !self.is_logged_in {
            return UserRole::Guest;
        }
        match self.user_type.as_deref() {
            Some("seller") => UserRole::Seller,
            _ => UserRole::Buyer,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CountsResponse {
    pub cart_length: u32,
    pub wish_length: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SellerStatsResponse {
    #[serde(rename = "totalProducts")]
    pub total_products: u32,
    #[serde(rename = "totalOrders")]
    pub total_orders: u32,
    #[serde(rename = "pendingOrders")]
    pub pending_orders: u32,
    #[serde(rename = "monthlyRevenue", default)]
    pub monthly_revenue: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalesMapResponse {
    #[serde(rename = "salesByDate")]
    pub sales_by_date: BTreeMap<String, u32>,
    pub year_joined: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalyticsCounters {
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub times_ordered: u64,
    #[serde(default)]
    pub added_to_cart: u64,
    #[serde(default)]
    pub times_returned: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductAnalyticsResponse {
    pub analytics: AnalyticsCounters,
    pub info: Product,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Typed client for the backend API
#[derive(Clone)]
pub struct ApiClient {
    provider: HttpArc,
    config: ApiConfig,
    session_token: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(provider: HttpArc, config: ApiConfig) -> Self {
        Self {
            provider,
            config,
            session_token: None,
        }
    }

    /// Attaches the session credential sent with every subsequent request
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    fn url(&self, path_and_query: &str) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            path_and_query
        )
    }

    fn headers(&self, has_body: bool) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        if has_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(token) = &self.session_token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    async fn send(
        &self,
        method: &str,
        path_and_query: &str,
        body: Option<serde_json::Value>,
    ) -> Result<NetworkResponse> {
        let body_bytes = match body {
            Some(value) => Some(serde_json::to_vec(&value)?),
            None => None,
        };

        let request = NetworkRequest {
            method: method.to_string(),
            url: self.url(path_and_query),
            headers: self.headers(body_bytes.is_some()),
            body: body_bytes,
            timeout_ms: Some(self.config.timeout_ms),
        };

        let response = self.provider.request(request).await?;
        self.check_status(path_and_query, response)
    }

    /// Maps the response status onto the error taxonomy. A rejection body's
    /// `message` field, when present, becomes the user-facing reason.
    fn check_status(&self, endpoint: &str, response: NetworkResponse) -> Result<NetworkResponse> {
        match response.status_code {
            200..=299 => Ok(response),
            401 => Err(Error::authentication(format!(
                "Backend returned 401 for {}",
                endpoint
            ))
            .source("api")),
            400 | 403 => {
                let reason = serde_json::from_slice::<MutationAck>(&response.body)
                    .ok()
                    .and_then(|ack| ack.message)
                    .unwrap_or_else(|| "Action rejected by the server".to_string());
                Err(Error::rejected(endpoint, reason).source("api"))
            }
            404 => Err(Error::not_found(endpoint, format!("{} not found", endpoint)).source("api")),
            status => Err(Error::network(
                Some(status),
                endpoint,
                format!("Unexpected status {} from {}", status, endpoint),
            )
            .source("api")),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let response = self.send("GET", path_and_query, None).await?;
        serde_json::from_slice(&response.body).map_err(|e| {
            Error::serialization(format!(
                "Failed to decode response from {}: {}",
                path_and_query, e
            ))
            .source("api")
        })
    }

    // -- catalog ------------------------------------------------------------

    /// GET /product/fetchProducts
    pub async fn fetch_products(&self, query: &CatalogQuery) -> Result<ServerPage> {
        let mut path = format!(
            "/product/fetchProducts?page={}&limit={}&sortBy={}",
            query.page,
            query.limit,
            query.sort_by.as_param()
        );
        if let Some(category) = &query.category {
            path.push_str("&category=");
            path.push_str(&urlencoding::encode(category));
        }
        let response: ProductPageResponse = self.get_json(&path).await?;
        Ok(response.into())
    }

    // -- cart ---------------------------------------------------------------

    /// GET /cart/getItems
    pub async fn cart_items(&self) -> Result<Vec<CartLine>> {
        let response: CartItemsResponse = self.get_json("/cart/getItems").await?;
        Ok(response.cart)
    }

    /// POST /cart/addItem/{id}
    pub async fn add_cart_item(&self, id: &ProductId, size: Option<&str>) -> Result<()> {
        let path = format!("/cart/addItem/{}", id);
        self.send("POST", &path, Some(serde_json::json!({ "size_": size })))
            .await?;
        Ok(())
    }

    /// PATCH /cart/increment/{id}
    pub async fn increment_cart_item(&self, id: &ProductId, size: Option<&str>) -> Result<()> {
        let path = format!("/cart/increment/{}", id);
        self.send("PATCH", &path, Some(serde_json::json!({ "size": size })))
            .await?;
        Ok(())
    }

    /// PATCH /cart/decrement/{id}
    pub async fn decrement_cart_item(&self, id: &ProductId, size: Option<&str>) -> Result<()> {
        let path = format!("/cart/decrement/{}", id);
        self.send("PATCH", &path, Some(serde_json::json!({ "size": size })))
            .await?;
        Ok(())
    }

    /// DELETE /cart/deleteItem/{id}
    pub async fn delete_cart_item(&self, id: &ProductId, size: Option<&str>) -> Result<()> {
        let path = format!("/cart/deleteItem/{}", id);
        self.send("DELETE", &path, Some(serde_json::json!({ "size": size })))
            .await?;
        Ok(())
    }

    // -- wishlist -----------------------------------------------------------

    /// GET /wishlist/getItems
    pub async fn wishlist_items(&self) -> Result<Vec<WishlistLine>> {
        let response: WishlistItemsResponse = self.get_json("/wishlist/getItems").await?;
        Ok(response.wishlist)
    }

    /// POST /wishlist/add/{id}
    pub async fn add_wishlist_item(&self, id: &ProductId, size: Option<&str>) -> Result<()> {
        let path = format!("/wishlist/add/{}", id);
        self.send("POST", &path, Some(serde_json::json!({ "size": size })))
            .await?;
        Ok(())
    }

    /// DELETE /wishlist/remove/{id}
    pub async fn remove_wishlist_item(&self, id: &ProductId, size: Option<&str>) -> Result<()> {
        let path = format!("/wishlist/remove/{}", id);
        self.send("DELETE", &path, Some(serde_json::json!({ "size": size })))
            .await?;
        Ok(())
    }

    // -- session ------------------------------------------------------------

    /// GET /user/verifyLogin
    pub async fn verify_login(&self) -> Result<LoginStatus> {
        self.get_json("/user/verifyLogin").await
    }

    /// GET /user/getCWL
    pub async fn counts(&self) -> Result<CountsResponse> {
        self.get_json("/user/getCWL").await
    }

    // -- seller -------------------------------------------------------------

    /// GET /seller/stats
    pub async fn seller_stats(&self) -> Result<SellerStatsResponse> {
        self.get_json("/seller/stats").await
    }

    /// GET /seller/SalesMap
    pub async fn sales_map(&self) -> Result<SalesMapResponse> {
        self.get_json("/seller/SalesMap").await
    }

    /// GET /seller/{productId}/analytics
    pub async fn product_analytics(&self, id: &ProductId) -> Result<ProductAnalyticsResponse> {
        self.get_json(&format!("/seller/{}/analytics", id)).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use parking_lot::Mutex;

    /// Records every request and replays a canned response queue.
    #[derive(Debug, Default)]
    pub struct MockProvider {
        pub requests: Mutex<Vec<NetworkRequest>>,
        pub responses: Mutex<Vec<Result<NetworkResponse>>>,
    }

    impl MockProvider {
        pub fn returning(status: u16, body: &str) -> Self {
            let provider = Self::default();
            provider.push(status, body);
            provider
        }

        pub fn push(&self, status: u16, body: &str) {
            self.responses.lock().push(Ok(NetworkResponse {
                status_code: status,
                headers: HashMap::new(),
                body: body.as_bytes().to_vec(),
            }));
        }

        pub fn push_transport_failure(&self) {
            self.responses.lock().push(Err(Error::network(
                None,
                "mock",
                "connection refused",
            )));
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().len()
        }

        pub fn last_request(&self) -> NetworkRequest {
            self.requests.lock().last().cloned().expect("no requests")
        }
    }

    impl HttpBounds for MockProvider {}

    #[async_trait::async_trait]
    impl HttpProvider for MockProvider {
        async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse> {
            self.requests.lock().push(request);
            let mut responses = self.responses.lock();
            if responses.is_empty() {
                // Default to an empty OK so count-only tests stay terse.
                return Ok(NetworkResponse {
                    status_code: 200,
                    headers: HashMap::new(),
                    body: b"{}".to_vec(),
                });
            }
            responses.remove(0)
        }
    }

    pub fn client_with(provider: Arc<MockProvider>) -> ApiClient {
        ApiClient::new(provider, ApiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::catalog::SortBy;

    use tokio_test::block_on;

    #[test]
    fn test_fetch_products_builds_query_string() {
        let provider = Arc::new(MockProvider::returning(
            200,
            r#"{"sortedProducts":[],"totalCount":0,"num_pages":0}"#,
        ));
        let client = client_with(provider.clone());

        let query = CatalogQuery::new(12, SortBy::PriceLow)
            .with_category(Some("summer dresses".to_string()))
            .with_page(3);

        block_on(async {
            client.fetch_products(&query).await.unwrap();
        });

        let request = provider.last_request();
        assert!(request.url.contains("/product/fetchProducts?"));
        assert!(request.url.contains("page=3"));
        assert!(request.url.contains("limit=12"));
        assert!(request.url.contains("sortBy=price-low"));
        assert!(request.url.contains("category=summer%20dresses"));
        assert_eq!(request.timeout_ms, Some(10_000));
    }

    #[test]
    fn test_status_mapping() {
        let provider = Arc::new(MockProvider::default());
        provider.push(401, "{}");
        provider.push(403, r#"{"success":false,"message":"Insufficient stock"}"#);
        provider.push(404, "{}");
        provider.push(502, "{}");
        let client = client_with(provider);

        block_on(async {
            let auth = client.cart_items().await.unwrap_err();
            assert!(matches!(auth.kind, crate::error::ErrorKind::Authentication { .. }));

            let rejected = client.add_cart_item(&"p1".to_string(), Some("M")).await.unwrap_err();
            assert_eq!(rejected.user_message(), "Insufficient stock");

            let missing = client.counts().await.unwrap_err();
            assert!(matches!(missing.kind, crate::error::ErrorKind::NotFound { .. }));

            let transport = client.counts().await.unwrap_err();
            assert!(matches!(
                transport.kind,
                crate::error::ErrorKind::Network { status_code: Some(502), .. }
            ));
        });
    }

    #[test]
    fn test_session_token_propagates_to_mutations() {
        let provider = Arc::new(MockProvider::default());
        let client = client_with(provider.clone()).with_session_token("tok-123");

        block_on(async {
            client.add_cart_item(&"p1".to_string(), Some("M")).await.unwrap();
        });

        let request = provider.last_request();
        assert_eq!(request.method, "POST");
        assert!(request.url.ends_with("/cart/addItem/p1"));
        assert_eq!(
            request.headers.get("Authorization").map(String::as_str),
            Some("Bearer tok-123")
        );
    }

    #[test]
    fn test_login_status_roles() {
        let guest = LoginStatus { is_logged_in: false, user_type: None };
        assert_eq!(guest.role(), UserRole::Guest);

        let buyer = LoginStatus {
            is_logged_in: true,
            user_type: Some("buyer".to_string()),
        };
        assert_eq!(buyer.role(), UserRole::Buyer);

        let seller = LoginStatus {
            is_logged_in: true,
            user_type: Some("seller".to_string()),
        };
        assert_eq!(seller.role(), UserRole::Seller);
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let provider = Arc::new(MockProvider::returning(200, "not json"));
        let client = client_with(provider);

        block_on(async {
            let error = client.counts().await.unwrap_err();
            assert!(matches!(error.kind, crate::error::ErrorKind::Serialization));
        });
    }

    #[test]
    fn test_sales_map_decodes() {
        let provider = Arc::new(MockProvider::returning(
            200,
            r#"{"salesByDate":{"2025-01-04":3},"year_joined":2023}"#,
        ));
        let client = client_with(provider);

        block_on(async {
            let response = client.sales_map().await.unwrap();
            assert_eq!(response.year_joined, 2023);
            assert_eq!(response.sales_by_date.get("2025-01-04"), Some(&3));
        });
    }
}
