//! Order API trait and its HTTP implementation

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::types::{ApiErrorBody, Cursor, Item, Order};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Read access to orders and their items
///
/// Failures are reported in the user-facing taxonomy: `get_order` fails with
/// `Error::Lookup`, `get_items` with `Error::PageFetch`.
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Fetch a single order by uid
    async fn get_order(&self, order_uid: &str) -> Result<Order>;

    /// Fetch up to `limit` items with `id > last_id`, ordered by id
    async fn get_items(&self, order_uid: &str, last_id: Cursor, limit: u32) -> Result<Vec<Item>>;
}

/// `OrderApi` over HTTP
#[derive(Debug)]
pub struct HttpOrderApi {
    client: HttpClient,
}

impl HttpOrderApi {
    /// Wrap an existing HTTP client (must have a base URL)
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Build the API from client configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpClient::with_config(config.http_client_config())?))
    }
}

#[async_trait]
impl OrderApi for HttpOrderApi {
    async fn get_order(&self, order_uid: &str) -> Result<Order> {
        let url = self.client.endpoint(&["api", "orders", order_uid])?;
        debug!(order_uid, "fetching order");

        self.client
            .get_json(url, RequestConfig::new())
            .await
            .map_err(|e| {
                warn!(order_uid, error = %e, "order lookup failed");
                Error::lookup(describe_failure("Order not found", "Failed to load order", &e))
            })
    }

    async fn get_items(&self, order_uid: &str, last_id: Cursor, limit: u32) -> Result<Vec<Item>> {
        let url = self
            .client
            .endpoint(&["api", "orders", order_uid, "items"])?;
        debug!(order_uid, last_id, limit, "fetching items page");

        let request = RequestConfig::new()
            .query("last_id", last_id)
            .query("limit", limit);

        // The order service encodes a page with no rows as `null`
        let items: Option<Vec<Item>> = self.client.get_json(url, request).await.map_err(|e| {
            warn!(order_uid, last_id, error = %e, "items page fetch failed");
            Error::page_fetch(describe_failure("Failed to load items", "Failed to load items", &e))
        })?;
        Ok(items.unwrap_or_default())
    }
}

/// Turn a transport error into the detail shown to the user
///
/// Status failures read `"{status_prefix} (status: N)"`, followed by the
/// server's own message when the body is the API's JSON error payload.
fn describe_failure(status_prefix: &str, prefix: &str, error: &Error) -> String {
    match error {
        Error::HttpStatus { status, body } => {
            match serde_json::from_str::<ApiErrorBody>(body) {
                Ok(api) if !api.message.is_empty() => {
                    format!("{status_prefix} (status: {status}): {}", api.message)
                }
                _ => format!("{status_prefix} (status: {status})"),
            }
        }
        other => format!("{prefix}: {other}"),
    }
}
