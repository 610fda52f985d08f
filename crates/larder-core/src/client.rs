//! HTTP client for the inventory REST API.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{InventoryItem, ItemId, ItemUpdate, NewItem};
use crate::store::InventoryApi;
use crate::util::{compact_text, is_http_url, sanitize};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    base_url: String,
    client: reqwest::Client,
}

/// Response wrapper shared by every endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
    message: Option<String>,
}

impl HttpInventoryClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !is_http_url(base_url) {
            return Err(Error::InvalidInput(format!(
                "API URL must start with http:// or https://: {base_url}"
            )));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            client: reqwest::Client::new(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn items_url(&self) -> String {
        format!("{}/api/inventory", self.base_url)
    }

    fn item_url(&self, id: &ItemId) -> String {
        format!(
            "{}/api/inventory/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    /// Send a request and unwrap the envelope, mapping failures by status.
    async fn call<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Envelope<T>> {
        let response = request.header("Accept", "application/json").send().await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope = match serde_json::from_str::<Envelope<T>>(&body) {
            Ok(envelope) => envelope,
            Err(error) if status.is_success() => return Err(error.into()),
            Err(_) => {
                return Err(status_error(
                    status,
                    format!("HTTP {}: {}", status.as_u16(), compact_text(&body)),
                ))
            }
        };

        if status.is_success() && envelope.success {
            return Ok(envelope);
        }

        let message = envelope
            .error
            .or(envelope.message)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        Err(status_error(status, message))
    }

    async fn call_data<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        self.call::<T>(request)
            .await?
            .data
            .ok_or_else(|| Error::Api("Response is missing data".to_string()))
    }
}

fn status_error(status: StatusCode, message: String) -> Error {
    match status {
        StatusCode::NOT_FOUND => Error::NotFound(message),
        StatusCode::BAD_REQUEST => Error::InvalidInput(message),
        _ => Error::Api(sanitize(&message)),
    }
}

/// Name the requested id in a 404 instead of echoing the server's message.
fn for_item(id: &ItemId) -> impl FnOnce(Error) -> Error + '_ {
    move |error| match error {
        Error::NotFound(_) => Error::NotFound(id.to_string()),
        other => other,
    }
}

impl InventoryApi for HttpInventoryClient {
    async fn list_items(&self) -> Result<Vec<InventoryItem>> {
        self.call_data(self.client.get(self.items_url())).await
    }

    async fn get_item(&self, id: &ItemId) -> Result<InventoryItem> {
        self.call_data(self.client.get(self.item_url(id)))
            .await
            .map_err(for_item(id))
    }

    async fn create_item(&self, item: &NewItem) -> Result<InventoryItem> {
        self.call_data(self.client.post(self.items_url()).json(item))
            .await
    }

    async fn update_item(&self, id: &ItemId, update: &ItemUpdate) -> Result<InventoryItem> {
        self.call_data(self.client.put(self.item_url(id)).json(update))
            .await
            .map_err(for_item(id))
    }

    async fn delete_item(&self, id: &ItemId) -> Result<()> {
        self.call::<serde_json::Value>(self.client.delete(self.item_url(id)))
            .await
            .map_err(for_item(id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_normalizes_base_url() {
        let client = HttpInventoryClient::new(" http://localhost:8080/ ").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.items_url(), "http://localhost:8080/api/inventory");
    }

    #[test]
    fn new_rejects_non_http_url() {
        assert!(HttpInventoryClient::new("localhost:8080").is_err());
    }

    #[test]
    fn item_url_encodes_id() {
        let client = HttpInventoryClient::new(DEFAULT_API_URL).unwrap();
        assert_eq!(
            client.item_url(&ItemId::from("a b")),
            "http://127.0.0.1:8080/api/inventory/a%20b"
        );
    }

    #[test]
    fn status_error_maps_not_found_and_bad_request() {
        assert!(status_error(StatusCode::NOT_FOUND, "Item not found".to_string()).is_not_found());
        assert!(matches!(
            status_error(StatusCode::BAD_REQUEST, "Missing required fields".to_string()),
            Error::InvalidInput(_)
        ));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
            Error::Api(_)
        ));
    }

    #[test]
    fn not_found_names_the_item() {
        let id = ItemId::from("1763642299355");
        let error = for_item(&id)(status_error(
            StatusCode::NOT_FOUND,
            "Item not found".to_string(),
        ));
        assert_eq!(error.to_string(), "Item not found: 1763642299355");

        let other = for_item(&id)(Error::Api("boom".to_string()));
        assert_eq!(other.to_string(), "Inventory API error: boom");
    }

    #[test]
    fn envelope_parses_error_shape() {
        let envelope: Envelope<InventoryItem> =
            serde_json::from_str(r#"{"success":false,"error":"Item not found"}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("Item not found"));
    }
}
