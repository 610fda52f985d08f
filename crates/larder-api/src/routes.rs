use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use larder_core::models::NewItemRequest;
use larder_core::repository::SheetInventoryRepository;
use larder_core::sheets::{GoogleSheetsClient, MemorySheet, SheetStore};
use larder_core::{InventoryItem, ItemId, ItemUpdate};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, StorageConfig};
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    repository: Arc<SheetInventoryRepository<SheetStore>>,
}

impl AppState {
    pub fn from_config(config: Arc<AppConfig>) -> larder_core::Result<Self> {
        let store = match &config.storage {
            StorageConfig::Sheets(sheets) => {
                SheetStore::Google(GoogleSheetsClient::new(sheets.clone())?)
            }
            StorageConfig::Memory => SheetStore::Memory(MemorySheet::new()),
        };
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Arc<AppConfig>, store: SheetStore) -> Self {
        Self {
            config,
            repository: Arc::new(SheetInventoryRepository::new(store)),
        }
    }

    pub fn storage_label(&self) -> &'static str {
        self.repository.backend().label()
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/inventory", get(list_items).post(create_item))
        .route(
            "/api/inventory/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
    storage: &'static str,
}

async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
        storage: state.storage_label(),
    })
}

#[derive(Debug, Serialize)]
struct DataResponse<T> {
    success: bool,
    data: T,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    success: bool,
    message: &'static str,
}

fn data<T>(data: T) -> Json<DataResponse<T>> {
    Json(DataResponse {
        success: true,
        data,
    })
}

fn log_failure(endpoint: &'static str, error: &AppError) {
    match error {
        AppError::BadRequest(_) | AppError::NotFound => {
            tracing::debug!(endpoint, %error, "Rejected request");
        }
        AppError::Upstream(_) | AppError::Internal(_) => {
            tracing::error!(endpoint, %error, "Request failed");
        }
    }
}

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::bad_request(rejection.body_text()))
}

async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<InventoryItem>>>, AppError> {
    let result = async {
        state.repository.ensure_initialized().await?;
        Ok::<_, AppError>(state.repository.list().await?)
    }
    .await;

    let items = result.inspect_err(|error| log_failure("list_items", error))?;
    tracing::debug!(endpoint = "list_items", count = items.len(), "Listed items");
    Ok(data(items))
}

async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<NewItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<InventoryItem>>), AppError> {
    let result = async {
        let new_item = parse_body(body)?.validate()?;
        state.repository.ensure_initialized().await?;
        Ok::<_, AppError>(state.repository.create(new_item).await?)
    }
    .await;

    let item = result.inspect_err(|error| log_failure("create_item", error))?;
    tracing::info!(endpoint = "create_item", item_id = %item.id, "Created item");
    Ok((StatusCode::CREATED, data(item)))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<InventoryItem>>, AppError> {
    let id = ItemId::from(id);
    let result = async {
        state
            .repository
            .get(&id)
            .await?
            .ok_or(AppError::NotFound)
    }
    .await;

    let item = result.inspect_err(|error| log_failure("get_item", error))?;
    Ok(data(item))
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ItemUpdate>, JsonRejection>,
) -> Result<Json<DataResponse<InventoryItem>>, AppError> {
    let id = ItemId::from(id);
    let result = async {
        let update = parse_body(body)?;
        Ok::<_, AppError>(state.repository.update(&id, &update).await?)
    }
    .await;

    let item = result.inspect_err(|error| log_failure("update_item", error))?;
    tracing::info!(endpoint = "update_item", item_id = %item.id, "Updated item");
    Ok(data(item))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = ItemId::from(id);
    state
        .repository
        .delete(&id)
        .await
        .map_err(AppError::from)
        .inspect_err(|error| log_failure("delete_item", error))?;

    tracing::info!(endpoint = "delete_item", item_id = %id, "Deleted item");
    Ok(Json(MessageResponse {
        success: true,
        message: "Item deleted successfully",
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use larder_core::sample::sample_items;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn memory_state() -> (AppState, MemorySheet) {
        let sheet = MemorySheet::new();
        let config = Arc::new(AppConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            storage: StorageConfig::Memory,
        });
        (
            AppState::with_store(config, SheetStore::Memory(sheet.clone())),
            sheet,
        )
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn tomatoes() -> Value {
        json!({
            "name": "Tomatoes",
            "category": "Vegetables",
            "quantity": 25,
            "unit": "kg",
            "minStock": 30,
            "price": 120,
            "supplier": "Local Farmer"
        })
    }

    #[tokio::test]
    async fn test_healthz() {
        let (state, _) = memory_state();
        let router = app_router(state);

        let (status, body) = send(&router, Method::GET, "/healthz", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
    }

    #[tokio::test]
    async fn test_list_uninitialized_returns_empty() {
        let (state, sheet) = memory_state();
        let router = app_router(state);

        let (status, body) = send(&router, Method::GET, "/api/inventory", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "data": []}));
        assert_eq!(sheet.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (state, _) = memory_state();
        let router = app_router(state);

        let (status, created) = send(&router, Method::POST, "/api/inventory", Some(tomatoes())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["success"], true);
        let id = created["data"]["id"].as_str().unwrap().to_string();
        assert!(created["data"]["lastUpdated"].is_string());

        let (status, fetched) = send(&router, Method::GET, &format!("/api/inventory/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["data"], created["data"]);
        assert_eq!(fetched["data"]["name"], "Tomatoes");
        assert_eq!(fetched["data"]["minStock"], json!(30.0));
        assert_eq!(fetched["data"]["supplier"], "Local Farmer");
    }

    #[tokio::test]
    async fn test_create_missing_fields_is_bad_request() {
        let (state, sheet) = memory_state();
        let router = app_router(state);

        let mut body = tomatoes();
        body["unit"] = json!("");
        let (status, response) = send(&router, Method::POST, "/api/inventory", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response,
            json!({"success": false, "error": "Missing required fields"})
        );
        assert!(sheet.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_accepts_zero_and_numeric_strings() {
        let (state, _) = memory_state();
        let router = app_router(state);

        let mut body = tomatoes();
        body["quantity"] = json!(0);
        body["price"] = json!("99.5");
        let (status, response) = send(&router, Method::POST, "/api/inventory", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response["data"]["quantity"], json!(0.0));
        assert_eq!(response["data"]["price"], json!(99.5));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (state, _) = memory_state();
        let router = app_router(state);

        let mut body = tomatoes();
        body["price"] = json!("cheap");
        let (status, response) = send(&router, Method::POST, "/api/inventory", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["success"], false);
        assert!(response["error"].is_string());
    }

    #[tokio::test]
    async fn test_partial_update() {
        let (state, _) = memory_state();
        let router = app_router(state);

        let (_, created) = send(&router, Method::POST, "/api/inventory", Some(tomatoes())).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let (status, updated) = send(
            &router,
            Method::PUT,
            &format!("/api/inventory/{id}"),
            Some(json!({"price": 140, "id": "ignored"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["data"]["id"], json!(id));
        assert_eq!(updated["data"]["price"], json!(140.0));
        assert_eq!(updated["data"]["quantity"], created["data"]["quantity"]);
        assert_eq!(updated["data"]["name"], "Tomatoes");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (state, sheet) = memory_state();
        let router = app_router(state);
        send(&router, Method::POST, "/api/inventory", Some(tomatoes())).await;
        let before = sheet.snapshot().await;

        let (status, body) = send(
            &router,
            Method::PUT,
            "/api/inventory/404",
            Some(json!({"quantity": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"success": false, "error": "Item not found"}));
        assert_eq!(sheet.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (state, _) = memory_state();
        let router = app_router(state);

        let (_, created) = send(&router, Method::POST, "/api/inventory", Some(tomatoes())).await;
        let uri = format!("/api/inventory/{}", created["data"]["id"].as_str().unwrap());

        let (status, body) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "message": "Item deleted successfully"})
        );

        let (status, _) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, list) = send(&router, Method::GET, "/api/inventory", None).await;
        assert_eq!(list["data"], json!([]));
    }

    #[tokio::test]
    async fn test_list_returns_seeded_items() {
        let (state, _) = memory_state();
        let items = sample_items();
        state.repository.replace_all(&items).await.unwrap();
        let router = app_router(state);

        let (status, body) = send(&router, Method::GET, "/api/inventory", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), items.len());
        assert_eq!(body["data"][0]["name"], "Milk");
    }

    #[tokio::test]
    async fn test_backend_outage_is_server_error() {
        let (state, sheet) = memory_state();
        sheet
            .set_outage(Some("The caller does not have permission".to_string()))
            .await;
        let router = app_router(state);

        let (status, body) = send(&router, Method::GET, "/api/inventory", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("The caller does not have permission"));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let (state, _) = memory_state();
        let router = app_router(state);
        send(&router, Method::POST, "/api/inventory", Some(tomatoes())).await;

        let (status, body) = send(&router, Method::GET, "/api/inventory/404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"success": false, "error": "Item not found"}));
    }

    #[tokio::test]
    async fn test_update_blank_required_fields_keeps_values() {
        let (state, _) = memory_state();
        let router = app_router(state);

        let (_, created) = send(&router, Method::POST, "/api/inventory", Some(tomatoes())).await;
        let uri = format!("/api/inventory/{}", created["data"]["id"].as_str().unwrap());

        let (status, updated) = send(
            &router,
            Method::PUT,
            &uri,
            Some(json!({"name": "", "category": "  ", "unit": " g ", "quantity": 5})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["data"]["name"], "Tomatoes");
        assert_eq!(updated["data"]["category"], "Vegetables");
        assert_eq!(updated["data"]["unit"], "g");
        assert_eq!(updated["data"]["quantity"], json!(5.0));

        let (_, fetched) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(fetched["data"], updated["data"]);
    }

    #[tokio::test]
    async fn test_mutations_during_outage_are_server_errors() {
        let (state, sheet) = memory_state();
        let router = app_router(state);
        let (_, created) = send(&router, Method::POST, "/api/inventory", Some(tomatoes())).await;
        let uri = format!("/api/inventory/{}", created["data"]["id"].as_str().unwrap());
        sheet.set_outage(Some("down".to_string())).await;

        let requests = [
            (Method::POST, "/api/inventory".to_string(), Some(tomatoes())),
            (Method::PUT, uri.clone(), Some(json!({"quantity": 1}))),
            (Method::DELETE, uri, None),
        ];
        for (method, uri, body) in requests {
            let (status, response) = send(&router, method.clone(), &uri, body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
            assert_eq!(response["success"], false);
            assert!(response["error"].as_str().unwrap().contains("down"));
        }
    }
}
