//! # Product API Client
//!
//! [`ProductApi`] is the seam between the UI and the server. The terminal
//! front end uses [`HttpProductApi`]; tests substitute an in-memory fake.
//!
//! ```text
//! App::save() ──► api.create(&payload) ──► POST {base_url}
//! App::save() ──► api.update(id, &p)   ──► PUT  {base_url}/{id}
//! App::delete() ► api.delete(id)       ──► DELETE {base_url}/{id}
//! App::refresh() ► api.list()          ──► GET  {base_url}
//! ```
//!
//! No retries and no cancellation. A request that exceeds the configured
//! timeout fails like any other.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use crate::error::{UiError, UiResult};
use inventory_core::{Product, ProductId, ProductPayload, WriteResult};

/// Operations the UI needs from the server.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn list(&self) -> UiResult<Vec<Product>>;
    async fn create(&self, payload: &ProductPayload) -> UiResult<WriteResult>;
    async fn update(&self, id: ProductId, payload: &ProductPayload) -> UiResult<WriteResult>;
    async fn delete(&self, id: ProductId) -> UiResult<WriteResult>;
}

/// [`ProductApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: Client,
    base_url: String,
}

impl HttpProductApi {
    /// `base_url` is the products collection, e.g. `http://localhost:5000/products`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> UiResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(HttpProductApi { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: ProductId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Turns a non-success status into [`UiError::Status`].
async fn check(response: Response) -> UiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(UiError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list(&self) -> UiResult<Vec<Product>> {
        debug!(url = %self.base_url, "GET products");
        let response = check(self.client.get(&self.base_url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, payload: &ProductPayload) -> UiResult<WriteResult> {
        debug!(url = %self.base_url, "POST product");
        let response = check(self.client.post(&self.base_url).json(payload).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: ProductId, payload: &ProductPayload) -> UiResult<WriteResult> {
        let url = self.item_url(id);
        debug!(%url, "PUT product");
        let response = check(self.client.put(&url).json(payload).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: ProductId) -> UiResult<WriteResult> {
        let url = self.item_url(id);
        debug!(%url, "DELETE product");
        let response = check(self.client.delete(&url).send().await?).await?;
        Ok(response.json().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_db::{Database, DbConfig};
    use tokio::net::TcpListener;

    /// Serves the real API over an in-memory store on an ephemeral port.
    async fn spawn_server() -> (HttpProductApi, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = inventory_api::app(db.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let api = HttpProductApi::new(
            format!("http://{addr}/products/"),
            Duration::from_secs(5),
        )
        .unwrap();
        (api, db)
    }

    #[test]
    fn test_urls() {
        let api = HttpProductApi::new("http://localhost:5000/products/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000/products");
        assert_eq!(api.item_url(ProductId(4)), "http://localhost:5000/products/4");
    }

    #[tokio::test]
    async fn test_crud_against_server() {
        let (api, _db) = spawn_server().await;

        assert!(api.list().await.unwrap().is_empty());

        let ack = api
            .create(&ProductPayload::new("Kopi Susu", 15000.0))
            .await
            .unwrap();
        let id = ack.inserted_id().unwrap();

        let products = api.list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, id);
        assert_eq!(products[0].price, 15000.0);

        let ack = api
            .update(id, &ProductPayload::new("Kopi Susu Besar", 18000.0))
            .await
            .unwrap();
        assert_eq!(ack.affected_rows, 1);
        assert_eq!(api.list().await.unwrap()[0].name, "Kopi Susu Besar");

        assert_eq!(api.delete(id).await.unwrap().affected_rows, 1);
        assert_eq!(api.delete(id).await.unwrap().affected_rows, 0);
        assert!(api.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let (api, db) = spawn_server().await;
        db.close().await;

        let err = api.list().await.unwrap_err();
        match err {
            UiError::Status { status, ref body } => {
                assert_eq!(status, 500);
                assert!(body.contains("STORAGE_ERROR"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
        assert!(err.is_api_failure());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpProductApi::new(format!("http://{addr}/products"), Duration::from_secs(2))
            .unwrap();
        let err = api.list().await.unwrap_err();
        assert!(matches!(err, UiError::Http(_)));
    }
}
