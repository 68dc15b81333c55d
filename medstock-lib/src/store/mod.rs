//! HTTP client for the remote spreadsheet row store.
//!
//! The store is a key-less append/query/delete endpoint speaking JSON. Every
//! operation here is a single round-trip: failures are terminal for that
//! operation and are never retried or queued.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::{
    config::{Cfg, CoreConfig},
    entry::{Entry, EntryId},
    store::dto::{AppendRequest, RemoteRow},
};

mod dto;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Row store returned status {status}: {}", message.as_deref().unwrap_or("unknown error"))]
    Status { status: u16, message: Option<String> },
}

/// Client for the remote row store.
///
/// Holds a shared handle to the core configuration so an endpoint edit is
/// picked up by the next operation. Requests carry no timeout; once issued,
/// an operation runs to completion or failure and cannot be cancelled.
#[derive(Debug, Clone)]
pub struct RowStore {
    client: reqwest::Client,
    cfg: Cfg,
}

impl RowStore {
    pub fn new() -> Self {
        Self::with_cfg(Arc::new(RwLock::new(CoreConfig::load())))
    }

    pub fn with_cfg(cfg: Cfg) -> Self {
        Self {
            client: reqwest::Client::new(),
            cfg,
        }
    }

    /// Fetch every row currently in the store.
    ///
    /// Non-2xx and transport failures are reported uniformly; callers treat
    /// both as "load failed" and keep their prior state.
    pub async fn fetch_all(&self) -> Result<Vec<Entry>> {
        let response = self.client.get(self.endpoint()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                message: None,
            });
        }

        let rows: Vec<RemoteRow> = response.json().await?;
        debug!("Fetched {} rows from the store", rows.len());

        Ok(rows.into_iter().map(RemoteRow::into_entry).collect())
    }

    /// Persist one entry.
    ///
    /// The row only counts as persisted on a success status. On failure the
    /// response body is combed for a `message` field, carried verbatim into
    /// the error; the body's shape is not guaranteed.
    pub async fn append(&self, entry: &Entry) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&AppendRequest::new(entry))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("Appended entry {}", entry.id);
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Status {
                status: status.as_u16(),
                message: failure_message(&body),
            })
        }
    }

    /// Remove the row matching the given identifier.
    pub async fn delete(&self, id: &EntryId) -> Result<()> {
        let response = self
            .client
            .delete(delete_url(&self.endpoint(), id))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("Deleted entry {id}");
            Ok(())
        } else {
            Err(Error::Status {
                status: status.as_u16(),
                message: None,
            })
        }
    }

    fn endpoint(&self) -> String {
        self.cfg.read().endpoint.clone()
    }
}

impl Default for RowStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort extraction of a `message` field from a failure body.
fn failure_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_owned)
}

/// The store deletes by filtering on the id column.
fn delete_url(endpoint: &str, id: &EntryId) -> String {
    format!("{endpoint}?id={}", urlencoding::encode(id.as_str()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_delete_url_encodes_the_id() {
        let url = delete_url("https://example.com/rows", &"a b&c".into());

        assert_eq!(url, "https://example.com/rows?id=a%20b%26c");
    }

    #[test]
    fn test_delete_url_plain_id() {
        let url = delete_url("https://example.com/rows", &"1712000000000".into());

        assert_eq!(url, "https://example.com/rows?id=1712000000000");
    }

    #[test]
    fn test_failure_message_extracts_field() {
        assert_eq!(
            failure_message("{\"message\": \"sheet is full\"}").as_deref(),
            Some("sheet is full")
        );
    }

    #[test]
    fn test_failure_message_is_best_effort() {
        assert_eq!(failure_message("{\"error\": \"nope\"}"), None);
        assert_eq!(failure_message("{\"message\": 42}"), None);
        assert_eq!(failure_message("<html>502</html>"), None);
        assert_eq!(failure_message(""), None);
    }

    #[test]
    fn test_endpoint_comes_from_shared_config() {
        let cfg = Arc::new(RwLock::new(CoreConfig::mock()));
        let store = RowStore::with_cfg(cfg.clone());

        assert_eq!(store.endpoint(), "http://localhost:9999/rows");

        cfg.write().endpoint = "http://localhost:9999/other".into();
        assert_eq!(store.endpoint(), "http://localhost:9999/other");
    }

    #[test]
    fn test_status_error_display_includes_message() {
        let err = Error::Status {
            status: 400,
            message: Some("bad row".into()),
        };
        assert_eq!(err.to_string(), "Row store returned status 400: bad row");

        let err = Error::Status {
            status: 502,
            message: None,
        };
        assert_eq!(
            err.to_string(),
            "Row store returned status 502: unknown error"
        );
    }
}
