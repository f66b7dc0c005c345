//! Realtime Database REST Client
//!
//! Thin async wrapper over the database's REST surface. A node at `{path}`
//! is addressed as `{base_url}/{path}.json`; reading an absent node returns
//! JSON `null`, which maps to `None` here. Writes are `PUT` (set, replacing
//! the node) and `PATCH` (update, merging the given fields).

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {path}")]
    Status { status: StatusCode, path: String },

    #[error("failed to decode document at {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Client for one realtime database instance
#[derive(Debug, Clone)]
pub struct RealtimeDb {
    base_url: String,
    auth: Option<String>,
    http: reqwest::Client,
}

impl RealtimeDb {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            auth: None,
            http: reqwest::Client::new(),
        }
    }

    /// Attach a database auth token, sent as a query parameter
    pub fn with_auth(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(token.into());
        self
    }

    fn node_url(&self, path: &str) -> String {
        let mut url = format!("{}/{}.json", self.base_url, path.trim_matches('/'));
        if let Some(token) = &self.auth {
            url.push_str("?auth=");
            url.push_str(token);
        }
        url
    }

    /// Read the document at `path`; absent nodes yield `None`
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, StoreError> {
        let response = self.http.get(self.node_url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status,
                path: path.to_string(),
            });
        }

        let value: serde_json::Value = response.json().await?;
        if value.is_null() {
            return Ok(None);
        }

        let document = serde_json::from_value(value).map_err(|source| StoreError::Decode {
            path: path.to_string(),
            source,
        })?;
        Ok(Some(document))
    }

    /// Replace the document at `path` with `value`
    pub async fn set<T: Serialize + ?Sized>(&self, path: &str, value: &T) -> Result<(), StoreError> {
        let response = self.http.put(self.node_url(path)).json(value).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status,
                path: path.to_string(),
            });
        }
        tracing::trace!(path, "set");
        Ok(())
    }

    /// Merge `fields` into the document at `path`, leaving other fields intact
    pub async fn update(&self, path: &str, fields: &serde_json::Value) -> Result<(), StoreError> {
        let response = self
            .http
            .patch(self.node_url(path))
            .json(fields)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status,
                path: path.to_string(),
            });
        }
        tracing::trace!(path, "update");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_urls_append_json_suffix() {
        let db = RealtimeDb::new("https://db.example.com");
        assert_eq!(
            db.node_url("plantTypes/Basil"),
            "https://db.example.com/plantTypes/Basil.json"
        );
    }

    #[test]
    fn trailing_slashes_do_not_double_up() {
        let db = RealtimeDb::new("https://db.example.com/");
        assert_eq!(db.node_url("users/3"), "https://db.example.com/users/3.json");
        assert_eq!(db.node_url("/users/3/"), "https://db.example.com/users/3.json");
    }

    #[test]
    fn auth_token_rides_as_query_parameter() {
        let db = RealtimeDb::new("https://db.example.com").with_auth("secret");
        assert_eq!(
            db.node_url("users/3"),
            "https://db.example.com/users/3.json?auth=secret"
        );
    }
}
