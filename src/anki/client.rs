//! HTTP client for the AnkiConnect automation endpoint.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

use super::note::{self, Note};

/// Default AnkiConnect endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8765";

/// AnkiConnect protocol version this client speaks.
const PROTOCOL_VERSION: u32 = 6;

/// Errors from the AnkiConnect client, split by failure layer.
#[derive(Debug, Error)]
pub enum AnkiError {
    #[error("could not reach AnkiConnect: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unreadable AnkiConnect response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("AnkiConnect error: {0}")]
    Protocol(String),
}

/// Response envelope shared by every AnkiConnect action.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn into_result(self) -> Result<T, AnkiError> {
        if let Some(error) = self.error {
            return Err(AnkiError::Protocol(error));
        }
        self.result
            .ok_or_else(|| AnkiError::Protocol("response carried no result".to_string()))
    }
}

/// Thin client for the AnkiConnect HTTP API.
pub struct AnkiClient {
    http: reqwest::Client, // Shared HTTP client
    endpoint: String,      // AnkiConnect URL
}

impl AnkiClient {
    /// Create a client against the default local endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a client against an explicit endpoint.
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self { http: reqwest::Client::new(), endpoint: endpoint.to_string() }
    }

    /// Invoke one AnkiConnect action and unwrap its result envelope.
    async fn invoke<T: DeserializeOwned>(
        &self,
        action: &str,
        params: Option<serde_json::Value>,
    ) -> Result<T, AnkiError> {
        let mut body = serde_json::Map::new();
        body.insert("action".to_string(), json!(action));
        body.insert("version".to_string(), json!(PROTOCOL_VERSION));
        if let Some(params) = params {
            body.insert("params".to_string(), params);
        }

        debug!("AnkiConnect action: {}", action);

        let response = self.http.post(&self.endpoint).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(AnkiError::Protocol(format!(
                "HTTP {} from {}",
                response.status(),
                self.endpoint
            )));
        }

        let text = response.text().await?;
        let envelope: ApiResponse<T> = serde_json::from_str(&text)?;
        envelope.into_result()
    }

    /// Check that AnkiConnect is reachable, returning its reported version.
    ///
    /// # Errors
    /// Returns an error if Anki is not running or the add-on is missing.
    pub async fn ping(&self) -> Result<u32, AnkiError> {
        let version = self.invoke("version", None).await?;
        info!("AnkiConnect is online (version {})", version);
        Ok(version)
    }

    /// True iff `deck` already holds a note whose Front field is exactly
    /// `word`.
    pub async fn has_duplicate(&self, deck: &str, word: &str) -> Result<bool, AnkiError> {
        let query = note::duplicate_query(deck, word);
        debug!("findNotes query: {}", query);

        let ids: Vec<u64> = self.invoke("findNotes", Some(json!({ "query": query }))).await?;
        Ok(!ids.is_empty())
    }

    /// Add a note, returning its new note id.
    pub async fn add_note(&self, note: &Note) -> Result<u64, AnkiError> {
        self.invoke("addNote", Some(json!({ "note": note }))).await
    }
}

impl Default for AnkiClient {
    fn default() -> Self {
        Self::new()
    }
}
