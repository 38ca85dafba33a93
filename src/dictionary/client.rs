//! Merriam-Webster Collegiate dictionary client.

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error};

use super::Card;

/// Default API root for the Collegiate dictionary.
pub const DEFAULT_API_URL: &str =
    "https://www.dictionaryapi.com/api/v3/references/collegiate/json";

/// Errors from the definition fetch, one variant per failing stage.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected dictionary response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no entry found for \"{0}\"")]
    NotFound(String),
}

/// Thin client for word lookups against the Merriam-Webster Collegiate API.
pub struct DictionaryClient {
    http: Client,     // Shared HTTP client
    base_url: String, // API root, overridable for tests
    api_key: String,  // Per-user API key
}

impl DictionaryClient {
    /// Create a client against the production API.
    ///
    /// # Arguments
    /// * `api_key` - Merriam-Webster API key from the user's config
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(DEFAULT_API_URL, api_key)
    }

    /// Create a client against an explicit API root.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Lookup URL for a word, with the word percent-encoded into the path.
    /// The API key rides separately as a query pair.
    fn lookup_url(&self, word: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(word))
    }

    /// Fetch the definition for a word.
    ///
    /// Returns the first entry of the response array, with `word` set to the
    /// input word rather than the API's own headword.
    ///
    /// # Errors
    /// `Network` if the request or body read fails, `Decode` if the body is
    /// not a definition array, `NotFound` if the array is empty.
    pub async fn fetch_definition(&self, word: &str) -> Result<Card, DictionaryError> {
        let url = self.lookup_url(word);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!("Failed to contact Merriam-Webster: {}", e);
                DictionaryError::Network(e)
            })?;

        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            DictionaryError::Network(e)
        })?;

        first_entry(&body, word)
    }
}

/// Decode the response body as a definition array and take its first entry.
///
/// Merriam-Webster answers an unknown word with a bare array of spelling
/// suggestions (plain strings); that shape fails decode.
fn first_entry(body: &str, word: &str) -> Result<Card, DictionaryError> {
    let entries: Vec<Card> = serde_json::from_str(body).map_err(|e| {
        error!("Failed to parse response body JSON: {}", e);
        DictionaryError::Decode(e)
    })?;

    let mut card = entries
        .into_iter()
        .next()
        .ok_or_else(|| DictionaryError::NotFound(word.to_string()))?;
    card.word = word.to_string();
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_url_percent_encodes_the_word() {
        let client = DictionaryClient::with_base_url("https://example.test/json/", "K");
        assert_eq!(client.lookup_url("ad hoc"), "https://example.test/json/ad%20hoc");
        assert_eq!(client.lookup_url("run"), "https://example.test/json/run");
    }

    #[test]
    fn test_first_entry_overwrites_word_with_input() {
        let body = r#"[{"fl": "verb", "shortdef": ["to move fast"]}]"#;
        let card = first_entry(body, "run").unwrap();
        assert_eq!(card.word, "run");
        assert_eq!(card.part_of_speech, "verb");
        assert_eq!(card.definitions, vec!["to move fast"]);
    }

    #[test]
    fn test_first_entry_takes_the_first_of_many() {
        let body = r#"[{"fl": "verb", "shortdef": ["a"]}, {"fl": "noun", "shortdef": ["b"]}]"#;
        let card = first_entry(body, "run").unwrap();
        assert_eq!(card.part_of_speech, "verb");
    }

    #[test]
    fn test_empty_array_is_not_found() {
        let err = first_entry("[]", "run").unwrap_err();
        assert!(matches!(err, DictionaryError::NotFound(word) if word == "run"));
    }

    #[test]
    fn test_suggestion_list_is_a_decode_error() {
        let err = first_entry(r#"["rain", "ruin"]"#, "runn").unwrap_err();
        assert!(matches!(err, DictionaryError::Decode(_)));
    }

    #[test]
    fn test_non_array_body_is_a_decode_error() {
        let err = first_entry(r#"{"fl": "verb"}"#, "run").unwrap_err();
        assert!(matches!(err, DictionaryError::Decode(_)));
    }
}
