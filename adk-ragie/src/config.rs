//! Configuration for the Ragie retriever.

use crate::credentials::{ApiKey, resolve_api_key};
use crate::error::Result;
use crate::filter::Filter;

/// The Ragie API base URL used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "https://api.ragie.ai";

/// Immutable retrieval configuration.
///
/// Every tuning field is optional. `None` lets the service apply its own
/// default and the field is left out of the request entirely; `Some(false)`,
/// `Some(0)` or [`Filter::match_all`] are explicit values and are sent.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalConfig {
    api_key: ApiKey,
    top_k: Option<u32>,
    filter: Option<Filter>,
    rerank: Option<bool>,
    max_chunks_per_document: Option<u32>,
    server_url: Option<String>,
}

impl RetrievalConfig {
    /// Create a new builder for constructing a [`RetrievalConfig`].
    pub fn builder() -> RetrievalConfigBuilder {
        RetrievalConfigBuilder::default()
    }

    /// The resolved API key.
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Maximum number of chunks to return.
    pub fn top_k(&self) -> Option<u32> {
        self.top_k
    }

    /// Metadata filter restricting which documents are searched.
    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    /// Whether the service should rerank chunks after similarity search.
    pub fn rerank(&self) -> Option<bool> {
        self.rerank
    }

    /// Maximum number of chunks taken from any one document.
    pub fn max_chunks_per_document(&self) -> Option<u32> {
        self.max_chunks_per_document
    }

    /// The API base URL, [`DEFAULT_SERVER_URL`] unless overridden.
    pub fn server_url(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}

/// Builder for a [`RetrievalConfig`].
///
/// The API key is resolved when the builder is built, so a missing key is
/// reported at construction rather than on the first retrieval. Not `Debug`,
/// since it holds the unresolved key in plain text.
#[derive(Clone, Default)]
pub struct RetrievalConfigBuilder {
    api_key: Option<String>,
    top_k: Option<u32>,
    filter: Option<Filter>,
    rerank: Option<bool>,
    max_chunks_per_document: Option<u32>,
    server_url: Option<String>,
}

impl RetrievalConfigBuilder {
    /// Set the API key explicitly instead of reading `RAGIE_API_KEY`.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the maximum number of chunks to return.
    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Set the metadata filter.
    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Ask the service to rerank (or explicitly not rerank) chunks.
    pub fn rerank(mut self, rerank: bool) -> Self {
        self.rerank = Some(rerank);
        self
    }

    /// Set the maximum number of chunks taken from any one document.
    pub fn max_chunks_per_document(mut self, max: u32) -> Self {
        self.max_chunks_per_document = Some(max);
        self
    }

    /// Override the API base URL, e.g. for a proxy or a test server.
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build the [`RetrievalConfig`], falling back to the process environment
    /// for the API key.
    ///
    /// # Errors
    ///
    /// Returns [`RagieError::ConfigError`](crate::RagieError::ConfigError)
    /// if no API key can be resolved.
    pub fn build(self) -> Result<RetrievalConfig> {
        self.build_with_env(|name| std::env::var(name).ok())
    }

    /// Build the [`RetrievalConfig`], resolving the API key fallback through
    /// `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`RagieError::ConfigError`](crate::RagieError::ConfigError)
    /// if no API key can be resolved.
    pub fn build_with_env<F>(self, lookup: F) -> Result<RetrievalConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = resolve_api_key(self.api_key, lookup)?;
        Ok(RetrievalConfig {
            api_key,
            top_k: self.top_k,
            filter: self.filter,
            rerank: self.rerank,
            max_chunks_per_document: self.max_chunks_per_document,
            server_url: self.server_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RagieError;

    #[test]
    fn unset_fields_stay_unset() {
        let config = RetrievalConfig::builder().api_key("key").build_with_env(|_| None).unwrap();
        assert_eq!(config.top_k(), None);
        assert_eq!(config.filter(), None);
        assert_eq!(config.rerank(), None);
        assert_eq!(config.max_chunks_per_document(), None);
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn explicit_false_and_zero_are_kept() {
        let config = RetrievalConfig::builder()
            .api_key("key")
            .rerank(false)
            .top_k(0)
            .build_with_env(|_| None)
            .unwrap();
        assert_eq!(config.rerank(), Some(false));
        assert_eq!(config.top_k(), Some(0));
    }

    #[test]
    fn missing_key_fails_at_build() {
        let err = RetrievalConfig::builder().top_k(3).build_with_env(|_| None).unwrap_err();
        assert!(matches!(err, RagieError::ConfigError(_)));
    }

    #[test]
    fn debug_does_not_leak_key() {
        let config =
            RetrievalConfig::builder().api_key("sk-very-secret").build_with_env(|_| None).unwrap();
        assert!(!format!("{config:?}").contains("sk-very-secret"));
    }
}
