//! The Ragie-backed [`Retriever`].
//!
//! # Example
//!
//! ```rust,ignore
//! use adk_ragie::{Filter, RagieRetriever, RetrievalConfig, Retriever};
//!
//! let config = RetrievalConfig::builder()
//!     .top_k(6)
//!     .rerank(true)
//!     .filter(Filter::eq("show", "all-in"))
//!     .build()?;
//!
//! let retriever = RagieRetriever::new(config)?;
//! let docs = retriever.retrieve("What do the besties think about Davos?")?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::client::{HttpRagieClient, RagieClient};
use crate::config::RetrievalConfig;
use crate::document::Document;
use crate::error::Result;
use crate::request::{RetrievalRequest, map_request};
use crate::response::to_documents;
use crate::retriever::Retriever;

/// A [`Retriever`] backed by the Ragie retrieval API.
///
/// Holds an immutable [`RetrievalConfig`] and a shared client; it keeps no
/// per-call state, so one instance can serve any number of concurrent
/// blocking and async calls.
pub struct RagieRetriever {
    config: RetrievalConfig,
    client: Arc<dyn RagieClient>,
}

impl RagieRetriever {
    /// Create a retriever that calls the Ragie HTTP API.
    ///
    /// # Errors
    ///
    /// Returns [`RagieError::ConfigError`](crate::RagieError::ConfigError)
    /// if the HTTP client cannot be built.
    pub fn new(config: RetrievalConfig) -> Result<Self> {
        let client = HttpRagieClient::new(config.api_key().clone(), config.server_url())?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create a retriever with default tuning, taking the key from `RAGIE_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`RagieError::ConfigError`](crate::RagieError::ConfigError)
    /// if `RAGIE_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(RetrievalConfig::builder().build()?)
    }

    /// Create a retriever on top of an existing client.
    pub fn with_client(config: RetrievalConfig, client: Arc<dyn RagieClient>) -> Self {
        Self { config, client }
    }

    /// Return a reference to the retrieval configuration.
    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    fn request(&self, query: &str) -> RetrievalRequest {
        let request = map_request(query, &self.config);
        debug!(
            query_len = query.len(),
            top_k = ?request.top_k,
            rerank = ?request.rerank,
            max_chunks_per_document = ?request.max_chunks_per_document,
            has_filter = request.filter.is_some(),
            "ragie retrieve"
        );
        request
    }
}

#[async_trait]
impl Retriever for RagieRetriever {
    fn retrieve(&self, query: &str) -> Result<Vec<Document>> {
        let request = self.request(query);
        let result = self.client.retrieve(&request)?;
        debug!(chunk_count = result.scored_chunks.len(), "ragie retrieved");
        Ok(to_documents(result))
    }

    async fn retrieve_async(&self, query: &str) -> Result<Vec<Document>> {
        let request = self.request(query);
        let result = self.client.retrieve_async(&request).await?;
        debug!(chunk_count = result.scored_chunks.len(), "ragie retrieved");
        Ok(to_documents(result))
    }
}
