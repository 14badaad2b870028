//! The retriever capability consumed by pipelines.

use async_trait::async_trait;

use crate::document::Document;
use crate::error::Result;

/// Turns a query into relevance-ordered documents.
///
/// Both entry points must agree: for the same query they send the same
/// request and return the same documents. Any implementation can stand in
/// behind an `Arc<dyn Retriever>`.
///
/// # Example
///
/// ```rust,ignore
/// use adk_ragie::{Retriever, RagieRetriever, format_documents};
///
/// let retriever = RagieRetriever::from_env()?;
/// let docs = retriever.retrieve_async("What do the besties think about Davos?").await?;
/// let context = format_documents(&docs);
/// ```
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Retrieve documents for `query`, blocking the current thread.
    ///
    /// Do not call this from inside an async runtime; use
    /// [`retrieve_async`](Retriever::retrieve_async) there.
    fn retrieve(&self, query: &str) -> Result<Vec<Document>>;

    /// Retrieve documents for `query` without blocking.
    async fn retrieve_async(&self, query: &str) -> Result<Vec<Document>>;
}
