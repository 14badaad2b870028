//! Mapping a query and a [`RetrievalConfig`] onto the wire request.

use serde::Serialize;

use crate::config::RetrievalConfig;
use crate::filter::Filter;

/// The body of a `POST /retrievals` call.
///
/// Unset fields are omitted from the JSON entirely so the service applies its
/// own defaults; they are never sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievalRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerank: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chunks_per_document: Option<u32>,
}

/// Build the request for `query`, carrying over only the tuning fields the
/// caller set on `config`.
///
/// Both the blocking and the async retrieval paths go through this function.
pub fn map_request(query: &str, config: &RetrievalConfig) -> RetrievalRequest {
    let mut request = RetrievalRequest {
        query: query.to_string(),
        top_k: None,
        filter: None,
        rerank: None,
        max_chunks_per_document: None,
    };
    if let Some(top_k) = config.top_k() {
        request.top_k = Some(top_k);
    }
    if let Some(filter) = config.filter() {
        request.filter = Some(filter.clone());
    }
    if let Some(rerank) = config.rerank() {
        request.rerank = Some(rerank);
    }
    if let Some(max) = config.max_chunks_per_document() {
        request.max_chunks_per_document = Some(max);
    }
    request
}
