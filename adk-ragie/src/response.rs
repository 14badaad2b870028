//! Retrieval responses and their conversion into [`Document`]s.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::Document;

/// A chunk of a source document with its relevance score.
///
/// Only the fields this crate needs are decoded; any others the service
/// sends are ignored. A chunk missing one of them fails to decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredChunk {
    pub text: String,
    pub document_id: String,
    pub document_metadata: HashMap<String, Value>,
    pub score: f64,
}

/// The chunks returned for a query, most relevant first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RetrievalResult {
    pub scored_chunks: Vec<ScoredChunk>,
}

/// Convert a retrieval into documents, one per chunk, in service order.
///
/// Metadata is moved across untouched. An empty result gives an empty vector.
pub fn to_documents(result: RetrievalResult) -> Vec<Document> {
    result
        .scored_chunks
        .into_iter()
        .map(|chunk| Document {
            id: chunk.document_id,
            metadata: chunk.document_metadata,
            content: chunk.text,
        })
        .collect()
}
