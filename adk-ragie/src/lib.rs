//! # adk-ragie
//!
//! [Ragie](https://ragie.ai) retrieval for ADK-Rust pipelines.
//!
//! [`RagieRetriever`] implements the [`Retriever`] capability: it maps a
//! query and an optional set of tuning parameters onto a Ragie retrieval
//! request, and turns the scored chunks that come back into relevance-ordered
//! [`Document`]s. Embedding, ranking and storage all happen on the service.
//!
//! ```rust,ignore
//! use adk_ragie::{RagieRetriever, RetrievalConfig, Retriever, format_documents};
//!
//! let config = RetrievalConfig::builder().top_k(3).build()?; // reads RAGIE_API_KEY
//! let retriever = RagieRetriever::new(config)?;
//!
//! let docs = retriever.retrieve_async("What do the besties think about Davos?").await?;
//! println!("{}", format_documents(&docs));
//! ```

pub mod client;
pub mod config;
pub mod credentials;
pub mod document;
pub mod error;
pub mod filter;
pub mod ragie;
pub mod request;
pub mod response;
pub mod retriever;

pub use client::{HttpRagieClient, RagieClient};
pub use config::{DEFAULT_SERVER_URL, RetrievalConfig, RetrievalConfigBuilder};
pub use credentials::{API_KEY_ENV, ApiKey, resolve_api_key};
pub use document::{Document, format_documents};
pub use error::{RagieError, Result};
pub use filter::{Filter, Operator};
pub use ragie::RagieRetriever;
pub use request::{RetrievalRequest, map_request};
pub use response::{RetrievalResult, ScoredChunk, to_documents};
pub use retriever::Retriever;
