//! # Ragie Context Example (async)
//!
//! Same retrieval as `ragie_context`, through `retrieve_async` on a tokio
//! runtime. Uses service defaults for every tuning parameter.
//!
//! Requires `RAGIE_API_KEY` (a `.env` file is honoured).
//!
//! Run: `cargo run --example ragie_context_async -- "Should the United States contain China?"`

use adk_ragie::{RagieRetriever, Retriever, format_documents};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    adk_ragie_demos::init_tracing();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Should the United States contain China?".to_string());

    let retriever = RagieRetriever::from_env()?;
    let docs = retriever.retrieve_async(&query).await?;
    info!(count = docs.len(), "retrieved documents");

    let template = format!(
        "Answer the question based only on the following context:\n\n{}\n\nQuestion: {}\n",
        format_documents(&docs),
        query
    );
    println!("{template}");

    Ok(())
}
