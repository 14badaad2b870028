//! # Ragie Context Example
//!
//! Retrieves context for a question from Ragie on the calling thread and
//! prints it the way a prompt template would receive it.
//!
//! Requires `RAGIE_API_KEY` (a `.env` file is honoured).
//!
//! Run: `cargo run --example ragie_context -- "What do the besties think about Davos?" --top-k 3`

use adk_ragie::{RagieRetriever, RetrievalConfig, Retriever, format_documents};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Retrieve prompt context for a question from Ragie")]
struct Args {
    /// The question to retrieve context for.
    #[arg(default_value = "What do the besties think about Davos?")]
    query: String,

    /// Maximum number of chunks to return (service default when omitted).
    #[arg(long)]
    top_k: Option<u32>,

    /// Ask the service to rerank chunks (`true` or `false`).
    #[arg(long)]
    rerank: Option<bool>,

    /// Maximum number of chunks taken from any one document.
    #[arg(long)]
    max_chunks_per_document: Option<u32>,

    /// Metadata filter as JSON, e.g. '{"episode": {"$gte": 100}}'.
    #[arg(long)]
    filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    adk_ragie_demos::init_tracing();

    let args = Args::parse();

    // -- 1. Configure: only the flags given on the command line are sent ----
    let mut builder = RetrievalConfig::builder();
    if let Some(top_k) = args.top_k {
        builder = builder.top_k(top_k);
    }
    if let Some(rerank) = args.rerank {
        builder = builder.rerank(rerank);
    }
    if let Some(max) = args.max_chunks_per_document {
        builder = builder.max_chunks_per_document(max);
    }
    if let Some(filter) = &args.filter {
        let filter: serde_json::Value = serde_json::from_str(filter)?;
        builder = builder.filter(filter);
    }

    // Fails here, before any request, if RAGIE_API_KEY is missing.
    let retriever = RagieRetriever::new(builder.build()?)?;

    // -- 2. Retrieve ----------------------------------------------------------
    let docs = retriever.retrieve(&args.query)?;
    info!(count = docs.len(), "retrieved documents");

    for (rank, doc) in docs.iter().enumerate() {
        println!("{}. [{}] {}", rank + 1, doc.id, doc.content);
    }

    // -- 3. Format as prompt context -----------------------------------------
    println!("\nContext:\n{}", format_documents(&docs));
    println!("\nQuestion: {}", args.query);

    Ok(())
}
