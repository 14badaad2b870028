//! The document type handed to pipelines.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A retrieved passage, ready to be placed into a prompt.
///
/// One `Document` is produced per scored chunk; chunks from the same source
/// document are not merged, so several documents may share an `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Identifier of the source document the chunk belongs to.
    pub id: String,
    /// Source document metadata, exactly as returned by the service.
    pub metadata: HashMap<String, Value>,
    /// The chunk text.
    pub content: String,
}

/// Join document contents into a single prompt context, separated by blank lines.
pub fn format_documents(documents: &[Document]) -> String {
    documents.iter().map(|d| d.content.as_str()).collect::<Vec<_>>().join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(content: &str) -> Document {
        Document { id: "doc".into(), metadata: HashMap::new(), content: content.into() }
    }

    #[test]
    fn joins_with_blank_lines_in_order() {
        let docs = [doc("first"), doc("second"), doc("third")];
        assert_eq!(format_documents(&docs), "first\n\nsecond\n\nthird");
    }

    #[test]
    fn empty_input_gives_empty_context() {
        assert_eq!(format_documents(&[]), "");
    }
}
