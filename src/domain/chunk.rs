// ============================================================
// Layer 3 — Chunk Domain Type
// ============================================================
// A Chunk is the uniform output unit every segmentation
// strategy produces: a piece of text plus a metadata map.
//
// Basic strategies (sentences, entities, ...) have nothing to
// say about their chunks, so their metadata is an empty map —
// but it is ALWAYS present, which means callers never need to
// branch on "does this strategy carry metadata".
//
// Metadata values are free-form JSON (strings, numbers, arrays)
// because each strategy records different keys: `chapter`,
// `entity`, `verb`, `avg_similarity`, and so on.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form strategy metadata attached to a chunk.
pub type Metadata = serde_json::Map<String, Value>;

/// One study-ready fragment of text with strategy metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk text
    pub text: String,
    /// Strategy-specific keys — possibly empty, never absent
    #[serde(default)]
    pub metadata: Metadata,
}

impl Chunk {
    /// A chunk with no metadata (basic strategies).
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: Metadata::new(),
        }
    }

    /// A chunk tagged with the given metadata pairs.
    pub fn tagged(text: impl Into<String>, pairs: Vec<(&str, Value)>) -> Self {
        let mut metadata = Metadata::new();
        for (k, v) in pairs {
            metadata.insert(k.to_string(), v);
        }
        Self {
            text: text.into(),
            metadata,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_chunk_has_empty_metadata() {
        let c = Chunk::plain("hello");
        assert_eq!(c.text, "hello");
        assert!(c.metadata.is_empty());
    }

    #[test]
    fn test_tagged_chunk_keeps_pairs() {
        let c = Chunk::tagged("hello", vec![("type", json!("clause")), ("num_tokens", json!(3))]);
        assert_eq!(c.metadata["type"], json!("clause"));
        assert_eq!(c.metadata["num_tokens"], json!(3));
    }
}
