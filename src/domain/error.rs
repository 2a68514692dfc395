// ============================================================
// Layer 3 — Core Error Types
// ============================================================
// Only two things can actually fail inside the core:
//
//   1. The caller asked for a language the annotation
//      provider has not loaded (UnsupportedLanguage).
//   2. The annotation provider itself fell over while
//      processing a text (AnnotationFailure).
//
// Everything else is deliberately NOT an error:
//   - Empty input text  → empty chunk/sentence/entity lists
//   - Unknown strategy  → silent fallback to "sentences"
//   - Malformed cards   → missing question/answer default to ""
//
// Provider faults are surfaced with a message but never
// retried here — retry/backoff is the provider's concern.
//
// Reference: Rust Book §9 (Error Handling)

use thiserror::Error;

/// The structured failures a core operation can return.
#[derive(Debug, Error)]
pub enum NlpError {
    /// The requested language is not among the provider's loaded set.
    /// Always reported to the caller, never silently substituted.
    #[error("unsupported language: '{requested}' (available: {available})")]
    UnsupportedLanguage {
        /// The language code that was asked for
        requested: String,
        /// Comma-separated list of languages that ARE loaded
        available: String,
    },

    /// The annotation provider failed internally while processing
    /// a text. Per-request isolation: this is returned to the
    /// boundary layer, it never takes the process down.
    #[error("annotation failed: {0}")]
    AnnotationFailure(String),
}

impl NlpError {
    /// Convenience constructor for provider-side faults.
    pub fn annotation(msg: impl Into<String>) -> Self {
        NlpError::AnnotationFailure(msg.into())
    }
}
