// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// The one seam in this system is annotation: turning raw text
// into an AnnotatedDocument is the job of an external NLP
// pipeline (sentence splitting, tagging, parsing, NER, vectors)
// that the core consumes through this trait and never looks
// behind. The provider instance is constructed once at process
// start and injected into every operation — there is no hidden
// process-wide model registry.
//
// Implementations:
//   - RuleAnnotator (infra) → deterministic rule-based stand-in
//   - (deployment) a client for a real neural pipeline service
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use crate::domain::annotation::AnnotatedDocument;
use crate::domain::error::NlpError;
use crate::domain::language::Language;

/// Any component that can annotate raw text in a given language.
///
/// Contract:
///   - `annotate` is pure with respect to the core: same text and
///     language must yield an equivalent document (the core never
///     caches or retries).
///   - Returns `UnsupportedLanguage` when `language` is not among
///     the provider's loaded set.
///   - Returns `AnnotationFailure` on any internal fault; the core
///     surfaces it but does not retry.
///   - Empty text is NOT an error — it yields a document with
///     empty sentence/token/entity lists.
pub trait AnnotationProvider {
    /// Annotate one text span in one language.
    fn annotate(&self, text: &str, language: Language) -> Result<AnnotatedDocument, NlpError>;
}
