// ============================================================
// Layer 6 — Infrastructure
// ============================================================
// Concrete implementations of the Layer 3 traits that touch
// the outside world (or stand in for it).
//
// The real annotation pipeline — neural tagging, parsing, NER,
// word vectors — lives OUTSIDE this repository. Deployments
// inject their own AnnotationProvider. What lives here is the
// deterministic rule-based stand-in that makes the binary and
// the integration-style tests runnable on a bare machine.
//
// Reference: Rust Book §10 (Traits), §17 (OO Patterns)

// Deterministic rule-based AnnotationProvider stand-in
pub mod rule_annotator;
