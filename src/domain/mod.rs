// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO NLP model code (annotation is supplied from outside)
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no model downloads needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap annotation providers (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// An annotated document: sentences, tokens, entities, vectors
pub mod annotation;

// A segmentation output unit: text plus strategy metadata
pub mod chunk;

// Flashcards, validation issues, and cloze variants
pub mod flashcard;

// The supported input languages
pub mod language;

// Structured errors shared by every core operation
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
