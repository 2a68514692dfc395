// ============================================================
// Layer 4 — Segmentation Engine
// ============================================================
// This layer holds the actual algorithms: the ten competing
// strategies that decide WHERE to cut a text, plus the two
// shared primitives they lean on.
//
// The flow for one segmentation request:
//
//   raw text + language + strategy name
//       │
//       ▼
//   AnnotationProvider  → one AnnotatedDocument (Layer 3 trait)
//       │
//       ▼
//   Strategy::from_name → closed enum, typos fall back to
//       │                 Sentences (not an error)
//       ▼
//   run_strategy        → pure function over the document,
//       │                 produces Vec<Chunk>
//       ▼
//   uniform (text, metadata) chunk sequence
//
// Every strategy is a pure fold over sentences or tokens —
// no shared mutable state, so a batch of requests can run on
// independent threads without coordination, and an abandoned
// call leaves nothing to clean up.
//
// Reference: Rust Book §13 (Iterators and Closures)

// Chapter detection over raw, unannotated text
pub mod chapters;

// Dependency-subtree primitives shared by the syntax strategies
pub mod clauses;

// The four basic strategies (plain-string output)
pub mod basic;

// Structure-aware strategies: chapters, entity windows, blocks
pub mod context;

// Vocabulary extraction for language learning
pub mod vocabulary;

// Clause and verb-phrase strategies (dependency-tree driven)
pub mod syntax;

// The closed strategy enum and its dispatch table
pub mod strategy;

/// Every numeric threshold the strategies use, named and in one
/// place so behaviour is reproducible and tunable per corpus.
/// The defaults are the values the strategies were calibrated
/// with; nothing in the engine hard-codes them.
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// semantic_similarity: minimum cosine to merge two sentences
    pub similarity_threshold: f32,
    /// noun_chunks: trailing context tokens appended to a phrase
    pub noun_chunk_context: usize,
    /// chapter_sents: character budget per chunk
    pub chapter_chunk_chars: usize,
    /// entity_context: sentences of context either side
    pub entity_window: usize,
    /// semantic_blocks: similarity below which a block closes
    pub block_threshold: f32,
    /// semantic_blocks: character length above which a block closes
    pub block_max_chars: usize,
    /// vocab_extract: occurrences needed before a term is emitted
    pub vocab_min_frequency: usize,
    /// vocab_extract: cap on distinct verb lemmas emitted
    pub vocab_max_verbs: usize,
    /// vocab_extract: minimum verb surface length in characters
    pub vocab_min_verb_chars: usize,
    /// clause_segment: clause size above which we split on conjunctions
    pub clause_max_tokens: usize,
    /// split_by_conjunctions: group size a conjunction must exceed
    /// before it is allowed to cut
    pub conjunction_min_prefix: usize,
    /// verb_phrase_segment: minimum words for an emitted phrase
    pub verb_phrase_min_words: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
            noun_chunk_context: 3,
            chapter_chunk_chars: 500,
            entity_window: 1,
            block_threshold: 0.3,
            block_max_chars: 600,
            vocab_min_frequency: 2,
            vocab_max_verbs: 20,
            vocab_min_verb_chars: 5,
            clause_max_tokens: 15,
            conjunction_min_prefix: 5,
            verb_phrase_min_words: 3,
        }
    }
}
