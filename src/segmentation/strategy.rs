// ============================================================
// Layer 4 — Strategy Dispatch
// ============================================================
// Strategy selection is a closed enum, not string-keyed
// branching scattered through the code: every strategy the
// engine knows is a variant, each variant maps to exactly one
// pure segmentation function, and an unrecognised name falls
// back to Sentences BY DESIGN — a typo in a strategy name is
// not an error, it just gets the safest segmentation.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use crate::domain::annotation::AnnotatedDocument;
use crate::domain::chunk::Chunk;
use crate::domain::error::NlpError;
use crate::domain::language::Language;
use crate::domain::traits::AnnotationProvider;
use crate::segmentation::{basic, context, syntax, vocabulary, SegmenterConfig};

/// The closed set of segmentation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    // Basic (plain string output, empty metadata)
    Sentences,
    Entities,
    NounChunks,
    SemanticSimilarity,
    // Advanced (text + metadata records)
    ChapterSents,
    EntityContext,
    SemanticBlocks,
    VocabExtract,
    ClauseSegment,
    VerbPhraseSegment,
}

impl Strategy {
    /// Parse a strategy name. Unknown names fall back to
    /// `Sentences` — deliberately not an error.
    pub fn from_name(name: &str) -> Strategy {
        match name {
            "sentences" => Strategy::Sentences,
            "entities" => Strategy::Entities,
            "noun_chunks" => Strategy::NounChunks,
            "semantic_similarity" => Strategy::SemanticSimilarity,
            "chapter_sents" => Strategy::ChapterSents,
            "entity_context" => Strategy::EntityContext,
            "semantic_blocks" => Strategy::SemanticBlocks,
            "vocab_extract" => Strategy::VocabExtract,
            "clause_segment" => Strategy::ClauseSegment,
            "verb_phrase_segment" => Strategy::VerbPhraseSegment,
            other => {
                tracing::warn!(strategy = other, "unknown strategy, falling back to sentences");
                Strategy::Sentences
            }
        }
    }

    /// The canonical name, reported back in stats.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sentences => "sentences",
            Strategy::Entities => "entities",
            Strategy::NounChunks => "noun_chunks",
            Strategy::SemanticSimilarity => "semantic_similarity",
            Strategy::ChapterSents => "chapter_sents",
            Strategy::EntityContext => "entity_context",
            Strategy::SemanticBlocks => "semantic_blocks",
            Strategy::VocabExtract => "vocab_extract",
            Strategy::ClauseSegment => "clause_segment",
            Strategy::VerbPhraseSegment => "verb_phrase_segment",
        }
    }

    /// Run this strategy over one annotated document.
    ///
    /// `text` and `provider` are only touched by ChapterSents,
    /// which re-annotates each detected chapter independently;
    /// every other strategy is a pure function of `doc`.
    pub fn run(
        &self,
        text: &str,
        doc: &AnnotatedDocument,
        provider: &dyn AnnotationProvider,
        language: Language,
        config: &SegmenterConfig,
    ) -> Result<Vec<Chunk>, NlpError> {
        let chunks = match self {
            Strategy::Sentences => basic::by_sentences(doc),
            Strategy::Entities => basic::by_entities(doc),
            Strategy::NounChunks => basic::by_noun_chunks(doc, config),
            Strategy::SemanticSimilarity => basic::by_semantic_similarity(doc, config),
            Strategy::ChapterSents => {
                context::chapter_sentences(text, provider, language, config)?
            }
            Strategy::EntityContext => context::entity_context(doc, config),
            Strategy::SemanticBlocks => context::semantic_blocks(doc, config),
            Strategy::VocabExtract => vocabulary::vocab_extract(doc, config),
            Strategy::ClauseSegment => syntax::clause_segment(doc, config),
            Strategy::VerbPhraseSegment => syntax::verb_phrase_segment(doc, config),
        };
        Ok(chunks)
    }
}
