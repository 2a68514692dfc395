// ============================================================
// Layer 2 — Segment Use Case
// ============================================================
// The main workflow: annotate once, run the selected strategy,
// and assemble the response the caller renders into cards:
//   1. Annotate the text through the injected provider
//   2. Extract the base inventory (sentences, entities, chunks)
//   3. Dispatch to the strategy and split chunks from metadata
//   4. Report corpus-level stats alongside the chunks

use serde::Serialize;

use crate::domain::chunk::Metadata;
use crate::domain::error::NlpError;
use crate::domain::language::Language;
use crate::domain::traits::AnnotationProvider;
use crate::segmentation::strategy::Strategy;
use crate::segmentation::SegmenterConfig;

/// Corpus-level counters reported with every segmentation.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentStats {
    pub total_chunks: usize,
    pub total_sentences: usize,
    pub total_entities: usize,
    pub total_tokens: usize,
    pub has_vectors: bool,
    pub strategy_used: String,
}

/// Everything a caller needs to turn one text into cards.
/// `chunks` and `chunks_metadata` are parallel: basic strategies
/// leave every metadata record empty.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentResponse {
    pub chunks: Vec<String>,
    pub chunks_metadata: Vec<Metadata>,
    pub sentences: Vec<String>,
    /// (text, label) pairs for every named entity found
    pub entities: Vec<(String, String)>,
    pub noun_chunks: Vec<String>,
    pub stats: SegmentStats,
}

pub struct SegmentUseCase<'a> {
    provider: &'a dyn AnnotationProvider,
    config: SegmenterConfig,
}

impl<'a> SegmentUseCase<'a> {
    pub fn new(provider: &'a dyn AnnotationProvider) -> Self {
        Self {
            provider,
            config: SegmenterConfig::default(),
        }
    }

    /// Annotate `text` and segment it with the named strategy.
    /// Unknown strategy names fall back to sentences; empty text
    /// yields empty collections, not an error.
    pub fn execute(
        &self,
        text: &str,
        language: Language,
        strategy_name: &str,
    ) -> Result<SegmentResponse, NlpError> {
        let doc = self.provider.annotate(text, language)?;

        let sentences: Vec<String> = doc
            .sentences
            .iter()
            .map(|s| s.text.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let entities: Vec<(String, String)> = doc
            .entities
            .iter()
            .map(|e| (e.text.clone(), e.label.as_str().to_string()))
            .collect();
        let noun_chunks: Vec<String> = doc
            .noun_chunks
            .iter()
            .map(|nc| doc.span_text(nc.start, nc.end))
            .collect();

        let strategy = Strategy::from_name(strategy_name);
        let segmented = strategy.run(text, &doc, self.provider, language, &self.config)?;

        let (chunks, chunks_metadata): (Vec<String>, Vec<Metadata>) = segmented
            .into_iter()
            .map(|c| (c.text, c.metadata))
            .unzip();

        tracing::info!(
            strategy = strategy.name(),
            chunks = chunks.len(),
            sentences = sentences.len(),
            "segmentation complete"
        );

        Ok(SegmentResponse {
            stats: SegmentStats {
                total_chunks: chunks.len(),
                total_sentences: sentences.len(),
                total_entities: entities.len(),
                total_tokens: doc.tokens.len(),
                has_vectors: doc.has_vector(),
                strategy_used: strategy.name().to_string(),
            },
            chunks,
            chunks_metadata,
            sentences,
            entities,
            noun_chunks,
        })
    }
}
