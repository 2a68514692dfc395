// ============================================================
// Layer 4 — Basic Segmentation Strategies
// ============================================================
// The four strategies whose raw output is plain strings
// (normalized to Chunks with empty metadata by the dispatcher):
//
//   sentences            → one chunk per sentence
//   entities             → token runs cut at entity boundaries
//   noun_chunks          → noun phrase + trailing context tokens
//   semantic_similarity  → greedy merge of similar sentences
//
// Each one is a pure fold — given the same document it always
// produces the same chunks, and an abandoned call leaves no
// state behind.
//
// Reference: Rust Book §13 (Iterators and Closures)

use crate::domain::annotation::AnnotatedDocument;
use crate::domain::chunk::Chunk;
use crate::segmentation::SegmenterConfig;

/// One chunk per sentence, trimmed; empty results are dropped.
pub fn by_sentences(doc: &AnnotatedDocument) -> Vec<Chunk> {
    doc.sentences
        .iter()
        .map(|s| s.text.trim())
        .filter(|t| !t.is_empty())
        .map(Chunk::plain)
        .collect()
}

/// Walk tokens in order, closing the running group whenever a
/// token OPENS an entity span (a B-boundary) and the group
/// already holds more than that one token. The boundary token
/// seeds the next group, so an entity never ends up split
/// across two chunks. The trailing group is always flushed.
pub fn by_entities(doc: &AnnotatedDocument) -> Vec<Chunk> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for (i, token) in doc.tokens.iter().enumerate() {
        current.push(&token.text);
        if doc.begins_entity(i) && current.len() > 1 {
            chunks.push(current[..current.len() - 1].join(" "));
            current = vec![&token.text];
        }
    }
    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .map(Chunk::plain)
        .collect()
}

/// One chunk per noun phrase: the phrase's tokens plus up to
/// `noun_chunk_context` trailing tokens of context (clipped to
/// the document end).
pub fn by_noun_chunks(doc: &AnnotatedDocument, config: &SegmenterConfig) -> Vec<Chunk> {
    doc.noun_chunks
        .iter()
        .map(|nc| {
            let end = (nc.end + config.noun_chunk_context).min(doc.tokens.len());
            doc.span_text(nc.start, end).trim().to_string()
        })
        .filter(|t| !t.is_empty())
        .map(Chunk::plain)
        .collect()
}

/// Greedily grow a sentence group while consecutive pairs stay
/// at or above the similarity threshold. A pair below threshold
/// closes the group; a pair where either side lacks a vector is
/// treated as similar (merged) by default. Falls back to
/// `by_sentences` when the document has no vectors at all.
pub fn by_semantic_similarity(doc: &AnnotatedDocument, config: &SegmenterConfig) -> Vec<Chunk> {
    if !doc.has_vector() {
        tracing::debug!("document has no vectors, falling back to sentence segmentation");
        return by_sentences(doc);
    }

    let sentences = &doc.sentences;
    if sentences.len() <= 1 {
        return sentences
            .iter()
            .map(|s| Chunk::plain(s.text.clone()))
            .collect();
    }

    let mut chunks: Vec<String> = Vec::new();
    let mut current: Vec<&str> = vec![&sentences[0].text];
    let mut prev = &sentences[0];

    for sent in &sentences[1..] {
        let merge = if prev.has_vector() && sent.has_vector() {
            prev.similarity(sent) >= config.similarity_threshold
        } else {
            // No vectors on this pair — group by default
            true
        };

        if merge {
            current.push(&sent.text);
        } else {
            chunks.push(current.join(" "));
            current = vec![&sent.text];
        }
        prev = sent;
    }
    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .map(Chunk::plain)
        .collect()
}
