// ============================================================
// Layer 4 — Vocabulary Extraction Strategy
// ============================================================
// vocab_extract targets language learners: instead of cutting
// the text into passages, it surfaces the terms worth studying
// and pairs each with a sentence showing it in context.
//
// Two collections, emitted in this order:
//
//   1. Noun-phrase terms — multi-word noun chunks keyed by
//      lowercase text; a term is emitted once its occurrence
//      count reaches the frequency floor, with the FIRST
//      occurrence's sentence as the chunk text and up to three
//      example sentences in metadata.
//   2. Verb terms — distinct lemmas of content verbs (not stop
//      words, surface form longer than the minimum), keeping
//      the first sentence each lemma appeared in, capped at
//      the configured maximum.
//
// Insertion order is preserved in both collections so output is
// deterministic: first-seen terms come out first.
//
// Reference: Rust Book §8 (HashMaps), §13 (Iterators)

use serde_json::json;
use std::collections::HashMap;

use crate::domain::annotation::{AnnotatedDocument, PartOfSpeech};
use crate::domain::chunk::Chunk;
use crate::segmentation::SegmenterConfig;

/// Extract repeated noun-phrase terms and key verbs with their
/// example sentences.
pub fn vocab_extract(doc: &AnnotatedDocument, config: &SegmenterConfig) -> Vec<Chunk> {
    let mut chunks = Vec::new();

    // ── Pass 1: multi-word noun chunk terms ──────────────────────────────
    // HashMap for lookup, Vec for first-seen order
    let mut term_order: Vec<String> = Vec::new();
    let mut term_contexts: HashMap<String, Vec<String>> = HashMap::new();

    for nc in &doc.noun_chunks {
        let term = doc.span_text(nc.start, nc.end).trim().to_lowercase();
        if term.split_whitespace().count() < 2 {
            continue;
        }
        let Some(sentence_idx) = doc.sentence_of(nc.start) else {
            continue;
        };
        let context = doc.sentences[sentence_idx].text.trim().to_string();

        if !term_contexts.contains_key(&term) {
            term_order.push(term.clone());
        }
        term_contexts.entry(term).or_default().push(context);
    }

    for term in &term_order {
        let contexts = &term_contexts[term];
        if contexts.len() < config.vocab_min_frequency {
            continue;
        }
        chunks.push(Chunk::tagged(
            contexts[0].clone(),
            vec![
                ("term", json!(term)),
                ("vocab_type", json!("noun_phrase")),
                ("frequency", json!(contexts.len())),
                ("examples", json!(contexts[..contexts.len().min(3)].to_vec())),
                ("type", json!("vocab_extract")),
            ],
        ));
    }

    // ── Pass 2: distinct content-verb lemmas ─────────────────────────────
    let mut verb_order: Vec<String> = Vec::new();
    let mut verb_sentence: HashMap<String, String> = HashMap::new();

    for token in &doc.tokens {
        if token.pos != PartOfSpeech::Verb
            || token.is_stop
            || token.text.chars().count() < config.vocab_min_verb_chars
        {
            continue;
        }
        let Some(sentence_idx) = doc.sentence_of(token.index) else {
            continue;
        };
        if !verb_sentence.contains_key(&token.lemma) {
            verb_order.push(token.lemma.clone());
            verb_sentence.insert(
                token.lemma.clone(),
                doc.sentences[sentence_idx].text.trim().to_string(),
            );
        }
    }

    for lemma in verb_order.iter().take(config.vocab_max_verbs) {
        chunks.push(Chunk::tagged(
            verb_sentence[lemma].clone(),
            vec![
                ("term", json!(lemma)),
                ("vocab_type", json!("verb")),
                ("type", json!("vocab_extract")),
            ],
        ));
    }

    tracing::debug!(
        terms = term_order.len(),
        verbs = verb_order.len(),
        emitted = chunks.len(),
        "vocab_extract complete"
    );
    chunks
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::{DepLabel, DocumentBuilder};
    use crate::domain::language::Language;

    // One sentence: "the solar panel powers the house"-style with a
    // noun chunk over the given token range
    fn doc_with_repeated_chunk() -> AnnotatedDocument {
        let mut b = DocumentBuilder::new("", Language::En);

        // Sentence 1: "The solar panel works" — chunk [0,3)
        b.begin_sentence();
        b.token("The", "the", PartOfSpeech::Det, DepLabel::Det, 2);
        b.token("solar", "solar", PartOfSpeech::Adj, DepLabel::Amod, 2);
        b.token("panel", "panel", PartOfSpeech::Noun, DepLabel::Nsubj, 3);
        b.token("works", "work", PartOfSpeech::Verb, DepLabel::Root, 3);
        b.end_sentence("The solar panel works", None);
        b.noun_chunk(0, 3, 2);

        // Sentence 2: "The solar panel heats water" — chunk [4,7)
        b.begin_sentence();
        b.token("The", "the", PartOfSpeech::Det, DepLabel::Det, 6);
        b.token("solar", "solar", PartOfSpeech::Adj, DepLabel::Amod, 6);
        b.token("panel", "panel", PartOfSpeech::Noun, DepLabel::Nsubj, 7);
        b.token("heats", "heat", PartOfSpeech::Verb, DepLabel::Root, 7);
        b.token("water", "water", PartOfSpeech::Noun, DepLabel::Obj, 7);
        b.end_sentence("The solar panel heats water", None);
        b.noun_chunk(4, 7, 6);

        b.build().unwrap()
    }

    #[test]
    fn test_repeated_term_is_emitted_with_frequency() {
        let doc = doc_with_repeated_chunk();
        let chunks = vocab_extract(&doc, &SegmenterConfig::default());

        let term_chunk = chunks
            .iter()
            .find(|c| c.metadata.get("vocab_type") == Some(&json!("noun_phrase")))
            .expect("expected a noun_phrase vocab chunk");
        assert_eq!(term_chunk.metadata["term"], json!("the solar panel"));
        assert_eq!(term_chunk.metadata["frequency"], json!(2));
        // Text is the FIRST occurrence's sentence
        assert_eq!(term_chunk.text, "The solar panel works");
        let examples = term_chunk.metadata["examples"].as_array().unwrap();
        assert_eq!(examples.len(), 2);
    }

    #[test]
    fn test_single_occurrence_term_is_suppressed() {
        let mut b = DocumentBuilder::new("", Language::En);
        b.begin_sentence();
        b.token("black", "black", PartOfSpeech::Adj, DepLabel::Amod, 1);
        b.token("holes", "hole", PartOfSpeech::Noun, DepLabel::Root, 1);
        b.end_sentence("black holes", None);
        b.noun_chunk(0, 2, 1);
        let doc = b.build().unwrap();

        let chunks = vocab_extract(&doc, &SegmenterConfig::default());
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_verbs_collected_once_per_lemma() {
        let doc = doc_with_repeated_chunk();
        let chunks = vocab_extract(&doc, &SegmenterConfig::default());

        let verbs: Vec<_> = chunks
            .iter()
            .filter(|c| c.metadata.get("vocab_type") == Some(&json!("verb")))
            .collect();
        // "works" and "heats" both qualify (5 chars, content verbs)
        assert_eq!(verbs.len(), 2);
        assert_eq!(verbs[0].metadata["term"], json!("work"));
        assert_eq!(verbs[0].text, "The solar panel works");
    }

    #[test]
    fn test_short_and_stop_verbs_are_ignored() {
        let mut b = DocumentBuilder::new("", Language::En);
        b.begin_sentence();
        // "went" is only 4 chars — below the 5-char floor
        b.token("He", "he", PartOfSpeech::Pron, DepLabel::Nsubj, 1);
        b.token("went", "go", PartOfSpeech::Verb, DepLabel::Root, 1);
        b.end_sentence("He went", None);
        let doc = b.build().unwrap();

        let chunks = vocab_extract(&doc, &SegmenterConfig::default());
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_verb_cap_respected() {
        let mut b = DocumentBuilder::new("", Language::En);
        b.begin_sentence();
        let root = b.next_index();
        for i in 0..25 {
            let text = format!("verbing{i}");
            let dep = if i == 0 { DepLabel::Root } else { DepLabel::Conj };
            b.token(text.clone(), text, PartOfSpeech::Verb, dep, root);
        }
        b.end_sentence("many verbs", None);
        let doc = b.build().unwrap();

        let chunks = vocab_extract(&doc, &SegmenterConfig::default());
        assert_eq!(chunks.len(), 20);
    }
}
