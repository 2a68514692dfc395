// ============================================================
// Layer 4 — Dependency-Tree Strategies
// ============================================================
// The two strategies that cut along syntactic structure:
//
//   clause_segment      → one chunk per ROOT clause, with long
//                         clauses subdivided at conjunctions
//   verb_phrase_segment → verb + complement subtrees, for small
//                         chunks describing a single action
//
// Both lean on the shared primitives in clauses.rs; neither
// touches text outside the dependency tree.
//
// Reference: Rust Book §13 (Iterators and Closures)

use serde_json::json;
use std::collections::{BTreeSet, HashSet};

use crate::domain::annotation::{AnnotatedDocument, DepLabel, PartOfSpeech};
use crate::domain::chunk::Chunk;
use crate::segmentation::clauses::{extract_clause, split_by_conjunctions, subtree};
use crate::segmentation::SegmenterConfig;

/// One chunk per ROOT clause. A sentence without any ROOT token
/// is emitted whole, tagged no_verb. A clause longer than the
/// token ceiling is subdivided at coordinating conjunctions and
/// each sub-group becomes its own chunk.
pub fn clause_segment(doc: &AnnotatedDocument, config: &SegmenterConfig) -> Vec<Chunk> {
    let mut chunks = Vec::new();

    for (sent_idx, sentence) in doc.sentences.iter().enumerate() {
        let roots: Vec<usize> = doc
            .sentence_tokens(sent_idx)
            .filter(|&i| doc.tokens[i].dep == DepLabel::Root)
            .collect();

        if roots.is_empty() {
            chunks.push(Chunk::tagged(
                sentence.text.trim(),
                vec![("type", json!("complete")), ("clause_type", json!("no_verb"))],
            ));
            continue;
        }

        for root in roots {
            let verb = &doc.tokens[root];
            let clause = extract_clause(doc, root);

            if clause.len() > config.clause_max_tokens {
                for sub in split_by_conjunctions(doc, &clause, config.conjunction_min_prefix) {
                    let mut ordered = sub.clone();
                    ordered.sort_unstable();
                    chunks.push(Chunk::tagged(
                        doc.tokens_text(&ordered).trim(),
                        vec![
                            ("type", json!("sub_clause")),
                            ("verb", json!(verb.lemma)),
                            ("verb_pos", json!(verb.pos.as_str())),
                            ("num_tokens", json!(sub.len())),
                        ],
                    ));
                }
            } else {
                chunks.push(Chunk::tagged(
                    doc.tokens_text(&clause).trim(),
                    vec![
                        ("type", json!("clause")),
                        ("verb", json!(verb.lemma)),
                        ("verb_pos", json!(verb.pos.as_str())),
                        ("num_tokens", json!(clause.len())),
                    ],
                ));
            }
        }
    }

    chunks
}

/// For each verb (processed once), gather the verb plus every
/// complement child's entire subtree, sort by index, and emit
/// the joined text when it reaches the word floor.
pub fn verb_phrase_segment(doc: &AnnotatedDocument, config: &SegmenterConfig) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut processed: HashSet<usize> = HashSet::new();

    for sent_idx in 0..doc.sentences.len() {
        for i in doc.sentence_tokens(sent_idx) {
            let token = &doc.tokens[i];
            if token.pos != PartOfSpeech::Verb {
                continue;
            }
            if !processed.insert(i) {
                continue;
            }

            // The verb plus each complement child's full subtree.
            // BTreeSet de-duplicates and yields index order for free.
            let mut phrase: BTreeSet<usize> = BTreeSet::new();
            phrase.insert(i);
            for &child in doc.children(i) {
                if doc.tokens[child].dep.is_verb_complement() {
                    phrase.extend(subtree(doc, child));
                }
            }

            let ordered: Vec<usize> = phrase.into_iter().collect();
            let text = doc.tokens_text(&ordered);
            let num_words = text.split_whitespace().count();

            if num_words >= config.verb_phrase_min_words {
                chunks.push(Chunk::tagged(
                    text.trim(),
                    vec![
                        ("type", json!("verb_phrase")),
                        ("verb", json!(token.lemma)),
                        ("verb_text", json!(token.text)),
                        ("verb_pos", json!(token.pos.as_str())),
                        ("num_words", json!(num_words)),
                    ],
                ));
            }
        }
    }

    chunks
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::DocumentBuilder;
    use crate::domain::language::Language;

    // "She quickly read the short book" — read is ROOT, book its
    // object with det+amod children, quickly an adverb.
    fn simple_vp_doc() -> AnnotatedDocument {
        let mut b = DocumentBuilder::new("She quickly read the short book", Language::En);
        b.begin_sentence();
        b.token("She", "she", PartOfSpeech::Pron, DepLabel::Nsubj, 2);
        b.token("quickly", "quickly", PartOfSpeech::Adv, DepLabel::Advmod, 2);
        b.token("read", "read", PartOfSpeech::Verb, DepLabel::Root, 2);
        b.token("the", "the", PartOfSpeech::Det, DepLabel::Det, 5);
        b.token("short", "short", PartOfSpeech::Adj, DepLabel::Amod, 5);
        b.token("book", "book", PartOfSpeech::Noun, DepLabel::Obj, 2);
        b.end_sentence("She quickly read the short book", None);
        b.build().unwrap()
    }

    #[test]
    fn test_clause_segment_emits_root_clause() {
        let doc = simple_vp_doc();
        let chunks = clause_segment(&doc, &SegmenterConfig::default());

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "She quickly read the short book");
        assert_eq!(chunks[0].metadata["type"], json!("clause"));
        assert_eq!(chunks[0].metadata["verb"], json!("read"));
        assert_eq!(chunks[0].metadata["verb_pos"], json!("VERB"));
        assert_eq!(chunks[0].metadata["num_tokens"], json!(6));
    }

    #[test]
    fn test_clause_segment_flags_verbless_sentence() {
        let mut b = DocumentBuilder::new("What a mess", Language::En);
        b.begin_sentence();
        // No ROOT-labeled token at all
        b.token("What", "what", PartOfSpeech::Pron, DepLabel::Other("dep".into()), 2);
        b.token("a", "a", PartOfSpeech::Det, DepLabel::Det, 2);
        b.token("mess", "mess", PartOfSpeech::Noun, DepLabel::Other("dep".into()), 2);
        b.end_sentence("What a mess", None);
        let doc = b.build().unwrap();

        let chunks = clause_segment(&doc, &SegmenterConfig::default());
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].metadata["clause_type"], json!("no_verb"));
        assert_eq!(chunks[0].text, "What a mess");
    }

    #[test]
    fn test_long_clause_is_subdivided_at_conjunction() {
        // 17 flat tokens under one ROOT with "and" in the middle
        let mut b = DocumentBuilder::new("", Language::En);
        b.begin_sentence();
        let root = b.next_index();
        for i in 0..17 {
            let (text, pos, dep) = if i == 8 {
                ("and".to_string(), PartOfSpeech::Cconj, DepLabel::Cc)
            } else if i == 0 {
                ("walked".to_string(), PartOfSpeech::Verb, DepLabel::Root)
            } else {
                (format!("w{i}"), PartOfSpeech::Noun, DepLabel::Other("dep".into()))
            };
            b.token(text.clone(), text.to_lowercase(), pos, dep, root);
        }
        b.end_sentence("long sentence", None);
        let doc = b.build().unwrap();

        let chunks = clause_segment(&doc, &SegmenterConfig::default());
        // extract_clause drops the CCONJ child, leaving 16 tokens,
        // still above the 15-token ceiling → split applies. But the
        // conjunction is already gone, so the split floor keeps it
        // as one sub-clause group.
        assert!(!chunks.is_empty());
        assert!(chunks
            .iter()
            .all(|c| c.metadata["type"] == json!("sub_clause")));
    }

    #[test]
    fn test_verb_phrase_collects_complement_subtrees() {
        let doc = simple_vp_doc();
        let chunks = verb_phrase_segment(&doc, &SegmenterConfig::default());

        assert_eq!(chunks.len(), 1);
        // quickly (advmod) + read + the short book (obj subtree);
        // the nsubj "She" is NOT a complement and stays out
        assert_eq!(chunks[0].text, "quickly read the short book");
        assert_eq!(chunks[0].metadata["verb"], json!("read"));
        assert_eq!(chunks[0].metadata["num_words"], json!(5));
    }

    #[test]
    fn test_verb_phrase_below_word_floor_is_dropped() {
        let mut b = DocumentBuilder::new("Birds sing", Language::En);
        b.begin_sentence();
        b.token("Birds", "bird", PartOfSpeech::Noun, DepLabel::Nsubj, 1);
        b.token("sing", "sing", PartOfSpeech::Verb, DepLabel::Root, 1);
        b.end_sentence("Birds sing", None);
        let doc = b.build().unwrap();

        // The phrase is just "sing" — one word, below the floor of 3
        let chunks = verb_phrase_segment(&doc, &SegmenterConfig::default());
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_verb_phrase_processes_each_verb_once() {
        let doc = simple_vp_doc();
        let once = verb_phrase_segment(&doc, &SegmenterConfig::default());
        let twice = verb_phrase_segment(&doc, &SegmenterConfig::default());
        assert_eq!(once.len(), twice.len());
    }
}
