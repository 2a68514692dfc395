// ============================================================
// Layer 4 — Structure-Aware Strategies
// ============================================================
// Three advanced strategies that segment around document
// structure rather than individual tokens:
//
//   chapter_sents   → chapters first, then sentence packing
//                     (technical books, study material)
//   entity_context  → a window of sentences around each
//                     relevant entity (biographies, history)
//   semantic_blocks → vector-driven topic blocks
//                     (philosophy, dense essays)
//
// chapter_sents is the one strategy that needs the provider
// again: each detected chapter is re-annotated independently,
// so sentence boundaries never leak across chapter headings.
//
// Reference: Rust Book §13 (Iterators and Closures)

use serde_json::json;
use std::collections::HashSet;

use crate::domain::annotation::{round3, AnnotatedDocument};
use crate::domain::chunk::Chunk;
use crate::domain::error::NlpError;
use crate::domain::language::Language;
use crate::domain::traits::AnnotationProvider;
use crate::segmentation::chapters::ChapterDetector;
use crate::segmentation::SegmenterConfig;

/// Detect chapters in the raw text, re-annotate each chapter,
/// and pack its sentences greedily up to the character budget.
/// A sentence that would overflow the budget closes the current
/// chunk and seeds the next one.
pub fn chapter_sentences(
    text: &str,
    provider: &dyn AnnotationProvider,
    language: Language,
    config: &SegmenterConfig,
) -> Result<Vec<Chunk>, NlpError> {
    let detector = ChapterDetector::new();
    let mut chunks = Vec::new();

    for chapter in detector.detect(text) {
        let chapter_doc = provider.annotate(&chapter.text, language)?;

        let mut current: Vec<String> = Vec::new();
        let mut current_size = 0usize;

        for sentence in &chapter_doc.sentences {
            let sent_text = sentence.text.trim();
            if sent_text.is_empty() {
                continue;
            }
            let sent_size = sent_text.len();

            if current_size + sent_size > config.chapter_chunk_chars && !current.is_empty() {
                chunks.push(chapter_chunk(current.join(" "), &chapter.title));
                current = vec![sent_text.to_string()];
                current_size = sent_size;
            } else {
                current.push(sent_text.to_string());
                current_size += sent_size;
            }
        }
        if !current.is_empty() {
            chunks.push(chapter_chunk(current.join(" "), &chapter.title));
        }
    }

    tracing::debug!(chunks = chunks.len(), "chapter_sents segmentation complete");
    Ok(chunks)
}

fn chapter_chunk(text: String, title: &str) -> Chunk {
    Chunk::tagged(
        text,
        vec![("chapter", json!(title)), ("type", json!("chapter_sents"))],
    )
}

/// For each relevant entity, emit its sentence plus `entity_window`
/// sentences either side. Sentences already consumed by an earlier
/// entity's window are skipped, so overlapping mentions do not
/// produce duplicate chunks.
pub fn entity_context(doc: &AnnotatedDocument, config: &SegmenterConfig) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut processed: HashSet<usize> = HashSet::new();
    let total = doc.sentences.len();

    for entity in &doc.entities {
        if !entity.label.is_contextual() {
            continue;
        }

        let sent_idx = entity.sentence;
        if processed.contains(&sent_idx) {
            continue;
        }

        let start = sent_idx.saturating_sub(config.entity_window);
        let end = (sent_idx + config.entity_window + 1).min(total);

        let text = doc.sentences[start..end]
            .iter()
            .map(|s| s.text.trim())
            .collect::<Vec<_>>()
            .join(" ");

        chunks.push(Chunk::tagged(
            text,
            vec![
                ("entity", json!(entity.text)),
                ("entity_type", json!(entity.label.as_str())),
                ("main_sentence", json!(doc.sentences[sent_idx].text.trim())),
                ("type", json!("entity_context")),
            ],
        ));

        processed.extend(start..end);
    }

    chunks
}

/// Accumulate sentences into topic blocks: a block closes when
/// the similarity between the incoming sentence and the one
/// before it drops below the threshold, OR when the block's
/// accumulated text exceeds the character ceiling — whichever
/// triggers first. Missing vectors are treated as similarity 1.0
/// ("assume related"). The closing chunk records the mean of the
/// adjacent-pair similarities inside the block.
pub fn semantic_blocks(doc: &AnnotatedDocument, config: &SegmenterConfig) -> Vec<Chunk> {
    let sentences = &doc.sentences;

    if sentences.len() < 2 {
        return vec![Chunk::tagged(
            doc.text.clone(),
            vec![("type", json!("semantic_blocks"))],
        )];
    }

    if !doc.has_vector() {
        // No vectors loaded — one chunk per sentence
        return sentences
            .iter()
            .map(|s| Chunk::tagged(s.text.clone(), vec![("type", json!("semantic_blocks"))]))
            .collect();
    }

    let mut chunks = Vec::new();
    let mut block: Vec<usize> = vec![0];

    for i in 1..sentences.len() {
        let prev = &sentences[i - 1];
        let curr = &sentences[i];

        let similarity = if prev.has_vector() && curr.has_vector() {
            prev.similarity(curr)
        } else {
            1.0
        };

        let block_len: usize = block.iter().map(|&j| sentences[j].text.len()).sum();

        if similarity < config.block_threshold || block_len > config.block_max_chars {
            chunks.push(close_block(doc, &block));
            block = vec![i];
        } else {
            block.push(i);
        }
    }
    if !block.is_empty() {
        // Trailing block: no average recorded, matching the
        // "close on trigger" rule above
        let text = joined_block_text(doc, &block);
        chunks.push(Chunk::tagged(
            text,
            vec![("type", json!("semantic_blocks"))],
        ));
    }

    chunks
}

/// Close a block with its average adjacent-pair similarity.
fn close_block(doc: &AnnotatedDocument, block: &[usize]) -> Chunk {
    let sentences = &doc.sentences;

    let mut sims = Vec::new();
    for w in block.windows(2) {
        let (a, b) = (&sentences[w[0]], &sentences[w[1]]);
        if a.has_vector() && b.has_vector() {
            sims.push(a.similarity(b));
        }
    }
    let avg = if sims.is_empty() {
        0.0
    } else {
        sims.iter().sum::<f32>() / sims.len() as f32
    };

    Chunk::tagged(
        joined_block_text(doc, block),
        vec![
            ("avg_similarity", json!(round3(avg))),
            ("num_sentences", json!(block.len())),
            ("type", json!("semantic_blocks")),
        ],
    )
}

fn joined_block_text(doc: &AnnotatedDocument, block: &[usize]) -> String {
    block
        .iter()
        .map(|&i| doc.sentences[i].text.trim())
        .collect::<Vec<_>>()
        .join(" ")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::{DepLabel, DocumentBuilder, EntityLabel, PartOfSpeech};
    use crate::infra::rule_annotator::RuleAnnotator;

    fn push_sentence(b: &mut DocumentBuilder, words: &[&str], vector: Option<Vec<f32>>) {
        b.begin_sentence();
        let root = b.next_index();
        for (k, w) in words.iter().enumerate() {
            let dep = if k == 0 { DepLabel::Root } else { DepLabel::Other("dep".into()) };
            b.token(*w, w.to_lowercase(), PartOfSpeech::Noun, dep, root);
        }
        b.end_sentence(words.join(" "), vector);
    }

    #[test]
    fn test_chapter_sentences_tag_their_chapter() {
        let provider = RuleAnnotator::new();
        let text = "Chapter 1\nFirst body sentence. Second body sentence.\nChapter 2\nAnother one.\n";
        let chunks = chapter_sentences(
            text,
            &provider,
            Language::En,
            &SegmenterConfig::default(),
        )
        .unwrap();

        assert!(chunks.len() >= 2);
        assert_eq!(chunks[0].metadata["chapter"], json!("Chapter 1"));
        assert_eq!(
            chunks.last().unwrap().metadata["chapter"],
            json!("Chapter 2")
        );
        assert!(chunks
            .iter()
            .all(|c| c.metadata["type"] == json!("chapter_sents")));
    }

    #[test]
    fn test_chapter_sentences_respect_character_budget() {
        let provider = RuleAnnotator::new();
        // Two sentences of ~30 chars each with a 40-char budget:
        // they cannot share a chunk
        let text = "This sentence has thirty chars. Another one of similar size.";
        let config = SegmenterConfig {
            chapter_chunk_chars: 40,
            ..SegmenterConfig::default()
        };
        let chunks = chapter_sentences(text, &provider, Language::En, &config).unwrap();
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn test_entity_context_window_and_dedup() {
        // Two sentences, three entities. Juan's window (1 either
        // side) covers both sentences, so Madrid and María find
        // their sentences already consumed and emit nothing.
        let mut b = DocumentBuilder::new("Juan fue a Madrid. Allí conoció a María.", Language::Es);
        b.begin_sentence();
        b.token("Juan", "juan", PartOfSpeech::Propn, DepLabel::Nsubj, 1);
        b.token("fue", "ir", PartOfSpeech::Verb, DepLabel::Root, 1);
        b.token("a", "a", PartOfSpeech::Adp, DepLabel::Other("case".into()), 3);
        b.token("Madrid", "madrid", PartOfSpeech::Propn, DepLabel::Obl, 1);
        b.token(".", ".", PartOfSpeech::Punct, DepLabel::Other("punct".into()), 1);
        b.end_sentence("Juan fue a Madrid.", None);
        b.begin_sentence();
        b.token("Allí", "allí", PartOfSpeech::Adv, DepLabel::Advmod, 6);
        b.token("conoció", "conocer", PartOfSpeech::Verb, DepLabel::Root, 6);
        b.token("a", "a", PartOfSpeech::Adp, DepLabel::Other("case".into()), 8);
        b.token("María", "maría", PartOfSpeech::Propn, DepLabel::Obj, 6);
        b.token(".", ".", PartOfSpeech::Punct, DepLabel::Other("punct".into()), 6);
        b.end_sentence("Allí conoció a María.", None);
        b.entity("Juan", EntityLabel::Person, 0, 1, 0, 4);
        b.entity("Madrid", EntityLabel::Gpe, 3, 4, 11, 17);
        b.entity("María", EntityLabel::Person, 8, 9, 34, 39);
        let doc = b.build().unwrap();

        let chunks = entity_context(&doc, &SegmenterConfig::default());

        // Juan consumes sentences {0,1}; Madrid (sentence 0) is
        // deduped; María (sentence 1) is deduped too.
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].text.contains("Juan fue a Madrid."));
        assert!(chunks[0].text.contains("Allí conoció a María."));
        assert_eq!(chunks[0].metadata["entity"], json!("Juan"));
        assert_eq!(chunks[0].metadata["entity_type"], json!("PERSON"));
        assert_eq!(chunks[0].metadata["main_sentence"], json!("Juan fue a Madrid."));
    }

    #[test]
    fn test_entity_context_skips_irrelevant_labels() {
        let mut b = DocumentBuilder::new("Five percent growth.", Language::En);
        push_sentence(&mut b, &["Five", "percent", "growth", "."], None);
        b.entity("Five percent", EntityLabel::Other("PERCENT".into()), 0, 2, 0, 12);
        let doc = b.build().unwrap();

        let chunks = entity_context(&doc, &SegmenterConfig::default());
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_semantic_blocks_single_sentence_is_whole_text() {
        let mut b = DocumentBuilder::new("Only sentence.", Language::En);
        push_sentence(&mut b, &["Only", "sentence", "."], None);
        let doc = b.build().unwrap();

        let chunks = semantic_blocks(&doc, &SegmenterConfig::default());
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "Only sentence.");
    }

    #[test]
    fn test_semantic_blocks_without_vectors_one_per_sentence() {
        let mut b = DocumentBuilder::new("", Language::En);
        push_sentence(&mut b, &["one"], None);
        push_sentence(&mut b, &["two"], None);
        let doc = b.build().unwrap();

        let chunks = semantic_blocks(&doc, &SegmenterConfig::default());
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn test_semantic_blocks_cut_on_topic_change() {
        let mut b = DocumentBuilder::new("", Language::En);
        b.vector(vec![1.0, 0.0]);
        push_sentence(&mut b, &["cats", "purr", "softly"], Some(vec![1.0, 0.0]));
        push_sentence(&mut b, &["cats", "nap", "often"], Some(vec![0.9, 0.1]));
        push_sentence(&mut b, &["markets", "crashed", "today"], Some(vec![0.0, 1.0]));
        let doc = b.build().unwrap();

        let chunks = semantic_blocks(&doc, &SegmenterConfig::default());
        assert_eq!(chunks.len(), 2);
        // The closed block records its internal average similarity
        assert!(chunks[0].metadata.contains_key("avg_similarity"));
        assert_eq!(chunks[0].metadata["num_sentences"], json!(2));
        // The trailing block carries only the type tag
        assert!(!chunks[1].metadata.contains_key("avg_similarity"));
    }

    #[test]
    fn test_semantic_blocks_cut_on_length_ceiling() {
        let mut b = DocumentBuilder::new("", Language::En);
        b.vector(vec![1.0, 0.0]);
        // Same topic throughout, but tiny character ceiling
        push_sentence(&mut b, &["aaaa", "bbbb", "cccc"], Some(vec![1.0, 0.0]));
        push_sentence(&mut b, &["dddd", "eeee", "ffff"], Some(vec![1.0, 0.0]));
        let doc = b.build().unwrap();

        let config = SegmenterConfig {
            block_max_chars: 10,
            ..SegmenterConfig::default()
        };
        let chunks = semantic_blocks(&doc, &config);
        assert_eq!(chunks.len(), 2);
    }
}
