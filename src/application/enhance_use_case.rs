// ============================================================
// Layer 2 — Enhance Use Case
// ============================================================
// Full linguistic enrichment of one text: instead of cutting it
// into chunks, report everything the annotation found —
// entities with descriptions, per-sentence dependency trees,
// noun phrases, verb phrases with their complements, and
// clusters of semantically related sentences.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::annotation::{AnnotatedDocument, DepLabel, PartOfSpeech};
use crate::domain::error::NlpError;
use crate::domain::language::Language;
use crate::domain::traits::AnnotationProvider;
use crate::segmentation::clauses::subtree;

/// One entity with its category spelled out.
#[derive(Debug, Clone, Serialize)]
pub struct EnhancedEntity {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
    pub description: String,
    /// 0.0 when the provider has no vectors loaded
    pub vector_norm: f64,
}

/// One token's arc in a sentence's dependency tree.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyArc {
    pub text: String,
    pub dep: String,
    pub pos: String,
    /// Surface text of the governing token (itself for ROOT)
    pub head: String,
}

/// The dependency analysis of one sentence, keyed by its root.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceSyntax {
    pub sentence: String,
    pub root_verb: String,
    pub root_pos: String,
    pub dependencies: Vec<DependencyArc>,
}

/// A noun phrase with its syntactic head unpacked.
#[derive(Debug, Clone, Serialize)]
pub struct NounPhraseRecord {
    pub text: String,
    pub root: String,
    pub root_pos: String,
    pub root_dep: String,
    pub lemma: String,
}

/// A verb with its complement subtrees joined into one phrase.
#[derive(Debug, Clone, Serialize)]
pub struct VerbPhraseRecord {
    pub text: String,
    pub verb: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tense: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

/// A sentence that another sentence resembles, with the score.
#[derive(Debug, Clone, Serialize)]
pub struct RelatedSentence {
    pub sentence_idx: usize,
    pub similarity: f64,
}

/// One sentence and every other sentence it is close to.
#[derive(Debug, Clone, Serialize)]
pub struct SemanticCluster {
    pub sentence: String,
    pub sentence_idx: usize,
    pub related_sentences: Vec<RelatedSentence>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnhanceStats {
    pub total_entities: usize,
    /// Counts analysed sentences (those with a ROOT), not raw ones
    pub total_sentences: usize,
    pub total_noun_phrases: usize,
    pub total_verb_phrases: usize,
    pub has_vectors: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnhanceResponse {
    pub entities: Vec<EnhancedEntity>,
    pub syntax_analysis: Vec<SentenceSyntax>,
    pub noun_phrases: Vec<NounPhraseRecord>,
    pub verb_phrases: Vec<VerbPhraseRecord>,
    pub semantic_clusters: Vec<SemanticCluster>,
    pub stats: EnhanceStats,
}

/// Pairwise similarity above this joins two sentences in a cluster.
const CLUSTER_THRESHOLD: f32 = 0.5;

pub struct EnhanceUseCase<'a> {
    provider: &'a dyn AnnotationProvider,
}

impl<'a> EnhanceUseCase<'a> {
    pub fn new(provider: &'a dyn AnnotationProvider) -> Self {
        Self { provider }
    }

    pub fn execute(&self, text: &str, language: Language) -> Result<EnhanceResponse, NlpError> {
        let doc = self.provider.annotate(text, language)?;

        let entities = enriched_entities(&doc);
        let syntax_analysis = sentence_syntax(&doc);
        let noun_phrases = noun_phrase_records(&doc);
        let verb_phrases = verb_phrase_records(&doc);
        let semantic_clusters = semantic_clusters(&doc);

        tracing::info!(
            entities = entities.len(),
            sentences = syntax_analysis.len(),
            verb_phrases = verb_phrases.len(),
            "enhancement complete"
        );

        Ok(EnhanceResponse {
            stats: EnhanceStats {
                total_entities: entities.len(),
                total_sentences: syntax_analysis.len(),
                total_noun_phrases: noun_phrases.len(),
                total_verb_phrases: verb_phrases.len(),
                has_vectors: doc.has_vector(),
            },
            entities,
            syntax_analysis,
            noun_phrases,
            verb_phrases,
            semantic_clusters,
        })
    }
}

fn enriched_entities(doc: &AnnotatedDocument) -> Vec<EnhancedEntity> {
    doc.entities
        .iter()
        .map(|ent| EnhancedEntity {
            text: ent.text.clone(),
            label: ent.label.as_str().to_string(),
            start: ent.start_char,
            end: ent.end_char,
            description: ent.label.describe().to_string(),
            vector_norm: ent.vector_norm.map(f64::from).unwrap_or(0.0),
        })
        .collect()
}

/// One record per sentence that has a ROOT token; sentences
/// without one are skipped entirely.
fn sentence_syntax(doc: &AnnotatedDocument) -> Vec<SentenceSyntax> {
    let mut analysis = Vec::new();

    for (sent_idx, sentence) in doc.sentences.iter().enumerate() {
        let Some(root) = doc
            .sentence_tokens(sent_idx)
            .find(|&i| doc.tokens[i].dep == DepLabel::Root)
        else {
            continue;
        };
        let root_token = &doc.tokens[root];

        analysis.push(SentenceSyntax {
            sentence: sentence.text.clone(),
            root_verb: root_token.lemma.clone(),
            root_pos: root_token.pos.as_str().to_string(),
            dependencies: doc
                .sentence_tokens(sent_idx)
                .map(|i| {
                    let t = &doc.tokens[i];
                    DependencyArc {
                        text: t.text.clone(),
                        dep: t.dep.as_str().to_string(),
                        pos: t.pos.as_str().to_string(),
                        head: doc.tokens[t.head].text.clone(),
                    }
                })
                .collect(),
        });
    }

    analysis
}

fn noun_phrase_records(doc: &AnnotatedDocument) -> Vec<NounPhraseRecord> {
    doc.noun_chunks
        .iter()
        .map(|nc| {
            let root = &doc.tokens[nc.root];
            NounPhraseRecord {
                text: doc.span_text(nc.start, nc.end),
                root: root.text.clone(),
                root_pos: root.pos.as_str().to_string(),
                root_dep: root.dep.as_str().to_string(),
                lemma: root.lemma.clone(),
            }
        })
        .collect()
}

/// Verb + the full subtrees of its object, oblique, and adverbial
/// children. Negation and auxiliaries stay out here — this is the
/// reporting view, narrower than the segmentation strategy.
fn verb_phrase_records(doc: &AnnotatedDocument) -> Vec<VerbPhraseRecord> {
    let mut records = Vec::new();

    for token in &doc.tokens {
        if token.pos != PartOfSpeech::Verb {
            continue;
        }

        let mut phrase: BTreeSet<usize> = BTreeSet::new();
        phrase.insert(token.index);
        for &child in doc.children(token.index) {
            if matches!(
                doc.tokens[child].dep,
                DepLabel::Obj | DepLabel::Dobj | DepLabel::Iobj | DepLabel::Obl | DepLabel::Advmod
            ) {
                phrase.extend(subtree(doc, child));
            }
        }

        let ordered: Vec<usize> = phrase.into_iter().collect();
        records.push(VerbPhraseRecord {
            text: doc.tokens_text(&ordered),
            verb: token.lemma.clone(),
            tense: token.morph.get("Tense").cloned(),
            mood: token.morph.get("Mood").cloned(),
        });
    }

    records
}

/// For each vectored sentence, every OTHER vectored sentence with
/// similarity above the threshold. Sentences with no close
/// neighbours produce no cluster; no vectors, no clusters at all.
fn semantic_clusters(doc: &AnnotatedDocument) -> Vec<SemanticCluster> {
    if doc.sentences.len() < 2 || !doc.has_vector() {
        return Vec::new();
    }

    let mut clusters = Vec::new();
    for (i, sentence) in doc.sentences.iter().enumerate() {
        if !sentence.has_vector() {
            continue;
        }

        let related: Vec<RelatedSentence> = doc
            .sentences
            .iter()
            .enumerate()
            .filter(|(j, other)| *j != i && other.has_vector())
            .filter_map(|(j, other)| {
                let sim = sentence.similarity(other);
                (sim > CLUSTER_THRESHOLD).then(|| RelatedSentence {
                    sentence_idx: j,
                    similarity: crate::domain::annotation::round3(sim),
                })
            })
            .collect();

        if !related.is_empty() {
            clusters.push(SemanticCluster {
                sentence: sentence.text.clone(),
                sentence_idx: i,
                related_sentences: related,
            });
        }
    }

    clusters
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::DocumentBuilder;
    use crate::infra::rule_annotator::RuleAnnotator;

    #[test]
    fn test_entities_carry_descriptions() {
        let annotator = RuleAnnotator::new();
        let use_case = EnhanceUseCase::new(&annotator);

        let resp = use_case
            .execute("Napoleon invaded Russia.", Language::En)
            .unwrap();

        let russia = resp
            .entities
            .iter()
            .find(|e| e.text == "Russia")
            .expect("expected Russia entity");
        assert_eq!(russia.label, "GPE");
        assert_eq!(russia.description, "Countries, cities, states");
        assert_eq!(russia.vector_norm, 0.0);
    }

    #[test]
    fn test_syntax_analysis_reports_root_and_arcs() {
        let annotator = RuleAnnotator::new();
        let use_case = EnhanceUseCase::new(&annotator);

        let resp = use_case
            .execute("Napoleon invaded Russia.", Language::En)
            .unwrap();

        assert_eq!(resp.syntax_analysis.len(), 1);
        let sent = &resp.syntax_analysis[0];
        assert_eq!(sent.root_verb, "invaded");
        assert_eq!(sent.root_pos, "VERB");
        // Every token of the sentence gets an arc, punctuation included
        assert_eq!(sent.dependencies.len(), 4);
        let subj = sent.dependencies.iter().find(|d| d.text == "Napoleon").unwrap();
        assert_eq!(subj.head, "invaded");
    }

    #[test]
    fn test_verb_phrase_excludes_negation_and_aux() {
        let mut b = DocumentBuilder::new("did not read the book", Language::En);
        b.begin_sentence();
        b.token("did", "do", PartOfSpeech::Aux, DepLabel::Aux, 2);
        b.token("not", "not", PartOfSpeech::Adv, DepLabel::Neg, 2);
        b.token("read", "read", PartOfSpeech::Verb, DepLabel::Root, 2);
        b.token("the", "the", PartOfSpeech::Det, DepLabel::Det, 4);
        b.token("book", "book", PartOfSpeech::Noun, DepLabel::Obj, 2);
        b.end_sentence("did not read the book", None);
        let doc = b.build().unwrap();

        let records = verb_phrase_records(&doc);
        assert_eq!(records.len(), 1);
        // aux/neg children are not complements in the reporting view
        assert_eq!(records[0].text, "read the book");
    }

    #[test]
    fn test_clusters_need_vectors() {
        let annotator = RuleAnnotator::new();
        let use_case = EnhanceUseCase::new(&annotator);

        // The rule annotator carries no vectors, so no clusters
        let resp = use_case
            .execute("One thing. Another thing.", Language::En)
            .unwrap();
        assert!(resp.semantic_clusters.is_empty());
        assert!(!resp.stats.has_vectors);
    }

    #[test]
    fn test_clusters_pair_similar_sentences() {
        let mut b = DocumentBuilder::new("", Language::En);
        b.vector(vec![1.0, 0.0]);
        for (text, vec) in [
            ("Cats purr", vec![1.0, 0.1]),
            ("Felines purr", vec![1.0, 0.2]),
            ("Stocks fell", vec![-0.1, 1.0]),
        ] {
            b.begin_sentence();
            let root = b.next_index();
            b.token(text, text, PartOfSpeech::Verb, DepLabel::Root, root);
            b.end_sentence(text, Some(vec));
        }
        let doc = b.build().unwrap();

        let clusters = semantic_clusters(&doc);
        // The two cat sentences cluster with each other; the stock
        // sentence is close to neither.
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].sentence_idx, 0);
        assert_eq!(clusters[0].related_sentences.len(), 1);
        assert_eq!(clusters[0].related_sentences[0].sentence_idx, 1);
    }
}
