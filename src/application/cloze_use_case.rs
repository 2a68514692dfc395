// ============================================================
// Layer 2 — Cloze Use Case
// ============================================================
// Fill-in-the-blank generation: for each card's answer, find the
// spans worth hiding and emit one new card per redaction. Four
// target families, enumerated in a fixed order:
//   1. named entities   (PERSON/ORG/GPE/LOC/DATE/EVENT)
//   2. noun phrases     (two or more words)
//   3. verb phrases     (verb + direct-object subtree)
//   4. syntactic heads  (root + core arguments, off by default)
// At most three variants per card survive.
//
// Entity targets are replaced by character offset — the span's
// position is known exactly, so an identical earlier substring
// can never be hit by mistake. Token-set targets may be
// discontiguous and carry no single span, so those fall back to
// first-occurrence replacement, skipped when the joined text
// does not appear verbatim in the answer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::annotation::{AnnotatedDocument, DepLabel, PartOfSpeech};
use crate::domain::error::NlpError;
use crate::domain::flashcard::{ClozeKind, ClozeVariant, FlashCard};
use crate::domain::language::Language;
use crate::domain::traits::AnnotationProvider;
use crate::segmentation::clauses::subtree;

/// Cap on variants kept per source card.
const MAX_VARIANTS_PER_CARD: usize = 3;

/// Which target families to enumerate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClozeConfig {
    pub named_entities: bool,
    pub noun_phrases: bool,
    pub verb_phrases: bool,
    pub syntactic_heads: bool,
}

impl Default for ClozeConfig {
    fn default() -> Self {
        Self {
            named_entities: true,
            noun_phrases: true,
            verb_phrases: true,
            syntactic_heads: false,
        }
    }
}

/// One generated fill-in-the-blank card.
#[derive(Debug, Clone, Serialize)]
pub struct ClozeCard {
    pub question: String,
    pub answer: String,
    #[serde(rename = "type")]
    pub card_type: &'static str,
    pub metadata: ClozeMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClozeMetadata {
    pub original_card: FlashCard,
    pub cloze_type: String,
    pub target: String,
    pub generated_by: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClozeStats {
    pub original_cards: usize,
    pub generated_cloze: usize,
    /// Mean variants per source card, rounded to two decimals
    pub variants_per_card: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClozeResponse {
    pub cloze_cards: Vec<ClozeCard>,
    pub stats: ClozeStats,
}

pub struct ClozeUseCase<'a> {
    provider: &'a dyn AnnotationProvider,
    config: ClozeConfig,
}

impl<'a> ClozeUseCase<'a> {
    pub fn new(provider: &'a dyn AnnotationProvider, config: ClozeConfig) -> Self {
        Self { provider, config }
    }

    /// Generate cloze cards for a batch. Cards with an empty
    /// answer are skipped silently.
    pub fn execute(
        &self,
        cards: Vec<FlashCard>,
        language: Language,
    ) -> Result<ClozeResponse, NlpError> {
        let original_cards = cards.len();
        let mut cloze_cards = Vec::new();

        for card in cards {
            if card.answer.is_empty() {
                continue;
            }
            let doc = self.provider.annotate(&card.answer, language)?;
            let variants = self.variants_for(&card.answer, &doc);

            for variant in variants.into_iter().take(MAX_VARIANTS_PER_CARD) {
                cloze_cards.push(ClozeCard {
                    question: format!("{} (Cloze - {})", card.question, variant.kind.as_str()),
                    answer: variant.text,
                    card_type: "cloze",
                    metadata: ClozeMetadata {
                        original_card: card.clone(),
                        cloze_type: variant.kind.as_str().to_string(),
                        target: variant.target,
                        generated_by: "dependency_analysis",
                    },
                });
            }
        }

        tracing::info!(
            cards = original_cards,
            generated = cloze_cards.len(),
            "cloze generation complete"
        );

        let variants_per_card = if original_cards == 0 {
            0.0
        } else {
            let ratio = cloze_cards.len() as f64 / original_cards as f64;
            (ratio * 100.0).round() / 100.0
        };

        Ok(ClozeResponse {
            stats: ClozeStats {
                original_cards,
                generated_cloze: cloze_cards.len(),
                variants_per_card,
            },
            cloze_cards,
        })
    }

    /// All candidate variants for one answer, family order fixed.
    fn variants_for(&self, answer: &str, doc: &AnnotatedDocument) -> Vec<ClozeVariant> {
        let mut variants = Vec::new();

        if self.config.named_entities {
            entity_variants(answer, doc, &mut variants);
        }
        if self.config.noun_phrases {
            noun_phrase_variants(answer, doc, &mut variants);
        }
        if self.config.verb_phrases {
            verb_phrase_variants(answer, doc, &mut variants);
        }
        if self.config.syntactic_heads {
            syntactic_head_variants(answer, doc, &mut variants);
        }

        variants
    }
}

/// Wrap a target in the Anki cloze placeholder.
fn placeholder(target: &str) -> String {
    format!("{{{{c1::{target}}}}}")
}

/// Splice the placeholder over a known character span.
fn redact_span(answer: &str, start: usize, end: usize, target: &str) -> String {
    format!("{}{}{}", &answer[..start], placeholder(target), &answer[end..])
}

/// Replace the first verbatim occurrence, or None when the target
/// never appears as-is (token joining may not match raw spacing).
fn redact_first(answer: &str, target: &str) -> Option<String> {
    if !answer.contains(target) {
        return None;
    }
    Some(answer.replacen(target, &placeholder(target), 1))
}

fn entity_variants(answer: &str, doc: &AnnotatedDocument, out: &mut Vec<ClozeVariant>) {
    for ent in &doc.entities {
        if !ent.label.is_cloze_target() {
            continue;
        }
        out.push(ClozeVariant {
            text: redact_span(answer, ent.start_char, ent.end_char, &ent.text),
            kind: ClozeKind::NamedEntity,
            target: ent.text.clone(),
            entity_type: Some(ent.label.as_str().to_string()),
            root: None,
            verb: None,
        });
    }
}

fn noun_phrase_variants(answer: &str, doc: &AnnotatedDocument, out: &mut Vec<ClozeVariant>) {
    for nc in &doc.noun_chunks {
        let target = doc.span_text(nc.start, nc.end);
        // Single-word phrases make trivial blanks
        if target.split_whitespace().count() < 2 {
            continue;
        }
        let Some(text) = redact_first(answer, &target) else {
            continue;
        };
        out.push(ClozeVariant {
            text,
            kind: ClozeKind::NounPhrase,
            target,
            entity_type: None,
            root: Some(doc.tokens[nc.root].lemma.clone()),
            verb: None,
        });
    }
}

/// Verb + its direct-object subtree. Single-token phrases (a verb
/// with no object) are skipped.
fn verb_phrase_variants(answer: &str, doc: &AnnotatedDocument, out: &mut Vec<ClozeVariant>) {
    for token in &doc.tokens {
        if token.pos != PartOfSpeech::Verb {
            continue;
        }

        let mut phrase: BTreeSet<usize> = BTreeSet::new();
        phrase.insert(token.index);
        for &child in doc.children(token.index) {
            if doc.tokens[child].dep.is_direct_object() {
                phrase.extend(subtree(doc, child));
            }
        }
        if phrase.len() < 2 {
            continue;
        }

        let ordered: Vec<usize> = phrase.into_iter().collect();
        let target = doc.tokens_text(&ordered);
        let Some(text) = redact_first(answer, &target) else {
            continue;
        };
        out.push(ClozeVariant {
            text,
            kind: ClozeKind::VerbPhrase,
            target,
            entity_type: None,
            root: None,
            verb: Some(token.lemma.clone()),
        });
    }
}

/// Sentence root + its core arguments (direct children only).
fn syntactic_head_variants(answer: &str, doc: &AnnotatedDocument, out: &mut Vec<ClozeVariant>) {
    for sent_idx in 0..doc.sentences.len() {
        let Some(root) = doc
            .sentence_tokens(sent_idx)
            .find(|&i| doc.tokens[i].dep == DepLabel::Root)
        else {
            continue;
        };

        let mut head_tokens: Vec<usize> = vec![root];
        for &child in doc.children(root) {
            if doc.tokens[child].dep.is_core_argument() {
                head_tokens.push(child);
            }
        }
        head_tokens.sort_unstable();

        let target = doc.tokens_text(&head_tokens);
        let Some(text) = redact_first(answer, &target) else {
            continue;
        };
        out.push(ClozeVariant {
            text,
            kind: ClozeKind::SyntacticHead,
            target,
            entity_type: None,
            root: Some(doc.tokens[root].lemma.clone()),
            verb: None,
        });
    }
}
