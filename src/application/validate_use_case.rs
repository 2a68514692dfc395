// ============================================================
// Layer 2 — Validate Use Case
// ============================================================
// Quality checks over a batch of flashcards. Five checks per
// card, in a fixed order:
//   1. grammar             — question ends with ? or ¿
//   2. coherence           — answer has at least three words
//   3. entity_consistency  — question entities reappear in answer
//   4. semantic_coherence  — question/answer similarity floor
//   5. syntax              — long answers contain a main verb
//
// A card failing checks is still returned, annotated — malformed
// input is reported, never rejected.

use serde::Serialize;

use crate::domain::error::NlpError;
use crate::domain::flashcard::{CardValidation, FlashCard, IssueKind, ValidatedCard, ValidationIssue};
use crate::domain::language::Language;
use crate::domain::traits::AnnotationProvider;

/// Question/answer similarity below this flags a coherence issue.
const COHERENCE_FLOOR: f32 = 0.3;
/// Answers shorter than this many words are flagged.
const MIN_ANSWER_WORDS: usize = 3;
/// Answers longer than this many words must contain a verb.
const VERB_REQUIRED_ABOVE_WORDS: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct ValidateStats {
    pub total_cards: usize,
    pub valid_cards: usize,
    pub cards_with_issues: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub validated_cards: Vec<ValidatedCard>,
    pub stats: ValidateStats,
}

pub struct ValidateUseCase<'a> {
    provider: &'a dyn AnnotationProvider,
}

impl<'a> ValidateUseCase<'a> {
    pub fn new(provider: &'a dyn AnnotationProvider) -> Self {
        Self { provider }
    }

    /// Run all five checks on every card. An empty batch yields
    /// an empty response, not an error.
    pub fn execute(
        &self,
        cards: Vec<FlashCard>,
        language: Language,
    ) -> Result<ValidateResponse, NlpError> {
        let mut validated_cards = Vec::with_capacity(cards.len());

        for card in cards {
            let validation = self.validate_card(&card, language)?;
            validated_cards.push(ValidatedCard { card, validation });
        }

        let valid_cards = validated_cards
            .iter()
            .filter(|c| c.validation.is_valid)
            .count();

        tracing::info!(
            total = validated_cards.len(),
            valid = valid_cards,
            "validation complete"
        );

        Ok(ValidateResponse {
            stats: ValidateStats {
                total_cards: validated_cards.len(),
                valid_cards,
                cards_with_issues: validated_cards.len() - valid_cards,
            },
            validated_cards,
        })
    }

    fn validate_card(
        &self,
        card: &FlashCard,
        language: Language,
    ) -> Result<CardValidation, NlpError> {
        let question = card.question.trim();
        let answer = &card.answer;
        let mut issues = Vec::new();

        let q_doc = self.provider.annotate(&card.question, language)?;
        let a_doc = self.provider.annotate(answer, language)?;

        // 1. Grammar: any present question (even whitespace-only)
        // must end with a question mark after trimming.
        // ¿ is accepted too so inverted-only Spanish questions pass.
        if !card.question.is_empty() && !question.ends_with('?') && !question.ends_with('¿') {
            issues.push(ValidationIssue::new(
                IssueKind::Grammar,
                "Question does not end with a question mark",
            ));
        }

        // 2. Coherence: answer length floor
        if answer.split_whitespace().count() < MIN_ANSWER_WORDS {
            issues.push(ValidationIssue::new(
                IssueKind::Coherence,
                "Answer is too short",
            ));
        }

        // 3. Entity consistency: a question entity must reappear in
        // the answer, either as a recognised entity or verbatim
        let question_entities = entity_texts(&q_doc.entities);
        let answer_entities = entity_texts(&a_doc.entities);
        let answer_lower = answer.to_lowercase();
        for ent in &question_entities {
            if !answer_entities.contains(ent) && !answer_lower.contains(ent.as_str()) {
                issues.push(ValidationIssue::new(
                    IssueKind::EntityConsistency,
                    format!("Entity '{ent}' from the question does not appear in the answer"),
                ));
            }
        }

        // 4. Semantic coherence, only when both sides carry vectors
        let mut semantic_coherence = 0.0f32;
        if q_doc.has_vector() && a_doc.has_vector() {
            semantic_coherence = q_doc.similarity(&a_doc);
            if semantic_coherence < COHERENCE_FLOOR {
                issues.push(ValidationIssue::new(
                    IssueKind::SemanticCoherence,
                    format!("Low semantic coherence ({semantic_coherence:.2})"),
                ));
            }
        }

        // 5. Syntax: a long answer without any verb is suspect
        let has_verb = a_doc
            .tokens
            .iter()
            .any(|t| t.pos == crate::domain::annotation::PartOfSpeech::Verb);
        if !has_verb && answer.split_whitespace().count() > VERB_REQUIRED_ABOVE_WORDS {
            issues.push(ValidationIssue::new(
                IssueKind::Syntax,
                "Answer has no main verb",
            ));
        }

        Ok(CardValidation {
            is_valid: issues.is_empty(),
            semantic_coherence: crate::domain::annotation::round3(semantic_coherence),
            issues,
            question_entities,
            answer_entities,
        })
    }
}

/// Lowercased entity texts, first occurrence only, in order.
fn entity_texts(entities: &[crate::domain::annotation::Entity]) -> Vec<String> {
    let mut texts: Vec<String> = Vec::new();
    for ent in entities {
        let lower = ent.text.to_lowercase();
        if !texts.contains(&lower) {
            texts.push(lower);
        }
    }
    texts
}
