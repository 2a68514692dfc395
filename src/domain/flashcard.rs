// ============================================================
// Layer 3 — Flashcard Domain Types
// ============================================================
// A FlashCard is a question/answer pair plus whatever extra
// fields the caller attached (deck name, difficulty, ids...).
// Those passthrough fields must survive validation and cloze
// generation untouched, which is exactly what serde's
// #[serde(flatten)] gives us: unknown keys are captured into
// a map on the way in and written back out on the way out.
//
// Malformed cards are not an error — a missing question or
// answer simply defaults to the empty string.
//
// Reference: Rust Book §5 (Structs)
//            serde.rs documentation (flatten attribute)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A question/answer pair with arbitrary passthrough fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlashCard {
    /// The question being asked (defaults to "" when missing)
    #[serde(default)]
    pub question: String,

    /// The answer text (defaults to "" when missing)
    #[serde(default)]
    pub answer: String,

    /// Any other fields the caller attached — preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl FlashCard {
    /// Create a card from question and answer only.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            extra: serde_json::Map::new(),
        }
    }
}

// ─── Validation ───────────────────────────────────────────────────────────────

/// The kinds of problems the validator can flag on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Grammar,
    Coherence,
    EntityConsistency,
    SemanticCoherence,
    Syntax,
}

/// One problem found on one card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// What category of check failed
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Human-readable explanation
    pub message: String,
}

impl ValidationIssue {
    /// Create an issue of the given kind.
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The validation block attached to each card on output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardValidation {
    /// True iff the card produced zero issues
    pub is_valid: bool,
    /// Every issue found, in check order
    pub issues: Vec<ValidationIssue>,
    /// Question/answer cosine similarity (0.0 when unavailable)
    pub semantic_coherence: f64,
    /// Lowercased entity texts found in the question
    pub question_entities: Vec<String>,
    /// Lowercased entity texts found in the answer
    pub answer_entities: Vec<String>,
}

/// A card augmented with its validation verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedCard {
    /// The original card, all fields preserved
    #[serde(flatten)]
    pub card: FlashCard,
    /// The verdict
    pub validation: CardValidation,
}

// ─── Cloze Generation ─────────────────────────────────────────────────────────

/// The four families of cloze redaction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClozeKind {
    NamedEntity,
    NounPhrase,
    VerbPhrase,
    SyntacticHead,
}

impl ClozeKind {
    /// The snake_case name used in metadata and question suffixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClozeKind::NamedEntity => "named_entity",
            ClozeKind::NounPhrase => "noun_phrase",
            ClozeKind::VerbPhrase => "verb_phrase",
            ClozeKind::SyntacticHead => "syntactic_head",
        }
    }
}

/// One candidate fill-in-the-blank rendition of an answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClozeVariant {
    /// The answer with one span replaced by a placeholder
    pub text: String,
    /// Which target family produced this variant
    #[serde(rename = "type")]
    pub kind: ClozeKind,
    /// The span that was redacted
    pub target: String,
    /// Entity category (named_entity variants only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Lemma of the phrase root (noun_phrase / syntactic_head)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Lemma of the governing verb (verb_phrase variants only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,
}
