// ============================================================
// Layer 3 — Annotated Document Domain Types
// ============================================================
// An AnnotatedDocument is the immutable result of running one
// text span through an annotation provider: sentence boundaries,
// tokens with part-of-speech and dependency information, named
// entity spans, noun chunk spans, and optional word vectors.
//
// The dependency tree looks like a cyclic graph (every token
// points at its head, every head knows its children), which is
// awkward to model with references in Rust. Instead we use an
// arena: the document owns a flat Vec<Token>, `head` is stored
// as an index into that Vec, and `children` is DERIVED once at
// build time. No Rc, no RefCell, no ownership ambiguity.
//
// Lifecycle: a document is produced fresh per call and discarded
// after segmentation completes — nothing here is ever mutated.
//
// Reference: Rust Book §5 (Structs), §8 (Vectors)
//            Universal Dependencies tag set (coarse POS + deps)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::error::NlpError;
use crate::domain::language::Language;

// ─── Part of Speech ───────────────────────────────────────────────────────────

/// Coarse part-of-speech tag (Universal Dependencies inventory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl PartOfSpeech {
    /// The uppercase tag name as it appears in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
        }
    }
}

// ─── Dependency Labels ────────────────────────────────────────────────────────

/// Role of a token relative to its syntactic head.
/// The closed variants cover every label the segmenters branch on;
/// anything else a provider emits lands in `Other` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepLabel {
    /// The sentence's main governing token (head == itself)
    Root,
    Nsubj,
    Obj,
    Dobj,
    Iobj,
    Obl,
    Advmod,
    Neg,
    Aux,
    Auxpass,
    Cc,
    Conj,
    Det,
    Amod,
    /// Any label outside the closed set (e.g. "case", "punct")
    #[serde(untagged)]
    Other(String),
}

impl DepLabel {
    /// The label string as it appears in responses.
    pub fn as_str(&self) -> &str {
        match self {
            DepLabel::Root => "ROOT",
            DepLabel::Nsubj => "nsubj",
            DepLabel::Obj => "obj",
            DepLabel::Dobj => "dobj",
            DepLabel::Iobj => "iobj",
            DepLabel::Obl => "obl",
            DepLabel::Advmod => "advmod",
            DepLabel::Neg => "neg",
            DepLabel::Aux => "aux",
            DepLabel::Auxpass => "auxpass",
            DepLabel::Cc => "cc",
            DepLabel::Conj => "conj",
            DepLabel::Det => "det",
            DepLabel::Amod => "amod",
            DepLabel::Other(s) => s,
        }
    }

    /// True for the coordinating-conjunction roles that start a
    /// sibling clause (cc / conj). Used by the clause extractor.
    pub fn is_coordination(&self) -> bool {
        matches!(self, DepLabel::Cc | DepLabel::Conj)
    }

    /// The verb-complement roles a verb phrase absorbs:
    /// objects, obliques, adverbs, negation, auxiliaries.
    pub fn is_verb_complement(&self) -> bool {
        matches!(
            self,
            DepLabel::Obj
                | DepLabel::Dobj
                | DepLabel::Iobj
                | DepLabel::Obl
                | DepLabel::Advmod
                | DepLabel::Neg
                | DepLabel::Aux
                | DepLabel::Auxpass
        )
    }

    /// Direct-object roles only (cloze verb-phrase targets).
    pub fn is_direct_object(&self) -> bool {
        matches!(self, DepLabel::Obj | DepLabel::Dobj)
    }

    /// The roles gathered around a ROOT for syntactic-head cloze
    /// targets: subject plus objects.
    pub fn is_core_argument(&self) -> bool {
        matches!(self, DepLabel::Nsubj | DepLabel::Obj | DepLabel::Dobj)
    }
}

// ─── Entity Labels ────────────────────────────────────────────────────────────

/// Named-entity category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Person,
    Org,
    Gpe,
    Loc,
    Date,
    Event,
    Norp,
    #[serde(untagged)]
    Other(String),
}

impl EntityLabel {
    /// The uppercase label as it appears in responses.
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Date => "DATE",
            EntityLabel::Event => "EVENT",
            EntityLabel::Norp => "NORP",
            EntityLabel::Other(s) => s,
        }
    }

    /// Human-readable description, included in enhance output.
    pub fn describe(&self) -> &str {
        match self {
            EntityLabel::Person => "People, including fictional",
            EntityLabel::Org => "Companies, agencies, institutions",
            EntityLabel::Gpe => "Countries, cities, states",
            EntityLabel::Loc => "Non-GPE locations, mountain ranges, bodies of water",
            EntityLabel::Date => "Absolute or relative dates or periods",
            EntityLabel::Event => "Named hurricanes, battles, wars, sports events",
            EntityLabel::Norp => "Nationalities or religious or political groups",
            EntityLabel::Other(_) => "Other entity type",
        }
    }

    /// The labels the entity_context strategy builds windows around.
    pub fn is_contextual(&self) -> bool {
        !matches!(self, EntityLabel::Other(_))
    }

    /// The labels the cloze generator redacts (NORP excluded).
    pub fn is_cloze_target(&self) -> bool {
        matches!(
            self,
            EntityLabel::Person
                | EntityLabel::Org
                | EntityLabel::Gpe
                | EntityLabel::Loc
                | EntityLabel::Date
                | EntityLabel::Event
        )
    }
}

// ─── Token ────────────────────────────────────────────────────────────────────

/// One token in the document arena.
///
/// `index` equals the token's position in the document Vec and is
/// strictly increasing in document order. `head` is an index into
/// the same Vec (equal to `index` for a ROOT). `children` is
/// derived from the heads once, at build time, and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Surface text exactly as it appeared
    pub text: String,

    /// Base form (dictionary form) of the token
    pub lemma: String,

    /// Coarse part-of-speech tag
    pub pos: PartOfSpeech,

    /// Dependency role relative to `head`
    pub dep: DepLabel,

    /// Arena index of the owning token (self for ROOT)
    pub head: usize,

    /// Global position in document order — stable and unique
    pub index: usize,

    /// Function word / high-frequency word flag
    pub is_stop: bool,

    /// Morphological features, e.g. Tense → Past, Mood → Ind
    pub morph: BTreeMap<String, String>,

    /// Arena indices of tokens whose head is this token.
    /// Never contains the token's own index.
    pub children: Vec<usize>,
}

// ─── Sentence, Entity, NounChunk ──────────────────────────────────────────────

/// A contiguous, non-empty token range with its own text and
/// optional centroid vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    /// First token index (inclusive)
    pub start: usize,
    /// One past the last token index (exclusive)
    pub end: usize,
    /// The sentence text with original spacing preserved
    pub text: String,
    /// Centroid word vector, if the provider has vectors loaded
    pub vector: Option<Vec<f32>>,
}

impl Sentence {
    /// Whether this sentence carries a vector. Callers must check
    /// this before trusting `similarity`.
    pub fn has_vector(&self) -> bool {
        self.vector.is_some()
    }

    /// Cosine similarity to another sentence, in [-1, 1].
    /// Returns 0.0 when either side lacks a vector.
    pub fn similarity(&self, other: &Sentence) -> f32 {
        match (&self.vector, &other.vector) {
            (Some(a), Some(b)) => cosine(a, b),
            _ => 0.0,
        }
    }
}

/// A named-entity span. Token and character ranges both refer to
/// the document the entity was extracted from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Surface text of the span
    pub text: String,
    /// Entity category
    pub label: EntityLabel,
    /// Byte offset of the span start in the raw text
    pub start_char: usize,
    /// Byte offset one past the span end in the raw text
    pub end_char: usize,
    /// First token index (inclusive)
    pub token_start: usize,
    /// One past the last token index (exclusive)
    pub token_end: usize,
    /// Index of the owning sentence
    pub sentence: usize,
    /// L2 norm of the span's vector, if vectors are loaded
    pub vector_norm: Option<f32>,
}

/// A maximal noun phrase span with a syntactic head token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NounChunk {
    /// First token index (inclusive)
    pub start: usize,
    /// One past the last token index (exclusive)
    pub end: usize,
    /// Arena index of the phrase's syntactic head
    pub root: usize,
}

// ─── Annotated Document ───────────────────────────────────────────────────────

/// The immutable result of annotating one text in one language.
/// Built exclusively through [`DocumentBuilder`], which derives
/// the children lists and checks the structural invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    /// The raw input text
    pub text: String,
    /// The language the provider annotated in
    pub language: Language,
    /// Token arena in document order
    pub tokens: Vec<Token>,
    /// Sentences as contiguous token ranges
    pub sentences: Vec<Sentence>,
    /// Named-entity spans in document order
    pub entities: Vec<Entity>,
    /// Noun phrase spans in document order
    pub noun_chunks: Vec<NounChunk>,
    /// Whole-document vector, if the provider has vectors loaded
    pub vector: Option<Vec<f32>>,
    /// begins_entity[i] is true when token i opens an entity span
    /// (the B-boundary the `entities` strategy splits on).
    /// Derived from the entity list at build time.
    begins_entity: Vec<bool>,
}

impl AnnotatedDocument {
    /// Whether the whole document carries a vector.
    pub fn has_vector(&self) -> bool {
        self.vector.is_some()
    }

    /// Cosine similarity between two documents' vectors,
    /// 0.0 when either lacks one.
    pub fn similarity(&self, other: &AnnotatedDocument) -> f32 {
        match (&self.vector, &other.vector) {
            (Some(a), Some(b)) => cosine(a, b),
            _ => 0.0,
        }
    }

    /// The derived child indices of token `i`.
    pub fn children(&self, i: usize) -> &[usize] {
        &self.tokens[i].children
    }

    /// True when token `i` is the first token of an entity span.
    pub fn begins_entity(&self, i: usize) -> bool {
        self.begins_entity.get(i).copied().unwrap_or(false)
    }

    /// Token texts in `[start, end)` joined with single spaces.
    pub fn span_text(&self, start: usize, end: usize) -> String {
        let end = end.min(self.tokens.len());
        self.tokens[start..end]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Texts of the given token indices (in the order given),
    /// joined with single spaces.
    pub fn tokens_text(&self, indices: &[usize]) -> String {
        indices
            .iter()
            .map(|&i| self.tokens[i].text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Index of the sentence containing token `i`, if any.
    pub fn sentence_of(&self, i: usize) -> Option<usize> {
        self.sentences
            .iter()
            .position(|s| s.start <= i && i < s.end)
    }

    /// Token indices of the given sentence.
    pub fn sentence_tokens(&self, sentence: usize) -> std::ops::Range<usize> {
        let s = &self.sentences[sentence];
        s.start..s.end
    }
}

// ─── Document Builder ─────────────────────────────────────────────────────────

/// Assembles an [`AnnotatedDocument`] step by step and enforces
/// its invariants when `build` is called:
///
///   - sentence ranges are contiguous, non-empty, in order
///   - every head index is in bounds
///   - entity and noun chunk spans are in bounds
///
/// A provider that emits a malformed document is a provider
/// fault, so violations surface as `AnnotationFailure`.
pub struct DocumentBuilder {
    text: String,
    language: Language,
    tokens: Vec<Token>,
    sentences: Vec<Sentence>,
    entities: Vec<Entity>,
    noun_chunks: Vec<NounChunk>,
    vector: Option<Vec<f32>>,
    sentence_open_at: Option<usize>,
}

impl DocumentBuilder {
    /// Start a builder for the given raw text.
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
            tokens: Vec::new(),
            sentences: Vec::new(),
            entities: Vec::new(),
            noun_chunks: Vec::new(),
            vector: None,
            sentence_open_at: None,
        }
    }

    /// Set the whole-document vector.
    pub fn vector(&mut self, v: Vec<f32>) -> &mut Self {
        self.vector = Some(v);
        self
    }

    /// The index the NEXT pushed token will receive. Providers use
    /// this to point a ROOT's head at itself before pushing it.
    pub fn next_index(&self) -> usize {
        self.tokens.len()
    }

    /// Open a sentence at the current token position.
    pub fn begin_sentence(&mut self) -> &mut Self {
        self.sentence_open_at = Some(self.tokens.len());
        self
    }

    /// Close the currently open sentence, recording its text and
    /// optional centroid vector.
    pub fn end_sentence(&mut self, text: impl Into<String>, vector: Option<Vec<f32>>) -> &mut Self {
        let start = self.sentence_open_at.take().unwrap_or(self.tokens.len());
        self.sentences.push(Sentence {
            start,
            end: self.tokens.len(),
            text: text.into(),
            vector,
        });
        self
    }

    /// Append a token to the arena; `head` is an absolute index
    /// (may point forward to a token not yet pushed). Returns the
    /// new token's index.
    #[allow(clippy::too_many_arguments)]
    pub fn token(
        &mut self,
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PartOfSpeech,
        dep: DepLabel,
        head: usize,
    ) -> usize {
        let index = self.tokens.len();
        self.tokens.push(Token {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            dep,
            head,
            index,
            is_stop: false,
            morph: BTreeMap::new(),
            children: Vec::new(),
        });
        index
    }

    /// Mark the most recently pushed token as a stop word.
    pub fn stop_word(&mut self) -> &mut Self {
        if let Some(t) = self.tokens.last_mut() {
            t.is_stop = true;
        }
        self
    }

    /// Attach a morphological feature to the most recent token.
    pub fn morph(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        if let Some(t) = self.tokens.last_mut() {
            t.morph.insert(key.into(), value.into());
        }
        self
    }

    /// Record a named-entity span over tokens `[token_start, token_end)`
    /// and bytes `[start_char, end_char)`.
    pub fn entity(
        &mut self,
        text: impl Into<String>,
        label: EntityLabel,
        token_start: usize,
        token_end: usize,
        start_char: usize,
        end_char: usize,
    ) -> &mut Self {
        self.entities.push(Entity {
            text: text.into(),
            label,
            start_char,
            end_char,
            token_start,
            token_end,
            sentence: 0, // resolved in build()
            vector_norm: None,
        });
        self
    }

    /// Record a noun chunk over tokens `[start, end)` headed by `root`.
    pub fn noun_chunk(&mut self, start: usize, end: usize, root: usize) -> &mut Self {
        self.noun_chunks.push(NounChunk { start, end, root });
        self
    }

    /// Validate the invariants, derive children and entity
    /// boundaries, and produce the finished document.
    pub fn build(mut self) -> Result<AnnotatedDocument, NlpError> {
        let n = self.tokens.len();

        // Sentence ranges: contiguous, non-empty, covering [0, n)
        let mut expected_start = 0usize;
        for s in &self.sentences {
            if s.start != expected_start || s.end <= s.start || s.end > n {
                return Err(NlpError::annotation(format!(
                    "malformed sentence range [{}, {}) in a {}-token document",
                    s.start, s.end, n
                )));
            }
            expected_start = s.end;
        }

        // Heads in bounds
        for t in &self.tokens {
            if t.head >= n {
                return Err(NlpError::annotation(format!(
                    "token {} has out-of-bounds head {}",
                    t.index, t.head
                )));
            }
        }

        // Every head chain must terminate at a ROOT (head == self);
        // a cycle would make the derived child graph non-terminating
        // for subtree walks. n steps suffice to reach any root.
        for start in 0..n {
            let mut cursor = start;
            let mut steps = 0usize;
            while self.tokens[cursor].head != cursor {
                cursor = self.tokens[cursor].head;
                steps += 1;
                if steps > n {
                    return Err(NlpError::annotation(format!(
                        "token {start} has a cyclic head chain"
                    )));
                }
            }
        }

        // Entity and noun chunk spans in bounds
        for e in &self.entities {
            if e.token_start >= e.token_end || e.token_end > n {
                return Err(NlpError::annotation(format!(
                    "malformed entity span [{}, {})",
                    e.token_start, e.token_end
                )));
            }
        }
        for nc in &self.noun_chunks {
            if nc.start >= nc.end || nc.end > n || nc.root >= n {
                return Err(NlpError::annotation(format!(
                    "malformed noun chunk span [{}, {})",
                    nc.start, nc.end
                )));
            }
        }

        // Derive children from heads — computed once, never mutated.
        // A ROOT points at itself and is NOT its own child.
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
        for i in 0..n {
            let head = self.tokens[i].head;
            if head != i {
                children[head].push(i);
            }
        }
        for (i, ch) in children.into_iter().enumerate() {
            self.tokens[i].children = ch;
        }

        // Resolve each entity's owning sentence
        let sentences = &self.sentences;
        for e in &mut self.entities {
            e.sentence = sentences
                .iter()
                .position(|s| s.start <= e.token_start && e.token_start < s.end)
                .unwrap_or(0);
        }

        // Derive the entity B-boundary flags
        let mut begins_entity = vec![false; n];
        for e in &self.entities {
            begins_entity[e.token_start] = true;
        }

        Ok(AnnotatedDocument {
            text: self.text,
            language: self.language,
            tokens: self.tokens,
            sentences: self.sentences,
            entities: self.entities,
            noun_chunks: self.noun_chunks,
            vector: self.vector,
            begins_entity,
        })
    }
}

// ─── Vector Math ──────────────────────────────────────────────────────────────

/// Cosine similarity of two vectors, range [-1, 1].
/// Returns 0.0 for mismatched lengths or zero-magnitude inputs.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    dot / (na * nb)
}

/// Round to three decimal places for reporting similarity scores.
pub fn round3(x: f32) -> f64 {
    (x as f64 * 1000.0).round() / 1000.0
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn two_token_doc() -> AnnotatedDocument {
        let mut b = DocumentBuilder::new("Juan corre", Language::Es);
        b.begin_sentence();
        let verb = 1;
        b.token("Juan", "juan", PartOfSpeech::Propn, DepLabel::Nsubj, verb);
        b.token("corre", "correr", PartOfSpeech::Verb, DepLabel::Root, verb);
        b.end_sentence("Juan corre", None);
        b.entity("Juan", EntityLabel::Person, 0, 1, 0, 4);
        b.build().unwrap()
    }

    #[test]
    fn test_children_derived_from_heads() {
        let doc = two_token_doc();
        // The verb governs the subject; the root is not its own child
        assert_eq!(doc.children(1), &[0]);
        assert!(doc.children(0).is_empty());
    }

    #[test]
    fn test_entity_boundary_flags() {
        let doc = two_token_doc();
        assert!(doc.begins_entity(0));
        assert!(!doc.begins_entity(1));
    }

    #[test]
    fn test_entity_sentence_resolved() {
        let doc = two_token_doc();
        assert_eq!(doc.entities[0].sentence, 0);
    }

    #[test]
    fn test_non_contiguous_sentences_rejected() {
        let mut b = DocumentBuilder::new("a b", Language::En);
        b.token("a", "a", PartOfSpeech::Noun, DepLabel::Root, 0);
        b.token("b", "b", PartOfSpeech::Noun, DepLabel::Root, 1);
        // Sentence claims to start at token 1, leaving token 0 orphaned
        b.sentence_open_at = Some(1);
        b.end_sentence("b", None);
        assert!(b.build().is_err());
    }

    #[test]
    fn test_cyclic_heads_rejected() {
        // Two tokens heading each other: in bounds, but neither
        // chain ever reaches a ROOT
        let mut b = DocumentBuilder::new("a b", Language::En);
        b.begin_sentence();
        b.token("a", "a", PartOfSpeech::Noun, DepLabel::Other("dep".into()), 1);
        b.token("b", "b", PartOfSpeech::Noun, DepLabel::Other("dep".into()), 0);
        b.end_sentence("a b", None);
        let err = b.build().unwrap_err();
        assert!(matches!(err, NlpError::AnnotationFailure(_)));
    }

    #[test]
    fn test_longer_head_cycle_rejected() {
        // 0 → 1 → 2 → 0, with a valid root alongside
        let mut b = DocumentBuilder::new("a b c d", Language::En);
        b.begin_sentence();
        b.token("a", "a", PartOfSpeech::Noun, DepLabel::Other("dep".into()), 1);
        b.token("b", "b", PartOfSpeech::Noun, DepLabel::Other("dep".into()), 2);
        b.token("c", "c", PartOfSpeech::Noun, DepLabel::Other("dep".into()), 0);
        b.token("d", "d", PartOfSpeech::Verb, DepLabel::Root, 3);
        b.end_sentence("a b c d", None);
        assert!(b.build().is_err());
    }

    #[test]
    fn test_out_of_bounds_head_rejected() {
        let mut b = DocumentBuilder::new("a", Language::En);
        b.begin_sentence();
        b.token("a", "a", PartOfSpeech::Noun, DepLabel::Root, 7);
        b.end_sentence("a", None);
        assert!(b.build().is_err());
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        assert_eq!(cosine(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_sentence_similarity_without_vectors_is_zero() {
        let doc = two_token_doc();
        let s = &doc.sentences[0];
        assert!(!s.has_vector());
        assert_eq!(s.similarity(s), 0.0);
    }

    #[test]
    fn test_span_text_clamps_to_length() {
        let doc = two_token_doc();
        assert_eq!(doc.span_text(0, 99), "Juan corre");
    }
}
