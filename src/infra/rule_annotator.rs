// ============================================================
// Layer 6 — Rule-Based Annotation Provider (Stand-In)
// ============================================================
// A deterministic, dependency-free AnnotationProvider so the
// CLI and the end-to-end tests can run without a neural NLP
// service. It is a STAND-IN, not a linguistics engine:
//
//   - sentences  : split at . ! ? terminators
//   - tokens     : word runs + single-char punctuation
//   - POS        : small per-language function-word lexicons,
//                  capitalization, and suffix heuristics
//   - parse      : one flat tree per sentence — the first verb
//                  is ROOT, arguments attach directly to it
//   - entities   : proper-noun runs (gazetteer decides GPE vs
//                  PERSON) and four-digit years as DATE
//   - chunks     : determiner/adjective/noun runs
//   - vectors    : none — semantic strategies exercise their
//                  documented no-vector fallbacks
//
// Everything is derived from the input text alone, so the same
// text always yields the same document (the purity the core's
// no-retry policy relies on).
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

use std::collections::BTreeMap;

use crate::domain::annotation::{
    AnnotatedDocument, DepLabel, DocumentBuilder, EntityLabel, PartOfSpeech,
};
use crate::domain::error::NlpError;
use crate::domain::language::Language;
use crate::domain::traits::AnnotationProvider;

// ─── Per-language function-word lexicons ──────────────────────────────────────

const DETERMINERS: &[(&str, Language)] = &[
    ("the", Language::En), ("a", Language::En), ("an", Language::En),
    ("this", Language::En), ("that", Language::En), ("these", Language::En),
    ("those", Language::En),
    ("el", Language::Es), ("la", Language::Es), ("los", Language::Es),
    ("las", Language::Es), ("un", Language::Es), ("una", Language::Es),
    ("unos", Language::Es), ("unas", Language::Es),
    ("le", Language::Fr), ("les", Language::Fr), ("une", Language::Fr),
    ("des", Language::Fr), ("du", Language::Fr),
];

const CONJUNCTIONS: &[(&str, Language)] = &[
    ("and", Language::En), ("but", Language::En), ("or", Language::En),
    ("yet", Language::En),
    ("y", Language::Es), ("e", Language::Es), ("pero", Language::Es),
    ("sino", Language::Es), ("o", Language::Es), ("u", Language::Es),
    ("et", Language::Fr), ("ou", Language::Fr), ("mais", Language::Fr),
];

const ADPOSITIONS: &[(&str, Language)] = &[
    ("of", Language::En), ("in", Language::En), ("on", Language::En),
    ("at", Language::En), ("to", Language::En), ("from", Language::En),
    ("with", Language::En), ("by", Language::En), ("for", Language::En),
    ("de", Language::Es), ("en", Language::Es), ("a", Language::Es),
    ("con", Language::Es), ("por", Language::Es), ("para", Language::Es),
    ("sin", Language::Es), ("sobre", Language::Es),
    ("dans", Language::Fr), ("sur", Language::Fr), ("avec", Language::Fr),
    ("pour", Language::Fr), ("par", Language::Fr), ("à", Language::Fr),
];

const PRONOUNS: &[(&str, Language)] = &[
    ("he", Language::En), ("she", Language::En), ("it", Language::En),
    ("they", Language::En), ("we", Language::En), ("i", Language::En),
    ("you", Language::En),
    ("él", Language::Es), ("ella", Language::Es), ("ellos", Language::Es),
    ("ellas", Language::Es), ("yo", Language::Es), ("tú", Language::Es),
    ("il", Language::Fr), ("elle", Language::Fr), ("ils", Language::Fr),
    ("elles", Language::Fr), ("je", Language::Fr), ("nous", Language::Fr),
    ("vous", Language::Fr),
];

const AUXILIARIES: &[(&str, Language)] = &[
    ("is", Language::En), ("are", Language::En), ("was", Language::En),
    ("were", Language::En), ("be", Language::En), ("been", Language::En),
    ("has", Language::En), ("have", Language::En), ("had", Language::En),
    ("will", Language::En), ("would", Language::En),
    ("es", Language::Es), ("son", Language::Es), ("era", Language::Es),
    ("fue", Language::Es), ("fueron", Language::Es), ("ha", Language::Es),
    ("han", Language::Es), ("había", Language::Es),
    ("est", Language::Fr), ("sont", Language::Fr), ("était", Language::Fr),
    ("ont", Language::Fr), ("avait", Language::Fr),
];

const ADVERBS: &[(&str, Language)] = &[
    ("here", Language::En), ("there", Language::En), ("very", Language::En),
    ("allí", Language::Es), ("aquí", Language::Es), ("muy", Language::Es),
    ("ici", Language::Fr), ("là", Language::Fr), ("très", Language::Fr),
];

/// Place names the gazetteer promotes from PERSON to GPE.
const PLACES: &[&str] = &[
    "madrid", "barcelona", "españa", "spain", "russia", "rusia", "russie",
    "france", "francia", "paris", "parís", "london", "londres", "europe",
    "europa", "moscow", "moscú", "moscou", "rome", "roma", "berlin", "berlín",
];

fn in_lexicon(lexicon: &[(&str, Language)], word: &str, language: Language) -> bool {
    lexicon.iter().any(|(w, l)| *l == language && *w == word)
}

// ─── The provider ─────────────────────────────────────────────────────────────

/// Deterministic rule-based stand-in for a real NLP pipeline.
pub struct RuleAnnotator {
    supported: Vec<Language>,
}

impl RuleAnnotator {
    /// A provider with all known languages loaded.
    pub fn new() -> Self {
        Self {
            supported: Language::all().to_vec(),
        }
    }

    /// A provider restricted to the given languages — useful for
    /// exercising the UnsupportedLanguage path.
    pub fn with_languages(supported: Vec<Language>) -> Self {
        Self { supported }
    }
}

impl Default for RuleAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationProvider for RuleAnnotator {
    fn annotate(&self, text: &str, language: Language) -> Result<AnnotatedDocument, NlpError> {
        if !self.supported.contains(&language) {
            return Err(NlpError::UnsupportedLanguage {
                requested: language.code().to_string(),
                available: self
                    .supported
                    .iter()
                    .map(|l| l.code())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }

        let mut builder = DocumentBuilder::new(text, language);

        for sentence in split_sentences(text) {
            let words = tokenize(text, sentence.start, sentence.end);
            if words.is_empty() {
                continue;
            }
            let tagged = tag(&words, language);
            let base = builder.next_index();

            builder.begin_sentence();
            push_tokens(&mut builder, &tagged, base, language);
            builder.end_sentence(text[sentence.start..sentence.end].trim(), None);

            add_entities(&mut builder, &tagged, base);
            add_noun_chunks(&mut builder, &tagged, base);
        }

        builder.build()
    }
}

// ─── Sentence splitting ───────────────────────────────────────────────────────

struct SentenceSpan {
    start: usize,
    end: usize,
}

/// Byte spans of sentences: everything up to and including a
/// terminator (. ! ?), plus a trailing span for text without one.
fn split_sentences(text: &str) -> Vec<SentenceSpan> {
    let mut spans = Vec::new();
    let mut start = 0usize;

    for (i, c) in text.char_indices() {
        if matches!(c, '.' | '!' | '?') {
            let end = i + c.len_utf8();
            if !text[start..end].trim().is_empty() {
                spans.push(SentenceSpan { start, end });
            }
            start = end;
        }
    }
    if !text[start..].trim().is_empty() {
        spans.push(SentenceSpan {
            start,
            end: text.len(),
        });
    }
    spans
}

// ─── Tokenization ─────────────────────────────────────────────────────────────

#[derive(Clone)]
struct Word {
    text: String,
    start: usize,
    end: usize,
}

/// Word runs (alphanumeric plus internal apostrophes/hyphens) and
/// single-character punctuation tokens, with byte offsets.
fn tokenize(text: &str, start: usize, end: usize) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut current_start = start;

    let flush = |words: &mut Vec<Word>, current: &mut String, current_start: usize, at: usize| {
        if !current.is_empty() {
            words.push(Word {
                text: std::mem::take(current),
                start: current_start,
                end: at,
            });
        }
    };

    for (i, c) in text[start..end].char_indices() {
        let abs = start + i;
        if c.is_alphanumeric() || c == '\'' || c == '-' {
            if current.is_empty() {
                current_start = abs;
            }
            current.push(c);
        } else {
            flush(&mut words, &mut current, current_start, abs);
            if !c.is_whitespace() {
                words.push(Word {
                    text: c.to_string(),
                    start: abs,
                    end: abs + c.len_utf8(),
                });
            }
        }
    }
    flush(&mut words, &mut current, current_start, end);
    words
}

// ─── Tagging ──────────────────────────────────────────────────────────────────

struct Tagged {
    word: Word,
    pos: PartOfSpeech,
    is_stop: bool,
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

fn looks_like_verb(lower: &str, language: Language) -> bool {
    match language {
        Language::En => {
            lower.len() > 3 && (lower.ends_with("ed") || lower.ends_with("ing"))
        }
        Language::Es => {
            lower.ends_with("ó")
                || lower.ends_with("ió")
                || lower.ends_with("aron")
                || lower.ends_with("ieron")
                || lower.ends_with("aba")
                || lower.ends_with("ía")
                || (lower.len() > 3
                    && (lower.ends_with("ar") || lower.ends_with("er") || lower.ends_with("ir")))
        }
        Language::Fr => {
            lower.ends_with("ait")
                || lower.ends_with("èrent")
                || (lower.len() > 3 && lower.ends_with("er"))
        }
    }
}

fn tag(words: &[Word], language: Language) -> Vec<Tagged> {
    let mut tagged = Vec::with_capacity(words.len());

    for (k, word) in words.iter().enumerate() {
        let lower = word.text.to_lowercase();
        let is_function = in_lexicon(DETERMINERS, &lower, language)
            || in_lexicon(ADPOSITIONS, &lower, language)
            || in_lexicon(PRONOUNS, &lower, language)
            || in_lexicon(AUXILIARIES, &lower, language)
            || in_lexicon(CONJUNCTIONS, &lower, language);

        let pos = if word.text.chars().all(|c| !c.is_alphanumeric()) {
            PartOfSpeech::Punct
        } else if word.text.chars().all(|c| c.is_ascii_digit()) {
            PartOfSpeech::Num
        } else if in_lexicon(DETERMINERS, &lower, language) {
            PartOfSpeech::Det
        } else if in_lexicon(CONJUNCTIONS, &lower, language) {
            PartOfSpeech::Cconj
        } else if in_lexicon(ADPOSITIONS, &lower, language) {
            PartOfSpeech::Adp
        } else if in_lexicon(PRONOUNS, &lower, language) {
            PartOfSpeech::Pron
        } else if in_lexicon(AUXILIARIES, &lower, language) {
            PartOfSpeech::Aux
        } else if in_lexicon(ADVERBS, &lower, language)
            || lower.ends_with("ly")
            || (language == Language::Es && lower.ends_with("mente"))
        {
            PartOfSpeech::Adv
        } else if is_capitalized(&word.text) && k > 0 {
            PartOfSpeech::Propn
        } else if looks_like_verb(&lower, language) {
            PartOfSpeech::Verb
        } else if is_capitalized(&word.text) && k == 0 {
            // Sentence-initial capitals are ambiguous: treat as a
            // proper noun only when a verb-like token follows
            // ("Juan fue ..."), otherwise as an ordinary noun.
            let next_is_verbal = words.get(k + 1).is_some_and(|w| {
                let next = w.text.to_lowercase();
                in_lexicon(AUXILIARIES, &next, language) || looks_like_verb(&next, language)
            });
            if next_is_verbal && !is_function {
                PartOfSpeech::Propn
            } else {
                PartOfSpeech::Noun
            }
        } else {
            PartOfSpeech::Noun
        };

        tagged.push(Tagged {
            word: word.clone(),
            pos,
            is_stop: is_function,
        });
    }
    tagged
}

// ─── Dependency assignment + token push ───────────────────────────────────────

/// Push the sentence's tokens with a flat dependency tree:
/// the first verb (or auxiliary, or token 0) is ROOT and most
/// tokens attach to it; determiners, adjectives and adpositions
/// attach to the next nominal.
fn push_tokens(builder: &mut DocumentBuilder, tagged: &[Tagged], base: usize, language: Language) {
    let root_rel = tagged
        .iter()
        .position(|t| t.pos == PartOfSpeech::Verb)
        .or_else(|| tagged.iter().position(|t| t.pos == PartOfSpeech::Aux))
        .unwrap_or(0);
    let root = base + root_rel;

    let next_nominal = |from: usize| -> Option<usize> {
        tagged[from..]
            .iter()
            .position(|t| matches!(t.pos, PartOfSpeech::Noun | PartOfSpeech::Propn))
            .map(|p| base + from + p)
    };

    let mut saw_object = false;

    for (k, t) in tagged.iter().enumerate() {
        let is_nominal = matches!(
            t.pos,
            PartOfSpeech::Noun | PartOfSpeech::Propn | PartOfSpeech::Pron | PartOfSpeech::Num
        );

        let (dep, head) = if k == root_rel {
            (DepLabel::Root, root)
        } else {
            match t.pos {
                PartOfSpeech::Punct => (DepLabel::Other("punct".into()), root),
                PartOfSpeech::Cconj => (DepLabel::Cc, root),
                PartOfSpeech::Adv => (DepLabel::Advmod, root),
                PartOfSpeech::Aux => (DepLabel::Aux, root),
                PartOfSpeech::Det => (DepLabel::Det, next_nominal(k + 1).unwrap_or(root)),
                PartOfSpeech::Adj => (DepLabel::Amod, next_nominal(k + 1).unwrap_or(root)),
                PartOfSpeech::Adp => {
                    (DepLabel::Other("case".into()), next_nominal(k + 1).unwrap_or(root))
                }
                _ if is_nominal && k < root_rel => (DepLabel::Nsubj, root),
                _ if is_nominal => {
                    // After the root: a nominal introduced by an
                    // adposition is oblique; the first bare one is
                    // the object; the rest are loose modifiers.
                    let after_adp = k > 0 && tagged[k - 1].pos == PartOfSpeech::Adp;
                    if after_adp {
                        (DepLabel::Obl, root)
                    } else if !saw_object {
                        saw_object = true;
                        (DepLabel::Obj, root)
                    } else {
                        (DepLabel::Other("nmod".into()), root)
                    }
                }
                _ => (DepLabel::Other("dep".into()), root),
            }
        };

        let lower = t.word.text.to_lowercase();
        builder.token(t.word.text.as_str(), lower.as_str(), t.pos, dep, head);
        if t.is_stop {
            builder.stop_word();
        }
        if language == Language::En && t.pos == PartOfSpeech::Verb && lower.ends_with("ed") {
            builder.morph("Tense", "Past");
        }
    }
}

// ─── Entities and noun chunks ─────────────────────────────────────────────────

fn is_year(text: &str) -> bool {
    text.len() == 4
        && text.chars().all(|c| c.is_ascii_digit())
        && (1000..=2100).contains(&text.parse::<u32>().unwrap_or(0))
}

fn add_entities(builder: &mut DocumentBuilder, tagged: &[Tagged], base: usize) {
    let mut k = 0;
    while k < tagged.len() {
        if tagged[k].pos == PartOfSpeech::Propn {
            let run_start = k;
            while k < tagged.len() && tagged[k].pos == PartOfSpeech::Propn {
                k += 1;
            }
            let words: Vec<&str> = tagged[run_start..k].iter().map(|t| t.word.text.as_str()).collect();
            let label = if tagged[run_start..k]
                .iter()
                .any(|t| PLACES.contains(&t.word.text.to_lowercase().as_str()))
            {
                EntityLabel::Gpe
            } else {
                EntityLabel::Person
            };
            builder.entity(
                words.join(" "),
                label,
                base + run_start,
                base + k,
                tagged[run_start].word.start,
                tagged[k - 1].word.end,
            );
        } else if tagged[k].pos == PartOfSpeech::Num && is_year(&tagged[k].word.text) {
            builder.entity(
                tagged[k].word.text.clone(),
                EntityLabel::Date,
                base + k,
                base + k + 1,
                tagged[k].word.start,
                tagged[k].word.end,
            );
            k += 1;
        } else {
            k += 1;
        }
    }
}

fn add_noun_chunks(builder: &mut DocumentBuilder, tagged: &[Tagged], base: usize) {
    let chunkable = |pos: PartOfSpeech| {
        matches!(
            pos,
            PartOfSpeech::Det | PartOfSpeech::Adj | PartOfSpeech::Noun | PartOfSpeech::Propn
        )
    };
    let nominal = |pos: PartOfSpeech| matches!(pos, PartOfSpeech::Noun | PartOfSpeech::Propn);

    let mut k = 0;
    while k < tagged.len() {
        if chunkable(tagged[k].pos) {
            let run_start = k;
            while k < tagged.len() && chunkable(tagged[k].pos) {
                k += 1;
            }
            // A chunk needs a nominal head; its root is the LAST
            // nominal of the run
            if let Some(root_rel) = tagged[run_start..k].iter().rposition(|t| nominal(t.pos)) {
                builder.noun_chunk(base + run_start, base + k, base + run_start + root_rel);
            }
        } else {
            k += 1;
        }
    }
}
