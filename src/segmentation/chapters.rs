// ============================================================
// Layer 4 — Chapter Detector
// ============================================================
// Splits raw text into labeled chapters by recognising heading
// lines. This runs BEFORE annotation — it is pure string work
// on lines, no NLP involved.
//
// A line is a chapter heading when it matches one of:
//   (a) a chapter keyword (Chapter / Capítulo / Chapitre,
//       case-insensitive) followed by an Arabic or Roman number
//   (b) "<digits>. <Capitalized word>"      e.g. "3. Methods"
//   (c) "<Roman>. <Capitalized word>"       e.g. "IV. Results"
//
// Accumulation is a fold over lines carrying (current, closed):
//   - blank lines are skipped (they terminate nothing)
//   - a heading closes the current chapter if it has text, then
//     starts a new one titled with the heading line
//   - any other line is appended to the current chapter
//
// If fewer than two chapters come out, the structure signal was
// too weak to trust, so the whole document is returned as one
// synthetic chapter.
//
// Reference: Rust Book §8 (Strings), regex crate documentation

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One detected chapter of raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// The heading line, or "whole document" for the synthetic case
    pub title: String,
    /// Zero-based line number the chapter starts at
    pub start_line: usize,
    /// Accumulated chapter text (newline-joined source lines)
    pub text: String,
}

/// Title used when no chapter structure is detected.
const WHOLE_DOCUMENT_TITLE: &str = "whole document";

/// Title for text that precedes the first detected heading.
const PREAMBLE_TITLE: &str = "preamble";

/// Recognises chapter headings and folds lines into chapters.
pub struct ChapterDetector {
    patterns: Vec<Regex>,
}

impl ChapterDetector {
    /// Compile the heading patterns. The patterns are fixed and
    /// known-good, so compilation cannot fail at runtime.
    pub fn new() -> Self {
        let patterns = vec![
            // (a) keyword (any case) + Arabic or UPPERCASE Roman
            // number — lowercase letter runs like "civil" are words,
            // not numerals
            Regex::new(r"^(?i:chapter|cap[ií]tulo|chapitre)\s+(\d+|[IVXLCDM]+)\b").unwrap(),
            // (b) "1. Introduction"
            Regex::new(r"^\d+\.\s+[A-Z]").unwrap(),
            // (c) "IV. Results"
            Regex::new(r"^[IVXLCDM]+\.\s+[A-Z]").unwrap(),
        ];
        Self { patterns }
    }

    /// Whether a (trimmed) line is a chapter heading.
    fn is_heading(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(line))
    }

    /// Split raw text into chapters. Always returns at least one
    /// chapter; a structureless document comes back whole.
    pub fn detect(&self, text: &str) -> Vec<Chapter> {
        let mut closed: Vec<Chapter> = Vec::new();
        let mut current = Chapter {
            title: PREAMBLE_TITLE.to_string(),
            start_line: 0,
            text: String::new(),
        };

        for (line_no, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if self.is_heading(trimmed) {
                // Close the running chapter only if it gathered text;
                // an empty one (e.g. heading on the first line) is
                // simply replaced.
                if !current.text.trim().is_empty() {
                    closed.push(current);
                }
                current = Chapter {
                    title: trimmed.to_string(),
                    start_line: line_no,
                    text: String::new(),
                };
            } else {
                current.text.push_str(line);
                current.text.push('\n');
            }
        }

        if !current.text.trim().is_empty() {
            closed.push(current);
        }

        if closed.len() < 2 {
            tracing::debug!(
                chapters = closed.len(),
                "no usable chapter structure, returning whole document"
            );
            return vec![Chapter {
                title: WHOLE_DOCUMENT_TITLE.to_string(),
                start_line: 0,
                text: text.to_string(),
            }];
        }

        closed
    }
}

impl Default for ChapterDetector {
    fn default() -> Self {
        Self::new()
    }
}
