// ============================================================
// Layer 3 — Language Domain Type
// ============================================================
// The closed set of languages the system understands.
// An annotation provider may support fewer than all of these —
// asking for a language it has not loaded is the one error
// that must always reach the caller as a structured value
// (never silently substituted with a different language).
//
// Using a plain enum instead of a free string means a typo
// like "enn" is caught at the parsing boundary, not deep
// inside a segmenter.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The languages the segmentation core can be asked to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Spanish
    Es,
    /// French
    Fr,
}

impl Language {
    /// The two-letter ISO code used in requests and logs.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// All languages the core knows about, in a stable order.
    pub fn all() -> [Language; 3] {
        [Language::En, Language::Es, Language::Fr]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    /// Accepts the ISO code ("en") or the English name ("english").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "es" | "spanish" => Ok(Language::Es),
            "fr" | "french" => Ok(Language::Fr),
            other => Err(format!(
                "unknown language '{other}' (expected one of: en, es, fr)"
            )),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_codes_and_names() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("Spanish".parse::<Language>().unwrap(), Language::Es);
        assert_eq!(" fr ".parse::<Language>().unwrap(), Language::Fr);
    }

    #[test]
    fn test_rejects_unknown_language() {
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_display_is_iso_code() {
        assert_eq!(Language::Es.to_string(), "es");
    }
}
