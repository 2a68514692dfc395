// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the four subcommands and their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → bool, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{ArgAction, Args, Subcommand};

use crate::application::cloze_use_case::ClozeConfig;

/// The four top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a text into flashcard-sized chunks
    Segment(SegmentArgs),

    /// Run full linguistic analysis over a text
    Enhance(EnhanceArgs),

    /// Quality-check a JSON file of flashcards
    Validate(ValidateArgs),

    /// Generate fill-in-the-blank cards from flashcard answers
    Cloze(ClozeArgs),
}

/// All arguments for the `segment` command.
#[derive(Args, Debug)]
pub struct SegmentArgs {
    /// The text to segment, inline
    #[arg(long)]
    pub text: Option<String>,

    /// Path to a file with the text to segment
    #[arg(long)]
    pub file: Option<String>,

    /// Language code: en, es or fr
    #[arg(long, default_value = "es")]
    pub lang: String,

    /// Segmentation strategy (unknown names fall back to sentences)
    #[arg(long, default_value = "sentences")]
    pub strategy: String,
}

/// All arguments for the `enhance` command.
#[derive(Args, Debug)]
pub struct EnhanceArgs {
    /// The text to analyse, inline
    #[arg(long)]
    pub text: Option<String>,

    /// Path to a file with the text to analyse
    #[arg(long)]
    pub file: Option<String>,

    /// Language code: en, es or fr
    #[arg(long, default_value = "es")]
    pub lang: String,
}

/// All arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to a JSON array of cards ({"question", "answer", ...})
    #[arg(long)]
    pub cards: String,

    /// Language code: en, es or fr
    #[arg(long, default_value = "es")]
    pub lang: String,
}

/// All arguments for the `cloze` command.
#[derive(Args, Debug)]
pub struct ClozeArgs {
    /// Path to a JSON array of cards ({"question", "answer", ...})
    #[arg(long)]
    pub cards: String,

    /// Language code: en, es or fr
    #[arg(long, default_value = "es")]
    pub lang: String,

    /// Redact named entities (pass false to disable)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub named_entities: bool,

    /// Redact multi-word noun phrases (pass false to disable)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub noun_phrases: bool,

    /// Redact verb + object phrases (pass false to disable)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub verb_phrases: bool,

    /// Also redact sentence roots with their core arguments
    #[arg(long)]
    pub syntactic_heads: bool,
}

impl ClozeArgs {
    /// Convert CLI flags into the application-layer ClozeConfig.
    /// This is the boundary between Layer 1 and Layer 2 —
    /// the application layer never sees clap types.
    pub fn into_config(self) -> ClozeConfig {
        ClozeConfig {
            named_entities: self.named_entities,
            noun_phrases: self.noun_phrases,
            verb_phrases: self.verb_phrases,
            syntactic_heads: self.syntactic_heads,
        }
    }
}
