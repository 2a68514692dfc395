// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Four commands are supported:
//   1. `segment`  — split a text into flashcard-sized chunks
//   2. `enhance`  — full linguistic analysis of a text
//   3. `validate` — quality-check a JSON file of cards
//   4. `cloze`    — generate fill-in-the-blank cards
//
// Every command prints its response as pretty JSON on stdout.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use commands::{ClozeArgs, Commands, EnhanceArgs, SegmentArgs, ValidateArgs};

use crate::domain::flashcard::FlashCard;
use crate::domain::language::Language;
use crate::infra::rule_annotator::RuleAnnotator;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "flashcard-segmenter",
    version = "0.1.0",
    about = "Segment texts into flashcard chunks, validate cards, and generate cloze exercises."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Segment(args) => run_segment(args),
            Commands::Enhance(args) => run_enhance(args),
            Commands::Validate(args) => run_validate(args),
            Commands::Cloze(args) => run_cloze(args),
        }
    }
}

/// Handles the `segment` subcommand.
fn run_segment(args: SegmentArgs) -> Result<()> {
    use crate::application::segment_use_case::SegmentUseCase;

    let text = read_text(args.text, args.file)?;
    let language = parse_language(&args.lang)?;

    tracing::info!(strategy = args.strategy, lang = language.code(), "segmenting");

    let annotator = RuleAnnotator::new();
    let response = SegmentUseCase::new(&annotator).execute(&text, language, &args.strategy)?;
    print_json(&response)
}

/// Handles the `enhance` subcommand.
fn run_enhance(args: EnhanceArgs) -> Result<()> {
    use crate::application::enhance_use_case::EnhanceUseCase;

    let text = read_text(args.text, args.file)?;
    let language = parse_language(&args.lang)?;

    let annotator = RuleAnnotator::new();
    let response = EnhanceUseCase::new(&annotator).execute(&text, language)?;
    print_json(&response)
}

/// Handles the `validate` subcommand.
fn run_validate(args: ValidateArgs) -> Result<()> {
    use crate::application::validate_use_case::ValidateUseCase;

    let cards = read_cards(&args.cards)?;
    let language = parse_language(&args.lang)?;

    let annotator = RuleAnnotator::new();
    let response = ValidateUseCase::new(&annotator).execute(cards, language)?;
    print_json(&response)
}

/// Handles the `cloze` subcommand.
fn run_cloze(args: ClozeArgs) -> Result<()> {
    use crate::application::cloze_use_case::ClozeUseCase;

    let cards = read_cards(&args.cards)?;
    let language = parse_language(&args.lang)?;
    let config = args.into_config();

    let annotator = RuleAnnotator::new();
    let response = ClozeUseCase::new(&annotator, config).execute(cards, language)?;
    print_json(&response)
}

/// Resolve the input text: inline flag wins, then file.
fn read_text(text: Option<String>, file: Option<String>) -> Result<String> {
    match (text, file) {
        (Some(t), _) => Ok(t),
        (None, Some(path)) => {
            std::fs::read_to_string(&path).with_context(|| format!("reading text file {path}"))
        }
        (None, None) => Err(anyhow!("provide input with --text or --file")),
    }
}

/// Load a JSON array of cards from disk.
fn read_cards(path: &str) -> Result<Vec<FlashCard>> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("reading cards file {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing cards file {path}"))
}

fn parse_language(code: &str) -> Result<Language> {
    code.parse::<Language>().map_err(|e| anyhow!(e))
}

fn print_json<T: serde::Serialize>(response: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
