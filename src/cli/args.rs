//! Command line argument parsing for the ruya CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::dictionary::DEFAULT_SYMBOL_LIMIT;
use crate::error::{Result, RuyaError};
use crate::interpretation::{DEFAULT_TOP_K, InterpretConfig, Length};
use crate::matcher::DEFAULT_MAX_PHRASE_LEN;

/// Dataset file used when neither `--data` nor `RUYA_DATA` is given.
pub const DEFAULT_DATA_FILE: &str = "_interpretations_contains_all.json";

/// Ruya - dream interpretation from a symbol dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "ruya")]
#[command(about = "Interpret Turkish dream narratives against a symbol dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RuyaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Dictionary dataset (JSON array of {word, meaning})
    #[arg(long, env = "RUYA_DATA", default_value = DEFAULT_DATA_FILE, global = true)]
    pub data: PathBuf,

    /// Extra synonym table (JSON object of surface -> [equivalents])
    #[arg(long, value_name = "SYNONYM_FILE", global = true)]
    pub synonyms: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RuyaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Interpret a dream narrative
    Interpret(InterpretArgs),

    /// List the dictionary entries a text refers to
    Match(MatchArgs),

    /// Search dictionary symbols
    Symbols(SymbolsArgs),

    /// Show how a text is normalized, folded and expanded
    Analyze(AnalyzeArgs),
}

/// Arguments for interpreting a text
#[derive(Parser, Debug, Clone)]
pub struct InterpretArgs {
    /// Dream narrative or keywords
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Detail level of the interpretation
    #[arg(short, long, value_enum, default_value_t = Length::Long)]
    pub length: Length,

    /// Maximum number of symbols used (clamped to 1..=20)
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,
}

impl InterpretArgs {
    pub fn config(&self) -> InterpretConfig {
        InterpretConfig::new(self.length, self.top_k)
    }
}

/// Arguments for raw matching
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Text to match
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Longest phrase, in words, looked up in the dictionary
    #[arg(long, default_value_t = DEFAULT_MAX_PHRASE_LEN)]
    pub max_phrase_len: usize,
}

/// Arguments for symbol search
#[derive(Parser, Debug, Clone)]
pub struct SymbolsArgs {
    /// Substring to look for (diacritics and case are ignored)
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Maximum number of symbols to return
    #[arg(short, long, default_value_t = DEFAULT_SYMBOL_LIMIT)]
    pub limit: usize,
}

/// Arguments for text analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Reject empty or whitespace-only text arguments.
pub fn require_text(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RuyaError::invalid_argument("TEXT must not be empty"));
    }
    Ok(trimmed)
}
