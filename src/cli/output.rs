//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, RuyaArgs};
use crate::error::Result;
use crate::interpretation::{Interpretation, InterpretationItem, Length, render_text};
use crate::matcher::CandidateSet;

/// Echo of the request of an `interpret` call.
#[derive(Debug, Serialize)]
pub struct InterpretInput {
    pub text: String,
    pub length: Length,
    pub top_k: usize,
}

/// Result of the `interpret` command.
#[derive(Debug, Serialize)]
pub struct InterpretOutput {
    pub ok: bool,
    pub input: InterpretInput,
    pub result: Interpretation,
}

/// Result of the `match` command.
#[derive(Debug, Serialize)]
pub struct MatchOutput {
    pub text: String,
    pub matches: Vec<InterpretationItem>,
}

/// Result of the `symbols` command.
#[derive(Debug, Serialize)]
pub struct SymbolsOutput {
    pub query: String,
    /// Number of distinct words in the dictionary.
    pub total: usize,
    pub symbols: Vec<String>,
}

/// Result of the `analyze` command.
#[derive(Debug, Serialize)]
pub struct AnalyzeOutput {
    pub text: String,
    pub candidates: CandidateSet,
}

/// Plain-text rendering used by the `human` output format.
pub trait HumanOutput {
    fn to_human(&self) -> String;
}

impl HumanOutput for InterpretOutput {
    fn to_human(&self) -> String {
        render_text(&self.result)
    }
}

impl HumanOutput for MatchOutput {
    fn to_human(&self) -> String {
        if self.matches.is_empty() {
            return "No matches.".to_string();
        }

        let mut out = format!("Matches ({}):\n", self.matches.len());
        for (i, item) in self.matches.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}. {} ({})\n     {}\n",
                i + 1,
                item.word,
                item.hint,
                item.meaning
            ));
        }
        out
    }
}

impl HumanOutput for SymbolsOutput {
    fn to_human(&self) -> String {
        let mut out = format!(
            "{} of {} symbols match {:?}\n",
            self.symbols.len(),
            self.total,
            self.query
        );
        for symbol in &self.symbols {
            out.push_str("  ");
            out.push_str(symbol);
            out.push('\n');
        }
        out
    }
}

impl HumanOutput for AnalyzeOutput {
    fn to_human(&self) -> String {
        let c = &self.candidates;
        let mut out = String::new();
        out.push_str(&format!("Normalized: {}\n", c.normalized));
        out.push_str(&format!("Folded:     {}\n", c.folded));
        out.push_str(&format!("Tokens:     {}\n", c.tokens.join(" | ")));
        if let Some(word) = &c.similative {
            out.push_str(&format!("Similative: {word}\n"));
        }
        out.push_str(&format!("N-grams:    {}\n", c.ngrams.join(" | ")));
        out.push_str(&format!("Stems:      {}\n", c.stems.join(" | ")));
        if !c.synonyms.is_empty() {
            out.push_str(&format!("Synonyms:   {}\n", c.synonyms.join(" | ")));
        }
        out.push_str(&format!("Candidates: {}\n", c.len()));
        out
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &RuyaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(result),
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_human<T: HumanOutput>(result: &T) -> Result<()> {
    let text = result.to_human();
    println!("{}", text.trim_end());
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &RuyaArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

/// Serialize `result` as compact or pretty JSON.
pub fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
