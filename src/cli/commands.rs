//! Command implementations for the ruya CLI.

use std::time::Instant;

use crate::analysis::sentiment::sentiment_hint;
use crate::analysis::synonym::SynonymTable;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::DictionaryIndex;
use crate::error::Result;
use crate::interpretation::{InterpretationItem, interpret};
use crate::matcher::{Matcher, MatcherConfig};

/// Execute a CLI command.
pub fn execute_command(args: RuyaArgs) -> Result<()> {
    match &args.command {
        Command::Interpret(interpret_args) => run_interpret(interpret_args, &args),
        Command::Match(match_args) => run_match(match_args, &args),
        Command::Symbols(symbols_args) => run_symbols(symbols_args, &args),
        Command::Analyze(analyze_args) => run_analyze(analyze_args, &args),
    }
}

/// Load the dictionary named by `--data`.
pub fn load_index(cli_args: &RuyaArgs) -> Result<DictionaryIndex> {
    let start = Instant::now();
    let index = DictionaryIndex::load(&cli_args.data)?;
    log::info!(
        "indexed {} entries under {} keys in {:?}",
        index.entries().len(),
        index.len(),
        start.elapsed()
    );
    Ok(index)
}

/// Build a matcher with the built-in synonyms plus any `--synonyms` file.
pub fn build_matcher(cli_args: &RuyaArgs, config: MatcherConfig) -> Result<Matcher> {
    let mut synonyms = SynonymTable::new();
    if let Some(path) = &cli_args.synonyms {
        synonyms.merge(SynonymTable::load_from_file(path)?);
    }
    Ok(Matcher::with_config(config)?.with_synonyms(synonyms))
}

fn run_interpret(args: &InterpretArgs, cli_args: &RuyaArgs) -> Result<()> {
    let text = require_text(&args.text)?;
    let config = args.config();

    let index = load_index(cli_args)?;
    let matcher = build_matcher(cli_args, MatcherConfig::default())?;
    let matches = matcher.find_matches(text, &index);

    output_result(
        &InterpretOutput {
            ok: true,
            input: InterpretInput {
                text: text.to_string(),
                length: config.length,
                top_k: config.top_k,
            },
            result: interpret(&matches, &config),
        },
        cli_args,
    )
}

fn run_match(args: &MatchArgs, cli_args: &RuyaArgs) -> Result<()> {
    let text = require_text(&args.text)?;

    let index = load_index(cli_args)?;
    let matcher = build_matcher(cli_args, MatcherConfig::with_max_phrase_len(args.max_phrase_len))?;

    let matches = matcher
        .find_matches(text, &index)
        .into_iter()
        .map(|m| InterpretationItem {
            hint: sentiment_hint(&m.meaning),
            word: m.word,
            meaning: m.meaning,
        })
        .collect();

    output_result(
        &MatchOutput {
            text: text.to_string(),
            matches,
        },
        cli_args,
    )
}

fn run_symbols(args: &SymbolsArgs, cli_args: &RuyaArgs) -> Result<()> {
    let index = load_index(cli_args)?;
    let symbols = index
        .search_symbols(&args.query, args.limit)
        .into_iter()
        .map(str::to_string)
        .collect();

    output_result(
        &SymbolsOutput {
            query: args.query.clone(),
            total: index.unique_words().len(),
            symbols,
        },
        cli_args,
    )
}

fn run_analyze(args: &AnalyzeArgs, cli_args: &RuyaArgs) -> Result<()> {
    let text = require_text(&args.text)?;
    let matcher = build_matcher(cli_args, MatcherConfig::default())?;

    output_result(
        &AnalyzeOutput {
            text: text.to_string(),
            candidates: matcher.candidates(text),
        },
        cli_args,
    )
}
