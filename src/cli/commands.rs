//! Command implementations for the coursefinder CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::Utc;
use log::{info, warn};
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::FinderConfig;
use crate::error::{CourseFinderError, Result};
use crate::recommend::{Recommender, Selection, intent_chips, search_url};

/// Execute a CLI command.
pub fn execute_command(args: CourseFinderArgs) -> Result<()> {
    let recommender = Recommender::new(load_config(args.config.as_deref())?);

    match &args.command {
        Command::Parse(parse_args) => parse_query(parse_args, &recommender, &args),
        Command::Recommend(recommend_args) => {
            recommend_query(recommend_args, &recommender, &args)
        }
        Command::Link(link_args) => build_link(link_args, &args),
        Command::Batch(batch_args) => run_batch(batch_args, &recommender, &args),
    }
}

/// Load the configuration file if one was given.
fn load_config(path: Option<&Path>) -> Result<FinderConfig> {
    match path {
        Some(path) => FinderConfig::from_file(path),
        None => Ok(FinderConfig::default()),
    }
}

/// Show the detected intent.
fn parse_query(
    args: &ParseArgs,
    recommender: &Recommender,
    cli_args: &CourseFinderArgs,
) -> Result<()> {
    match recommender.parse(&args.query) {
        Ok(intent) => {
            let result = IntentOutput {
                query: crate::analysis::normalize_whitespace(&args.query),
                chips: intent_chips(&intent),
                intent,
            };
            output_result("Detected intent", &result, cli_args)
        }
        Err(e) if e.is_empty_query() => {
            report_empty_query(&e, cli_args);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Build variants and links for one query.
fn recommend_query(
    args: &RecommendArgs,
    recommender: &Recommender,
    cli_args: &CourseFinderArgs,
) -> Result<()> {
    let selection = args.selection.to_selection();

    match recommender.recommend(&args.query, &selection) {
        Ok(recommendation) => {
            let result = RecommendationOutput {
                generated_at: Utc::now(),
                recommendation,
            };
            output_result("Recommendations", &result, cli_args)
        }
        Err(e) if e.is_empty_query() => {
            report_empty_query(&e, cli_args);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// A blank query is a warning, not a failure.
fn report_empty_query(e: &CourseFinderError, cli_args: &CourseFinderArgs) {
    if cli_args.verbosity() > 0 {
        eprintln!("Warning: {e}");
    }
}

/// Build one deep link.
fn build_link(args: &LinkArgs, cli_args: &CourseFinderArgs) -> Result<()> {
    let url = search_url(&args.platform, &args.query);
    if url == crate::recommend::PLACEHOLDER_URL {
        warn!("unknown platform {:?}, returning placeholder link", args.platform);
    }

    let result = LinkOutput {
        platform: args.platform.clone(),
        query: args.query.clone(),
        url,
    };
    output_result("Search link", &result, cli_args)
}

/// Process every line of a query file.
fn run_batch(
    args: &BatchArgs,
    recommender: &Recommender,
    cli_args: &CourseFinderArgs,
) -> Result<()> {
    if !args.query_file.exists() {
        return Err(CourseFinderError::invalid_argument(format!(
            "Query file does not exist: {}",
            args.query_file.display()
        )));
    }

    let file = File::open(&args.query_file)?;
    let raw = BufReader::new(file)
        .split(b'\n')
        .collect::<std::io::Result<Vec<Vec<u8>>>>()?;
    let lines = decode_lines(raw);
    info!(
        "processing {} line(s) from {}",
        lines.len(),
        args.query_file.display()
    );

    let result = recommend_batch(recommender, &lines, &args.selection.to_selection());
    output_result("Batch recommendations", &result, cli_args)
}

/// Decode raw lines as UTF-8, dropping a trailing `\r`.
///
/// A line that is not valid UTF-8 becomes an error for that line only.
pub fn decode_lines(raw: Vec<Vec<u8>>) -> Vec<Result<String>> {
    raw.into_iter()
        .map(|mut bytes| {
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            String::from_utf8(bytes).map_err(|e| {
                CourseFinderError::invalid_argument(format!("line is not valid UTF-8: {e}"))
            })
        })
        .collect()
}

/// Run the pipeline over `lines` in parallel, keeping input order.
///
/// Blank lines are reported as skipped and undecodable lines as failed
/// rather than failing the batch.
pub fn recommend_batch(
    recommender: &Recommender,
    lines: &[Result<String>],
    selection: &Selection,
) -> BatchOutput {
    let entries: Vec<BatchEntry> = lines
        .par_iter()
        .enumerate()
        .map(|(index, line)| {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    return BatchEntry {
                        line: index + 1,
                        query: String::new(),
                        status: BatchStatus::Failed,
                        recommendation: None,
                        message: Some(e.to_string()),
                    };
                }
            };
            let query = line.trim().to_string();
            match recommender.recommend(line, selection) {
                Ok(recommendation) => BatchEntry {
                    line: index + 1,
                    query,
                    status: BatchStatus::Ok,
                    recommendation: Some(recommendation),
                    message: None,
                },
                Err(e) => BatchEntry {
                    line: index + 1,
                    query,
                    status: if e.is_empty_query() {
                        BatchStatus::Skipped
                    } else {
                        BatchStatus::Failed
                    },
                    recommendation: None,
                    message: Some(e.to_string()),
                },
            }
        })
        .collect();

    let count = |status: BatchStatus| entries.iter().filter(|e| e.status == status).count();
    BatchOutput {
        generated_at: Utc::now(),
        total: entries.len(),
        succeeded: count(BatchStatus::Ok),
        skipped: count(BatchStatus::Skipped),
        failed: count(BatchStatus::Failed),
        entries,
    }
}
