//! Output formatting for CLI commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cli::args::{CourseFinderArgs, OutputFormat};
use crate::error::Result;
use crate::intent::ParsedIntent;
use crate::recommend::{Chip, Recommendation};

/// Result structure for the `parse` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentOutput {
    pub query: String,
    pub intent: ParsedIntent,
    pub chips: Vec<Chip>,
}

/// Result structure for the `recommend` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationOutput {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

/// Result structure for the `link` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkOutput {
    pub platform: String,
    pub query: String,
    pub url: String,
}

/// Outcome of one line in a batch file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Ok,
    Skipped,
    Failed,
}

/// One line of batch output.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEntry {
    /// 1-based line number in the input file.
    pub line: usize,
    pub query: String,
    pub status: BatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result structure for the `batch` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchOutput {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub entries: Vec<BatchEntry>,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

impl HumanOutput for IntentOutput {
    fn render_human(&self) -> String {
        let mut out = format!("Query: {}\n", self.query);
        out.push_str(&format!("{}\n", render_chips(&self.chips)));
        out.push_str(&render_intent(&self.intent));
        out
    }
}

impl HumanOutput for RecommendationOutput {
    fn render_human(&self) -> String {
        render_recommendation(&self.recommendation)
    }
}

impl HumanOutput for LinkOutput {
    fn render_human(&self) -> String {
        format!("{} → {}\n", self.platform, self.url)
    }
}

impl HumanOutput for BatchOutput {
    fn render_human(&self) -> String {
        let mut out = format!(
            "Processed {} line(s): {} ok, {} skipped, {} failed\n",
            self.total, self.succeeded, self.skipped, self.failed
        );
        for entry in &self.entries {
            out.push('\n');
            match (&entry.status, &entry.recommendation) {
                (BatchStatus::Ok, Some(recommendation)) => {
                    out.push_str(&format!("#{} {}\n", entry.line, entry.query));
                    out.push_str(&render_recommendation(recommendation));
                }
                _ => {
                    out.push_str(&format!(
                        "#{} [{}] {}\n",
                        entry.line,
                        status_label(entry.status),
                        entry.message.as_deref().unwrap_or("")
                    ));
                }
            }
        }
        out
    }
}

/// Output a command result in the requested format.
pub fn output_result<T>(message: &str, result: &T, args: &CourseFinderArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_human<T: HumanOutput>(message: &str, result: &T, args: &CourseFinderArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.render_human());
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &CourseFinderArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

fn render_intent(intent: &ParsedIntent) -> String {
    let mut out = String::new();
    out.push_str(&format!("Topic:     {}\n", intent.topic));
    out.push_str(&format!("Skills:    {}\n", format_list(&intent.skills)));
    out.push_str(&format!(
        "Level:     {}\n",
        intent.level.map_or("Any", |level| level.label())
    ));
    out.push_str(&format!(
        "Modality:  {}\n",
        intent.modality.map_or("Any", |modality| modality.label())
    ));
    if !intent.extras.is_empty() {
        let extras: Vec<String> = intent
            .extras
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        out.push_str(&format!("Extras:    {}\n", extras.join(", ")));
    }
    out.push_str(&format!("Keywords:  {}\n", format_list(&intent.keywords)));
    out
}

fn render_recommendation(recommendation: &Recommendation) -> String {
    let mut out = format!("{}\n", render_chips(&recommendation.chips));

    for notice in &recommendation.notices {
        out.push_str(&format!("Note: {notice}\n"));
    }

    for group in &recommendation.groups {
        out.push_str(&format!("\n\"{}\"\n", group.variant));
        for link in &group.links {
            out.push_str(&format!("  {:<10} {}\n", link.platform.name(), link.url));
        }
    }
    out
}

fn render_chips(chips: &[Chip]) -> String {
    let chips: Vec<String> = chips
        .iter()
        .map(|chip| format!("{}: {}", chip.label, chip.value))
        .collect();
    format!("[{}]", chips.join("] ["))
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

fn status_label(status: BatchStatus) -> &'static str {
    match status {
        BatchStatus::Ok => "ok",
        BatchStatus::Skipped => "skipped",
        BatchStatus::Failed => "failed",
    }
}
