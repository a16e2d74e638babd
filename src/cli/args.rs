//! Command line argument parsing for the coursefinder CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::intent::Level;
use crate::recommend::{Mode, Platform, Selection};

/// coursefinder - Turn a course request into search links across platforms
#[derive(Parser, Debug, Clone)]
#[command(name = "coursefinder")]
#[command(about = "Turn a free-text course request into search links across course platforms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CourseFinderArgs {
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

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "COURSEFINDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CourseFinderArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the intent detected from a query
    Parse(ParseArgs),

    /// Build query variants and search links for a query
    Recommend(RecommendArgs),

    /// Build a single search link
    Link(LinkArgs),

    /// Build recommendations for every line of a file
    Batch(BatchArgs),
}

/// Arguments for parsing a query
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    /// Free-text course request
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for building recommendations
#[derive(Parser, Debug, Clone)]
pub struct RecommendArgs {
    /// Free-text course request
    #[arg(value_name = "QUERY")]
    pub query: String,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for a single link
#[derive(Parser, Debug, Clone)]
pub struct LinkArgs {
    /// Platform name (Coursera, Udemy, Simpliv, Educative)
    #[arg(value_name = "PLATFORM")]
    pub platform: String,

    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for batch processing
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// File with one course request per line
    #[arg(value_name = "QUERY_FILE")]
    pub query_file: PathBuf,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// User overrides shared by `recommend` and `batch`
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Search mode
    #[arg(short = 'm', long, default_value = "auto")]
    pub mode: ModeArg,

    /// Platforms to search (repeat or comma-separate; default: all)
    #[arg(short, long = "platform", value_delimiter = ',')]
    pub platforms: Vec<PlatformArg>,

    /// Preferred level
    #[arg(short, long, default_value = "any")]
    pub level: LevelArg,

    /// Require a certificate
    #[arg(long)]
    pub certificate: bool,

    /// Prefer short formats
    #[arg(long)]
    pub short: bool,

    /// Prefer free offerings
    #[arg(long)]
    pub free: bool,
}

impl SelectionArgs {
    /// Convert to the library's selection type.
    pub fn to_selection(&self) -> Selection {
        Selection {
            mode: self.mode.into(),
            platforms: self.platforms.iter().map(|p| (*p).into()).collect(),
            level: self.level.into(),
            certificate: self.certificate,
            short_format: self.short,
            free_only: self.free,
        }
    }
}

/// Search modes available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeArg {
    /// Detect from the query
    Auto,
    /// Self-paced online courses
    OnlineCourses,
    /// Live online trainings
    OnlineTrainings,
    /// Onsite trainings
    OnsiteTrainings,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Auto => Mode::Auto,
            ModeArg::OnlineCourses => Mode::OnlineCourses,
            ModeArg::OnlineTrainings => Mode::OnlineTrainings,
            ModeArg::OnsiteTrainings => Mode::OnsiteTrainings,
        }
    }
}

/// Platforms available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformArg {
    Coursera,
    Udemy,
    Simpliv,
    Educative,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Coursera => Platform::Coursera,
            PlatformArg::Udemy => Platform::Udemy,
            PlatformArg::Simpliv => Platform::Simpliv,
            PlatformArg::Educative => Platform::Educative,
        }
    }
}

/// Level preferences available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelArg {
    Any,
    Beginner,
    Intermediate,
    Advanced,
}

impl From<LevelArg> for Option<Level> {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Any => None,
            LevelArg::Beginner => Some(Level::Beginner),
            LevelArg::Intermediate => Some(Level::Intermediate),
            LevelArg::Advanced => Some(Level::Advanced),
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_recommend_command() {
        let args = CourseFinderArgs::try_parse_from([
            "coursefinder",
            "recommend",
            "rust for beginners",
            "--mode",
            "online-trainings",
            "--platform",
            "udemy,coursera",
            "--level",
            "advanced",
            "--certificate",
            "--free",
        ])
        .unwrap();

        if let Command::Recommend(recommend_args) = args.command {
            assert_eq!(recommend_args.query, "rust for beginners");
            let selection = recommend_args.selection.to_selection();
            assert_eq!(selection.mode, Mode::OnlineTrainings);
            assert_eq!(selection.platforms, vec![Platform::Udemy, Platform::Coursera]);
            assert_eq!(selection.level, Some(Level::Advanced));
            assert!(selection.certificate);
            assert!(!selection.short_format);
            assert!(selection.free_only);
        } else {
            panic!("Expected Recommend command");
        }
    }

    #[test]
    fn test_selection_defaults() {
        let args = CourseFinderArgs::try_parse_from(["coursefinder", "recommend", "sql"]).unwrap();

        if let Command::Recommend(recommend_args) = args.command {
            let selection = recommend_args.selection.to_selection();
            assert_eq!(selection.mode, Mode::Auto);
            assert!(selection.platforms.is_empty());
            assert_eq!(selection.level, None);
        } else {
            panic!("Expected Recommend command");
        }
    }

    #[test]
    fn test_link_command() {
        let args =
            CourseFinderArgs::try_parse_from(["coursefinder", "link", "Udemy", "python"]).unwrap();

        if let Command::Link(link_args) = args.command {
            assert_eq!(link_args.platform, "Udemy");
            assert_eq!(link_args.query, "python");
        } else {
            panic!("Expected Link command");
        }
    }

    #[test]
    fn test_batch_command() {
        let args = CourseFinderArgs::try_parse_from([
            "coursefinder",
            "batch",
            "queries.txt",
            "--platform",
            "simpliv",
            "--platform",
            "educative",
        ])
        .unwrap();

        if let Command::Batch(batch_args) = args.command {
            assert_eq!(batch_args.query_file, PathBuf::from("queries.txt"));
            assert_eq!(batch_args.selection.platforms.len(), 2);
        } else {
            panic!("Expected Batch command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = CourseFinderArgs::try_parse_from(["coursefinder", "parse", "x"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = CourseFinderArgs::try_parse_from(["coursefinder", "-vv", "parse", "x"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            CourseFinderArgs::try_parse_from(["coursefinder", "--quiet", "parse", "x"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            CourseFinderArgs::try_parse_from(["coursefinder", "--format", "json", "parse", "x"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result =
            CourseFinderArgs::try_parse_from(["coursefinder", "recommend", "x", "--mode", "hybrid"]);
        assert!(result.is_err());
    }
}
