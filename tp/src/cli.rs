//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::domain::{BudgetTier, Interest};

/// Trip Planner - AI student travel itineraries
#[derive(Parser)]
#[command(
    name = "tp",
    about = "Plan a budget-friendly 5-day student trip with a generative AI model",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute; none launches the TUI
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate one itinerary and print it
    Plan {
        /// Where to go, e.g. "Tokyo, Japan"
        #[arg(short, long)]
        destination: String,

        /// Budget tier (shoestring, moderate, comfortable)
        #[arg(short, long, default_value = "moderate")]
        budget: BudgetTier,

        /// Interest tag; repeat for more than one
        #[arg(short, long = "interest", value_name = "TAG")]
        interests: Vec<Interest>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the response schema sent to the model
    Schema {
        /// Schema dialect
        #[arg(short, long, default_value = "gemini")]
        dialect: SchemaDialect,
    },

    /// List budget tiers and interest tags
    Options,
}

/// Output format for `plan`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

/// Which schema flavor `schema` prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaDialect {
    /// Gemini `responseSchema` (uppercase types, propertyOrdering)
    #[default]
    Gemini,
    /// Standard JSON Schema as used by OpenAI structured outputs
    JsonSchema,
}

impl std::str::FromStr for SchemaDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "SchemaDialect::from_str: called");
        match s.to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "json-schema" | "jsonschema" | "openai" => Ok(Self::JsonSchema),
            _ => Err(format!("Unknown dialect: {}. Use: gemini or json-schema", s)),
        }
    }
}

/// Where the log file lives
pub fn get_log_path() -> PathBuf {
    debug!("get_log_path: called");
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripplanner")
        .join("logs")
        .join("tripplanner.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["tp"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_plan_arguments() {
        let cli = Cli::try_parse_from([
            "tp",
            "plan",
            "--destination",
            "Tokyo, Japan",
            "--budget",
            "shoestring",
            "-i",
            "food",
            "-i",
            "history",
            "--format",
            "json",
        ])
        .expect("parse");

        match cli.command {
            Some(Command::Plan {
                destination,
                budget,
                interests,
                format,
            }) => {
                assert_eq!(destination, "Tokyo, Japan");
                assert_eq!(budget, BudgetTier::Shoestring);
                assert_eq!(interests, vec![Interest::Food, Interest::History]);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("expected Plan, got {:?}", other),
        }
    }

    #[test]
    fn test_plan_defaults() {
        let cli = Cli::try_parse_from(["tp", "plan", "-d", "Lima"]).expect("parse");
        match cli.command {
            Some(Command::Plan {
                budget,
                interests,
                format,
                ..
            }) => {
                assert_eq!(budget, BudgetTier::Moderate);
                assert!(interests.is_empty());
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("expected Plan, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_interest_rejected() {
        assert!(Cli::try_parse_from(["tp", "plan", "-d", "Lima", "-i", "skydiving"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["tp", "schema", "--log-level", "debug", "--dialect", "json-schema"]).expect("parse");
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(
            cli.command,
            Some(Command::Schema {
                dialect: SchemaDialect::JsonSchema
            })
        ));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("table".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_log_path() {
        assert!(get_log_path().ends_with("tripplanner/logs/tripplanner.log"));
    }
}
