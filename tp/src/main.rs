//! Trip Planner - AI student travel itineraries
//!
//! CLI entry point: launches the TUI or runs one of the headless commands.

use std::fs;
use std::io::IsTerminal;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use tripplanner::cli::{Cli, Command, OutputFormat, SchemaDialect, get_log_path};
use tripplanner::config::Config;
use tripplanner::domain::{BudgetTier, Interest, PlanRequest};
use tripplanner::llm::create_client;
use tripplanner::planner::{Planner, itinerary_schema};
use tripplanner::prompts::PromptLoader;
use tripplanner::render::{PlanView, render_text};
use tripplanner::tui;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(provider = %config.llm.provider, model = %config.llm.model, "Trip planner loaded config");

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Plan {
            destination,
            budget,
            interests,
            format,
        }) => {
            debug!(%destination, %budget, ?interests, ?format, "main: matched Plan command");
            cmd_plan(&config, destination, budget, interests, format).await
        }
        Some(Command::Schema { dialect }) => {
            debug!(?dialect, "main: matched Schema command");
            cmd_schema(dialect)
        }
        Some(Command::Options) => {
            debug!("main: matched Options command");
            cmd_options();
            Ok(())
        }
        None => {
            debug!("main: no command, launching TUI");
            cmd_tui(&config).await
        }
    }
}

/// Check the config and wire a planner to the configured provider
fn build_planner(config: &Config) -> Result<Planner> {
    debug!("build_planner: called");
    config.validate().context("Invalid configuration")?;

    let client = create_client(&config.llm).context("Failed to create LLM client")?;
    let root = std::env::current_dir().context("Failed to read current directory")?;
    Ok(Planner::new(client, PromptLoader::new(root), &config.llm))
}

async fn cmd_tui(config: &Config) -> Result<()> {
    debug!("cmd_tui: called");
    let planner = Arc::new(build_planner(config)?);
    tui::run(planner).await
}

async fn cmd_plan(
    config: &Config,
    destination: String,
    budget: BudgetTier,
    interests: Vec<Interest>,
    format: OutputFormat,
) -> Result<()> {
    debug!("cmd_plan: called");
    let planner = build_planner(config)?;

    let request = match PlanRequest::new(destination, budget, interests) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "cmd_plan: validation failed");
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let plan = match planner.generate(&request).await {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match format {
        OutputFormat::Text => {
            let color = std::io::stdout().is_terminal();
            print!("{}", render_text(&PlanView::from_plan(&plan), color));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }
    Ok(())
}

fn cmd_schema(dialect: SchemaDialect) -> Result<()> {
    debug!(?dialect, "cmd_schema: called");
    let schema = itinerary_schema();
    let value = match dialect {
        SchemaDialect::Gemini => schema.to_gemini_schema(),
        SchemaDialect::JsonSchema => schema.to_json_schema(),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn cmd_options() {
    debug!("cmd_options: called");
    println!("Budget tiers:");
    for tier in BudgetTier::ALL {
        let marker = if tier == BudgetTier::default() { " (default)" } else { "" };
        println!("  {:<12} {}{}", tier.to_string().to_lowercase(), tier.hint(), marker);
    }
    println!();
    println!("Interests:");
    for interest in Interest::ALL {
        println!("  {}", interest);
    }
}
