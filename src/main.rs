//! romcalc - Main Entry Point
//!
//! Evaluates one expression read from stdin and prints one line.

use clap::{Parser, Subcommand};
use romcalc::config::CalculatorConfig;
use romcalc::observability::init_default_logging;
use romcalc::{ExpressionEvaluator, Session};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

/// Calculator for Arabic and Roman numerals from 1 to 10
#[derive(Parser)]
#[command(name = "romcalc")]
#[command(about = "Evaluate one Arabic or Roman numeral expression")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Reject expressions with Roman operands
    #[arg(long)]
    arabic_only: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read one expression and print the result (default)
    Run,
    /// Validate configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    init_default_logging(cli.verbose);

    info!("Starting romcalc v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };
    if cli.arabic_only {
        config = config.arabic_only();
    }

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_calculator(&config),
        Commands::Config { show } => handle_config_command(&config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_configuration(
    config_path: &Option<PathBuf>,
) -> Result<CalculatorConfig, Box<dyn std::error::Error>> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(CalculatorConfig::load_from_file(path)?)
        }
        None => Ok(CalculatorConfig::default()),
    }
}

fn run_calculator(config: &CalculatorConfig) -> Result<(), Box<dyn std::error::Error>> {
    let evaluator = ExpressionEvaluator::from_config(config);
    let session = Session::new(&evaluator, &config.calculator.prompt);

    let stdin = io::stdin();
    let stdout = io::stdout();
    // Evaluation errors are already printed; the process still exits normally
    let _outcome = session.run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

fn handle_config_command(
    config: &CalculatorConfig,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if show {
        println!("Current configuration:");
        println!("{}", toml::to_string_pretty(config)?);
    }

    info!("Configuration validation complete");
    Ok(())
}
