use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use theater_billing::calculation::compute_statement;
use theater_billing::config::{RuleBook, RuleBookLoader};
use theater_billing::data::{load_catalog, load_invoice};
use theater_billing::render;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Print a billing statement for a theater invoice", long_about = None)]
struct Cli {
    /// Plays JSON file, keyed by play id
    #[arg(long)]
    plays: PathBuf,

    /// Invoice JSON file
    #[arg(long)]
    invoice: PathBuf,

    /// Rule book YAML file (built-in rates when omitted)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let rules = match cli.rules {
        Some(path) => RuleBookLoader::load(path).into_diagnostic()?.into_rules(),
        None => RuleBook::default(),
    };
    let catalog = load_catalog(&cli.plays).into_diagnostic()?;
    let invoice = load_invoice(&cli.invoice).into_diagnostic()?;

    let statement = compute_statement(&invoice, &catalog, &rules).into_diagnostic()?;

    match cli.format {
        OutputFormat::Text => print!("{}", render::plain_text(&statement)),
        OutputFormat::Json => println!("{}", render::json(&statement).into_diagnostic()?),
    }

    Ok(())
}
