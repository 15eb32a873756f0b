//! # rsrc CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rsrc_cli::create::{run_create, CreateArgs};
use rsrc_cli::show::{run_show, ShowArgs};
use rsrc_cli::validate::{run_validate, ValidateArgs};

/// Validate, normalize, and create versioned resource documents.
#[derive(Parser, Debug)]
#[command(name = "rsrc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a license_info document and print its summary.
    Validate(ValidateArgs),

    /// Print a license_info document in canonical form.
    Show(ShowArgs),

    /// Build a license_info document from flags.
    New(CreateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &mut stdout, &mut stderr),
        Commands::Show(args) => run_show(&args, &mut stdout, &mut stderr),
        Commands::New(args) => run_create(&args, &mut stdout, &mut stderr),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
