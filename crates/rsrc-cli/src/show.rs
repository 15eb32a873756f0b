//! # Show Subcommand
//!
//! Parse a license_info document and print it in canonical form, with
//! defaults applied and tri-state tokens resolved to booleans.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rsrc_license::{marshal_license_info, unmarshal_license_info};

use crate::{write_document, OutputFormat};

/// Arguments for the `rsrc show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// JSON or YAML document to read.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Indent JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the show subcommand.
///
/// Returns exit code: 0 on success, 1 if the document is invalid. The
/// document goes to `out`, rejections to `err`.
pub fn run_show(
    args: &ShowArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<u8> {
    let bytes = std::fs::read(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;

    let license = match unmarshal_license_info(&bytes) {
        Ok(license) => license,
        Err(e) => {
            tracing::debug!(path = %args.path.display(), error = %e, "document rejected");
            writeln!(err, "FAIL: {}: {e}", args.path.display())?;
            return Ok(1);
        }
    };

    let encoded = marshal_license_info(&license, &args.format.marshal_options(args.pretty))
        .context("failed to marshal license info")?;
    write_document(out, &encoded)?;
    Ok(0)
}
