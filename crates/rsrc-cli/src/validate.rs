//! # Validate Subcommand
//!
//! Parse a license_info document from a file and report whether it is
//! valid. On success the human-readable summary is printed.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rsrc_license::unmarshal_license_info;

/// Arguments for the `rsrc validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON or YAML document to validate.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if the document is valid, 1 if it is not. The
/// summary goes to `out`, rejections to `err`.
pub fn run_validate(
    args: &ValidateArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<u8> {
    let bytes = std::fs::read(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;

    match unmarshal_license_info(&bytes) {
        Ok(license) => {
            tracing::info!(path = %args.path.display(), name = %license.metadata.name, "valid");
            let summary = license.to_string();
            if summary.is_empty() {
                writeln!(out, "OK: {}", license.metadata.name)?;
            } else {
                writeln!(out, "OK: {} ({summary})", license.metadata.name)?;
            }
            Ok(0)
        }
        Err(e) => {
            writeln!(err, "FAIL: {}: {e}", args.path.display())?;
            Ok(1)
        }
    }
}
