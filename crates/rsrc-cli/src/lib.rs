//! # rsrc-cli: Resource Command-Line Interface
//!
//! ## Subcommands
//!
//! - `validate`: parse and validate a license_info document, print its summary
//! - `show`: parse a document and print its canonical form
//! - `new`: build a license_info document from flags
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from behavior: each subcommand module
//!   exposes `*Args` and a `run_*` function returning an exit code.
//! - Handlers delegate to `rsrc-license`. No validation logic lives here.
//! - Exit codes: 0 success, 1 validation failure, 2 operational error.

use std::io::Write;

pub mod create;
pub mod show;
pub mod validate;

/// Output format flag shared by subcommands that print a document.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Canonical JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl OutputFormat {
    /// Marshal options for this format.
    pub fn marshal_options(self, pretty: bool) -> rsrc_license::MarshalOptions {
        let format = match self {
            Self::Json => rsrc_license::Format::Json,
            Self::Yaml => rsrc_license::Format::Yaml,
        };
        rsrc_license::MarshalOptions { format, pretty }
    }
}

/// Write marshaled bytes followed by a newline if they lack one.
pub(crate) fn write_document(out: &mut dyn Write, bytes: &[u8]) -> std::io::Result<()> {
    out.write_all(bytes)?;
    if !bytes.ends_with(b"\n") {
        out.write_all(b"\n")?;
    }
    Ok(())
}
