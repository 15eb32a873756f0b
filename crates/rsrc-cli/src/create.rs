//! # New Subcommand
//!
//! Build a license_info document from flags and print it.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use rsrc_core::{Bool, SystemClock};
use rsrc_license::{marshal_license_info, LicenseInfo, LicenseInfoSpec, Resource};

use crate::{write_document, OutputFormat};

/// Arguments for the `rsrc new` subcommand.
#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Resource name.
    #[arg(long)]
    pub name: String,

    /// Customer account ID.
    #[arg(long)]
    pub account_id: Option<String>,

    /// Plan ID.
    #[arg(long)]
    pub plan_id: Option<String>,

    /// Report usage to the control plane.
    #[arg(long)]
    pub usage: bool,

    /// Enable Kubernetes support.
    #[arg(long)]
    pub k8s: bool,

    /// Restrict use to this AWS product ID.
    #[arg(long)]
    pub aws_pid: Option<String>,

    /// Restrict use to this AWS account ID.
    #[arg(long)]
    pub aws_account: Option<String>,

    /// Expire the license this many seconds from now.
    #[arg(long, value_name = "SECONDS")]
    pub ttl_secs: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Indent JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the new subcommand.
///
/// Returns exit code: 0 on success, 1 if the flags describe an invalid
/// resource. The document goes to `out`, rejections to `err`.
pub fn run_create(
    args: &CreateArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<u8> {
    let spec = LicenseInfoSpec {
        account_id: args.account_id.clone(),
        plan_id: args.plan_id.clone(),
        reports_usage: Bool::new(args.usage),
        aws_product_id: args.aws_pid.clone(),
        aws_account_id: args.aws_account.clone(),
        supports_kubernetes: Bool::new(args.k8s),
    };

    let mut license =
        LicenseInfo::new(args.name.clone(), spec).context("failed to construct license info")?;
    let checked = match args.ttl_secs {
        Some(secs) => license.set_ttl(&SystemClock, Duration::from_secs(secs)),
        None => Ok(()),
    }
    .and_then(|()| license.check_and_set_defaults());

    if let Err(e) = checked {
        writeln!(err, "FAIL: {e}")?;
        return Ok(1);
    }

    tracing::debug!(name = %license.name(), "built license info");
    let encoded = marshal_license_info(&license, &args.format.marshal_options(args.pretty))
        .context("failed to marshal license info")?;
    write_document(out, &encoded)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsrc_license::unmarshal_license_info;

    #[test]
    fn test_create_minimal() {
        let args = CreateArgs {
            name: "X".into(),
            ..CreateArgs::default()
        };
        let mut out = Vec::new();
        assert_eq!(run_create(&args, &mut out, &mut Vec::new()).unwrap(), 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"kind\":\"license_info\",\"version\":\"v3\",\"metadata\":{\"name\":\"X\",\"namespace\":\"default\"},\"spec\":{\"k8s\":false}}\n"
        );
    }

    #[test]
    fn test_create_output_parses_back() {
        let args = CreateArgs {
            name: "Commercial".into(),
            account_id: Some("acct".into()),
            usage: true,
            aws_account: Some("123".into()),
            ttl_secs: Some(3600),
            format: OutputFormat::Yaml,
            ..CreateArgs::default()
        };
        let mut out = Vec::new();
        assert_eq!(run_create(&args, &mut out, &mut Vec::new()).unwrap(), 0);

        let license = unmarshal_license_info(&out).unwrap();
        assert_eq!(license.account_id(), Some("acct"));
        assert!(license.reports_usage().value());
        assert_eq!(license.aws_account_id(), Some("123"));
        assert!(license.expiry().is_some());
    }

    #[test]
    fn test_create_empty_name_fails() {
        let args = CreateArgs::default();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        assert_eq!(run_create(&args, &mut out, &mut err).unwrap(), 1);
        assert!(out.is_empty());
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("FAIL:"), "{err}");
        assert!(err.contains("missing parameter name"), "{err}");
    }

    #[test]
    fn test_create_ttl_overflow_fails() {
        let args = CreateArgs {
            name: "X".into(),
            ttl_secs: Some(u64::MAX),
            ..CreateArgs::default()
        };
        let (mut out, mut err) = (Vec::new(), Vec::new());
        assert_eq!(run_create(&args, &mut out, &mut err).unwrap(), 1);
        assert!(out.is_empty());
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("FAIL:"), "{err}");
        assert!(err.contains("overflows the expiry range"), "{err}");
    }
}
