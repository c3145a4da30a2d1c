//! Interface to the external `ucd` content-delivery CLI.
//!
//! Two command forms are used: `entries sync` to mirror the assembled bundles
//! directory into a bucket, and `releases create` to cut a release from the
//! synced content. Arguments are passed as discrete argv entries, so bucket
//! names or release notes containing spaces need no shell quoting.

use std::path::Path;

use crate::error::{Result, UploaderError};
use crate::params::Params;
use crate::process::run_command;

/// Name of the upload tool executable
pub const UCD_BIN: &str = "ucd";

/// Verify the upload tool is present on PATH.
///
/// Runs before any download work so a missing tool fails the run immediately
/// instead of after minutes of transfers.
pub fn ensure_tool_installed() -> Result<()> {
    which::which(UCD_BIN).map_err(|_| UploaderError::ToolMissing {
        tool: UCD_BIN.to_string(),
    })?;
    Ok(())
}

/// Sync the assembled bundles directory into the configured bucket.
pub async fn sync_entries(params: &Params, bundles_dir: &Path) -> Result<()> {
    let args = with_common_flags(
        vec![
            "entries".to_string(),
            "sync".to_string(),
            bundles_dir.display().to_string(),
        ],
        params,
    );

    run_command(UCD_BIN, &args).await?;
    Ok(())
}

/// Create a release from the previously synced content.
pub async fn create_release(params: &Params) -> Result<()> {
    let mut args = vec!["releases".to_string(), "create".to_string()];
    if let Some(notes) = params.ucd_release_notes.as_deref() {
        args.push("--notes".to_string());
        args.push(notes.to_string());
    }
    let args = with_common_flags(args, params);

    run_command(UCD_BIN, &args).await?;
    Ok(())
}

/// Append the bucket/environment/apikey flags shared by every ucd call.
fn with_common_flags(mut args: Vec<String>, params: &Params) -> Vec<String> {
    args.push("--bucket".to_string());
    args.push(params.ucd_bucket.clone());
    args.push("--environment".to_string());
    args.push(params.ucd_environment.clone());
    args.push("--apikey".to_string());
    args.push(params.ucd_api_key.clone());
    if params.ucd_verbose {
        args.push("--verbose".to_string());
    }
    args
}
