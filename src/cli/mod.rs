//! Command line interface for the uploader.
//!
//! Parses arguments, resolves the parameter set, checks preconditions and
//! hands off to the pipeline.

mod args;
mod output;

pub use args::{Args, KNOWN_FLAGS, split_known_args};
pub use output::OutputManager;

use crate::error::Result;
use crate::params::{self, CliOverrides};
use crate::{pipeline, ucd};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let (args, platforms) = Args::parse_args();
    let output = OutputManager::new();

    let params = params::resolve(CliOverrides {
        config_path: args.config_path,
        teamcity_host: args.teamcity_host,
        ucd_bucket: args.ucd_bucket,
        ucd_environment: args.ucd_environment,
        ucd_api_key: args.ucd_api_key,
        ucd_verbose: args.ucd_verbose,
        ucd_create_release: args.ucd_create_release,
        ucd_release_notes: args.ucd_release_notes,
        teamcity_access_token: args.teamcity_access_token,
        platforms,
    })?;

    // fail before any transfer if the upload tool is absent
    ucd::ensure_tool_installed()?;

    pipeline::run(&params, &output).await?;

    let _ = output.success("Success.");
    Ok(0)
}
