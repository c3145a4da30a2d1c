//! Command line argument parsing.
//!
//! The tool takes no subcommands: every invocation is one pipeline run. The
//! known options keep the camelCase names operators already use in CI job
//! definitions; any other `--flag` is a platform name whose value is the
//! TeamCity build id to fetch for that platform.

use clap::Parser;
use std::path::PathBuf;

use crate::params::PlatformArg;

/// Option names recognized as top-level parameters.
///
/// Anything else passed as `--<flag>` is routed to the platform build-id map.
pub const KNOWN_FLAGS: [&str; 9] = [
    "configPath",
    "teamcityHost",
    "ucdBucket",
    "ucdEnvironment",
    "ucdApiKey",
    "ucdReleaseNotes",
    "ucdVerbose",
    "ucdCreateRelease",
    "teamcityAccessToken",
];

/// Fetch TeamCity build artifacts and upload them with the ucd CLI
#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "teamcity_ccd_uploader",
    version,
    about = "Fetch TeamCity build artifacts and upload them with the ucd CLI",
    long_about = "Download per-platform artifact archives from TeamCity, extract them \
into one bundles directory, and hand that directory to 'ucd entries sync'.

Usage:
  teamcity_ccd_uploader --configPath ./upload.json --win 12345 --osx 12346
  teamcity_ccd_uploader --configPath ./upload.json --ios 99 --ucdCreateRelease --ucdReleaseNotes \"weekly build\""
)]
pub struct Args {
    /// Path to the JSON config file
    #[arg(long = "configPath", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// TeamCity server URL, e.g. https://ci.example.com
    #[arg(long = "teamcityHost", value_name = "URL")]
    pub teamcity_host: Option<String>,

    /// CCD bucket to sync into
    #[arg(long = "ucdBucket", value_name = "BUCKET")]
    pub ucd_bucket: Option<String>,

    /// CCD environment, e.g. production
    #[arg(long = "ucdEnvironment", value_name = "ENV")]
    pub ucd_environment: Option<String>,

    /// API key passed to the ucd CLI
    #[arg(long = "ucdApiKey", value_name = "KEY")]
    pub ucd_api_key: Option<String>,

    /// Release notes, required when a release is created
    #[arg(long = "ucdReleaseNotes", value_name = "NOTES")]
    pub ucd_release_notes: Option<String>,

    /// Pass --verbose through to the ucd CLI
    #[arg(
        long = "ucdVerbose",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub ucd_verbose: Option<bool>,

    /// Create a CCD release after the sync completes
    #[arg(
        long = "ucdCreateRelease",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub ucd_create_release: Option<bool>,

    /// TeamCity bearer token for the artifacts API
    #[arg(long = "teamcityAccessToken", value_name = "TOKEN")]
    pub teamcity_access_token: Option<String>,
}

impl Args {
    /// Parse the process argument list.
    ///
    /// Returns the known options plus the residual platform → build-id pairs.
    pub fn parse_args() -> (Self, Vec<PlatformArg>) {
        let (known, platforms) = split_known_args(std::env::args());
        (Self::parse_from(known), platforms)
    }
}

/// Split an argument list into tokens for clap and residual platform pairs.
///
/// Known flags (and their values) pass through untouched. Every unknown
/// `--flag` becomes a platform entry whose build id is the inline `=value`
/// or the following non-flag token, if any. Bare positional tokens are
/// ignored, matching the historical CLI surface.
pub fn split_known_args<I>(args: I) -> (Vec<String>, Vec<PlatformArg>)
where
    I: IntoIterator<Item = String>,
{
    let mut iter = args.into_iter().peekable();
    let mut known: Vec<String> = Vec::new();
    let mut platforms: Vec<PlatformArg> = Vec::new();

    // argv[0] always belongs to clap
    if let Some(bin) = iter.next() {
        known.push(bin);
    }

    while let Some(token) = iter.next() {
        let Some(flag) = token.strip_prefix("--") else {
            // bare positional, not part of the surface
            continue;
        };

        let (name, inline_value) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag, None),
        };

        if KNOWN_FLAGS.contains(&name) {
            known.push(token.clone());
            // a separate value token travels with its flag
            if inline_value.is_none()
                && let Some(next) = iter.peek()
                && !next.starts_with("--")
            {
                known.push(iter.next().unwrap_or_default());
            }
            continue;
        }

        let build_id = match inline_value {
            Some(value) => Some(value),
            None => {
                if let Some(next) = iter.peek()
                    && !next.starts_with("--")
                {
                    iter.next()
                } else {
                    None
                }
            }
        };

        platforms.push(PlatformArg {
            name: name.to_string(),
            teamcity_build_id: build_id,
        });
    }

    (known, platforms)
}
