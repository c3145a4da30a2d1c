//! Parameter resolution.
//!
//! One validated [`Params`] value drives the whole run. It is assembled from
//! two sources: a JSON config file holding the static settings checked into
//! the repo, and command line arguments injecting the per-run values (build
//! ids, secrets). Arguments always win when both sources name the same key.
//!
//! Resolution is pure apart from the single config-file read: no network, no
//! other filesystem access, and any inconsistency fails the run before the
//! pipeline starts.

mod config;
mod merge;

pub use config::{ConfigFile, RawPlatformConfig, load_config};

use std::path::PathBuf;
use url::Url;

use crate::error::ParamsError;

/// One platform requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformArg {
    /// Platform name, taken from the flag itself
    pub name: String,
    /// TeamCity build id supplied as the flag's value
    pub teamcity_build_id: Option<String>,
}

/// Fully merged settings for one platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformParam {
    /// Platform name shared by config and arguments
    pub name: String,
    /// TeamCity build to fetch artifacts from
    pub teamcity_build_id: String,
    /// Path of the artifact archive below the build's artifacts root
    pub teamcity_artifacts_subfolder: String,
    /// Directory name the platform's bundles are uploaded under
    pub upload_subfolder: String,
}

/// Command line values that override the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Path to the JSON config file
    pub config_path: Option<PathBuf>,
    /// TeamCity server URL
    pub teamcity_host: Option<String>,
    /// CCD bucket to sync into
    pub ucd_bucket: Option<String>,
    /// CCD environment
    pub ucd_environment: Option<String>,
    /// API key for the ucd CLI
    pub ucd_api_key: Option<String>,
    /// Pass --verbose through to the ucd CLI
    pub ucd_verbose: Option<bool>,
    /// Create a CCD release after syncing
    pub ucd_create_release: Option<bool>,
    /// Release notes for the created release
    pub ucd_release_notes: Option<String>,
    /// TeamCity bearer token
    pub teamcity_access_token: Option<String>,
    /// Residual platform → build-id flags, in CLI order
    pub platforms: Vec<PlatformArg>,
}

/// The validated parameter set consumed by the pipeline
///
/// Constructed once by [`resolve`], read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// TeamCity server base URL
    pub teamcity_host: Url,
    /// CCD bucket to sync into
    pub ucd_bucket: String,
    /// CCD environment
    pub ucd_environment: String,
    /// API key for the ucd CLI
    pub ucd_api_key: String,
    /// Pass --verbose through to the ucd CLI
    pub ucd_verbose: bool,
    /// Create a CCD release after syncing
    pub ucd_create_release: bool,
    /// Release notes, present whenever `ucd_create_release` is set
    pub ucd_release_notes: Option<String>,
    /// TeamCity bearer token
    pub teamcity_access_token: String,
    /// Platforms to process, in CLI order
    pub platforms: Vec<PlatformParam>,
}

/// Resolve the full parameter set from the config file and CLI overrides.
pub fn resolve(overrides: CliOverrides) -> Result<Params, ParamsError> {
    let config_path = overrides
        .config_path
        .clone()
        .ok_or(ParamsError::ConfigPathMissing)?;

    let config = load_config(&config_path)?;
    merge::merge(config, overrides)
}
