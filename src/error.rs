//! Error types for uploader operations.
//!
//! The taxonomy is deliberately flat and enumerable: parameter resolution,
//! preconditions, network transfer, archive extraction, and subprocess
//! execution each get their own variants so every failure mode the pipeline
//! can hit is visible at the type level. Nothing here is recovered from;
//! every error propagates to `main` and terminates the run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for uploader operations
pub type Result<T> = std::result::Result<T, UploaderError>;

/// Main error type for all uploader operations
#[derive(Error, Debug)]
pub enum UploaderError {
    /// Parameter resolution errors
    #[error("{0}")]
    Params(#[from] ParamsError),

    /// Required external tool not found on PATH
    #[error(
        "'{tool}' not found. Make sure you have {tool} installed and added to your PATH before using this tool."
    )]
    ToolMissing {
        /// Name of the missing executable
        tool: String,
    },

    /// HTTP transfer errors
    #[error("Download failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Archive extraction errors
    #[error("Failed to extract '{archive}': {source}")]
    Extraction {
        /// Path of the archive being extracted
        archive: PathBuf,
        /// Underlying ZIP error
        #[source]
        source: zip::result::ZipError,
    },

    /// Subprocess execution errors
    #[error("{0}")]
    Subprocess(#[from] SubprocessError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parameter resolution errors
///
/// Covers both config-file problems and validation of the merged result.
#[derive(Error, Debug)]
pub enum ParamsError {
    /// The `--configPath` argument was not supplied
    #[error("Argument 'configPath' is required")]
    ConfigPathMissing,

    /// The config file does not exist
    #[error("Config file not found at {path}")]
    ConfigFileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The config file exists but could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be parsed as JSON
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A platform named in the arguments has no config entry
    #[error("Platform '{name}' is in arguments, but not in config")]
    PlatformConfigMissing {
        /// Platform name from the arguments
        name: String,
    },

    /// A platform entry is missing a required field
    #[error("Platform '{platform}' is missing '{field}'")]
    InvalidPlatformEntry {
        /// Platform name, or a placeholder when the name itself is missing
        platform: String,
        /// Name of the missing field
        field: &'static str,
    },

    /// A required top-level parameter is absent from config and arguments
    #[error("Param '{name}' is required")]
    MissingRequiredParam {
        /// Public (camelCase) parameter name
        name: &'static str,
    },

    /// The TeamCity host is not a well-formed URL
    #[error("Param 'teamcityHost' must be a valid URL, got '{url}': {source}")]
    InvalidHostUrl {
        /// The rejected value
        url: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The merged platform list is empty
    #[error("Param 'platforms' must have at least one entry")]
    NoPlatforms,
}

/// Subprocess execution errors
#[derive(Error, Debug)]
pub enum SubprocessError {
    /// The subprocess could not be started
    #[error("Failed to start '{command}': {source}")]
    Spawn {
        /// Command line that failed to launch
        command: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// The subprocess exited with a non-zero status
    #[error("'{command}' exited with code {code:?}")]
    ExitStatus {
        /// Command line that was run
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
    },
}
