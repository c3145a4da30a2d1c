//! # TeamCity CCD Uploader
//!
//! Automates one deployment pipeline step: fetch per-platform build artifact
//! archives from a TeamCity server, extract them into a single bundles
//! directory, and hand that directory to the external `ucd` CLI for Cloud
//! Content Delivery upload and optional release creation.
//!
//! Static settings live in a JSON config file; per-run values (build ids,
//! secrets) come from the command line and override the file. The pipeline
//! itself is strictly sequential with no retries: any failure aborts the run
//! and the temporary working directory is cleaned up on every exit path.
//!
//! ## Usage
//!
//! ```bash
//! teamcity_ccd_uploader --configPath ./upload.json --win 12345 --osx 12346
//! teamcity_ccd_uploader --configPath ./upload.json --ios 99 \
//!     --ucdCreateRelease --ucdReleaseNotes "weekly build"
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod process;
pub mod teamcity;
pub mod ucd;

// Re-export main types for public API
pub use cli::Args;
pub use error::{ParamsError, Result, SubprocessError, UploaderError};
pub use params::{CliOverrides, Params, PlatformArg, PlatformParam, resolve};
