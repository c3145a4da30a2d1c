//! TeamCity CCD Uploader - fetch build artifacts and upload them with ucd.
//!
//! This binary resolves the run's parameters from a JSON config file plus
//! command line overrides, then executes the linear download → extract →
//! upload → release pipeline.

use std::process;
use teamcity_ccd_uploader::cli;
use teamcity_ccd_uploader::cli::OutputManager;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            let output = OutputManager::new();
            output.error(&format!("Failure. {e}"));
            process::exit(1);
        }
    }
}
