//! Sequential pipeline orchestration.
//!
//! One run walks a strictly linear sequence: download every platform's
//! artifact archive, extract each into the shared bundles directory, sync
//! that directory with the upload tool, then optionally create a release.
//! The first error aborts the remaining steps; there is no retry and no
//! partial-failure recovery. Everything happens inside one temporary working
//! directory which is removed on every exit path.

mod download;
mod extract;

pub use download::download;
pub use extract::extract_zip;

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::cli::OutputManager;
use crate::error::Result;
use crate::params::Params;
use crate::teamcity::{self, TeamCityClient};
use crate::ucd;

/// Directory inside the temp dir that platforms are assembled into,
/// and that `ucd entries sync` uploads as a whole.
const BUNDLES_DIR: &str = "AssetBundles";

/// Prefix for the run's temporary working directory
const TEMP_PREFIX: &str = "teamcity-ccd-uploader-";

/// Execute the full pipeline for a resolved parameter set.
pub async fn run(params: &Params, output: &OutputManager) -> Result<()> {
    let client = TeamCityClient::new(&params.teamcity_access_token)?;

    // TempDir removes itself recursively on drop, on success and failure alike
    let temp_dir = tempfile::Builder::new().prefix(TEMP_PREFIX).tempdir()?;
    let bundles_dir = temp_dir.path().join(BUNDLES_DIR);

    download_bundles(params, &client, temp_dir.path(), &bundles_dir, output).await?;

    upload_bundles(params, &bundles_dir, output).await?;

    if params.ucd_create_release {
        let _ = output.println("Creating a release with UCD");
        ucd::create_release(params).await?;
    } else {
        let _ = output.println("Skip creating a release with UCD in accordance with params");
    }

    Ok(())
}

/// Download and extract every platform's archive, in list order.
async fn download_bundles(
    params: &Params,
    client: &TeamCityClient,
    root_dir: &Path,
    bundles_dir: &Path,
    output: &OutputManager,
) -> Result<()> {
    let _ = output.println("Downloading bundles from Teamcity");

    for platform in &params.platforms {
        let _ = output.println(&format!("Platform: {}", platform.name));

        let archive_url = teamcity::artifact_archive_url(
            &params.teamcity_host,
            &platform.teamcity_build_id,
            &platform.teamcity_artifacts_subfolder,
        );
        log::debug!("archive url: {archive_url}");

        let archive_path = root_dir.join(format!("archive-{}.zip", platform.name));

        let _ = output.println("Downloading");
        let bar = download_progress_bar();
        download(client, &archive_url, &archive_path, |bytes| {
            bar.set_position(bytes);
        })
        .await?;
        // keep the final byte count on screen, then move on
        bar.finish();

        let platform_dir = bundles_dir.join(&platform.upload_subfolder);

        let _ = output.println("Extracting");
        extract_zip(&archive_path, &platform_dir).await?;
    }

    Ok(())
}

/// Sync the assembled bundles directory with the upload tool.
async fn upload_bundles(params: &Params, bundles_dir: &Path, output: &OutputManager) -> Result<()> {
    let _ = output.println("Uploading with UCD");
    ucd::sync_entries(params, bundles_dir).await
}

/// Single updating status line showing cumulative downloaded bytes.
fn download_progress_bar() -> ProgressBar {
    let bar = ProgressBar::no_length();
    if let Ok(style) = ProgressStyle::with_template("Downloaded: {bytes}") {
        bar.set_style(style);
    }
    bar
}
