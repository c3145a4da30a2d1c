//! Merging of config-file data with command line overrides.
//!
//! Precedence is shallow and absolute: an argument value always wins over the
//! config value for the same key. Platform data merges by name, driven by the
//! argument list; a config platform nobody asked for is dropped.

use url::Url;

use super::config::{ConfigFile, RawPlatformConfig};
use super::{CliOverrides, Params, PlatformArg, PlatformParam};
use crate::error::ParamsError;

/// Placeholder used in errors when a platform entry has no usable name.
const UNNAMED: &str = "<unnamed>";

/// Merge config and overrides into validated [`Params`].
pub(super) fn merge(config: ConfigFile, args: CliOverrides) -> Result<Params, ParamsError> {
    let platforms = merge_platforms(config.platforms.unwrap_or_default(), &args.platforms)?;

    let host = args
        .teamcity_host
        .or(config.teamcity_host)
        .ok_or(ParamsError::MissingRequiredParam {
            name: "teamcityHost",
        })?;
    let teamcity_host = Url::parse(&host).map_err(|source| ParamsError::InvalidHostUrl {
        url: host.clone(),
        source,
    })?;

    if platforms.is_empty() {
        return Err(ParamsError::NoPlatforms);
    }

    let ucd_bucket = args
        .ucd_bucket
        .or(config.ucd_bucket)
        .ok_or(ParamsError::MissingRequiredParam { name: "ucdBucket" })?;
    let ucd_environment =
        args.ucd_environment
            .or(config.ucd_environment)
            .ok_or(ParamsError::MissingRequiredParam {
                name: "ucdEnvironment",
            })?;
    let ucd_api_key = args
        .ucd_api_key
        .or(config.ucd_api_key)
        .ok_or(ParamsError::MissingRequiredParam { name: "ucdApiKey" })?;
    let ucd_verbose = args
        .ucd_verbose
        .or(config.ucd_verbose)
        .ok_or(ParamsError::MissingRequiredParam { name: "ucdVerbose" })?;
    let ucd_create_release =
        args.ucd_create_release
            .or(config.ucd_create_release)
            .ok_or(ParamsError::MissingRequiredParam {
                name: "ucdCreateRelease",
            })?;
    let teamcity_access_token =
        args.teamcity_access_token
            .or(config.teamcity_access_token)
            .ok_or(ParamsError::MissingRequiredParam {
                name: "teamcityAccessToken",
            })?;

    let ucd_release_notes = args.ucd_release_notes.or(config.ucd_release_notes);
    if ucd_create_release && ucd_release_notes.is_none() {
        return Err(ParamsError::MissingRequiredParam {
            name: "ucdReleaseNotes",
        });
    }

    Ok(Params {
        teamcity_host,
        ucd_bucket,
        ucd_environment,
        ucd_api_key,
        ucd_verbose,
        ucd_create_release,
        ucd_release_notes,
        teamcity_access_token,
        platforms,
    })
}

/// Combine per-platform config entries with per-platform argument entries.
///
/// Iterates the argument platforms in CLI order; every one must have a config
/// entry of the same name. Config platforms with no matching argument are
/// dropped.
fn merge_platforms(
    config_platforms: Vec<RawPlatformConfig>,
    arg_platforms: &[PlatformArg],
) -> Result<Vec<PlatformParam>, ParamsError> {
    let config_platforms = config_platforms
        .into_iter()
        .map(validate_config_platform)
        .collect::<Result<Vec<_>, _>>()?;

    for arg in arg_platforms {
        validate_arg_platform(arg)?;
    }

    arg_platforms
        .iter()
        .map(|arg| {
            let config = config_platforms
                .iter()
                .find(|config| config.name == arg.name)
                .ok_or_else(|| ParamsError::PlatformConfigMissing {
                    name: arg.name.clone(),
                })?;

            Ok(PlatformParam {
                name: arg.name.clone(),
                // the argument side wins on overlap; build id only exists there
                teamcity_build_id: arg.teamcity_build_id.clone().unwrap_or_default(),
                teamcity_artifacts_subfolder: config.teamcity_artifacts_subfolder.clone(),
                upload_subfolder: config.upload_subfolder.clone(),
            })
        })
        .collect()
}

/// A config platform entry with all fields proven present.
struct ValidatedConfigPlatform {
    name: String,
    teamcity_artifacts_subfolder: String,
    upload_subfolder: String,
}

fn validate_config_platform(
    entry: RawPlatformConfig,
) -> Result<ValidatedConfigPlatform, ParamsError> {
    let name = entry
        .name
        .filter(|name| !name.is_empty())
        .ok_or(ParamsError::InvalidPlatformEntry {
            platform: UNNAMED.to_string(),
            field: "name",
        })?;

    let teamcity_artifacts_subfolder =
        entry
            .teamcity_artifacts_subfolder
            .ok_or_else(|| ParamsError::InvalidPlatformEntry {
                platform: name.clone(),
                field: "teamcityArtifactsSubfolder",
            })?;

    let upload_subfolder =
        entry
            .upload_subfolder
            .ok_or_else(|| ParamsError::InvalidPlatformEntry {
                platform: name.clone(),
                field: "uploadSubfolder",
            })?;

    Ok(ValidatedConfigPlatform {
        name,
        teamcity_artifacts_subfolder,
        upload_subfolder,
    })
}

fn validate_arg_platform(entry: &PlatformArg) -> Result<(), ParamsError> {
    if entry.name.is_empty() {
        return Err(ParamsError::InvalidPlatformEntry {
            platform: UNNAMED.to_string(),
            field: "name",
        });
    }

    if entry.teamcity_build_id.is_none() {
        return Err(ParamsError::InvalidPlatformEntry {
            platform: entry.name.clone(),
            field: "teamcityBuildId",
        });
    }

    Ok(())
}
