//! Config file model and loading.
//!
//! The file is a plain JSON object. Every field is optional at this layer so
//! that a key set to `null` and an absent key behave identically; presence is
//! enforced only on the merged result. Unknown keys are ignored.

use serde::Deserialize;
use std::path::Path;

use crate::error::ParamsError;

/// Raw, unvalidated contents of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFile {
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
    /// Static per-platform settings
    pub platforms: Option<Vec<RawPlatformConfig>>,
}

/// One unvalidated platform entry from the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPlatformConfig {
    /// Platform name, the key CLI arguments are matched against
    pub name: Option<String>,
    /// Path of the artifact archive below the build's artifacts root
    pub teamcity_artifacts_subfolder: Option<String>,
    /// Directory name the platform's bundles are uploaded under
    pub upload_subfolder: Option<String>,
}

/// Read and parse the config file at `path`.
pub fn load_config(path: &Path) -> Result<ConfigFile, ParamsError> {
    if !path.exists() {
        return Err(ParamsError::ConfigFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ParamsError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ParamsError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("upload.json");
        let mut file = std::fs::File::create(&path).expect("create config");
        file.write_all(contents.as_bytes()).expect("write config");
        (dir, path)
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let err = load_config(Path::new("/nonexistent/upload.json")).unwrap_err();
        assert!(matches!(err, ParamsError::ConfigFileNotFound { .. }));
        assert!(err.to_string().contains("/nonexistent/upload.json"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let (_dir, path) = write_config("{ not json");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ParamsError::ConfigParse { .. }));
    }

    #[test]
    fn null_values_read_as_absent() {
        let (_dir, path) = write_config(
            r#"{"teamcityHost": null, "ucdBucket": "assets", "platforms": null}"#,
        );
        let config = load_config(&path).expect("load");
        assert_eq!(config.teamcity_host, None);
        assert_eq!(config.ucd_bucket.as_deref(), Some("assets"));
        assert!(config.platforms.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let (_dir, path) = write_config(r#"{"ucdBucket": "assets", "legacyField": 7}"#);
        let config = load_config(&path).expect("load");
        assert_eq!(config.ucd_bucket.as_deref(), Some("assets"));
    }

    #[test]
    fn platform_entries_keep_partial_fields() {
        let (_dir, path) = write_config(
            r#"{"platforms": [{"name": "win", "uploadSubfolder": "Windows"}]}"#,
        );
        let config = load_config(&path).expect("load");
        let platforms = config.platforms.expect("platforms");
        assert_eq!(platforms[0].name.as_deref(), Some("win"));
        assert_eq!(platforms[0].teamcity_artifacts_subfolder, None);
        assert_eq!(platforms[0].upload_subfolder.as_deref(), Some("Windows"));
    }
}
