//! TeamCity artifacts API surface.
//!
//! The only endpoint used is the archived-artifacts download:
//! `GET {host}/app/rest/builds/id:{buildId}/artifacts/archived/{subfolder}`,
//! which returns the requested artifacts subtree as one ZIP stream. All
//! requests authenticate with the operator-supplied bearer token.

use url::Url;

use crate::error::Result;

/// HTTP client bound to a TeamCity access token.
#[derive(Debug, Clone)]
pub struct TeamCityClient {
    http: reqwest::Client,
    token: String,
}

impl TeamCityClient {
    /// Build a client that attaches the bearer token to every request.
    pub fn new(token: &str) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            token: token.to_string(),
        })
    }

    /// Start an authenticated GET request.
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http.get(url).bearer_auth(&self.token)
    }
}

/// Build the archived-artifacts download URL for one platform build.
///
/// Joins host, REST path and subfolder while normalizing redundant slashes,
/// so config values like `"win/"` or hosts with a trailing `/` work as-is.
pub fn artifact_archive_url(host: &Url, build_id: &str, artifacts_subfolder: &str) -> String {
    let mut url = host.as_str().trim_end_matches('/').to_string();
    url.push_str("/app/rest/builds/id:");
    url.push_str(build_id);
    url.push_str("/artifacts/archived");
    for segment in artifacts_subfolder.split('/').filter(|s| !s.is_empty()) {
        url.push('/');
        url.push_str(segment);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(raw: &str) -> Url {
        Url::parse(raw).expect("host url")
    }

    #[test]
    fn url_joins_host_build_and_subfolder() {
        let url = artifact_archive_url(&host("https://ci.example.com"), "12345", "win");
        assert_eq!(
            url,
            "https://ci.example.com/app/rest/builds/id:12345/artifacts/archived/win"
        );
    }

    #[test]
    fn redundant_slashes_are_normalized() {
        let url = artifact_archive_url(&host("https://ci.example.com/"), "99", "/bundles/win/");
        assert_eq!(
            url,
            "https://ci.example.com/app/rest/builds/id:99/artifacts/archived/bundles/win"
        );
    }

    #[test]
    fn empty_subfolder_targets_the_artifacts_root() {
        let url = artifact_archive_url(&host("https://ci.example.com"), "7", "");
        assert_eq!(
            url,
            "https://ci.example.com/app/rest/builds/id:7/artifacts/archived"
        );
    }
}
