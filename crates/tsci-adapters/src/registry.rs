//! npm registry metadata client.
//!
//! Implements the `VersionLookup` port with a blocking HTTP GET of the
//! package metadata document. The latest published version is the
//! `dist-tags.latest` field of the response.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use tsci_core::{
    application::ports::VersionLookup,
    error::{InitError, InitResult},
};

/// Metadata endpoint for the published CLI package.
pub const DEFAULT_METADATA_URL: &str = "https://registry.npmjs.org/@tscircuit/cli";

/// A hung registry must not hang the whole command.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct PackageMetadata {
    #[serde(rename = "dist-tags")]
    dist_tags: DistTags,
}

#[derive(Debug, Deserialize)]
struct DistTags {
    latest: String,
}

/// Registry metadata client.
#[derive(Debug, Clone)]
pub struct NpmRegistry {
    url: String,
}

impl NpmRegistry {
    /// Create a client for the given metadata URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for NpmRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_METADATA_URL)
    }
}

impl VersionLookup for NpmRegistry {
    fn latest(&self) -> InitResult<String> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("tsci/", env!("CARGO_PKG_VERSION")))
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(|e| unavailable(format!("failed to build HTTP client: {e}")))?;

        debug!(url = %self.url, "fetching package metadata");

        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| unavailable(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("registry answered {status}")));
        }

        let metadata: PackageMetadata = response
            .json()
            .map_err(|e| unavailable(format!("malformed metadata: {e}")))?;

        Ok(metadata.dist_tags.latest)
    }
}

fn unavailable(reason: String) -> InitError {
    InitError::RegistryUnavailable { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_payload_parses_dist_tags() {
        let body = r#"{
            "name": "@tscircuit/cli",
            "dist-tags": { "latest": "0.4.12", "next": "0.5.0-beta.1" },
            "versions": {}
        }"#;
        let metadata: PackageMetadata = serde_json::from_str(body).unwrap();
        assert_eq!(metadata.dist_tags.latest, "0.4.12");
    }

    #[test]
    fn payload_without_dist_tags_is_an_error() {
        let body = r#"{ "name": "@tscircuit/cli" }"#;
        assert!(serde_json::from_str::<PackageMetadata>(body).is_err());
    }

    #[test]
    fn unreachable_registry_maps_to_registry_unavailable() {
        // Port 9 (discard) is unassigned on loopback; connect fails fast.
        let registry = NpmRegistry::new("http://127.0.0.1:9/@tscircuit/cli");
        let err = registry.latest().unwrap_err();
        assert!(matches!(err, InitError::RegistryUnavailable { .. }));
    }
}
