//! PyPI JSON API adapter
//!
//! Fetches package metadata from PyPI and builds the package index.
//! API endpoint: https://pypi.org/pypi/{package}/json

use crate::domain::{PackageIndex, ReleaseFile, ReleaseVersion};
use crate::error::RegistryError;
use crate::registry::HttpClient;
use indexmap::IndexMap;
use serde::Deserialize;

/// Default PyPI API base URL
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org/pypi";

/// Registry display name for error messages
const REGISTRY_NAME: &str = "PyPI";

/// PyPI adapter
pub struct PyPIAdapter {
    client: HttpClient,
    base_url: String,
}

/// PyPI package metadata response.
///
/// `releases` keeps the document order of the JSON object: when two raw
/// version strings normalize to the same release, the one listed later in
/// the source data must win, so iteration order has to be deterministic.
#[derive(Debug, Deserialize)]
struct PyPIResponse {
    /// Release files keyed by version string, in source order
    releases: IndexMap<String, Vec<FileInfo>>,
}

/// One distribution file entry in the metadata response
#[derive(Debug, Deserialize)]
struct FileInfo {
    filename: String,
    url: String,
}

impl PyPIAdapter {
    /// Create a new PyPI adapter against the default index
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, DEFAULT_INDEX_URL)
    }

    /// Create a new PyPI adapter against a custom index URL
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build the metadata URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}/json", self.base_url, package)
    }

    /// Fetch the package index for a package.
    ///
    /// Versions that cannot be normalized are skipped, the same way the index
    /// itself tolerates non-standard version strings.
    pub async fn fetch_index(&self, package: &str) -> Result<PackageIndex, RegistryError> {
        let url = self.build_url(package);
        let response: PyPIResponse = self.client.get_json(&url, package, REGISTRY_NAME).await?;

        let mut pairs = Vec::with_capacity(response.releases.len());
        for (version, files) in response.releases {
            let Some(version) = ReleaseVersion::parse(&version) else {
                continue;
            };
            let files = files
                .into_iter()
                .map(|f| ReleaseFile::new(f.filename, f.url))
                .collect();
            pairs.push((version, files));
        }

        let index = PackageIndex::new(package, pairs);
        if index.is_empty() {
            return Err(RegistryError::package_not_found(package, REGISTRY_NAME));
        }

        Ok(index)
    }
}
