//! Release and distribution file types
//!
//! A `PackageIndex` is the full picture the metadata endpoint returns for one
//! package: every published release with its distribution files. It is built
//! once per invocation and never mutated afterwards.

use crate::domain::ReleaseVersion;

/// Known file extensions, longest suffix first so `.tar.gz` wins over `.gz`
const KNOWN_EXTENSIONS: [&str; 9] = [
    "tar.gz", "tar.bz2", "tar.xz", "whl", "zip", "tgz", "egg", "exe", "gz",
];

/// One downloadable distribution artifact of a release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseFile {
    /// File name as listed by the index (e.g. `flask-2.0.0-py3-none-any.whl`)
    pub filename: String,
    /// Download URL
    pub url: String,
    /// Inferred extension, without the leading dot (e.g. `whl`, `tar.gz`)
    pub extension: Option<String>,
}

impl ReleaseFile {
    /// Creates a new ReleaseFile, inferring the extension from the file name
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        let filename = filename.into();
        let extension = infer_extension(&filename);
        Self {
            filename,
            url: url.into(),
            extension,
        }
    }
}

/// Infer a file extension by longest known suffix match
pub fn infer_extension(filename: &str) -> Option<String> {
    let lower = filename.to_lowercase();
    KNOWN_EXTENSIONS
        .iter()
        .find(|ext| lower.ends_with(&format!(".{}", ext)))
        .map(|ext| ext.to_string())
}

/// One published release: a version and its distribution files, in the order
/// the index listed them
#[derive(Debug, Clone)]
pub struct Release {
    /// The release version
    pub version: ReleaseVersion,
    /// Distribution files belonging to this version
    pub files: Vec<ReleaseFile>,
}

impl Release {
    /// Creates a new Release
    pub fn new(version: ReleaseVersion, files: Vec<ReleaseFile>) -> Self {
        Self { version, files }
    }
}

/// All releases the index knows for one package, sorted ascending by version
#[derive(Debug, Clone)]
pub struct PackageIndex {
    /// The package name as queried
    pub package: String,
    releases: Vec<Release>,
}

impl PackageIndex {
    /// Build an index from unordered (version, files) pairs.
    ///
    /// Releases are sorted ascending by version. If two raw version strings
    /// normalize to the same version, the later pair replaces the earlier.
    pub fn new(package: impl Into<String>, pairs: Vec<(ReleaseVersion, Vec<ReleaseFile>)>) -> Self {
        let mut releases: Vec<Release> = Vec::with_capacity(pairs.len());
        for (version, files) in pairs {
            if let Some(existing) = releases.iter_mut().find(|r| r.version == version) {
                *existing = Release::new(version, files);
            } else {
                releases.push(Release::new(version, files));
            }
        }
        releases.sort_by(|a, b| a.version.cmp(&b.version));
        Self {
            package: package.into(),
            releases,
        }
    }

    /// All releases, ascending by version
    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    /// True when the index has no releases at all
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}
