//! File filtering
//!
//! Narrows the selected releases' file lists by extension allow-list and
//! substring filters. An empty result here is not an error; the caller
//! reports it as a notice.

use crate::domain::{Release, ReleaseFile, ReleaseVersion};

/// Default extension allow-list
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["whl", "zip", "tgz", "gz"];

/// A file that survived filtering, paired with its owning version
#[derive(Debug, Clone)]
pub struct SelectedFile {
    /// The distribution file
    pub file: ReleaseFile,
    /// The release it belongs to
    pub version: ReleaseVersion,
}

/// Filter configuration for distribution files
#[derive(Debug, Clone)]
pub struct FileFilter {
    /// Allowed extensions (without leading dot)
    extensions: Vec<String>,
    /// Substrings that must all appear in the file name
    substrings: Vec<String>,
}

impl FileFilter {
    /// Creates a filter with the default extension allow-list and no
    /// substring filters
    pub fn new() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            substrings: Vec::new(),
        }
    }

    /// Set the extension allow-list
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Set the substring filters
    pub fn with_substrings(mut self, substrings: Vec<String>) -> Self {
        self.substrings = substrings;
        self
    }

    /// Check whether a single file passes the filter
    pub fn matches(&self, file: &ReleaseFile) -> bool {
        self.extension_allowed(file) && self.substrings_match(&file.filename)
    }

    /// Apply the filter across releases, preserving file order within each
    /// release and release order across the input
    pub fn apply(&self, releases: &[&Release]) -> Vec<SelectedFile> {
        releases
            .iter()
            .flat_map(|release| {
                release
                    .files
                    .iter()
                    .filter(|file| self.matches(file))
                    .map(|file| SelectedFile {
                        file: file.clone(),
                        version: release.version.clone(),
                    })
            })
            .collect()
    }

    // An allow-list entry matches the inferred extension exactly or as its
    // trailing segment, so `tar.gz` passes an allow-list containing `gz`.
    fn extension_allowed(&self, file: &ReleaseFile) -> bool {
        let Some(ext) = &file.extension else {
            return false;
        };
        self.extensions
            .iter()
            .any(|allowed| ext == allowed || ext.ends_with(&format!(".{}", allowed)))
    }

    // Conjunctive, case-sensitive match against the raw file name
    fn substrings_match(&self, filename: &str) -> bool {
        self.substrings.iter().all(|s| filename.contains(s))
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> ReleaseFile {
        ReleaseFile::new(name, format!("https://example.com/{}", name))
    }

    fn release(version: &str, names: &[&str]) -> Release {
        Release::new(
            ReleaseVersion::parse(version).unwrap(),
            names.iter().map(|n| file(n)).collect(),
        )
    }

    #[test]
    fn test_default_extensions() {
        let filter = FileFilter::new();
        assert!(filter.matches(&file("flask-2.0.0-py3-none-any.whl")));
        assert!(filter.matches(&file("flask-2.0.0.zip")));
        assert!(filter.matches(&file("flask-2.0.0.tgz")));
        assert!(!filter.matches(&file("flask-2.0.0.exe")));
    }

    #[test]
    fn test_tar_gz_passes_gz_allow_list() {
        // tar.gz ends with gz, so the default allow-list keeps sdists
        let filter = FileFilter::new();
        assert!(filter.matches(&file("flask-2.0.0.tar.gz")));
    }

    #[test]
    fn test_custom_extensions() {
        let filter = FileFilter::new().with_extensions(vec!["whl".to_string()]);
        assert!(filter.matches(&file("flask-2.0.0-py3-none-any.whl")));
        assert!(!filter.matches(&file("flask-2.0.0.tar.gz")));
    }

    #[test]
    fn test_unknown_extension_never_passes() {
        let filter = FileFilter::new().with_extensions(vec!["rpm".to_string()]);
        assert!(!filter.matches(&file("flask-2.0.0.rpm")));
    }

    #[test]
    fn test_substring_single() {
        let filter = FileFilter::new().with_substrings(vec!["arm64".to_string()]);
        assert!(filter.matches(&file("flask-2.0.0-arm64.whl")));
        assert!(!filter.matches(&file("flask-2.0.0-x86.whl")));
    }

    #[test]
    fn test_substrings_are_conjunctive() {
        let filter = FileFilter::new()
            .with_substrings(vec!["arm".to_string(), "x86".to_string()]);
        // No single file name contains both
        assert!(!filter.matches(&file("flask-2.0.0-arm64.whl")));
        assert!(!filter.matches(&file("flask-2.0.0-x86.whl")));
        assert!(!filter.matches(&file("flask-2.0.0-universal.whl")));
        assert!(filter.matches(&file("flask-2.0.0-arm-x86.whl")));
    }

    #[test]
    fn test_substring_case_sensitive() {
        let filter = FileFilter::new().with_substrings(vec!["ARM".to_string()]);
        assert!(!filter.matches(&file("flask-2.0.0-arm64.whl")));
    }

    #[test]
    fn test_apply_preserves_order() {
        let r1 = release("1.0.0", &["pkg-1.0.0.whl", "pkg-1.0.0.tar.gz"]);
        let r2 = release("2.0.0", &["pkg-2.0.0.whl"]);
        let filter = FileFilter::new();

        let selected = filter.apply(&[&r1, &r2]);
        let names: Vec<&str> = selected.iter().map(|s| s.file.filename.as_str()).collect();
        assert_eq!(names, vec!["pkg-1.0.0.whl", "pkg-1.0.0.tar.gz", "pkg-2.0.0.whl"]);
        assert_eq!(selected[0].version.raw(), "1.0.0");
        assert_eq!(selected[2].version.raw(), "2.0.0");
    }

    #[test]
    fn test_apply_empty_result_is_not_error() {
        let r = release("1.0.0", &["pkg-1.0.0.exe"]);
        let filter = FileFilter::new();
        assert!(filter.apply(&[&r]).is_empty());
    }

    #[test]
    fn test_one_of_each_extension_plus_exe() {
        let r = release(
            "1.0.0",
            &[
                "pkg-1.0.0.whl",
                "pkg-1.0.0.zip",
                "pkg-1.0.0.tgz",
                "pkg-1.0.0.gz",
                "pkg-1.0.0.exe",
            ],
        );
        let filter = FileFilter::new();
        let selected = filter.apply(&[&r]);
        let names: Vec<&str> = selected.iter().map(|s| s.file.filename.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "pkg-1.0.0.whl",
                "pkg-1.0.0.zip",
                "pkg-1.0.0.tgz",
                "pkg-1.0.0.gz"
            ]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let r = release("1.0.0", &["a.whl", "b.tar.gz", "c.exe"]);
        let filter = FileFilter::new();

        let once = filter.apply(&[&r]);
        let again: Vec<&SelectedFile> = once.iter().filter(|s| filter.matches(&s.file)).collect();
        assert_eq!(once.len(), again.len());
    }
}
