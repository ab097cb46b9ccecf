//! CLI argument parsing module for pipget

use clap::Parser;
use std::path::PathBuf;

/// Download distribution files for a PyPI package
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pipget",
    version,
    about = "Download distribution files for a PyPI package by version constraint"
)]
pub struct CliArgs {
    /// Package name, optionally with an embedded version constraint
    /// (e.g. 'flask', 'flask>2', 'flask==2.0.0')
    pub package_spec: String,

    /// Version condition (e.g. '==1.0.0' or '>=1.0'), used when not embedded
    /// in the package spec
    pub version_condition: Option<String>,

    /// Directory to save the downloaded files
    #[arg(long, default_value = ".")]
    pub dest: PathBuf,

    /// Show matching file names and versions only, without downloading
    #[arg(short = 's', long)]
    pub show_only: bool,

    /// Comma separated list of substrings to filter file names (e.g. 'arm,x86')
    #[arg(long, value_delimiter = ',')]
    pub filter: Vec<String>,

    /// Only act on specific file extensions
    #[arg(long, value_delimiter = ',', default_value = "whl,zip,tgz,gz")]
    pub ext: Vec<String>,

    /// Select only the latest matching version
    #[arg(short = 'l', long)]
    pub latest: bool,

    /// Package index metadata endpoint
    #[arg(long, default_value = crate::registry::DEFAULT_INDEX_URL)]
    pub index_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Enable quiet mode - no progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_minimal_args() {
        let args = CliArgs::parse_from(["pipget", "flask"]);
        assert_eq!(args.package_spec, "flask");
        assert!(args.version_condition.is_none());
        assert_eq!(args.dest, PathBuf::from("."));
        assert!(!args.show_only);
        assert!(args.filter.is_empty());
        assert_eq!(args.ext, vec!["whl", "zip", "tgz", "gz"]);
        assert!(!args.latest);
        assert_eq!(args.index_url, "https://pypi.org/pypi");
        assert_eq!(args.timeout, 30);
        assert!(!args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn test_package_spec_required() {
        assert!(CliArgs::try_parse_from(["pipget"]).is_err());
    }

    #[test]
    fn test_embedded_constraint_accepted_verbatim() {
        let args = CliArgs::parse_from(["pipget", "flask>=2.0.0"]);
        assert_eq!(args.package_spec, "flask>=2.0.0");
    }

    #[test]
    fn test_separate_version_condition() {
        let args = CliArgs::parse_from(["pipget", "flask", ">=2.0.0"]);
        assert_eq!(args.package_spec, "flask");
        assert_eq!(args.version_condition.as_deref(), Some(">=2.0.0"));
    }

    #[test]
    fn test_dest() {
        let args = CliArgs::parse_from(["pipget", "flask", "--dest", "/tmp/pkgs"]);
        assert_eq!(args.dest, PathBuf::from("/tmp/pkgs"));
    }

    #[test]
    fn test_show_only_flags() {
        let args = CliArgs::parse_from(["pipget", "flask", "-s"]);
        assert!(args.show_only);

        let args = CliArgs::parse_from(["pipget", "flask", "--show-only"]);
        assert!(args.show_only);
    }

    #[test]
    fn test_filter_comma_separated() {
        let args = CliArgs::parse_from(["pipget", "flask", "--filter", "arm,x86"]);
        assert_eq!(args.filter, vec!["arm", "x86"]);
    }

    #[test]
    fn test_ext_comma_separated() {
        let args = CliArgs::parse_from(["pipget", "flask", "--ext", "whl"]);
        assert_eq!(args.ext, vec!["whl"]);

        let args = CliArgs::parse_from(["pipget", "flask", "--ext", "whl,tar.gz"]);
        assert_eq!(args.ext, vec!["whl", "tar.gz"]);
    }

    #[test]
    fn test_latest_flags() {
        let args = CliArgs::parse_from(["pipget", "flask", "-l"]);
        assert!(args.latest);

        let args = CliArgs::parse_from(["pipget", "flask", "--latest"]);
        assert!(args.latest);
    }

    #[test]
    fn test_index_url_override() {
        let args = CliArgs::parse_from(["pipget", "flask", "--index-url", "http://localhost:1234"]);
        assert_eq!(args.index_url, "http://localhost:1234");
    }

    #[test]
    fn test_timeout() {
        let args = CliArgs::parse_from(["pipget", "flask", "--timeout", "5"]);
        assert_eq!(args.timeout, 5);
    }

    #[test]
    fn test_quiet_flags() {
        let args = CliArgs::parse_from(["pipget", "flask", "-q"]);
        assert!(args.quiet);

        let args = CliArgs::parse_from(["pipget", "flask", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from([
            "pipget",
            "flask>=2.0.0",
            "--dest",
            "/tmp/wheels",
            "-s",
            "-l",
            "--filter",
            "py3",
            "--ext",
            "whl",
        ]);
        assert_eq!(args.package_spec, "flask>=2.0.0");
        assert_eq!(args.dest, PathBuf::from("/tmp/wheels"));
        assert!(args.show_only);
        assert!(args.latest);
        assert_eq!(args.filter, vec!["py3"]);
        assert_eq!(args.ext, vec!["whl"]);
    }
}
