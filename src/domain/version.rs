//! Release version type with PyPI-style normalization
//!
//! Handles version formats found on PyPI:
//! - Plain: `1.2.3`, `2.0`, `3`
//! - Long release segments: `1.2.3.4`
//! - Pre-release: `2.0.0a1`, `1.0b2`, `2.1.0rc1`, `1.0.0-alpha.1`
//! - Dev release: `1.0.0.dev3`
//!
//! All forms are normalized around a `semver::Version` so that ordering
//! follows semantic-versioning precedence: pre-releases sort below the
//! release they belong to (`2.0.0a1 < 2.0.0`). Release parts beyond the
//! third are kept separately and compared numerically, ahead of any
//! pre-release suffix (`1.2.3 < 1.2.3.4 < 1.2.4`).

use regex::Regex;
use semver::{Prerelease, Version};
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

// Release digits, optional pre-release label, optional trailing number.
// `1.2.3a1`, `1.2.3.a1`, `1.2.3-rc.1` and `1.2.3_beta2` all match.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)*)(?:[._-]?(a|b|c|rc|alpha|beta|pre|preview|dev)\.?(\d*))?$")
        .unwrap()
});

/// A published release version: the raw string as listed by the index plus
/// its normalized form used for all comparisons.
#[derive(Debug, Clone)]
pub struct ReleaseVersion {
    raw: String,
    normalized: Version,
    /// Release parts beyond major.minor.patch (`1.2.3.4` keeps `[4]`)
    extra: Vec<u64>,
}

impl ReleaseVersion {
    /// Parse a raw version string, returning None when it cannot be
    /// normalized (such entries are skipped by the index builder).
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

        let caps = VERSION_RE.captures(trimmed)?;

        let release = caps.get(1)?.as_str();
        let mut parts: Vec<u64> = release
            .split('.')
            .map(|p| p.parse::<u64>().ok())
            .collect::<Option<_>>()?;
        while parts.len() < 3 {
            parts.push(0);
        }
        let extra = parts.split_off(3);

        let mut normalized = Version::new(parts[0], parts[1], parts[2]);

        if let Some(label) = caps.get(2) {
            let number = caps
                .get(3)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .unwrap_or("0");
            let pre = match label.as_str() {
                "a" | "alpha" => format!("a.{}", number),
                "b" | "beta" => format!("b.{}", number),
                "c" | "rc" | "pre" | "preview" => format!("rc.{}", number),
                "dev" => format!("a.0.dev.{}", number),
                _ => return None,
            };
            normalized.pre = Prerelease::new(&pre).ok()?;
        }

        Some(Self {
            raw: raw.to_string(),
            normalized,
            extra,
        })
    }

    /// The version string exactly as the index listed it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized semver form (release parts beyond the third are not
    /// representable here and are carried separately)
    pub fn normalized(&self) -> &Version {
        &self.normalized
    }

    /// Whether this is a pre-release (alpha/beta/rc/dev)
    pub fn is_prerelease(&self) -> bool {
        !self.normalized.pre.is_empty()
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl PartialEq for ReleaseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ReleaseVersion {}

impl Ord for ReleaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let release = |v: &Self| (v.normalized.major, v.normalized.minor, v.normalized.patch);
        release(self)
            .cmp(&release(other))
            .then_with(|| cmp_extra(&self.extra, &other.extra))
            .then_with(|| cmp_pre(&self.normalized.pre, &other.normalized.pre))
    }
}

impl PartialOrd for ReleaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Missing parts count as zero, so `1.2.3` equals `1.2.3.0`
fn cmp_extra(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

// An empty pre-release segment is the release itself and outranks any
// pre-release; otherwise semver precedence applies
fn cmp_pre(a: &Prerelease, b: &Prerelease) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}
