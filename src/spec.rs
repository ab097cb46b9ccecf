//! Package spec parsing
//!
//! Handles argument formats:
//! - Bare name: `flask`
//! - Embedded constraint: `flask>=2.0.0`, `flask==1.2.3`, `flask>2`
//! - Separate condition: `flask` + `>=2.0.0`
//!
//! Supplying both an embedded constraint and a separate condition is
//! ambiguous and rejected.

use crate::domain::{CompareOp, ReleaseVersion, VersionConstraint};
use crate::error::SpecError;
use regex::Regex;
use std::sync::LazyLock;

static PACKAGE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap());

/// Parsed package spec: the package name and an optional version constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    /// The package name
    pub name: String,
    /// The version constraint, if any
    pub constraint: Option<VersionConstraint>,
}

/// Parse the package spec argument, together with the optional separate
/// version condition argument.
pub fn parse_package_spec(
    raw: &str,
    separate_condition: Option<&str>,
) -> Result<PackageSpec, SpecError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SpecError::invalid_spec(raw, "empty package spec"));
    }

    // Find the first operator token; longest tokens are tried first so
    // `>=` is not split as `>` + `=`.
    let embedded = find_operator(raw);

    match (embedded, separate_condition) {
        (Some(_), Some(condition)) => Err(SpecError::invalid_spec(
            format!("{} {}", raw, condition),
            "version given both in the package spec and as a separate argument",
        )),
        (Some((at, op)), None) => {
            let name = &raw[..at];
            let version = &raw[at + op.token().len()..];
            Ok(PackageSpec {
                name: parse_name(raw, name)?,
                constraint: Some(parse_constraint_parts(raw, op, version)?),
            })
        }
        (None, Some(condition)) => Ok(PackageSpec {
            name: parse_name(raw, raw)?,
            constraint: Some(parse_condition(condition)?),
        }),
        (None, None) => Ok(PackageSpec {
            name: parse_name(raw, raw)?,
            constraint: None,
        }),
    }
}

/// Parse a standalone version condition like `>=2.0.0`
pub fn parse_condition(condition: &str) -> Result<VersionConstraint, SpecError> {
    let condition = condition.trim();
    match find_operator(condition) {
        Some((0, op)) => {
            let version = &condition[op.token().len()..];
            parse_constraint_parts(condition, op, version)
        }
        Some(_) => Err(SpecError::invalid_spec(
            condition,
            "version condition must start with an operator",
        )),
        None => Err(SpecError::invalid_spec(
            condition,
            "missing comparison operator (expected ==, >=, <=, !=, > or <)",
        )),
    }
}

/// Locate the first operator token in the input
fn find_operator(input: &str) -> Option<(usize, CompareOp)> {
    let mut first: Option<(usize, CompareOp)> = None;
    for (token, op) in CompareOp::TOKENS {
        if let Some(at) = input.find(token) {
            match first {
                // Longest token wins at the same position (>= over >)
                Some((best, _)) if at >= best => {}
                _ => first = Some((at, op)),
            }
        }
    }
    first
}

fn parse_name(input: &str, name: &str) -> Result<String, SpecError> {
    if name.is_empty() {
        return Err(SpecError::invalid_spec(input, "empty package name"));
    }
    if !PACKAGE_NAME_RE.is_match(name) {
        return Err(SpecError::invalid_spec(
            input,
            format!("invalid package name '{}'", name),
        ));
    }
    Ok(name.to_string())
}

fn parse_constraint_parts(
    input: &str,
    op: CompareOp,
    version: &str,
) -> Result<VersionConstraint, SpecError> {
    if version.is_empty() {
        return Err(SpecError::invalid_spec(
            input,
            "missing version after operator",
        ));
    }
    let version = ReleaseVersion::parse(version).ok_or_else(|| {
        SpecError::invalid_spec(input, format!("invalid version '{}'", version))
    })?;
    Ok(VersionConstraint::new(op, version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name() {
        let spec = parse_package_spec("flask", None).unwrap();
        assert_eq!(spec.name, "flask");
        assert!(spec.constraint.is_none());
    }

    #[test]
    fn test_embedded_constraint() {
        let spec = parse_package_spec("flask>=2.0.0", None).unwrap();
        assert_eq!(spec.name, "flask");
        let constraint = spec.constraint.unwrap();
        assert_eq!(constraint.op, CompareOp::GreaterOrEqual);
        assert_eq!(constraint.version.raw(), "2.0.0");
    }

    #[test]
    fn test_embedded_exact() {
        let spec = parse_package_spec("flask==1.2.3", None).unwrap();
        assert_eq!(spec.constraint.unwrap().op, CompareOp::Equal);
    }

    #[test]
    fn test_embedded_not_equal() {
        let spec = parse_package_spec("flask!=1.2.3", None).unwrap();
        assert_eq!(spec.constraint.unwrap().op, CompareOp::NotEqual);
    }

    #[test]
    fn test_embedded_partial_version_padded() {
        let spec = parse_package_spec("flask>2", None).unwrap();
        let constraint = spec.constraint.unwrap();
        assert_eq!(constraint.op, CompareOp::Greater);
        assert_eq!(
            *constraint.version.normalized(),
            semver::Version::new(2, 0, 0)
        );
    }

    #[test]
    fn test_separate_condition() {
        let spec = parse_package_spec("flask", Some(">=2.0.0")).unwrap();
        assert_eq!(spec.name, "flask");
        let constraint = spec.constraint.unwrap();
        assert_eq!(constraint.op, CompareOp::GreaterOrEqual);
    }

    #[test]
    fn test_both_embedded_and_separate_rejected() {
        let err = parse_package_spec("flask>=2.0.0", Some("==1.0.0")).unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("both"));
    }

    #[test]
    fn test_both_rejected_even_when_identical() {
        assert!(parse_package_spec("flask>=2.0.0", Some(">=2.0.0")).is_err());
    }

    #[test]
    fn test_empty_spec() {
        assert!(parse_package_spec("", None).is_err());
        assert!(parse_package_spec("   ", None).is_err());
    }

    #[test]
    fn test_empty_name_before_operator() {
        assert!(parse_package_spec(">=2.0.0", None).is_err());
    }

    #[test]
    fn test_missing_version_after_operator() {
        let err = parse_package_spec("flask>=", None).unwrap_err();
        assert!(format!("{}", err).contains("missing version"));
    }

    #[test]
    fn test_invalid_version() {
        assert!(parse_package_spec("flask>=banana", None).is_err());
        assert!(parse_package_spec("flask", Some(">=banana")).is_err());
    }

    #[test]
    fn test_invalid_package_name() {
        assert!(parse_package_spec("fla sk>=1.0", None).is_err());
    }

    #[test]
    fn test_names_with_separators() {
        assert_eq!(
            parse_package_spec("flask-restful", None).unwrap().name,
            "flask-restful"
        );
        assert_eq!(
            parse_package_spec("zope.interface>=5.0", None).unwrap().name,
            "zope.interface"
        );
        assert_eq!(
            parse_package_spec("typing_extensions", None).unwrap().name,
            "typing_extensions"
        );
    }

    #[test]
    fn test_prerelease_constraint_value() {
        let spec = parse_package_spec("flask==2.0.0rc1", None).unwrap();
        let constraint = spec.constraint.unwrap();
        assert!(constraint.version.is_prerelease());
    }

    #[test]
    fn test_condition_without_operator_rejected() {
        let err = parse_condition("2.0.0").unwrap_err();
        assert!(format!("{}", err).contains("missing comparison operator"));
    }

    #[test]
    fn test_condition_with_trailing_operator_rejected() {
        assert!(parse_condition("2.0.0>=").is_err());
    }

    #[test]
    fn test_operator_split_at_first_occurrence() {
        // >= must be recognized as one token, not > followed by =1.0
        let spec = parse_package_spec("pkg>=1.0", None).unwrap();
        let constraint = spec.constraint.unwrap();
        assert_eq!(constraint.op, CompareOp::GreaterOrEqual);
        assert_eq!(constraint.version.raw(), "1.0");
    }
}
