//! Version constraint types
//!
//! A constraint is one comparison operator paired with a version value:
//! `==1.2.3`, `>=2.0`, `!=1.0.0a1`. A missing constraint means every release
//! is eligible.

use crate::domain::ReleaseVersion;
use std::fmt;

/// Comparison operator in a version constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>=`
    GreaterOrEqual,
    /// `>`
    Greater,
    /// `<=`
    LessOrEqual,
    /// `<`
    Less,
}

impl CompareOp {
    /// All operator tokens, longest first so `>=` is found before `>`
    pub const TOKENS: [(&'static str, CompareOp); 6] = [
        ("==", CompareOp::Equal),
        (">=", CompareOp::GreaterOrEqual),
        ("<=", CompareOp::LessOrEqual),
        ("!=", CompareOp::NotEqual),
        (">", CompareOp::Greater),
        ("<", CompareOp::Less),
    ];

    /// The operator token as written
    pub fn token(&self) -> &'static str {
        match self {
            CompareOp::Equal => "==",
            CompareOp::NotEqual => "!=",
            CompareOp::GreaterOrEqual => ">=",
            CompareOp::Greater => ">",
            CompareOp::LessOrEqual => "<=",
            CompareOp::Less => "<",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A single operator + version constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    /// The comparison operator
    pub op: CompareOp,
    /// The version value to compare against
    pub version: ReleaseVersion,
}

impl VersionConstraint {
    /// Creates a new constraint
    pub fn new(op: CompareOp, version: ReleaseVersion) -> Self {
        Self { op, version }
    }

    /// Check whether a release version satisfies this constraint
    pub fn matches(&self, candidate: &ReleaseVersion) -> bool {
        match self.op {
            CompareOp::Equal => candidate == &self.version,
            CompareOp::NotEqual => candidate != &self.version,
            CompareOp::GreaterOrEqual => candidate >= &self.version,
            CompareOp::Greater => candidate > &self.version,
            CompareOp::LessOrEqual => candidate <= &self.version,
            CompareOp::Less => candidate < &self.version,
        }
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.version)
    }
}
