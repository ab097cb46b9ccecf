//! Core domain models for pipget
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - Release version type with PyPI-style normalization
//! - Version constraint (operator + version)
//! - Release, distribution file and package index structures

mod constraint;
mod release;
mod version;

pub use constraint::{CompareOp, VersionConstraint};
pub use release::{infer_extension, PackageIndex, Release, ReleaseFile};
pub use version::ReleaseVersion;
