//! pipget - PyPI distribution file downloader library
//!
//! This library provides the core pipeline:
//! - Package spec parsing (name + version constraint)
//! - Release selection against the package index
//! - File filtering by extension and substring
//! - Sequential best-effort downloads

pub mod cli;
pub mod domain;
pub mod error;
pub mod filter;
pub mod output;
pub mod progress;
pub mod registry;
pub mod select;
pub mod spec;
pub mod transfer;
