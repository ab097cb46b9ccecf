//! Package index access
//!
//! This module provides:
//! - HTTP client shared foundation
//! - PyPI JSON API adapter

mod client;
mod pypi;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use pypi::{PyPIAdapter, DEFAULT_INDEX_URL};
