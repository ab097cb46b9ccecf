//! Application error types using thiserror
//!
//! Error hierarchy:
//! - SpecError: Malformed package/version arguments
//! - RegistryError: Issues with the package index endpoint
//! - SelectionError: No release satisfies the requested constraint
//! - TransferError: An individual file download failed

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Package spec related errors
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// Package index related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Version selection related errors
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Errors related to the package/version arguments
#[derive(Error, Debug)]
pub enum SpecError {
    /// Malformed package spec or version condition
    #[error("invalid package spec '{input}': {message}")]
    InvalidSpec { input: String, message: String },
}

impl SpecError {
    /// Creates a new InvalidSpec error
    pub fn invalid_spec(input: impl Into<String>, message: impl Into<String>) -> Self {
        SpecError::InvalidSpec {
            input: input.into(),
            message: message.into(),
        }
    }
}

/// Errors related to the package index endpoint
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in the index
    #[error("package '{package}' not found on {registry}")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Invalid response from the index
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}

/// Errors related to release selection
#[derive(Error, Debug)]
pub enum SelectionError {
    /// The index has releases, but none satisfy the constraint
    #[error("no release of '{package}' matches {requested}")]
    NoMatchingVersion { package: String, requested: String },
}

impl SelectionError {
    /// Creates a new NoMatchingVersion error
    pub fn no_matching_version(package: impl Into<String>, requested: impl Into<String>) -> Self {
        SelectionError::NoMatchingVersion {
            package: package.into(),
            requested: requested.into(),
        }
    }
}

/// Errors for individual file transfers; collected, not fatal per file
#[derive(Error, Debug)]
pub enum TransferError {
    /// Download request failed
    #[error("failed to download {filename}: {message}")]
    Request { filename: String, message: String },

    /// Writing the destination file failed
    #[error("failed to write {filename}: {source}")]
    Write {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

impl TransferError {
    /// Creates a new Request error
    pub fn request(filename: impl Into<String>, message: impl Into<String>) -> Self {
        TransferError::Request {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Creates a new Write error
    pub fn write(filename: impl Into<String>, source: std::io::Error) -> Self {
        TransferError::Write {
            filename: filename.into(),
            source,
        }
    }
}
