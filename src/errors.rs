//! Error types for package description, build and clean operations.

use thiserror::Error;

use crate::util::process::ProcessError;

/// Error raised by the package model and the operations that drive `swift`.
#[derive(Debug, Error)]
pub enum SpmError {
    /// The package description could not be read at all.
    #[error("{message}")]
    PackageDescription { message: String },

    /// The description was text, but not a package we understand.
    #[error("failed to decode output of `{operation}`")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The external tool failed or could not be started.
    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("failed to build target `{target}`")]
    Build {
        target: String,
        #[source]
        source: ProcessError,
    },

    #[error("failed to clean package")]
    Clean {
        #[source]
        source: ProcessError,
    },

    #[error("no target named `{name}` in package (available: {})", available.join(", "))]
    UnknownTarget {
        name: String,
        available: Vec<String>,
    },

    /// `swift --version` printed something without a recognisable version.
    #[error("could not determine Swift version from output: {output:?}")]
    Version { output: String },
}
