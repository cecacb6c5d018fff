//! Package - the decoded answer of `swift package describe`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::Target;
use crate::errors::SpmError;
use crate::toolchain::{StderrMode, SwiftToolchain};

const DESCRIBE_ARGS: [&str; 4] = ["package", "describe", "--type", "json"];
const DESCRIBE_OPERATION: &str = "swift package describe";

/// A product vended by the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Product {
    pub name: String,

    /// Names of the targets that make up the product
    #[serde(default)]
    pub targets: Vec<String>,
}

/// A Swift package and its targets.
///
/// Identity is the package path alone: two descriptions of the same
/// directory are the same package.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Package {
    name: String,

    path: PathBuf,

    targets: Vec<Target>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    products: Vec<Product>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    tools_version: Option<String>,
}

impl Package {
    /// Create a package from already-known parts.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, targets: Vec<Target>) -> Self {
        Package {
            name: name.into(),
            path: path.into(),
            targets,
            products: Vec::new(),
            tools_version: None,
        }
    }

    /// Describe the package in the current directory.
    ///
    /// Runs `swift package describe --type json` once, with its stderr
    /// discarded so that only JSON is captured.
    pub fn load(toolchain: &SwiftToolchain) -> Result<Self, SpmError> {
        let args: Vec<String> = DESCRIBE_ARGS.iter().map(|s| s.to_string()).collect();
        let stdout = toolchain.run(&args, StderrMode::Suppress)?;

        let json = String::from_utf8(stdout).map_err(|_| SpmError::PackageDescription {
            message: "Failed to read swift package description.".to_string(),
        })?;

        let package = Self::from_json(&json)?;
        tracing::debug!(
            "Described package `{}` with {} targets",
            package.name,
            package.targets.len()
        );
        Ok(package)
    }

    /// Decode the JSON printed by `swift package describe --type json`.
    pub fn from_json(json: &str) -> Result<Self, SpmError> {
        serde_json::from_str(json).map_err(|source| SpmError::Decode {
            operation: DESCRIBE_OPERATION,
            source,
        })
    }

    /// Remove build artifacts with `swift package clean`.
    pub fn clean(&self, toolchain: &SwiftToolchain) -> Result<(), SpmError> {
        let args: Vec<String> = ["package", "clean"].iter().map(|s| s.to_string()).collect();
        tracing::debug!("Cleaning package `{}`", self.name);

        toolchain
            .run(&args, StderrMode::Inherit)
            .map_err(|source| SpmError::Clean { source })?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Package root directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All targets, in the order the toolchain reported them.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The `swift-tools-version` of the manifest, if reported.
    pub fn tools_version(&self) -> Option<&str> {
        self.tools_version.as_deref()
    }

    /// Targets compiled from Swift sources, in declaration order.
    pub fn swift_targets(&self) -> Vec<&Target> {
        self.targets
            .iter()
            .filter(|t| t.module_type().is_swift())
            .collect()
    }

    /// Get a target by name.
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name() == name)
    }

    /// Resolve target names, preserving request order.
    ///
    /// An empty request selects every Swift target.
    pub fn select_targets<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&Target>, SpmError> {
        if names.is_empty() {
            return Ok(self.swift_targets());
        }

        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.target(name).ok_or_else(|| SpmError::UnknownTarget {
                    name: name.to_string(),
                    available: self.targets.iter().map(|t| t.name().to_string()).collect(),
                })
            })
            .collect()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.path.display())
    }
}

impl PartialEq for Package {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Package {}

impl Hash for Package {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}
