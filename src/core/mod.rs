//! Core data structures for spmkit.
//!
//! - Packages and targets decoded from `swift package describe`
//! - Support detection for directories containing `Package.swift`

pub mod package;
pub mod target;
pub mod workspace;

pub use package::{Package, Product};
pub use target::{ModuleType, Target, TargetType};
pub use workspace::{find_manifest, is_supported, is_supported_in, ManifestError, MANIFEST_NAME};
