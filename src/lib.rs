//! spmkit - introspection and build driver for Swift packages
//!
//! This crate asks the Swift package manager to describe a package, decodes
//! the answer into a small model of packages and targets, and drives
//! `swift build` / `swift package clean` for selected targets.

pub mod core;
pub mod errors;
pub mod toolchain;
pub mod util;

/// Test utilities and mocks for spmkit unit tests.
///
/// Only compiled for tests. Provides a scripted [`toolchain::CommandRunner`]
/// so that no real `swift` executable is needed.
#[cfg(test)]
pub mod test_support;

pub use core::{
    is_supported, is_supported_in, ModuleType, Package, Product, Target, TargetType,
    MANIFEST_NAME,
};
pub use errors::SpmError;
pub use toolchain::{CommandRunner, StderrMode, SwiftToolchain, SwiftVersion, SystemRunner};
