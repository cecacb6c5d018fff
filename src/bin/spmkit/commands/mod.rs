//! Command implementations

pub mod build;
pub mod check;
pub mod clean;
pub mod describe;
pub mod sources;
pub mod toolchain;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use spmkit::util::{GlobalContext, Shell};
use spmkit::{Package, SwiftToolchain};

/// State shared by every command.
pub struct Session {
    pub shell: Arc<Shell>,
    pub ctx: GlobalContext,
    swift: Option<PathBuf>,
}

impl Session {
    pub fn new(shell: Arc<Shell>, swift: Option<PathBuf>) -> Result<Self> {
        Ok(Session {
            shell,
            ctx: GlobalContext::new()?,
            swift,
        })
    }

    pub fn toolchain(&self) -> Result<SwiftToolchain> {
        self.ctx.toolchain(self.swift.as_deref())
    }

    /// Check for `Package.swift`, then describe the package.
    pub fn load_package(&self, toolchain: &SwiftToolchain) -> Result<Package> {
        self.ctx.find_manifest()?;
        let package = Package::load(toolchain)?;
        Ok(package)
    }
}
