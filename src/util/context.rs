//! Global context for spmkit operations.
//!
//! Provides centralized access to the working directory, configuration and
//! the Swift toolchain used by commands.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::workspace::{find_manifest, ManifestError};
use crate::toolchain::{CommandRunner, SwiftToolchain, SwiftVersion, SystemRunner};
use crate::util::config::{global_config_path, load_config, project_config_path, Config};

/// Global context for spmkit operations.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Merged global and project configuration
    config: Config,
}

impl GlobalContext {
    /// Create a new global context rooted at the process cwd.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a context with a specific cwd.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        let config = load_config(global_config_path().as_deref(), &project_config_path(&cwd));
        GlobalContext { cwd, config }
    }

    /// Replace the loaded configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Find `Package.swift` in the cwd.
    pub fn find_manifest(&self) -> Result<PathBuf, ManifestError> {
        find_manifest(&self.cwd)
    }

    /// Resolve the swift executable.
    ///
    /// Order: explicit override, then `[swift] path`, then `swift` on PATH.
    pub fn swift_executable(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.config.swift.path.clone())
            .unwrap_or_else(SwiftToolchain::default_executable)
    }

    /// Build the toolchain used by commands.
    ///
    /// A `[swift] version` in config skips running `swift --version`.
    pub fn toolchain(&self, explicit: Option<&Path>) -> Result<SwiftToolchain> {
        self.toolchain_with_runner(Arc::new(SystemRunner), explicit)
    }

    /// Same as [`GlobalContext::toolchain`] but with a caller-supplied runner.
    pub fn toolchain_with_runner(
        &self,
        runner: Arc<dyn CommandRunner>,
        explicit: Option<&Path>,
    ) -> Result<SwiftToolchain> {
        let executable = self.swift_executable(explicit);

        if let Some(ref version) = self.config.swift.version {
            let version: SwiftVersion = version
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("invalid `swift.version` in config")?;
            tracing::debug!("Using configured Swift version {}", version);
            return Ok(SwiftToolchain::new(runner, executable, version));
        }

        SwiftToolchain::detect(runner, &executable).with_context(|| {
            format!(
                "failed to determine Swift version using `{}`",
                executable.display()
            )
        })
    }
}
