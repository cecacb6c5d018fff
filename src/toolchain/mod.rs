//! Swift toolchain access.
//!
//! Every operation that talks to `swift` goes through a [`SwiftToolchain`],
//! which owns the executable path, the detected version and an injected
//! [`CommandRunner`]. Tests swap the runner for a scripted fake.

mod version;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use version::SwiftVersion;

pub use crate::util::process::{ProcessError, StderrMode};
use crate::errors::SpmError;
use crate::util::process::{find_executable, ProcessBuilder};

/// Name of the Swift driver executable.
pub const SWIFT_EXECUTABLE: &str = "swift";

/// First Swift release that discovers XCTest cases on Linux without help.
///
/// Older toolchains need `--enable-test-discovery` on every build.
pub const TEST_DISCOVERY_DEFAULT_SINCE: SwiftVersion = SwiftVersion::new(5, 4, 0);

/// Flag that turns on test discovery for toolchains older than
/// [`TEST_DISCOVERY_DEFAULT_SINCE`].
pub const ENABLE_TEST_DISCOVERY_FLAG: &str = "--enable-test-discovery";

/// Runs an external program to completion.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, returning captured stdout.
    ///
    /// A non-zero exit status is an error.
    fn run(
        &self,
        program: &Path,
        args: &[String],
        stderr: StderrMode,
    ) -> Result<Vec<u8>, ProcessError>;
}

/// [`CommandRunner`] that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &Path,
        args: &[String],
        stderr: StderrMode,
    ) -> Result<Vec<u8>, ProcessError> {
        let pb = ProcessBuilder::new(program).args(args).stderr(stderr);
        tracing::debug!("Running `{}`", pb.display_command());
        pb.exec_and_check()
    }
}

/// A Swift toolchain: executable, version and the runner used to invoke it.
#[derive(Clone)]
pub struct SwiftToolchain {
    executable: PathBuf,
    version: SwiftVersion,
    runner: Arc<dyn CommandRunner>,
}

impl SwiftToolchain {
    /// Create a toolchain with a known version.
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        executable: impl Into<PathBuf>,
        version: SwiftVersion,
    ) -> Self {
        SwiftToolchain {
            executable: executable.into(),
            version,
            runner,
        }
    }

    /// Query `<executable> --version` and build a toolchain from the answer.
    ///
    /// The version is read once here and kept for the toolchain's lifetime.
    pub fn detect(
        runner: Arc<dyn CommandRunner>,
        executable: impl Into<PathBuf>,
    ) -> Result<Self, SpmError> {
        let executable = executable.into();
        let stdout = runner.run(&executable, &["--version".to_string()], StderrMode::Suppress)?;
        let version = SwiftVersion::parse_output(&String::from_utf8_lossy(&stdout))?;

        tracing::debug!(
            "Detected Swift {} at {}",
            version,
            executable.display()
        );

        Ok(Self::new(runner, executable, version))
    }

    /// Locate `swift` on PATH, falling back to the bare name.
    pub fn default_executable() -> PathBuf {
        find_executable(SWIFT_EXECUTABLE).unwrap_or_else(|| PathBuf::from(SWIFT_EXECUTABLE))
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn version(&self) -> &SwiftVersion {
        &self.version
    }

    /// Whether builds need [`ENABLE_TEST_DISCOVERY_FLAG`].
    pub fn needs_test_discovery_flag(&self) -> bool {
        self.version.needs_test_discovery_flag()
    }

    /// Run `swift` with the given arguments.
    pub fn run(&self, args: &[String], stderr: StderrMode) -> Result<Vec<u8>, ProcessError> {
        self.runner.run(&self.executable, args, stderr)
    }
}

impl fmt::Debug for SwiftToolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwiftToolchain")
            .field("executable", &self.executable)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
