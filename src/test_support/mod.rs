//! Test utilities and mocks for spmkit unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use spmkit::test_support::{MockRunner, MockProcessOutput};
//!
//! let runner = Arc::new(MockRunner::new());
//! runner.expect("swift --version", MockProcessOutput::success("Swift version 5.5"));
//! let toolchain = SwiftToolchain::detect(runner.clone(), "swift")?;
//! assert_eq!(runner.calls(), vec!["swift --version"]);
//! ```

pub mod fixtures;

use std::path::Path;
use std::sync::{Arc, Mutex};

pub use fixtures::*;

use crate::core::Package;
use crate::toolchain::{CommandRunner, ProcessError, StderrMode, SwiftToolchain, SwiftVersion};

/// Scripted result of a mocked process.
#[derive(Debug, Clone)]
pub struct MockProcessOutput {
    /// Exit status code (0 = success).
    pub status: i32,
    /// Raw standard output.
    pub stdout: Vec<u8>,
}

impl MockProcessOutput {
    /// Create a successful output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        MockProcessOutput {
            status: 0,
            stdout: stdout.into().into_bytes(),
        }
    }

    /// Create a successful output with arbitrary (possibly non-UTF-8) bytes.
    pub fn bytes(stdout: impl Into<Vec<u8>>) -> Self {
        MockProcessOutput {
            status: 0,
            stdout: stdout.into(),
        }
    }

    /// Create a failure output with the given status code.
    pub fn failure(status: i32) -> Self {
        MockProcessOutput {
            status,
            stdout: Vec::new(),
        }
    }

    /// Create a failure output that also printed to stdout.
    pub fn failure_with_output(status: i32, stdout: impl Into<String>) -> Self {
        MockProcessOutput {
            status,
            stdout: stdout.into().into_bytes(),
        }
    }

    /// Check if the process succeeded.
    pub fn success_status(&self) -> bool {
        self.status == 0
    }
}

impl Default for MockProcessOutput {
    fn default() -> Self {
        MockProcessOutput::success("")
    }
}

/// Pattern for matching commands in [`MockRunner`].
#[derive(Debug, Clone)]
pub enum CommandPattern {
    /// Exact match on full command string.
    Exact(String),
    /// Match if command starts with prefix.
    StartsWith(String),
    /// Match using a regex pattern.
    Regex(String),
}

impl CommandPattern {
    /// Check if this pattern matches the given command.
    pub fn matches(&self, cmd: &str) -> bool {
        match self {
            CommandPattern::Exact(s) => cmd == s,
            CommandPattern::StartsWith(s) => cmd.starts_with(s),
            CommandPattern::Regex(pattern) => regex::Regex::new(pattern)
                .map(|re| re.is_match(cmd))
                .unwrap_or(false),
        }
    }
}

/// Expectation for a command execution.
#[derive(Debug, Clone)]
pub struct CommandExpectation {
    /// Pattern to match against commands.
    pub pattern: CommandPattern,
    /// Output to return when matched.
    pub output: MockProcessOutput,
    /// Number of times this expectation can be used (None = unlimited).
    pub times: Option<usize>,
    /// Number of times this expectation has been used.
    pub used: usize,
}

impl CommandExpectation {
    /// Create a new expectation.
    pub fn new(pattern: CommandPattern, output: MockProcessOutput) -> Self {
        CommandExpectation {
            pattern,
            output,
            times: None,
            used: 0,
        }
    }

    /// Set the number of times this expectation can be used.
    pub fn times(mut self, n: usize) -> Self {
        self.times = Some(n);
        self
    }

    /// Check if this expectation can still be used.
    pub fn available(&self) -> bool {
        match self.times {
            Some(n) => self.used < n,
            None => true,
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    expectations: Vec<CommandExpectation>,
    calls: Vec<(String, StderrMode)>,
}

/// Scripted [`CommandRunner`].
///
/// Records every invocation as `program arg1 arg2 ...` and answers from
/// the registered expectations. Unmatched commands fail to spawn.
#[derive(Debug, Default)]
pub struct MockRunner {
    state: Mutex<MockState>,
}

impl MockRunner {
    /// Create a new mock runner.
    pub fn new() -> Self {
        MockRunner::default()
    }

    /// Add an expectation for an exact command match.
    pub fn expect(&self, cmd: &str, output: MockProcessOutput) -> &Self {
        self.expect_pattern(CommandExpectation::new(
            CommandPattern::Exact(cmd.to_string()),
            output,
        ))
    }

    /// Add an expectation for a command starting with a prefix.
    pub fn expect_prefix(&self, prefix: &str, output: MockProcessOutput) -> &Self {
        self.expect_pattern(CommandExpectation::new(
            CommandPattern::StartsWith(prefix.to_string()),
            output,
        ))
    }

    /// Add a custom expectation.
    pub fn expect_pattern(&self, expectation: CommandExpectation) -> &Self {
        self.lock().expectations.push(expectation);
        self
    }

    /// Get all commands that were called.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.iter().map(|(cmd, _)| cmd.clone()).collect()
    }

    /// Get the stderr handling requested by each call.
    pub fn stderr_modes(&self) -> Vec<StderrMode> {
        self.lock().calls.iter().map(|(_, mode)| *mode).collect()
    }

    /// Verify that all expectations with a specific count were satisfied.
    pub fn verify(&self) -> Result<(), String> {
        for (i, exp) in self.lock().expectations.iter().enumerate() {
            if let Some(expected) = exp.times {
                if exp.used != expected {
                    return Err(format!(
                        "expectation {} was used {} times, expected {}",
                        i, exp.used, expected
                    ));
                }
            }
        }
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }
}

impl CommandRunner for MockRunner {
    fn run(
        &self,
        program: &Path,
        args: &[String],
        stderr: StderrMode,
    ) -> Result<Vec<u8>, ProcessError> {
        let mut parts = vec![program.display().to_string()];
        parts.extend(args.iter().cloned());
        let full_cmd = parts.join(" ");

        let mut state = self.lock();
        state.calls.push((full_cmd.clone(), stderr));

        let matched = state
            .expectations
            .iter_mut()
            .find(|exp| exp.pattern.matches(&full_cmd) && exp.available());

        let Some(exp) = matched else {
            return Err(ProcessError::Spawn {
                command: full_cmd,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "unexpected command"),
            });
        };
        exp.used += 1;

        if exp.output.success_status() {
            Ok(exp.output.stdout.clone())
        } else {
            Err(ProcessError::Failed {
                command: full_cmd,
                code: Some(exp.output.status),
                output: String::from_utf8_lossy(&exp.output.stdout).into_owned(),
            })
        }
    }
}

/// Toolchain of the given version backed by `runner`.
pub fn mock_toolchain(runner: &Arc<MockRunner>, version: &str) -> SwiftToolchain {
    let version: SwiftVersion = version.parse().unwrap();
    SwiftToolchain::new(runner.clone(), "swift", version)
}

/// Decode one of the fixtures, panicking on failure.
pub fn package_from_fixture(json: &str) -> Package {
    Package::from_json(json).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_runner_basic() {
        let runner = MockRunner::new();
        runner.expect("swift --version", MockProcessOutput::success("Swift version 5.5"));
        runner.expect_prefix("swift build", MockProcessOutput::failure(1));

        let out = runner
            .run(Path::new("swift"), &["--version".to_string()], StderrMode::Suppress)
            .unwrap();
        assert_eq!(out, b"Swift version 5.5");

        let err = runner
            .run(Path::new("swift"), &["build".to_string()], StderrMode::Inherit)
            .unwrap_err();
        assert!(matches!(err, ProcessError::Failed { code: Some(1), .. }));

        assert_eq!(runner.calls(), vec!["swift --version", "swift build"]);
        assert_eq!(
            runner.stderr_modes(),
            vec![StderrMode::Suppress, StderrMode::Inherit]
        );
    }

    #[test]
    fn test_command_patterns() {
        let cmd = "swift build --target Foo";

        assert!(CommandPattern::Exact(cmd.to_string()).matches(cmd));
        assert!(!CommandPattern::Exact("swift build".to_string()).matches(cmd));
        assert!(CommandPattern::StartsWith("swift build".to_string()).matches(cmd));
        assert!(!CommandPattern::StartsWith("build".to_string()).matches(cmd));
        assert!(CommandPattern::Regex(r"--target \w+$".to_string()).matches(cmd));
        assert!(!CommandPattern::Regex("(".to_string()).matches(cmd));
    }

    #[test]
    fn test_mock_runner_unexpected() {
        let runner = MockRunner::new();
        let err = runner
            .run(Path::new("swift"), &["test".to_string()], StderrMode::Inherit)
            .unwrap_err();
        assert!(matches!(err, ProcessError::Spawn { .. }));
    }

    #[test]
    fn test_mock_runner_times() {
        let runner = MockRunner::new();
        runner.expect_pattern(
            CommandExpectation::new(
                CommandPattern::Regex(r"^swift package \w+$".to_string()),
                MockProcessOutput::default(),
            )
            .times(1),
        );

        assert!(runner.verify().is_err());
        runner
            .run(
                Path::new("swift"),
                &["package".to_string(), "clean".to_string()],
                StderrMode::Inherit,
            )
            .unwrap();
        assert!(runner.verify().is_ok());
    }
}
