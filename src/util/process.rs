//! Subprocess execution utilities.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

/// What to do with the child's standard error stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StderrMode {
    /// Discard it. Used when stdout carries machine-readable output.
    Suppress,
    /// Let it reach the user's terminal.
    Inherit,
}

/// Failure to run an external command.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to spawn `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed with exit code {}{}", display_code(*code), display_output(output))]
    Failed {
        command: String,
        code: Option<i32>,
        /// Captured stdout, which is where `swift build` prints compiler errors.
        output: String,
    },
}

fn display_code(code: Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

fn display_output(output: &str) -> String {
    let output = output.trim_end();
    if output.is_empty() {
        String::new()
    } else {
        format!("\n{}", output)
    }
}

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    stderr: StderrMode,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            stderr: StderrMode::Inherit,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Choose how stderr is handled.
    pub fn stderr(mut self, mode: StderrMode) -> Self {
        self.stderr = mode;
        self
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(match self.stderr {
            StderrMode::Suppress => Stdio::null(),
            StderrMode::Inherit => Stdio::inherit(),
        });

        cmd
    }

    /// Execute, require a zero exit status, and return captured stdout.
    pub fn exec_and_check(&self) -> Result<Vec<u8>, ProcessError> {
        let output = self
            .build_command()
            .output()
            .map_err(|source| ProcessError::Spawn {
                command: self.display_command(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProcessError::Failed {
                command: self.display_command(),
                code: output.status.code(),
                output: String::from_utf8_lossy(&output.stdout).into_owned(),
            });
        }

        Ok(output.stdout)
    }

    /// Display the command for error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Find an executable in PATH.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}
