//! External command execution.
//!
//! Every package-manager call goes through [`CommandRunner`] so the pipeline
//! sees a typed outcome instead of a bare completion signal. Tests swap in a
//! recording runner.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Result, ScaffoldError};

/// A command line to run inside a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Shell-style rendering, used in logs and error messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What came back from a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            stderr: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner {
    /// Run `spec` to completion. Spawn errors are `Err`; a non-zero exit is
    /// an `Ok` output that [`run_checked`] turns into a failure.
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput>;
}

/// Run `spec` and fail with [`ScaffoldError::CommandFailed`] on a non-zero exit.
pub fn run_checked(runner: &dyn CommandRunner, spec: &CommandSpec) -> Result<()> {
    debug!(command = %spec.display(), cwd = %spec.cwd.display(), "running");
    let output = runner.run(spec)?;
    if output.is_success() {
        Ok(())
    } else {
        Err(ScaffoldError::CommandFailed {
            command: spec.display(),
            code: output.code,
            stderr: output.stderr,
        })
    }
}

/// Spawns real processes with stdout silenced and stderr captured.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        // Resolving through PATH picks up npm.cmd and friends on Windows.
        let program = which::which(&spec.program)
            .map_err(|_| ScaffoldError::PackageManagerNotFound(spec.program.clone()))?;

        let output = Command::new(&program)
            .args(&spec.args)
            .current_dir(&spec.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ScaffoldError::io(format!("failed to spawn `{}`", spec.display()), e))?;

        Ok(CommandOutput {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
