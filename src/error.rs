//! Failure values for every scaffolding stage.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("no app name was provided")]
    MissingProjectName,

    #[error("directory {} already exists", .0.display())]
    DirectoryExists(PathBuf),

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("package manager '{0}' was not found on PATH")]
    PackageManagerNotFound(String),

    #[error("`{command}` failed{exit}{detail}", exit = exit_suffix(.code), detail = stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("failed to copy template entry {}", .path.display())]
    TemplateCopy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown package manager '{0}' (expected npm, yarn or pnpm)")]
    UnknownPackageManager(String),
}

impl ScaffoldError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}
