//! Template source resolution and copying.
//!
//! Resolution walks an ordered list of candidate directories and picks the
//! first one holding [`paths::TEMPLATE_MARKER`]. The list is a plain value so
//! it can be built by hand in tests.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, ScaffoldError};
use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCandidates {
    dirs: Vec<PathBuf>,
    marker: String,
}

impl TemplateCandidates {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self {
            dirs,
            marker: paths::TEMPLATE_MARKER.to_string(),
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Default search order for a project at `project`.
    ///
    /// 1. explicit override
    /// 2. installed as a dependency of the new project
    /// 3. next to the executable
    /// 4. source checkout
    pub fn standard(project: &Path, override_dir: Option<&Path>) -> Self {
        let mut dirs = Vec::new();
        dirs.extend(override_dir.map(Path::to_path_buf));
        dirs.push(paths::installed_dependency_templates(project));
        if let Ok(exe) = std::env::current_exe() {
            dirs.extend(paths::executable_templates(&exe));
        }
        dirs.push(paths::source_checkout_templates());
        Self::new(dirs)
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// First candidate containing the marker file.
    pub fn resolve(&self) -> Option<&Path> {
        self.dirs.iter().map(PathBuf::as_path).find(|dir| {
            let hit = dir.join(&self.marker).is_file();
            debug!(candidate = %dir.display(), hit, "probing template source");
            hit
        })
    }
}

/// Copy every entry under `source` to the same relative location in `dest`.
///
/// Returns the number of files copied. Existing files in `dest` are
/// overwritten.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    if !source.is_dir() {
        return Err(ScaffoldError::TemplateCopy {
            path: source.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }

    let mut copied = 0;
    for entry in WalkDir::new(source).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            ScaffoldError::TemplateCopy {
                path,
                source: e.into(),
            }
        })?;

        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|source| ScaffoldError::TemplateCopy {
                path: target.clone(),
                source,
            })?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|source| ScaffoldError::TemplateCopy {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::copy(entry.path(), &target).map_err(|source| ScaffoldError::TemplateCopy {
                path: entry.path().to_path_buf(),
                source,
            })?;
            debug!(file = %relative.display(), "copied template file");
            copied += 1;
        }
    }

    Ok(copied)
}
