//! Single source of truth for every filesystem location the tool touches.
//!
//! No I/O happens here. Callers decide whether a path exists.
//!
//! ```text
//! ~/.config/create-pika-app/
//! └── config.toml              # Optional user config
//!
//! <project>/
//! ├── package.json             # Manifest (package manager init)
//! ├── node_modules/
//! │   └── create-pika-app/
//! │       └── templates/       # Template when installed as a dependency
//! └── ...                      # Copied template files
//!
//! <exe_dir>/../share/create-pika-app/templates/   # Installed layout
//! <exe_dir>/templates/                            # Portable layout
//! <crate>/templates/                              # Development checkout
//! ```

use std::path::{Path, PathBuf};

pub const TOOL_NAME: &str = "create-pika-app";

/// Manifest written by the package manager's init step.
pub const MANIFEST_FILE: &str = "package.json";

/// A directory only counts as a template source if it holds this file.
pub const TEMPLATE_MARKER: &str = "tsconfig.json";

pub const TEMPLATES_DIR: &str = "templates";

// =============================================================================
// User Level
// =============================================================================

/// User config file: `<config_dir>/create-pika-app/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(TOOL_NAME).join("config.toml"))
}

// =============================================================================
// Project Level
// =============================================================================

/// Resolve the project directory for `name` relative to `cwd`.
///
/// Absolute names are returned unchanged.
pub fn project_path(name: &str, cwd: &Path) -> PathBuf {
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        cwd.join(candidate)
    }
}

pub fn manifest_path(project: &Path) -> PathBuf {
    project.join(MANIFEST_FILE)
}

/// `<cwd>/node_modules/<package>/package.json`
pub fn local_package_manifest(root: &Path, package: &str) -> PathBuf {
    // Scoped names like "@pika/web" are nested directories already.
    root.join("node_modules").join(package).join(MANIFEST_FILE)
}

// =============================================================================
// Template Candidates
// =============================================================================

/// Where the templates live if the tool is a dependency of the project.
pub fn installed_dependency_templates(project: &Path) -> PathBuf {
    project
        .join("node_modules")
        .join(TOOL_NAME)
        .join(TEMPLATES_DIR)
}

/// Templates next to the running executable, in install order of preference.
pub fn executable_templates(exe: &Path) -> Vec<PathBuf> {
    let Some(bin_dir) = exe.parent() else {
        return Vec::new();
    };
    let mut found = Vec::with_capacity(2);
    if let Some(prefix) = bin_dir.parent() {
        found.push(prefix.join("share").join(TOOL_NAME).join(TEMPLATES_DIR));
    }
    found.push(bin_dir.join(TEMPLATES_DIR));
    found
}

/// Templates in the source checkout this binary was built from.
pub fn source_checkout_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATES_DIR)
}
