use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::package_manager::PackageManager;
use crate::paths;

pub const PACKAGE_MANAGER_ENV: &str = "CREATE_PIKA_APP_PACKAGE_MANAGER";
pub const TEMPLATE_DIR_ENV: &str = "CREATE_PIKA_APP_TEMPLATE_DIR";

/// Configuration for create-pika-app
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package manager used for init and installs
    pub package_manager: PackageManager,
    /// Template directory tried before every built-in candidate
    pub template_dir: Option<PathBuf>,
}

impl Config {
    /// Load the user config file (if any), then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match paths::config_path() {
            Some(path) if path.is_file() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(
            std::env::var(PACKAGE_MANAGER_ENV).ok().as_deref(),
            std::env::var_os(TEMPLATE_DIR_ENV).map(PathBuf::from),
        )?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ScaffoldError::io(format!("failed to read {}", path.display()), e))?;
        let config = toml::from_str(&content).map_err(|source| ScaffoldError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    fn apply_overrides(
        &mut self,
        package_manager: Option<&str>,
        template_dir: Option<PathBuf>,
    ) -> Result<()> {
        if let Some(value) = package_manager.filter(|v| !v.trim().is_empty()) {
            self.package_manager = value.parse()?;
        }
        if let Some(dir) = template_dir.filter(|d| !d.as_os_str().is_empty()) {
            self.template_dir = Some(dir);
        }
        Ok(())
    }
}
