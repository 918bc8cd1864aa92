//! Package manager command lines.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::dependencies::Tier;
use crate::error::ScaffoldError;
use crate::shell::CommandSpec;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub fn program(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Non-interactive manifest initialization inside `project`.
    pub fn init(self, project: &Path) -> CommandSpec {
        let spec = CommandSpec::new(self.program(), project).arg("init");
        match self {
            // pnpm init is non-interactive and rejects -y
            PackageManager::Pnpm => spec,
            PackageManager::Npm | PackageManager::Yarn => spec.arg("-y"),
        }
    }

    /// Install `packages` into `project` as `tier` dependencies.
    pub fn install(self, project: &Path, tier: Tier, packages: &[&str]) -> CommandSpec {
        let spec = CommandSpec::new(self.program(), project);
        let spec = match (self, tier) {
            (PackageManager::Npm, Tier::Runtime) => spec.args(["install", "--save"]),
            (PackageManager::Npm, Tier::Development) => spec.args(["install", "-D"]),
            (_, Tier::Runtime) => spec.arg("add"),
            (_, Tier::Development) => spec.args(["add", "-D"]),
        };
        spec.args(packages.iter().copied())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for PackageManager {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            other => Err(ScaffoldError::UnknownPackageManager(other.to_string())),
        }
    }
}
