use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use tracing::debug;

use crate::paths;

const NOT_FOUND: &str = "Not Found";

/// Packages whose local install is reported by `--info`.
pub const REPORTED_PACKAGES: &[&str] = &["preact", "preact-compat", "@pika/web", "preact-emotion"];

/// Packages whose global install is reported by `--info`.
pub const REPORTED_GLOBAL_PACKAGES: &[&str] = &[paths::TOOL_NAME];

#[derive(Debug)]
pub struct Environment {
    pub system: SystemInfo,
    pub binaries: BTreeMap<String, ToolInfo>,
    pub browsers: BTreeMap<String, ToolInfo>,
    pub npm_packages: BTreeMap<String, Option<String>>,
    pub npm_global_packages: BTreeMap<String, Option<String>>,
}

#[derive(Debug)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu_count: Option<usize>,
    pub cpu_model: Option<String>,
}

#[derive(Debug, Default)]
pub struct ToolInfo {
    pub available: bool,
    pub version: Option<String>,
    pub path: Option<String>,
}

struct BrowserProbe {
    name: &'static str,
    binaries: &'static [&'static str],
    app_paths: &'static [&'static str],
}

const BROWSERS: &[BrowserProbe] = &[
    BrowserProbe {
        name: "Chrome",
        binaries: &["google-chrome", "google-chrome-stable", "chromium", "chromium-browser"],
        app_paths: &[
            "/Applications/Google Chrome.app",
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
        ],
    },
    BrowserProbe {
        name: "Edge",
        binaries: &["microsoft-edge", "microsoft-edge-stable"],
        app_paths: &[
            "/Applications/Microsoft Edge.app",
            r"C:\Program Files (x86)\Microsoft\Edge\Application\msedge.exe",
        ],
    },
    BrowserProbe {
        name: "Internet Explorer",
        binaries: &[],
        app_paths: &[r"C:\Program Files\Internet Explorer\iexplore.exe"],
    },
    BrowserProbe {
        name: "Firefox",
        binaries: &["firefox"],
        app_paths: &[
            "/Applications/Firefox.app",
            r"C:\Program Files\Mozilla Firefox\firefox.exe",
        ],
    },
    BrowserProbe {
        name: "Safari",
        binaries: &[],
        app_paths: &["/Applications/Safari.app"],
    },
];

impl Environment {
    /// Gather the report for a process running in `cwd`.
    ///
    /// Spawns only `--version` probes and `npm root -g`; writes nothing.
    pub fn detect(cwd: &Path) -> Self {
        let mut env = Environment {
            system: SystemInfo::detect(),
            binaries: BTreeMap::new(),
            browsers: BTreeMap::new(),
            npm_packages: BTreeMap::new(),
            npm_global_packages: BTreeMap::new(),
        };

        env.detect_binaries();
        env.detect_browsers();
        env.detect_packages(cwd);

        env
    }

    fn detect_binaries(&mut self) {
        for (label, program) in [("Node", "node"), ("npm", "npm")] {
            self.binaries.insert(label.to_string(), probe_tool(program));
        }
    }

    fn detect_browsers(&mut self) {
        for browser in BROWSERS {
            let mut info = browser
                .binaries
                .iter()
                .map(|bin| probe_tool(bin))
                .find(|info| info.available)
                .unwrap_or_default();

            if !info.available {
                if let Some(app) = browser.app_paths.iter().find(|p| Path::new(p).exists()) {
                    info.available = true;
                    info.path = Some((*app).to_string());
                }
            }

            self.browsers.insert(browser.name.to_string(), info);
        }
    }

    fn detect_packages(&mut self, cwd: &Path) {
        for package in REPORTED_PACKAGES {
            self.npm_packages
                .insert((*package).to_string(), read_package_version(cwd, package));
        }

        let global_root = npm_global_root();
        for package in REPORTED_GLOBAL_PACKAGES {
            let version = global_root
                .as_deref()
                .and_then(|root| read_package_version(root, package));
            self.npm_global_packages
                .insert((*package).to_string(), version);
        }
    }

    /// Human-readable report, one section per category.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "  System:");
        let _ = writeln!(out, "    OS: {} {}", self.system.os, self.system.arch);
        let cpu = match (&self.system.cpu_count, &self.system.cpu_model) {
            (Some(count), Some(model)) => format!("({count}) {} {model}", self.system.arch),
            (Some(count), None) => format!("({count}) {}", self.system.arch),
            (None, Some(model)) => format!("{} {model}", self.system.arch),
            (None, None) => self.system.arch.clone(),
        };
        let _ = writeln!(out, "    CPU: {cpu}");

        render_tools(&mut out, "Binaries", &self.binaries);
        render_tools(&mut out, "Browsers", &self.browsers);
        render_versions(&mut out, "npmPackages", &self.npm_packages);
        render_versions(&mut out, "npmGlobalPackages", &self.npm_global_packages);

        out
    }
}

impl SystemInfo {
    fn detect() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_count: std::thread::available_parallelism().ok().map(usize::from),
            cpu_model: cpu_model(),
        }
    }
}

fn render_tools(out: &mut String, heading: &str, tools: &BTreeMap<String, ToolInfo>) {
    let _ = writeln!(out, "  {heading}:");
    for (name, info) in tools {
        let value = match (info.available, &info.version, &info.path) {
            (false, _, _) => NOT_FOUND.to_string(),
            (true, Some(version), Some(path)) => format!("{version} - {path}"),
            (true, Some(version), None) => version.clone(),
            (true, None, Some(path)) => format!("Found - {path}"),
            (true, None, None) => "Found".to_string(),
        };
        let _ = writeln!(out, "    {name}: {value}");
    }
}

fn render_versions(out: &mut String, heading: &str, packages: &BTreeMap<String, Option<String>>) {
    let _ = writeln!(out, "  {heading}:");
    for (name, version) in packages {
        let _ = writeln!(out, "    {name}: {}", version.as_deref().unwrap_or(NOT_FOUND));
    }
}

fn probe_tool(program: &str) -> ToolInfo {
    let mut info = ToolInfo::default();

    if let Ok(path) = which::which(program) {
        info.available = true;
        info.path = Some(path.display().to_string());

        if let Ok(output) = Command::new(&path).arg("--version").output() {
            let version_str = String::from_utf8_lossy(&output.stdout);
            info.version = parse_version_line(&version_str);
        }
    }

    debug!(program, available = info.available, "probed tool");
    info
}

/// First line of `--version` output, reduced to its version token.
fn parse_version_line(output: &str) -> Option<String> {
    let line = output.lines().next()?.trim();
    if line.is_empty() {
        return None;
    }
    let token = line
        .split_whitespace()
        .find(|word| word.trim_start_matches('v').starts_with(|c: char| c.is_ascii_digit()))
        .unwrap_or(line);
    Some(token.trim_start_matches('v').to_string())
}

#[derive(Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

/// Version recorded in `<root>/node_modules/<package>/package.json`.
pub fn read_package_version(root: &Path, package: &str) -> Option<String> {
    let manifest = paths::local_package_manifest(root, package);
    let content = fs::read_to_string(&manifest).ok()?;
    let parsed: PackageManifest = serde_json::from_str(&content).ok()?;
    parsed.version
}

/// Parent of npm's global `node_modules`, so it can be fed to
/// [`read_package_version`].
fn npm_global_root() -> Option<PathBuf> {
    let npm = which::which("npm").ok()?;
    let output = Command::new(npm).args(["root", "-g"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let root = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
    root.parent().map(Path::to_path_buf)
}

fn cpu_model() -> Option<String> {
    if cfg!(target_os = "linux") {
        let cpuinfo = fs::read_to_string("/proc/cpuinfo").ok()?;
        cpuinfo
            .lines()
            .find(|line| line.starts_with("model name"))
            .and_then(|line| line.split_once(':'))
            .map(|(_, model)| model.trim().to_string())
    } else if cfg!(target_os = "macos") {
        let output = Command::new("sysctl")
            .args(["-n", "machdep.cpu.brand_string"])
            .output()
            .ok()?;
        let model = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!model.is_empty()).then_some(model)
    } else {
        None
    }
}
