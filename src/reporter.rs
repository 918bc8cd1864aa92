//! Human-readable progress output.
//!
//! Progress goes to stdout through a [`Reporter`] so tests can capture it.
//! Usage errors go to stderr. Diagnostics for developers go through
//! `tracing` instead.

use std::io::{self, Write};

use colored::Colorize;

use crate::dependencies::Tier;
use crate::paths::TOOL_NAME;

pub const ISSUES_URL: &str = "https://github.com/ndom91/create-pika-app/issues/new";

pub struct Reporter {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Reporter {
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Progress to `out`; usage errors still go to the process stderr.
    pub fn new(out: Box<dyn Write>) -> Self {
        Self {
            out,
            err: Box::new(io::stderr()),
        }
    }

    pub fn with_errors(mut self, err: Box<dyn Write>) -> Self {
        self.err = err;
        self
    }

    // Progress output is best effort: a closed stdout must not abort a
    // scaffold that is otherwise succeeding.
    fn line(&mut self, text: impl std::fmt::Display) {
        let _ = writeln!(self.out, "{text}");
    }

    fn error_line(&mut self, text: impl std::fmt::Display) {
        let _ = writeln!(self.err, "{text}");
    }

    pub fn creating(&mut self, name: &str, path: &std::path::Path) {
        self.line(format!(
            "\nCreating a new Preact app {} in {}\n",
            name.green(),
            path.display().to_string().green()
        ));
    }

    pub fn step_done(&mut self, message: &str) {
        self.line(format!("  {} {message}", "✓".green()));
    }

    pub fn warning(&mut self, message: &str) {
        self.line(format!("  {} {message}", "⚠".yellow()));
    }

    pub fn installing(&mut self, tier: Tier, packages: &[&str]) {
        self.line(
            format!("\nInstalling {}: {}\n", tier, packages.join(", "))
                .cyan()
                .to_string(),
        );
    }

    pub fn installed(&mut self, tier: Tier) {
        self.line(format!("\nFinished installing {tier}\n").green().to_string());
    }

    pub fn success(&mut self) {
        self.line("All done 🎉".bold().green());
    }

    pub fn failure(&mut self, detail: &dyn std::fmt::Display) {
        self.line(
            format!("Something went wrong while trying to create a new Preact app using {TOOL_NAME}")
                .bold()
                .red(),
        );
        self.line(format!("  {detail}").red());
    }

    /// Usage banner for a run without a project directory.
    pub fn usage(&mut self) {
        let name = TOOL_NAME.cyan();
        self.error_line("Please specify the project directory:");
        self.line(format!("  {name} {}", "<project-directory>".green()));
        self.line("");
        self.line("For example:");
        self.line(format!("  {name} {}", "my-pika-app".green()));
        self.line("");
        self.line(format!(
            "Run {} to see all options.",
            format!("{TOOL_NAME} --help").cyan()
        ));
        self.line(format!(
            "If you have any problems, do not hesitate to file an issue: {}",
            ISSUES_URL.cyan()
        ));
    }
}

pub mod capture {
    use std::io::Write;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    /// Shared in-memory buffer; hand a clone to a [`Reporter`](super::Reporter)
    /// and read the text back afterwards.
    #[derive(Clone, Default)]
    pub struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn buffer(&self) -> MutexGuard<'_, Vec<u8>> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner)
        }

        pub fn text(&self) -> String {
            String::from_utf8_lossy(&self.buffer()).into_owned()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.buffer().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::capture::Captured;
    use super::*;

    #[test]
    fn usage_names_the_tool_and_issue_tracker() {
        colored::control::set_override(false);
        let out = Captured::default();
        let err = Captured::default();
        let mut reporter = Reporter::new(Box::new(out.clone())).with_errors(Box::new(err.clone()));

        reporter.usage();

        assert_eq!(err.text(), "Please specify the project directory:\n");
        let text = out.text();
        assert!(text.starts_with("  create-pika-app <project-directory>"));
        assert!(text.contains("create-pika-app my-pika-app"));
        assert!(text.contains(ISSUES_URL));
    }

    #[test]
    fn failure_banner_names_the_tool() {
        colored::control::set_override(false);
        let buf = Captured::default();
        let mut reporter = Reporter::new(Box::new(buf.clone()));

        reporter.failure(&"directory exists");

        let text = buf.text();
        assert!(text.contains("using create-pika-app"));
        assert!(text.contains("directory exists"));
    }
}
