//! Command-line resolution.
//!
//! Unknown flags are accepted and ignored so newer wrappers can pass options
//! this version does not know about. They are filtered out, together with the
//! value that follows them, before clap sees the argument list.

use std::ffi::{OsStr, OsString};

use clap::Parser;

const AFTER_HELP: &str = "\
    Only <project-directory> is required.

    If you have any problems, do not hesitate to file an issue:
      https://github.com/ndom91/create-pika-app/issues/new";

#[derive(Parser, Debug)]
#[command(
    name = "create-pika-app",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create a Preact app bundled with @pika/web",
    override_usage = "create-pika-app <project-directory> [options]",
    after_help = AFTER_HELP
)]
struct Cli {
    /// Directory to create the project in
    #[arg(value_name = "project-directory")]
    project_directory: Option<OsString>,

    #[arg(hide = true)]
    surplus: Vec<OsString>,

    /// Print additional logs
    #[arg(long)]
    verbose: bool,

    /// Print environment debug info
    #[arg(long)]
    info: bool,
}

/// Flags clap is allowed to see; everything else starting with `-` is ignored.
const KNOWN_FLAGS: &[&str] = &["--verbose", "--info", "--help", "-h", "--version", "-V", "--"];

/// The parsed command line. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub project_name: Option<String>,
    pub verbose: bool,
    pub show_info: bool,
    /// Unknown flags and the values they swallowed.
    pub ignored_flags: Vec<String>,
    /// Positionals after the project directory, plus a project directory
    /// that is not valid UTF-8.
    pub ignored_positionals: Vec<String>,
}

impl Invocation {
    /// Parse `args` (including the program name).
    ///
    /// `--help` and `--version` come back as a clap error whose `exit()`
    /// prints and terminates with status 0.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let (kept, ignored_flags) = partition_flags(args.into_iter().map(Into::into));
        let cli = Cli::try_parse_from(kept)?;

        let mut ignored_positionals: Vec<String> = cli.surplus.iter().map(lossy).collect();
        let project_name = match cli.project_directory.map(OsString::into_string) {
            Some(Ok(name)) => Some(name),
            Some(Err(raw)) => {
                ignored_positionals.insert(0, lossy(&raw));
                None
            }
            None => None,
        };

        Ok(Self {
            project_name: project_name.filter(|name| !name.trim().is_empty()),
            verbose: cli.verbose,
            show_info: cli.info,
            ignored_flags: ignored_flags.iter().map(lossy).collect(),
            ignored_positionals,
        })
    }

    /// The project name, or `None` when a scaffold run cannot proceed.
    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }
}

fn lossy(arg: &OsString) -> String {
    arg.to_string_lossy().into_owned()
}

fn is_flag(arg: &OsStr) -> bool {
    let bytes = arg.as_encoded_bytes();
    bytes.len() > 1 && bytes[0] == b'-'
}

/// Split `args` into what clap parses and what is dropped.
///
/// An unknown flag without an inline `=value` takes the next argument as its
/// value unless that argument is itself a flag.
fn partition_flags(args: impl Iterator<Item = OsString>) -> (Vec<OsString>, Vec<OsString>) {
    let mut kept = Vec::new();
    let mut ignored = Vec::new();
    let mut positional_only = false;
    let mut args = args.enumerate().peekable();

    while let Some((index, arg)) = args.next() {
        if index == 0 || positional_only || !is_flag(&arg) {
            kept.push(arg);
        } else if arg.to_str().is_some_and(|flag| KNOWN_FLAGS.contains(&flag)) {
            positional_only = arg == "--";
            kept.push(arg);
        } else {
            let inline_value = arg.as_encoded_bytes().contains(&b'=');
            ignored.push(arg);
            if !inline_value {
                let takes_value = |(_, next): &(usize, OsString)| !next.as_encoded_bytes().starts_with(b"-");
                if let Some((_, value)) = args.next_if(takes_value) {
                    ignored.push(value);
                }
            }
        }
    }

    (kept, ignored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::ISSUES_URL;

    fn parse(args: &[&str]) -> Invocation {
        Invocation::try_from_args(std::iter::once("create-pika-app").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn positional_is_the_project_name() {
        let inv = parse(&["my-app"]);
        assert_eq!(inv.project_name(), Some("my-app"));
        assert!(!inv.verbose);
        assert!(!inv.show_info);
    }

    #[test]
    fn missing_name_is_none() {
        assert_eq!(parse(&[]).project_name(), None);
        assert_eq!(parse(&[""]).project_name(), None);
    }

    #[test]
    fn recognised_flags_are_parsed() {
        let inv = parse(&["--verbose", "my-app", "--info"]);
        assert!(inv.verbose);
        assert!(inv.show_info);
        assert_eq!(inv.project_name(), Some("my-app"));
    }

    #[test]
    fn unknown_flags_are_accepted() {
        let inv = parse(&["my-app", "--use-pnpm", "--template=ts", "-x"]);
        assert_eq!(inv.project_name(), Some("my-app"));
        assert_eq!(inv.ignored_flags, vec!["--use-pnpm", "--template=ts", "-x"]);
    }

    #[test]
    fn unknown_flag_before_name_takes_its_value() {
        let inv = parse(&["--scope", "acme", "my-app"]);
        assert_eq!(inv.project_name(), Some("my-app"));
        assert_eq!(inv.ignored_flags, vec!["--scope", "acme"]);
        assert!(inv.ignored_positionals.is_empty());
    }

    #[test]
    fn unknown_flag_after_name_takes_its_value() {
        let inv = parse(&["my-app", "--template", "ts", "--verbose"]);
        assert_eq!(inv.project_name(), Some("my-app"));
        assert!(inv.verbose);
        assert_eq!(inv.ignored_flags, vec!["--template", "ts"]);
    }

    #[test]
    fn inline_value_does_not_swallow_the_name() {
        let inv = parse(&["--template=ts", "my-app"]);
        assert_eq!(inv.project_name(), Some("my-app"));
        assert_eq!(inv.ignored_flags, vec!["--template=ts"]);
    }

    #[test]
    fn surplus_positionals_are_ignored() {
        let inv = parse(&["a", "b", "c"]);
        assert_eq!(inv.project_name(), Some("a"));
        assert_eq!(inv.ignored_positionals, vec!["b", "c"]);
    }

    #[test]
    fn double_dash_allows_dash_prefixed_names() {
        let inv = parse(&["--", "-weird-name"]);
        assert_eq!(inv.project_name(), Some("-weird-name"));
        assert!(inv.ignored_flags.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_is_treated_as_missing() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"bad\xffname");
        let inv = Invocation::try_from_args([OsStr::new("create-pika-app"), name]).unwrap();

        assert_eq!(inv.project_name(), None);
        assert_eq!(inv.ignored_positionals, vec!["bad\u{fffd}name"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_unknown_flag_is_ignored() {
        use std::os::unix::ffi::OsStrExt;

        let flag = OsStr::from_bytes(b"--opt\xff");
        let args = [OsStr::new("create-pika-app"), OsStr::new("my-app"), flag];
        let inv = Invocation::try_from_args(args).unwrap();

        assert_eq!(inv.project_name(), Some("my-app"));
        assert_eq!(inv.ignored_flags, vec!["--opt\u{fffd}"]);
    }

    #[test]
    fn help_is_a_display_error() {
        let err = Invocation::try_from_args(["create-pika-app", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(err.to_string().contains(ISSUES_URL));
    }
}
