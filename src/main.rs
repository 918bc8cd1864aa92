use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use create_pika_app::reporter::Reporter;
use create_pika_app::Invocation;

mod commands;

fn main() -> Result<()> {
    let invocation = Invocation::try_from_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    init_tracing(invocation.verbose);

    if !invocation.ignored_flags.is_empty() {
        debug!(flags = ?invocation.ignored_flags, "ignoring unknown flags");
    }
    if !invocation.ignored_positionals.is_empty() {
        debug!(args = ?invocation.ignored_positionals, "ignoring extra arguments");
    }

    if invocation.show_info {
        return commands::info::execute();
    }

    let Some(name) = invocation.project_name() else {
        Reporter::stdout().usage();
        std::process::exit(1);
    };

    let exit_code = commands::create::execute(name)?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with progress output.
/// `--verbose` forces debug; otherwise `RUST_LOG` applies, defaulting to warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
