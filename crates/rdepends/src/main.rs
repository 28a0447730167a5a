//! rdepends CLI - recipe dependency queries from the command line.

use std::io::{self, BufWriter, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use rdepends::cli::Cli;
use rdepends::{Config, output};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let config = Config::from_cli(&cli);
    let mut out = BufWriter::new(io::stdout().lock());

    match rdepends::run(&config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        // Whoever read our output stopped early; nothing left to report.
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            // Best effort: stderr is all we have left.
            let _ = output::write_error(&mut io::stderr().lock(), &e);
            ExitCode::FAILURE
        }
    }
}
