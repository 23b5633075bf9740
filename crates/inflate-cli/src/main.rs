mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use clap::Parser;
use std::io::Write;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        let code = report_failure(&e, &mut std::io::stderr());
        std::process::exit(code);
    }
}

/// Writes the single user-facing error line and returns the process exit code.
fn report_failure(err: &CliError, out: &mut impl Write) -> i32 {
    let _ = writeln!(out, "Error: {}", err);
    err.exit_code()
}

fn run_app() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version requests print to stdout and exit zero.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(CliError::from_clap(e)),
    };
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("inflate v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let summary = commands::inflate::run(&cli.args)?;

    info!("Command completed successfully.");
    println!(
        "Wrote {} frame(s), {} residues to {}",
        summary.frames,
        summary.residues,
        summary.output.display()
    );
    if let Some(report) = &summary.report {
        println!("Shift report written to {}", report.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn failure_is_reported_once_with_its_exit_code() {
        let err = CliError::FileNotFound {
            path: PathBuf::from("/nope.gro"),
        };
        let mut out = Vec::new();
        assert_eq!(report_failure(&err, &mut out), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: File not found: '/nope.gro'\n"
        );

        let mut out = Vec::new();
        assert_eq!(report_failure(&CliError::Usage("bad".into()), &mut out), 2);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
