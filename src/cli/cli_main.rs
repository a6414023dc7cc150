// Main CLI entrypoint

use std::{io::Write, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, debug_span};

use super::{args::CliArgs, report::write_report, styles::ERROR};
use crate::{
    audit::{audit, RequiredSettings},
    config::{LoadError, SshdConfig},
    util::setup_tracing,
};

/// Main CLI entrypoint
pub fn cli() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    setup_tracing("warn").inspect_err(|e| eprintln!("{e:?}"))?;

    let success = run(
        &args,
        &RequiredSettings::hardened(),
        &mut anstream::stdout(),
        &mut anstream::stderr(),
    )?;
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Loads, audits and reports.
///
/// Returns true if the configuration passed. A file that could not be read counts as a failure;
/// the reason goes to `err` and nothing is written to `out`.
fn run<O, E>(
    args: &CliArgs,
    required: &RequiredSettings,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<bool>
where
    O: Write,
    E: Write,
{
    let _span = debug_span!("audit", file = %args.file.display()).entered();

    let config = match SshdConfig::load(&args.file) {
        Ok(config) => config,
        Err(e) => {
            debug!("{e:?}");
            // "Error: File '...' not found." but "Error reading '...': ..."
            let separator = match e {
                LoadError::NotFound { .. } => ":",
                LoadError::Read { .. } => "",
            };
            writeln!(err, "{ERROR}Error{separator}{ERROR:#} {e}")
                .context("writing to stderr")?;
            return Ok(false);
        }
    };
    if let Some(source) = config.source() {
        debug!("read {} directives from {}", config.len(), source.display());
    }

    let findings = audit(&config, required);
    write_report(out, &findings).context("writing to stdout")?;
    Ok(findings.is_empty())
}
