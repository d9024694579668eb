//! Command-line front end for manifest validation
//!
//! Prints exactly one line: the PASS confirmation on stdout, or the first
//! failure on stderr.

use pnw_manifest::{ManifestError, ValidatedManifest};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Format the single-line failure report for `err`.
pub fn fail_line(err: &ManifestError) -> String {
    format!("manifest validation: FAIL - {}", err)
}

/// Validate the manifest at `path` and report the outcome on the standard
/// streams.
pub fn run(path: &Path) -> ExitCode {
    debug!("Validating manifest at {:?}", path);
    let result = pnw_manifest::validate(path);
    ExitCode::from(report(&result, &mut io::stdout().lock(), &mut io::stderr().lock()))
}

/// Write the outcome of a validation to `out` or `err` and return the process
/// exit status: 0 on success, 1 on any failure.
pub fn report(
    result: &Result<ValidatedManifest, ManifestError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    match result {
        Ok(manifest) => {
            // A closed stdout must not turn a passing manifest into a failure.
            let _ = writeln!(out, "{}", manifest.pass_line());
            0
        }
        Err(e) => {
            debug!("Validation failed: {:?}", e);
            let _ = writeln!(err, "{}", fail_line(e));
            1
        }
    }
}

/// Install the stderr tracing subscriber. Silent unless `RUST_LOG` asks for
/// more than warnings.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pnw_cli=warn,pnw_manifest=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(io::stderr),
        )
        .try_init();
}
