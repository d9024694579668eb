use clap::Parser;
use pnw_cli::{init_logging, run};
use pnw_manifest::DEFAULT_MANIFEST_PATH;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pnw-manifest-validate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Validate a PNW testnet deployment manifest",
    long_about = "Checks that a testnet deployment manifest has every required \
                  program id group and that each id is a well-formed *.aleo program name."
)]
struct Cli {
    /// Path to the manifest JSON file
    #[arg(value_name = "MANIFEST", default_value = DEFAULT_MANIFEST_PATH)]
    manifest: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();
    run(&cli.manifest)
}
