//! jsonstrip — strip a field from the records of a JSON file
//!
//! Usage examples
//! --------------
//!
//! - Remove `local_image_raw` (the default field)
//!   $ jsonstrip assets/anime_1000.json
//!
//! - Remove another field, 2-space output
//!   $ jsonstrip --field thumbnail --indent 2 data.json
//!
//! - See what would happen, as JSON
//!   $ jsonstrip --dry-run --json data.json
//!
//! Logs go to stderr; set `RUST_LOG` or pass `-v` / `-vv` to see them.
use anyhow::anyhow;
use clap::Parser;
use jsonstrip_cli::args::CliArgs;
use jsonstrip_cli::report::{summary_json, summary_lines};
use jsonstrip_core::strip_file;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = init_logging(args.log_level()) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    let opts = args.options();
    debug!(path = %args.path.display(), ?opts, "starting");
    let stats = strip_file(&args.path, &opts)?;
    let written = !opts.dry_run;

    if args.json {
        let summary = summary_json(&args.path, &opts.field, &stats, written);
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        for line in summary_lines(&opts.field, &stats, written) {
            println!("{line}");
        }
    }

    Ok(())
}

fn init_logging(default_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}
