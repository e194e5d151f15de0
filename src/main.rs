//! dmxbatch: Batch DMX Conversion CLI Tool
//!
//! Converts every `.dmx` file in a folder between the binary and text
//! encodings using Source Filmmaker's dmxconvert.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use dmxbatch::cli::{Cli, TerminalPrompter};
use dmxbatch::driver::{gather_config, run_batch, BatchOptions, ProcessConverter};
use dmxbatch::report::export_batch_report;
use dmxbatch::utils::{
    print_banner, print_completion, print_config, print_error, print_info, print_success,
    print_warning,
};

/// Exit code when the batch ran but some conversions failed
const EXIT_CONVERSION_FAILED: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            print_error("error", &format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    print_banner(env!("CARGO_PKG_VERSION"));

    // Resolve and validate everything before touching the filesystem
    let config = match gather_config(&cli.run_request(), &mut TerminalPrompter) {
        Ok(config) => config,
        Err(err) => {
            print_error(err.kind(), &err.to_string());
            return Ok(ExitCode::FAILURE);
        }
    };

    print_config(&config, cli.dry_run);

    let options = BatchOptions {
        dry_run: cli.dry_run,
        show_progress: !cli.no_progress,
    };
    let report = run_batch(&config, &mut ProcessConverter, &options)?;

    if report.total() == 0 {
        print_info("No .dmx files found in the input folder");
    }
    report.display();

    if let Some(path) = &cli.report {
        export_batch_report(&config, &report, path)?;
        println!();
        print_success(&format!("Report saved to {}", path.display()));
    }

    if report.has_failures() {
        println!();
        print_warning(&format!(
            "{} of {} conversion(s) failed",
            report.failed(),
            report.total()
        ));
        return Ok(ExitCode::from(EXIT_CONVERSION_FAILED));
    }

    print_completion();
    Ok(ExitCode::SUCCESS)
}
