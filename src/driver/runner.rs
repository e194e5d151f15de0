//! Sequential execution of conversion jobs

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::time::Instant;

use anyhow::Result;
use console::style;
use indicatif::ProgressBar;
use serde::Serialize;

use super::config::RunConfig;
use super::jobs::{plan_jobs, prepare_output_folder, ConversionJob};
use crate::report::BatchReport;
use crate::utils::create_progress_bar;

/// Exit state of one converter process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitReport {
    pub success: bool,
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ExitReport {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failure(code: Option<i32>) -> Self {
        Self {
            success: false,
            code,
        }
    }
}

impl From<ExitStatus> for ExitReport {
    fn from(status: ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

/// Runs one conversion job to completion
pub trait Converter {
    fn convert(&mut self, converter: &Path, job: &ConversionJob) -> io::Result<ExitReport>;
}

/// Spawns dmxconvert as a child process and waits for it
#[derive(Debug, Default)]
pub struct ProcessConverter;

impl Converter for ProcessConverter {
    fn convert(&mut self, converter: &Path, job: &ConversionJob) -> io::Result<ExitReport> {
        let status = Command::new(converter).args(job.args()).status()?;
        Ok(status.into())
    }
}

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Converted,
    /// The converter ran and reported failure
    Failed { code: Option<i32> },
    /// The converter could not be started
    SpawnFailed { message: String },
    /// Dry run, never executed
    Planned,
}

impl FileOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            FileOutcome::Failed { .. } | FileOutcome::SpawnFailed { .. }
        )
    }
}

/// Knobs that do not change what gets converted
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Echo commands without running them or creating the output folder
    pub dry_run: bool,
    pub show_progress: bool,
}

/// Convert every `.dmx` file in the input folder, one at a time.
///
/// Each command line is echoed before it runs. A failed conversion is
/// recorded and the remaining files are still processed.
pub fn run_batch(
    config: &RunConfig,
    converter: &mut dyn Converter,
    options: &BatchOptions,
) -> Result<BatchReport> {
    let started = Instant::now();

    if !options.dry_run {
        prepare_output_folder(config)?;
    }
    let jobs = plan_jobs(config)?;

    let pb = if options.show_progress {
        create_progress_bar(jobs.len() as u64, "Converting")
    } else {
        ProgressBar::hidden()
    };

    let mut report = BatchReport::new(options.dry_run);
    for job in jobs {
        let command_line = job.command_line(config.converter());
        pb.suspend(|| println!("    {} {}", style("$").dim(), command_line));

        let outcome = if options.dry_run {
            FileOutcome::Planned
        } else {
            run_job(converter, config.converter(), &job)
        };

        if outcome.is_failure() {
            pb.suspend(|| {
                println!(
                    "    {} {} {}",
                    style("✗").red().bold(),
                    style(job.file_name()).red(),
                    style(describe_failure(&outcome)).dim()
                )
            });
        }

        pb.inc(1);
        report.record(job, outcome);
    }
    pb.finish_and_clear();

    report.set_elapsed(started.elapsed());
    Ok(report)
}

fn run_job(converter: &mut dyn Converter, tool: &Path, job: &ConversionJob) -> FileOutcome {
    match converter.convert(tool, job) {
        Ok(exit) if exit.success => FileOutcome::Converted,
        Ok(exit) => FileOutcome::Failed { code: exit.code },
        Err(err) => FileOutcome::SpawnFailed {
            message: err.to_string(),
        },
    }
}

/// Human-readable reason for a failed outcome
pub fn describe_failure(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Failed { code: Some(code) } => format!("(exit code {})", code),
        FileOutcome::Failed { code: None } => "(terminated by signal)".to_string(),
        FileOutcome::SpawnFailed { message } => format!("(failed to start: {})", message),
        FileOutcome::Converted | FileOutcome::Planned => String::new(),
    }
}
