//! Batch report export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use super::summary::{BatchEntry, BatchReport};
use crate::driver::{DmxFormat, RunConfig};

/// Metadata about the batch run
#[derive(Serialize)]
pub struct BatchMetadata {
    /// Timestamp of the export (ISO 8601 format)
    pub timestamp: String,
    pub dmxbatch_version: String,
    pub converter: String,
    pub input_folder: String,
    pub output_folder: String,
    pub source_format: DmxFormat,
    pub target_format: DmxFormat,
    pub dry_run: bool,
}

/// Totals for the batch
#[derive(Serialize)]
pub struct BatchTotals {
    pub files: usize,
    pub converted: usize,
    pub failed: usize,
    pub planned: usize,
    pub elapsed_seconds: f64,
}

/// Complete batch export
#[derive(Serialize)]
pub struct BatchExport<'a> {
    pub metadata: BatchMetadata,
    pub summary: BatchTotals,
    pub files: &'a [BatchEntry],
}

impl<'a> BatchExport<'a> {
    pub fn new(config: &RunConfig, report: &'a BatchReport) -> Self {
        Self {
            metadata: BatchMetadata {
                timestamp: Utc::now().to_rfc3339(),
                dmxbatch_version: env!("CARGO_PKG_VERSION").to_string(),
                converter: config.converter().display().to_string(),
                input_folder: config.input_folder().display().to_string(),
                output_folder: config.output_folder().display().to_string(),
                source_format: config.source(),
                target_format: config.target(),
                dry_run: report.dry_run,
            },
            summary: BatchTotals {
                files: report.total(),
                converted: report.converted(),
                failed: report.failed(),
                planned: report.planned(),
                elapsed_seconds: report.elapsed.as_secs_f64(),
            },
            files: &report.entries,
        }
    }
}

/// Write the batch report to `output_path` as pretty-printed JSON
pub fn export_batch_report(
    config: &RunConfig,
    report: &BatchReport,
    output_path: &Path,
) -> Result<()> {
    let export = BatchExport::new(config, report);

    let json =
        serde_json::to_string_pretty(&export).context("Failed to serialize batch report to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write batch report to {}", output_path.display()))?;

    Ok(())
}
