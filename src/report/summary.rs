//! Batch summary report generation

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

use crate::driver::{describe_failure, ConversionJob, FileOutcome};

/// One processed file
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    #[serde(flatten)]
    pub job: ConversionJob,
    pub outcome: FileOutcome,
}

/// Outcome of a whole batch, in processing order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub dry_run: bool,
    pub entries: Vec<BatchEntry>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    pub fn record(&mut self, job: ConversionJob, outcome: FileOutcome) {
        self.entries.push(BatchEntry { job, outcome });
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn converted(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Converted))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Planned))
    }

    pub fn failed(&self) -> usize {
        self.count(FileOutcome::is_failure)
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Entries whose conversion did not succeed
    pub fn failures(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter().filter(|e| e.outcome.is_failure())
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("BATCH SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 DMX Files Found"), Cell::new(self.total())]);

        if self.dry_run {
            table.add_row(vec![
                Cell::new("📝 Planned (dry run)"),
                Cell::new(self.planned()).fg(Color::Cyan),
            ]);
        } else {
            table.add_row(vec![
                Cell::new("✅ Converted"),
                Cell::new(self.converted())
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
            ]);
            table.add_row(vec![
                Cell::new("❌ Failed"),
                Cell::new(self.failed()).fg(if self.has_failures() {
                    Color::Red
                } else {
                    Color::White
                }),
            ]);
        }

        table.add_row(vec![
            Cell::new("⏱  Elapsed"),
            Cell::new(format!("{:.2}s", self.elapsed.as_secs_f64())),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if self.has_failures() {
            println!();
            println!(
                "    {} {}",
                style("📝").cyan(),
                style("FAILED FILES").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            println!();
            for entry in self.failures() {
                println!(
                    "        {} {} {}",
                    style("•").dim(),
                    entry.job.file_name(),
                    style(describe_failure(&entry.outcome)).dim()
                );
            }
        }
    }
}
