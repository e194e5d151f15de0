//! Planning of per-file conversion jobs

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};

use super::config::RunConfig;
use super::format::DmxFormat;

/// File name suffix a directory entry must carry to be converted
pub const DMX_SUFFIX: &str = ".dmx";

/// A single dmxconvert invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionJob {
    #[serde(serialize_with = "serialize_lossy")]
    pub input: PathBuf,
    #[serde(serialize_with = "serialize_lossy")]
    pub output: PathBuf,
    pub source: DmxFormat,
    pub target: DmxFormat,
}

impl ConversionJob {
    /// Arguments passed to dmxconvert, one path per argument so spaces survive
    pub fn args(&self) -> Vec<OsString> {
        vec![
            "-i".into(),
            self.input.clone().into_os_string(),
            "-ie".into(),
            self.source.as_str().into(),
            "-o".into(),
            self.output.clone().into_os_string(),
            "-of".into(),
            self.target.as_str().into(),
        ]
    }

    /// Command line as echoed to the console, with paths wrapped in quotes
    pub fn command_line(&self, converter: &Path) -> String {
        format!(
            "\"{}\" -i \"{}\" -ie {} -o \"{}\" -of {}",
            converter.display(),
            self.input.display(),
            self.source,
            self.output.display(),
            self.target
        )
    }

    /// File name shown in summaries
    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// Whether a file name qualifies for conversion (literal `.dmx` suffix).
///
/// Compared on raw bytes so names that are not valid UTF-8 still match.
pub fn is_dmx_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(DMX_SUFFIX.as_bytes())
}

/// List one job per regular `.dmx` file directly inside the input folder.
///
/// Subfolders (including a previous output folder) are never descended into.
/// Jobs are sorted by file name.
pub fn plan_jobs(config: &RunConfig) -> Result<Vec<ConversionJob>> {
    let input_folder = config.input_folder();
    let entries = fs::read_dir(input_folder)
        .with_context(|| format!("Failed to read folder: {}", input_folder.display()))?;

    let mut jobs = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in: {}", input_folder.display()))?;
        let path = entry.path();

        // Follows symlinks, like a plain is-file check would
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        if !is_dmx_name(&file_name) {
            continue;
        }

        jobs.push(ConversionJob {
            output: config.output_folder().join(&file_name),
            input: path,
            source: config.source(),
            target: config.target(),
        });
    }

    jobs.sort_by(|a, b| a.input.cmp(&b.input));
    Ok(jobs)
}

/// Create the output folder if it does not exist yet. Existing contents are kept.
pub fn prepare_output_folder(config: &RunConfig) -> Result<()> {
    let output = config.output_folder();
    if !output.is_dir() {
        fs::create_dir(output)
            .with_context(|| format!("Failed to create output folder: {}", output.display()))?;
    }
    Ok(())
}
