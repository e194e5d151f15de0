//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dmxbatch::driver::{
    converter_path, ConversionJob, Converter, DriverError, ExitReport, Prompter,
};
use tempfile::TempDir;

/// A fake SFM install plus an input folder, both inside one temp dir
pub struct Workspace {
    pub dir: TempDir,
    pub base: PathBuf,
    pub input: PathBuf,
}

impl Workspace {
    /// SFM folder with `game/bin/dmxconvert.exe` and an empty `my models/` input folder
    pub fn new() -> Self {
        let ws = Self::without_converter();
        let converter = converter_path(&ws.base);
        fs::create_dir_all(converter.parent().unwrap()).unwrap();
        fs::write(&converter, b"").unwrap();
        ws
    }

    /// Same layout but `dmxconvert.exe` is missing
    pub fn without_converter() -> Self {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("SFM");
        let input = dir.path().join("my models");
        fs::create_dir_all(&base).unwrap();
        fs::create_dir_all(&input).unwrap();
        Self { dir, base, input }
    }

    pub fn add_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.input.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn add_folder(&self, name: &str) -> PathBuf {
        let path = self.input.join(name);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn converter(&self) -> PathBuf {
        converter_path(&self.base)
    }
}

/// Prompter answering from fixed values and counting how often it was asked
#[derive(Default)]
pub struct ScriptedPrompter {
    pub base: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub target: Option<String>,
    pub asked_base: usize,
    pub asked_input: usize,
    pub asked_target: usize,
}

impl ScriptedPrompter {
    pub fn new(base: &Path, input: &Path, target: &str) -> Self {
        Self {
            base: Some(base.to_path_buf()),
            input: Some(input.to_path_buf()),
            target: Some(target.to_string()),
            ..Default::default()
        }
    }

    fn answer<T: Clone>(value: &Option<T>, counter: &mut usize) -> Result<T, DriverError> {
        *counter += 1;
        value
            .clone()
            .ok_or_else(|| DriverError::Prompt("no scripted answer".to_string()))
    }
}

impl Prompter for ScriptedPrompter {
    fn base_folder(&mut self) -> Result<PathBuf, DriverError> {
        Self::answer(&self.base, &mut self.asked_base)
    }

    fn input_folder(&mut self) -> Result<PathBuf, DriverError> {
        Self::answer(&self.input, &mut self.asked_input)
    }

    fn target_format(&mut self) -> Result<String, DriverError> {
        Self::answer(&self.target, &mut self.asked_target)
    }
}

/// Converter that copies input to output instead of spawning a process
#[derive(Default)]
pub struct RecordingConverter {
    pub calls: Vec<ConversionJob>,
    /// File names that report exit code 1
    pub failing: HashSet<String>,
    /// File names that cannot be started
    pub unstartable: HashSet<String>,
}

impl RecordingConverter {
    pub fn failing(names: &[&str]) -> Self {
        Self {
            failing: names.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn called_names(&self) -> Vec<String> {
        self.calls.iter().map(|j| j.file_name()).collect()
    }
}

impl Converter for RecordingConverter {
    fn convert(&mut self, _converter: &Path, job: &ConversionJob) -> io::Result<ExitReport> {
        self.calls.push(job.clone());
        let name = job.file_name();
        if self.unstartable.contains(&name) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        if self.failing.contains(&name) {
            return Ok(ExitReport::failure(Some(1)));
        }
        fs::copy(&job.input, &job.output)?;
        Ok(ExitReport::success())
    }
}

/// Sorted names of the direct entries of a folder
pub fn entry_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
