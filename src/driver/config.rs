//! Run configuration gathering and validation
//!
//! The three user-supplied values (SFM folder, input folder, target format)
//! are resolved one at a time, each validated before the next is asked for,
//! and frozen into a [`RunConfig`] before anything on disk is changed.

use std::path::{Path, PathBuf};

use super::error::DriverError;
use super::format::DmxFormat;

/// Location of the converter relative to the SFM folder
const CONVERTER_RELATIVE: [&str; 3] = ["game", "bin", "dmxconvert.exe"];

/// Source of answers for values not given up front
///
/// Implemented by the dialoguer-backed terminal prompter and by scripted
/// prompters in tests.
pub trait Prompter {
    /// Ask for the SFM install folder
    fn base_folder(&mut self) -> Result<PathBuf, DriverError>;

    /// Ask for the folder holding the DMX files
    fn input_folder(&mut self) -> Result<PathBuf, DriverError>;

    /// Ask for the target format, returning the raw answer
    fn target_format(&mut self) -> Result<String, DriverError>;
}

/// Values already known before prompting (flags, environment)
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub base: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub target: Option<String>,
}

/// Validated, immutable settings for one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    base_folder: PathBuf,
    converter: PathBuf,
    input_folder: PathBuf,
    output_folder: PathBuf,
    target: DmxFormat,
}

impl RunConfig {
    /// Validate all three inputs in order: converter, input folder, target format.
    pub fn new(
        base_folder: impl Into<PathBuf>,
        input_folder: impl Into<PathBuf>,
        target: &str,
    ) -> Result<Self, DriverError> {
        let base_folder = base_folder.into();
        let converter = locate_converter(&base_folder)?;
        let input_folder = validate_input_folder(input_folder)?;
        let target: DmxFormat = target.parse()?;
        Ok(Self::from_parts(base_folder, converter, input_folder, target))
    }

    fn from_parts(
        base_folder: PathBuf,
        converter: PathBuf,
        input_folder: PathBuf,
        target: DmxFormat,
    ) -> Self {
        let output_folder = input_folder.join(target.as_str());
        Self {
            base_folder,
            converter,
            input_folder,
            output_folder,
            target,
        }
    }

    pub fn base_folder(&self) -> &Path {
        &self.base_folder
    }

    /// Path to dmxconvert.exe
    pub fn converter(&self) -> &Path {
        &self.converter
    }

    pub fn input_folder(&self) -> &Path {
        &self.input_folder
    }

    /// `<input>/<target>`
    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    pub fn target(&self) -> DmxFormat {
        self.target
    }

    /// Always the complement of the target
    pub fn source(&self) -> DmxFormat {
        self.target.complement()
    }
}

/// `<base>/game/bin/dmxconvert.exe`
pub fn converter_path(base: &Path) -> PathBuf {
    CONVERTER_RELATIVE
        .iter()
        .fold(base.to_path_buf(), |path, part| path.join(part))
}

/// Return the converter path if it exists under `base`
pub fn locate_converter(base: &Path) -> Result<PathBuf, DriverError> {
    let path = converter_path(base);
    if path.exists() {
        Ok(path)
    } else {
        Err(DriverError::MissingTool { path })
    }
}

/// Check that `path` exists and is a directory
pub fn validate_input_folder(path: impl Into<PathBuf>) -> Result<PathBuf, DriverError> {
    let path = path.into();
    if !path.exists() {
        return Err(DriverError::NotFound { path });
    }
    if !path.is_dir() {
        return Err(DriverError::NotAFolder { path });
    }
    Ok(path)
}

/// Resolve a [`RunConfig`], asking `prompter` for anything `request` lacks.
///
/// A value is only asked for once the previous one has been validated, so a
/// missing converter never leads to a question about the input folder.
pub fn gather_config(
    request: &RunRequest,
    prompter: &mut dyn Prompter,
) -> Result<RunConfig, DriverError> {
    let base_folder = match &request.base {
        Some(base) => base.clone(),
        None => prompter.base_folder()?,
    };
    let converter = locate_converter(&base_folder)?;

    let input_folder = match &request.input {
        Some(input) => input.clone(),
        None => prompter.input_folder()?,
    };
    let input_folder = validate_input_folder(input_folder)?;

    let target = match &request.target {
        Some(target) => target.clone(),
        None => prompter.target_format()?,
    };
    let target: DmxFormat = target.parse()?;

    Ok(RunConfig::from_parts(
        base_folder,
        converter,
        input_folder,
        target,
    ))
}
