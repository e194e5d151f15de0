//! Setup-time failures of the converter driver.
//!
//! Each variant is a precondition that is checked before anything on disk is
//! touched, so none of them needs cleanup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a run before the first conversion
#[derive(Debug, Error)]
pub enum DriverError {
    /// `<base>/game/bin/dmxconvert.exe` does not exist.
    #[error("Can't find dmxconvert.exe at {}", path.display())]
    MissingTool {
        /// Path that was checked
        path: PathBuf,
    },

    /// The input folder does not exist.
    #[error("Can't find such folder: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input path exists but is not a directory.
    #[error("This is not a folder: {}", path.display())]
    NotAFolder { path: PathBuf },

    /// The target format was neither `binary` nor `tex`.
    #[error("Expected \"binary\" or \"tex\", got \"{value}\"")]
    InvalidChoice { value: String },

    /// Reading an answer from the terminal failed (e.g. stdin is not a terminal).
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl DriverError {
    /// Short label used when printing the error header
    pub fn kind(&self) -> &'static str {
        match self {
            DriverError::MissingTool { .. } => "missing tool",
            DriverError::NotFound { .. } => "not found",
            DriverError::NotAFolder { .. } => "not a folder",
            DriverError::InvalidChoice { .. } => "invalid choice",
            DriverError::Prompt(_) => "prompt",
        }
    }
}

impl From<dialoguer::Error> for DriverError {
    fn from(err: dialoguer::Error) -> Self {
        DriverError::Prompt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_message_contains_path() {
        let err = DriverError::MissingTool {
            path: PathBuf::from("/sfm/game/bin/dmxconvert.exe"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Can't find dmxconvert.exe at"));
        assert!(msg.contains("dmxconvert.exe"));
        assert_eq!(err.kind(), "missing tool");
    }

    #[test]
    fn test_invalid_choice_message() {
        let err = DriverError::InvalidChoice {
            value: "foo".to_string(),
        };
        assert_eq!(err.to_string(), "Expected \"binary\" or \"tex\", got \"foo\"");
    }
}
