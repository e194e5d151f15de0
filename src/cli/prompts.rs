//! Interactive prompts using dialoguer
//!
//! When stderr is not a terminal (answers piped in) prompts fall back to
//! plain line reads from stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use console::Term;
use dialoguer::Input;

use crate::driver::{DriverError, Prompter};

/// Asks the user on the terminal for anything not given as a flag
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn base_folder(&mut self) -> Result<PathBuf, DriverError> {
        let answer = ask("Enter full path to the SFM folder")?;
        Ok(clean_path_answer(&answer))
    }

    fn input_folder(&mut self) -> Result<PathBuf, DriverError> {
        let answer = ask("Enter full path to the folder with DMX files")?;
        Ok(clean_path_answer(&answer))
    }

    fn target_format(&mut self) -> Result<String, DriverError> {
        // Taken verbatim: " tex" is not "tex"
        ask("Convert DMX to \"binary\" or \"tex\"?")
    }
}

fn ask(prompt: &str) -> Result<String, DriverError> {
    if Term::stderr().is_term() {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        return Ok(answer);
    }

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", prompt).map_err(|e| DriverError::Prompt(e.to_string()))?;
    stdout
        .flush()
        .map_err(|e| DriverError::Prompt(e.to_string()))?;
    read_answer_line(&mut io::stdin().lock())
}

/// Read one answer line, dropping only the line terminator.
///
/// An empty line is a valid (empty) answer; end of input is an error.
pub fn read_answer_line<R: BufRead>(reader: &mut R) -> Result<String, DriverError> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| DriverError::Prompt(e.to_string()))?;
    if read == 0 {
        return Err(DriverError::Prompt("unexpected end of input".to_string()));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Turn a typed or pasted path into a `PathBuf`.
///
/// Trims whitespace, strips one pair of surrounding double quotes (Explorer's
/// "Copy as path") and expands a leading `~` to the home directory.
pub fn clean_path_answer(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    expand_home(unquoted)
}

fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
            .or_else(|| path.strip_prefix("~\\"))
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
