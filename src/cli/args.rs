//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::driver::RunRequest;

/// dmxbatch - Convert a folder of DMX files between binary and text encodings
#[derive(Parser, Debug)]
#[command(name = "dmxbatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source Filmmaker folder (the one containing game/bin/dmxconvert.exe).
    /// Asked for interactively if not provided.
    #[arg(short, long, env = "SFM_PATH")]
    pub base: Option<PathBuf>,

    /// Folder with the DMX files to convert (not searched recursively).
    /// Asked for interactively if not provided.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Target format: "binary" or "tex". The source format is the other one.
    /// Asked for interactively if not provided.
    #[arg(short, long)]
    pub to: Option<String>,

    /// Print the dmxconvert commands without running them or creating the output folder
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    /// Write a JSON report of every processed file to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long, default_value = "false")]
    pub no_progress: bool,
}

impl Cli {
    /// Values known before any prompting
    pub fn run_request(&self) -> RunRequest {
        RunRequest {
            base: self.base.clone(),
            input: self.input.clone(),
            target: self.to.clone(),
        }
    }
}
