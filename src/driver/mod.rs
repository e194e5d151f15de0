//! Driver module - resolves the run configuration and converts the batch

pub mod config;
pub mod error;
pub mod format;
pub mod jobs;
pub mod runner;

pub use config::*;
pub use error::DriverError;
pub use format::DmxFormat;
pub use jobs::*;
pub use runner::*;
