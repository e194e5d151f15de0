//! dmxbatch: Batch DMX Conversion Library
//!
//! Drives Source Filmmaker's `dmxconvert.exe` over every `.dmx` file in a
//! folder, converting between the binary and text encodings.

pub mod cli;
pub mod driver;
pub mod report;
pub mod utils;
