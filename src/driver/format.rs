//! DMX encodings understood by dmxconvert

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::DriverError;

/// One of the two encodings dmxconvert reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DmxFormat {
    /// Compact binary encoding
    Binary,
    /// Human-readable keyvalues2 text encoding
    Tex,
}

impl DmxFormat {
    /// Both formats, in prompt order
    pub const ALL: [DmxFormat; 2] = [DmxFormat::Binary, DmxFormat::Tex];

    /// Name passed to dmxconvert's `-ie` / `-of` flags and used as the output folder name
    pub fn as_str(self) -> &'static str {
        match self {
            DmxFormat::Binary => "binary",
            DmxFormat::Tex => "tex",
        }
    }

    /// The other format. Converting *to* `self` always means converting *from* this.
    pub fn complement(self) -> DmxFormat {
        match self {
            DmxFormat::Binary => DmxFormat::Tex,
            DmxFormat::Tex => DmxFormat::Binary,
        }
    }
}

impl fmt::Display for DmxFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DmxFormat {
    type Err = DriverError;

    /// Accepts exactly `"binary"` or `"tex"`, case-sensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(DmxFormat::Binary),
            "tex" => Ok(DmxFormat::Tex),
            other => Err(DriverError::InvalidChoice {
                value: other.to_string(),
            }),
        }
    }
}
