//! Process architecture detection.
//!
//! The architecture is determined once, from the pointer width of the
//! running process, and then carried around as a plain value.

use crate::constants::{X64_SUBFOLDER, X86_SUBFOLDER};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which build of the native library to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// 32-bit process (4-byte pointers)
    X86,
    /// 64-bit process (8-byte pointers)
    X64,
}

impl Architecture {
    /// Architecture of the current process.
    pub fn current() -> Self {
        Self::from_pointer_width(std::mem::size_of::<usize>())
    }

    /// 8-byte pointers mean 64-bit; anything else is treated as 32-bit.
    pub fn from_pointer_width(bytes: usize) -> Self {
        if bytes == 8 { Self::X64 } else { Self::X86 }
    }

    /// Pointer width in bytes.
    pub fn pointer_width(self) -> usize {
        match self {
            Self::X86 => 4,
            Self::X64 => 8,
        }
    }

    /// Name of the folder holding this build, relative to the base path.
    pub fn subfolder(self) -> &'static str {
        match self {
            Self::X86 => X86_SUBFOLDER,
            Self::X64 => X64_SUBFOLDER,
        }
    }
}

impl Default for Architecture {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subfolder())
    }
}

impl FromStr for Architecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x86" | "32" => Ok(Self::X86),
            "x64" | "64" => Ok(Self::X64),
            other => Err(format!("Unknown architecture: {}", other)),
        }
    }
}
