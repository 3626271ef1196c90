//! Loader configuration.
//!
//! `LoaderConfig` is a plain struct populated before the loader is built.
//! It can come from the builder or be embedded in a host's JSON settings.

use crate::arch::Architecture;
use crate::constants::{PDFNET_LIBRARY_FILE, PDFNET_MODULE_PREFIX, PDFNET_SUBFOLDER};
use crate::error::LoaderResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings used to construct a [`crate::Loader`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Directory containing the `x86` and `x64` folders
    pub base_path: PathBuf,
    /// Build to load; detected from the process when not configured
    pub architecture: Architecture,
    /// File name inside the architecture folder
    pub library_file_name: String,
    /// Module names starting with this prefix are handled by the loader
    pub module_prefix: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            architecture: Architecture::current(),
            library_file_name: PDFNET_LIBRARY_FILE.to_string(),
            module_prefix: PDFNET_MODULE_PREFIX.to_string(),
        }
    }
}

impl LoaderConfig {
    pub fn builder() -> LoaderConfigBuilder {
        LoaderConfigBuilder::new()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> LoaderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> LoaderResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Builder for [`LoaderConfig`].
///
/// # Example
/// ```ignore
/// let config = LoaderConfig::builder()
///     .base_path("/opt/app/libs")
///     .architecture(Architecture::X64)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoaderConfigBuilder {
    config: LoaderConfig,
}

impl LoaderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory containing the architecture folders.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.base_path = path.into();
        self
    }

    /// Override the detected architecture.
    pub fn architecture(mut self, architecture: Architecture) -> Self {
        self.config.architecture = architecture;
        self
    }

    pub fn library_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.library_file_name = name.into();
        self
    }

    pub fn module_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.module_prefix = prefix.into();
        self
    }

    pub fn build(self) -> LoaderConfig {
        self.config
    }
}

/// The `PDFNet` folder under the application base directory.
pub fn default_base_path() -> PathBuf {
    application_base_dir().join(PDFNET_SUBFOLDER)
}

/// Directory of the running executable.
///
/// Falls back to the current working directory, then to `.`.
pub fn application_base_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            return parent.to_path_buf();
        }
    }

    match std::env::current_dir() {
        Ok(cwd) => {
            tracing::warn!(cwd = %cwd.display(), "Executable directory unavailable, using working directory");
            cwd
        }
        Err(e) => {
            tracing::warn!("Could not determine application directory: {}", e);
            PathBuf::from(".")
        }
    }
}
