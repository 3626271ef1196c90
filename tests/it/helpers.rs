//! Test helpers for exercising the loader without real native libraries.
//!
//! This module provides:
//! - `RecordingOpener` - A `ModuleOpener` that records every path it is asked to open
//! - `TestLayout` - A temporary `<base>/<arch>/PDFNet.dll` directory tree
//! - Common module names

use parking_lot::Mutex;
use pdfnet_loader::{Architecture, Loader, LoaderConfig, LoaderError, LoaderResult, ModuleOpener};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Fully qualified name of the PDFNet module as a host would request it.
pub const PDFNET_NAME: &str = "PDFNet, Version=9.4.0.0, Culture=neutral, PublicKeyToken=null";

/// A module name the loader must ignore.
pub const OTHER_NAME: &str = "System.Xml, Version=4.0.0.0, Culture=neutral";

// ============================================================================
// RecordingOpener
// ============================================================================

/// Opener that "loads" a module by returning its path.
///
/// Clones share the same record so a test can keep a handle after moving
/// the opener into a loader.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<PathBuf>>>,
    fail: bool,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// An opener whose every open fails with `LoaderError::Other`.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().clone()
    }

    pub fn open_count(&self) -> usize {
        self.opened.lock().len()
    }
}

impl ModuleOpener for RecordingOpener {
    type Module = PathBuf;

    fn open(&self, path: &Path) -> LoaderResult<PathBuf> {
        self.opened.lock().push(path.to_path_buf());
        if self.fail {
            return Err(LoaderError::Other(format!("refused {}", path.display())));
        }
        Ok(path.to_path_buf())
    }
}

/// Loader over a `RecordingOpener`, with the opener handle for assertions.
pub fn recording_loader(
    base_path: impl Into<PathBuf>,
    architecture: Architecture,
) -> (Loader<RecordingOpener>, RecordingOpener) {
    let opener = RecordingOpener::new();
    let config = LoaderConfig::builder()
        .base_path(base_path)
        .architecture(architecture)
        .build();
    (Loader::with_opener(config, opener.clone()), opener)
}

// ============================================================================
// TestLayout
// ============================================================================

/// Temporary directory laid out like a deployed application.
pub struct TestLayout {
    dir: TempDir,
}

impl TestLayout {
    /// Create `x86/PDFNet.dll` and `x64/PDFNet.dll` with placeholder contents.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        for arch in [Architecture::X86, Architecture::X64] {
            let folder = dir.path().join(arch.subfolder());
            fs::create_dir_all(&folder).unwrap();
            fs::write(folder.join("PDFNet.dll"), format!("not a real {} binary", arch)).unwrap();
        }
        Self { dir }
    }

    /// Empty base directory with no architecture folders.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn base(&self) -> &Path {
        self.dir.path()
    }
}
