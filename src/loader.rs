//! The PDFNet resolution handler.
//!
//! A `Loader` answers resolution requests for the `PDFNet` module by loading
//! `<base>/<x86|x64>/PDFNet.dll` and ignores every other module name.

use crate::arch::Architecture;
use crate::config::LoaderConfig;
use crate::error::LoaderResult;
use crate::host::{DylibOpener, ModuleHost, ModuleOpener, ResolutionHandler};
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;

/// Loads the architecture-specific build of the native library on demand.
///
/// # Example
/// ```ignore
/// let host = ModuleHost::new();
/// let loader = Arc::new(Loader::new(
///     LoaderConfig::builder().base_path("/opt/app/libs").build(),
/// ));
/// loader.register(&host);
///
/// let module = host.resolve("PDFNet, Version=9.4.0.0, Culture=neutral")?;
/// ```
#[derive(Debug)]
pub struct Loader<O: ModuleOpener = DylibOpener> {
    base_path: RwLock<PathBuf>,
    architecture: Architecture,
    library_file_name: String,
    module_prefix: String,
    opener: O,
}

impl Loader {
    pub fn new(config: LoaderConfig) -> Self {
        Self::with_opener(config, DylibOpener)
    }
}

impl<O: ModuleOpener> Loader<O> {
    /// Build a loader that opens modules through `opener`.
    pub fn with_opener(config: LoaderConfig, opener: O) -> Self {
        tracing::debug!(
            base_path = %config.base_path.display(),
            architecture = %config.architecture,
            "Created native library loader"
        );
        Self {
            base_path: RwLock::new(config.base_path),
            architecture: config.architecture,
            library_file_name: config.library_file_name,
            module_prefix: config.module_prefix,
            opener,
        }
    }

    /// Change the directory containing the `x86` and `x64` folders.
    ///
    /// The path is not checked here; a bad path shows up as a load error
    /// on the next resolution.
    pub fn with_path(&self, path: impl Into<PathBuf>) -> &Self {
        let path = path.into();
        tracing::debug!(base_path = %path.display(), "Set native library base path");
        *self.base_path.write() = path;
        self
    }

    pub fn base_path(&self) -> PathBuf {
        self.base_path.read().clone()
    }

    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Whether `name` refers to the module this loader provides.
    pub fn matches(&self, name: &str) -> bool {
        name.starts_with(&self.module_prefix)
    }

    /// Full path of the library build for this loader's architecture.
    pub fn module_path(&self) -> PathBuf {
        self.base_path
            .read()
            .join(self.architecture.subfolder())
            .join(&self.library_file_name)
    }

    /// Load the module if `name` is ours.
    ///
    /// Returns `Ok(None)` without touching the filesystem for other names.
    /// Load failures are returned as is.
    pub fn resolve(&self, name: &str) -> LoaderResult<Option<O::Module>> {
        if !self.matches(name) {
            tracing::trace!(name, "Not a PDFNet module, skipping");
            return Ok(None);
        }

        let path = self.module_path();
        match self.opener.open(&path) {
            Ok(module) => {
                tracing::info!(
                    path = %path.display(),
                    architecture = %self.architecture,
                    "Loaded native library"
                );
                Ok(Some(module))
            }
            Err(e) => {
                tracing::error!("Failed to load {}: {}", name, e);
                Err(e)
            }
        }
    }

    /// Register this loader as a resolution handler on `host`.
    pub fn register(self: &Arc<Self>, host: &ModuleHost<O::Module>)
    where
        O: 'static,
    {
        host.register(self.clone());
    }
}

impl<O: ModuleOpener> ResolutionHandler<O::Module> for Loader<O> {
    fn resolve(&self, name: &str) -> LoaderResult<Option<O::Module>> {
        Loader::resolve(self, name)
    }
}
