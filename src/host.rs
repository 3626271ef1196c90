//! Module host abstraction.
//!
//! `ModuleHost` stands in for the runtime's module loader. A module is looked
//! up among the already loaded ones first; only when that fails are the
//! registered [`ResolutionHandler`]s asked, in registration order.
//!
//! Actual native loading goes through a [`ModuleOpener`] so tests can
//! observe computed paths without touching the filesystem.

use crate::error::{LoaderError, LoaderResult};
use libloading::Library;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Opens a native module from a path.
pub trait ModuleOpener: Send + Sync {
    type Module: Clone + Send + Sync + 'static;

    fn open(&self, path: &Path) -> LoaderResult<Self::Module>;
}

/// Callback invoked when the host cannot find a module.
///
/// `Ok(None)` means "not mine": the host moves on to the next handler.
/// Errors are not retried and reach the caller of [`ModuleHost::resolve`].
pub trait ResolutionHandler<M>: Send + Sync {
    fn resolve(&self, name: &str) -> LoaderResult<Option<M>>;
}

impl<M, F> ResolutionHandler<M> for F
where
    F: Fn(&str) -> LoaderResult<Option<M>> + Send + Sync,
{
    fn resolve(&self, name: &str) -> LoaderResult<Option<M>> {
        self(name)
    }
}

// ============================================================================
// Native modules
// ============================================================================

/// A native library loaded from disk.
///
/// Clones share the same underlying handle; the library stays loaded
/// until the last clone is dropped.
#[derive(Debug, Clone)]
pub struct NativeModule {
    path: PathBuf,
    library: Arc<Library>,
}

impl NativeModule {
    /// Path the library was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn library(&self) -> &Library {
        &self.library
    }
}

/// Loads modules with `libloading`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DylibOpener;

impl ModuleOpener for DylibOpener {
    type Module = NativeModule;

    fn open(&self, path: &Path) -> LoaderResult<NativeModule> {
        // SAFETY: loading runs the library's initialization routines. The
        // library is a trusted binary shipped next to the application.
        let library = unsafe { Library::new(path) }.map_err(|source| LoaderError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(NativeModule {
            path: path.to_path_buf(),
            library: Arc::new(library),
        })
    }
}

// ============================================================================
// Host
// ============================================================================

/// Registry of loaded modules and resolution handlers.
pub struct ModuleHost<M = NativeModule> {
    loaded: RwLock<HashMap<String, M>>,
    handlers: RwLock<Vec<Arc<dyn ResolutionHandler<M>>>>,
}

impl<M: Clone> Default for ModuleHost<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Clone> ModuleHost<M> {
    pub fn new() -> Self {
        Self {
            loaded: RwLock::new(HashMap::new()),
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Append a handler. Handlers are never removed.
    pub fn register(&self, handler: Arc<dyn ResolutionHandler<M>>) {
        let mut handlers = self.handlers.write();
        handlers.push(handler);
        tracing::debug!(handlers = handlers.len(), "Registered resolution handler");
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Module previously resolved under `name`, if any.
    pub fn loaded(&self, name: &str) -> Option<M> {
        self.loaded.read().get(name).cloned()
    }

    /// Resolve a module by name.
    ///
    /// Returns the cached module when present. Otherwise the first handler
    /// returning `Some` wins and its module is cached, and the first handler
    /// error aborts resolution.
    pub fn resolve(&self, name: &str) -> LoaderResult<M> {
        if let Some(module) = self.loaded(name) {
            return Ok(module);
        }

        // Handlers may register further handlers, so don't hold the lock
        let handlers: Vec<_> = self.handlers.read().iter().cloned().collect();
        for handler in handlers {
            if let Some(module) = handler.resolve(name)? {
                // A concurrent resolve may have won; keep the first module
                let module = self
                    .loaded
                    .write()
                    .entry(name.to_string())
                    .or_insert(module)
                    .clone();
                return Ok(module);
            }
        }

        tracing::trace!(name, "No handler resolved module");
        Err(LoaderError::NotResolved(name.to_string()))
    }
}
