//! Process-wide loader instance.
//!
//! For applications that want a single call at startup:
//!
//! ```ignore
//! pdfnet_loader::global::instance().with_path("/opt/app/libs");
//! let module = pdfnet_loader::global::host().resolve("PDFNet, Version=9.4.0.0")?;
//! ```
//!
//! The first access creates the loader and registers it with [`host`].
//! Code that can pass a [`Loader`] around explicitly should do that instead.

use crate::config::LoaderConfig;
use crate::error::{LoaderError, LoaderResult};
use crate::host::ModuleHost;
use crate::loader::Loader;
use once_cell::sync::{Lazy, OnceCell};
use std::sync::Arc;

static HOST: Lazy<ModuleHost> = Lazy::new(ModuleHost::new);

static INSTANCE: OnceCell<Arc<Loader>> = OnceCell::new();

/// The host the global loader is registered with.
pub fn host() -> &'static ModuleHost {
    &HOST
}

/// The global loader, created with default settings on first call.
pub fn instance() -> &'static Loader {
    INSTANCE.get_or_init(|| create(LoaderConfig::default()))
}

/// Create the global loader from `config`.
///
/// Fails with [`LoaderError::AlreadyInitialized`] once the loader exists,
/// whether it was created here or by [`instance`].
pub fn init(config: LoaderConfig) -> LoaderResult<&'static Loader> {
    let mut created = false;
    let loader = INSTANCE.get_or_init(|| {
        created = true;
        create(config)
    });

    if created {
        Ok(loader)
    } else {
        Err(LoaderError::AlreadyInitialized)
    }
}

/// Whether the global loader has been created.
pub fn is_initialized() -> bool {
    INSTANCE.get().is_some()
}

fn create(config: LoaderConfig) -> Arc<Loader> {
    let loader = Arc::new(Loader::new(config));
    loader.register(host());
    loader
}
