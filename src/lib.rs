//! Side-by-side loader for the native PDFNet library.
//!
//! A single build of an application can ship both the 32-bit and the 64-bit
//! PDFNet binaries. This crate picks the one matching the running process and
//! loads it the first time the host fails to resolve the `PDFNet` module:
//!
//! - `arch` - Process architecture detection and subfolder names
//! - `config` - `LoaderConfig` and its builder
//! - `host` - Module host, resolution handlers and native openers
//! - `loader` - The `Loader` resolution handler
//! - `global` - Process-wide `Loader` instance
//!
//! Expected layout on disk:
//!
//! ```text
//! <base>/x86/PDFNet.dll
//! <base>/x64/PDFNet.dll
//! ```

pub mod arch;
pub mod config;
pub mod constants;
pub mod error;
pub mod global;
pub mod host;
pub mod loader;
pub mod logging;

pub use arch::Architecture;
pub use config::{LoaderConfig, LoaderConfigBuilder};
pub use error::{LoaderError, LoaderResult};
pub use host::{DylibOpener, ModuleHost, ModuleOpener, NativeModule, ResolutionHandler};
pub use loader::Loader;
