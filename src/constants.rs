//! Fixed names making up the on-disk layout.
//!
//! The loader looks for `<base>/<arch>/PDFNET_LIBRARY_FILE`, where `<base>`
//! defaults to the application directory joined with `PDFNET_SUBFOLDER`.

// ============================================================================
// Layout
// ============================================================================

/// Subfolder of the application directory holding the architecture folders
pub const PDFNET_SUBFOLDER: &str = "PDFNet";

/// File name of the native library inside each architecture folder
pub const PDFNET_LIBRARY_FILE: &str = "PDFNet.dll";

/// Folder name for 32-bit binaries
pub const X86_SUBFOLDER: &str = "x86";

/// Folder name for 64-bit binaries
pub const X64_SUBFOLDER: &str = "x64";

// ============================================================================
// Module Identity
// ============================================================================

/// Prefix of the fully qualified module name the loader answers for.
/// Full names look like `PDFNet, Version=9.4.0.0, Culture=neutral`.
pub const PDFNET_MODULE_PREFIX: &str = "PDFNet,";

// ============================================================================
// Logging
// ============================================================================

/// Filter used by `logging::init` when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "pdfnet_loader=info";
