//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices.
//!
//! Structure:
//! - integration: Host + loader workflows, including the process-wide instance
//! - unit: Single-component unit tests

mod helpers;
mod integration;
mod unit;
