//! Integration tests for pdfnet-loader.
//!
//! These tests verify the loader and host together, end-to-end.

mod global_tests;
