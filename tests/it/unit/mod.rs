//! Unit tests for pdfnet-loader.
