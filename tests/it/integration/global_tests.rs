//! Process-wide loader tests.
//!
//! These share one global instance across the whole test binary, so only
//! `test_global_with_path_applies_to_resolution` changes its base path.

use crate::helpers::{OTHER_NAME, PDFNET_NAME};
use pdfnet_loader::{global, LoaderConfig, LoaderError};
use std::thread;

#[test]
fn test_instance_is_identical() {
    let first = global::instance();
    let second = global::instance();
    assert!(std::ptr::eq(first, second));
    assert!(global::is_initialized());
}

#[test]
fn test_instance_registers_once() {
    for _ in 0..3 {
        global::instance();
    }
    assert_eq!(global::host().handler_count(), 1);
}

#[test]
fn test_concurrent_first_access() {
    let addresses: Vec<usize> = (0..8)
        .map(|_| thread::spawn(|| global::instance() as *const _ as usize))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(global::host().handler_count(), 1);
}

#[test]
fn test_init_after_instance_fails() {
    global::instance();
    let err = global::init(LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, LoaderError::AlreadyInitialized));
}

#[test]
fn test_global_ignores_other_modules() {
    global::instance();
    let err = global::host().resolve(OTHER_NAME).unwrap_err();
    assert!(matches!(err, LoaderError::NotResolved(_)));
}

#[test]
fn test_global_with_path_applies_to_resolution() {
    let dir = tempfile::tempdir().unwrap();
    global::instance().with_path(dir.path());

    let err = global::host().resolve(PDFNET_NAME).unwrap_err();

    match err {
        LoaderError::Load { path, .. } => assert!(path.starts_with(dir.path())),
        other => panic!("expected load error, got {:?}", other),
    }
}
