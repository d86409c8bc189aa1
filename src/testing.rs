//! Test utilities for store setup.
//!
//! Provides a store backed by a temporary directory so tests never
//! touch real data and clean up automatically when dropped.

use tempfile::TempDir;

use crate::store::Store;

/// Test environment with a fresh store in a temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for blob file persistence)
    pub temp: TempDir,
    pub store: Store,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let store =
            Store::open(&temp.path().join("chem_notebook.json")).expect("Failed to open test store");
        Self { temp, store }
    }
}
