/// Test utilities for consistent, self-cleaning storage tests
///
/// Every test gets its own temporary data directory that is removed when the
/// environment is dropped, even if the test panics.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use super::connection::JsonConnection;
use crate::storage::traits::Record;

/// RAII test environment backed by a temporary directory
pub struct TestEnvironment {
    /// Kept alive so the directory is only removed on drop
    _temp_dir: TempDir,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::with_prefix("daycare-test-")?;
        let base_path = temp_dir.path().to_path_buf();

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            base_path,
        })
    }

    /// Open a connection over this environment's data directory
    pub fn connection(&self) -> Result<Arc<JsonConnection>> {
        Ok(Arc::new(JsonConnection::new(&self.base_path)?))
    }
}

/// Minimal record type for exercising the generic collection code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestNote {
    pub id: String,
    pub text: String,
}

impl Record for TestNote {
    const COLLECTION: &'static str = "notes";

    fn id(&self) -> &str {
        &self.id
    }
}

pub fn note(id: &str, text: &str) -> TestNote {
    TestNote {
        id: id.to_string(),
        text: text.to_string(),
    }
}
