use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ReadError;

pub const BACKING_FILE: &str = "transactions.json";

/// Directory the service ships from. Data and config files sit next to it.
pub fn service_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn backing_file_path(root: &Path) -> PathBuf {
    root.join(BACKING_FILE)
}

/// Reads and parses the backing file. The value is returned untouched,
/// whatever its shape.
pub async fn load_transactions(path: &Path) -> Result<Value, ReadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ReadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| ReadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
