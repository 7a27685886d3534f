//! JSON file persistence for the configuration document.
//!
//! Reads the whole file into memory, and writes the whole document back,
//! pretty-printed with 2-space indentation. The read handle is closed before
//! any write begins, so the two operations never hold the file at the same
//! time. There is no temp-file rename and no backup; a failed write can
//! leave a partial file.
//!
//! Formatting of the input file is not preserved; the output is whatever
//! `serde_json::to_string_pretty` produces for the in-memory document.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

// ── Error type ────────────────────────────────────────────────────────────────

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content could not be parsed as JSON.
    #[error("failed to parse config JSON at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be serialized back to JSON text.
    #[error("failed to serialize config JSON: {0}")]
    Serialize(#[source] serde_json::Error),
}

// ── Load / save ───────────────────────────────────────────────────────────────

/// Loads the configuration document from `path`.
///
/// The file must exist and contain valid UTF-8 JSON. A missing file is an
/// error, never a prompt to create a default document.
///
/// # Errors
///
/// Returns [`ConfigStoreError::Io`] when the file cannot be read and
/// [`ConfigStoreError::Parse`] when its content is not valid JSON.
pub fn load_document(path: &Path) -> Result<Value, ConfigStoreError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigStoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let doc: Value = serde_json::from_str(&content).map_err(|source| ConfigStoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "loaded config document");
    Ok(doc)
}

/// Overwrites the file at `path` with the pretty-printed document.
///
/// # Errors
///
/// Returns [`ConfigStoreError::Serialize`] when the document cannot be
/// rendered as JSON text and [`ConfigStoreError::Io`] when the file cannot
/// be written.
pub fn save_document(path: &Path, doc: &Value) -> Result<(), ConfigStoreError> {
    let content = serde_json::to_string_pretty(doc).map_err(ConfigStoreError::Serialize)?;

    std::fs::write(path, content).map_err(|source| ConfigStoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "wrote config document");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
