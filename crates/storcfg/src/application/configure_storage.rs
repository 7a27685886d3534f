//! The configure-storage use case.
//!
//! Reads the config document and replaces its `storage` key with an
//! optimized-local adapter block for the given path, then writes the
//! document back. The write is the last step; a run that fails to load,
//! parse, or edit the document never touches the disk.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use storcfg_core::patch::PatchError;
use storcfg_core::{set_storage_adapter, StorageAdapterConfig};

use crate::infrastructure::config_store::{load_document, save_document, ConfigStoreError};

// ── Error type ────────────────────────────────────────────────────────────────

/// Errors that can occur while configuring the storage adapter.
///
/// Both variants are transparent wrappers: the underlying error already
/// carries the full diagnostic (offending path, JSON position, I/O cause).
#[derive(Debug, Error)]
pub enum ConfigureStorageError {
    /// Reading, parsing, or writing the config file failed.
    #[error(transparent)]
    Store(#[from] ConfigStoreError),

    /// The document could not accept the storage block (top level is not a
    /// JSON object).
    #[error(transparent)]
    Patch(#[from] PatchError),
}

// ── Use case ──────────────────────────────────────────────────────────────────

/// Sets the optimized-local storage adapter in the config file at
/// `config_file`, storing images under `storage_path`.
///
/// Replaces any existing `storage` block wholesale and leaves every other
/// top-level key unchanged. `storage_path` is written verbatim; it is not
/// checked for existence or writability.
///
/// # Errors
///
/// Returns [`ConfigureStorageError`] when the file cannot be read, parsed,
/// edited, or written. On every failure before the final write the file on
/// disk is left byte-for-byte unchanged.
pub fn configure_storage(
    config_file: &Path,
    storage_path: &str,
) -> Result<(), ConfigureStorageError> {
    let mut doc = load_document(config_file)?;

    let adapter = StorageAdapterConfig::optimized_local(storage_path);
    set_storage_adapter(&mut doc, &adapter)?;

    save_document(config_file, &doc)?;

    info!(
        config_file = %config_file.display(),
        storage_path,
        "storage adapter configured"
    );
    Ok(())
}
