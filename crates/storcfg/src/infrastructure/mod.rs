//! Infrastructure layer for storcfg.
//!
//! Handles all file I/O: reading the JSON configuration document from disk
//! and writing the edited document back.
//!
//! # Responsibilities
//!
//! - Reading the config file into an untyped JSON document
//! - Pretty-printing the document and overwriting the file
//! - Mapping I/O and parse failures to [`config_store::ConfigStoreError`]
//!
//! # What does NOT belong here?
//!
//! - Editing the document (that is storcfg-core's `patch` module)
//! - CLI argument handling (that is done in `main.rs`)

pub mod config_store;

// Re-export the primary entry points so the application layer can call them
// concisely.
pub use config_store::{load_document, save_document, ConfigStoreError};
