//! # storcfg-core
//!
//! Shared library for storcfg containing the storage-adapter schema types
//! and the JSON document editing logic.
//!
//! This crate is used by the `storcfg` CLI binary. It has zero dependencies
//! on file systems, terminals, or process state: everything here operates on
//! in-memory values, so the same logic can back a CLI today and an embedded
//! setup step tomorrow.
//!
//! # What lives here
//!
//! - **`domain`** describes the storage-adapter block: the `active` selector
//!   and the `optimized-local` settings (storage path, image sizes, JPEG
//!   quality, original retention) with their fixed defaults.
//!
//! - **`patch`** edits an untyped JSON configuration document, replacing its
//!   `storage` key with a serialized adapter block while leaving every
//!   sibling key untouched.

// Rust looks for each module in a subdirectory with the same name
// (e.g., src/domain/mod.rs).
pub mod domain;
pub mod patch;

// Re-export the most-used items at the crate root so callers can write
// `storcfg_core::StorageAdapterConfig` instead of the longer module path.
pub use domain::adapter::{OptimizedLocalSettings, StorageAdapterConfig, OPTIMIZED_LOCAL_ADAPTER};
pub use patch::apply::{set_storage_adapter, PatchError, STORAGE_KEY};
