//! Domain layer for storcfg-core.
//!
//! Pure types describing the storage-adapter configuration block. Nothing in
//! this module performs I/O or touches process state.
//!
//! # What belongs in the domain layer?
//!
//! - The adapter block types and their serde wire names
//! - The fixed defaults (image sizes, quality, original retention)
//!
//! # What does NOT belong here?
//!
//! - `serde_json::Value` document editing (that is the `patch` module)
//! - File reading or writing (that is the CLI's infrastructure layer)

pub mod adapter;

// Re-export so callers can write `domain::StorageAdapterConfig`.
pub use adapter::{OptimizedLocalSettings, StorageAdapterConfig, OPTIMIZED_LOCAL_ADAPTER};
