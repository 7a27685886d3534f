//! Storage-adapter block types.
//!
//! [`StorageAdapterConfig`] is the exact shape written under the `storage`
//! key of the host application's JSON configuration:
//!
//! ```json
//! {
//!   "active": "optimized-local",
//!   "optimized-local": {
//!     "storagePath": "/var/data",
//!     "sizes": [600, 1000, 1600, 2000],
//!     "quality": 82,
//!     "keepOriginal": true
//!   }
//! }
//! ```
//!
//! The host config uses camelCase field names and a kebab-case adapter name,
//! so the serde renames below are part of the wire contract, not style.
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the field is absent from an input document. This lets
//! the types also read adapter blocks written by older tool versions that
//! predate a field.

use serde::{Deserialize, Serialize};

/// Name of the adapter this tool activates.
///
/// Appears twice in the serialized block: as the value of `active` and as
/// the key holding the adapter settings object.
pub const OPTIMIZED_LOCAL_ADAPTER: &str = "optimized-local";

// ── Adapter block types ───────────────────────────────────────────────────────

/// The storage-adapter configuration block.
///
/// This is the whole value stored under the document's `storage` key. The
/// `active` field selects which named adapter the host application loads;
/// the adapter's own settings live under a key with the same name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageAdapterConfig {
    /// Name of the adapter the host application should load.
    #[serde(default = "default_active")]
    pub active: String,

    /// Settings for the optimized-local adapter.
    #[serde(rename = "optimized-local")]
    pub optimized_local: OptimizedLocalSettings,
}

/// Settings for the optimized-local adapter.
///
/// Serialized with camelCase field names (`storagePath`, `keepOriginal`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedLocalSettings {
    /// Filesystem path the adapter stores images under.
    ///
    /// Taken verbatim from the caller. The path is not checked for
    /// existence or writability; the host application resolves it at its
    /// own startup.
    pub storage_path: String,

    /// Widths (in pixels) of the resized renditions the adapter generates.
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,

    /// JPEG quality (0 to 100) for the resized renditions.
    #[serde(default = "default_quality")]
    pub quality: u8,

    /// Whether the adapter keeps the unmodified upload next to the
    /// resized renditions.
    #[serde(default = "default_keep_original")]
    pub keep_original: bool,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_active() -> String {
    OPTIMIZED_LOCAL_ADAPTER.to_string()
}
fn default_sizes() -> Vec<u32> {
    vec![600, 1000, 1600, 2000]
}
fn default_quality() -> u8 {
    82
}
fn default_keep_original() -> bool {
    true
}

impl StorageAdapterConfig {
    /// Builds the optimized-local adapter block for the given storage path.
    ///
    /// Every field other than `storage_path` takes its fixed default; this
    /// is the only constructor the configuration tool needs.
    pub fn optimized_local(storage_path: impl Into<String>) -> Self {
        Self {
            active: default_active(),
            optimized_local: OptimizedLocalSettings {
                storage_path: storage_path.into(),
                sizes: default_sizes(),
                quality: default_quality(),
                keep_original: default_keep_original(),
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
