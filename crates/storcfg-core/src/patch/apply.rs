//! Replaces a configuration document's `storage` key.
//!
//! Whatever currently lives under `storage` (a different adapter, a stale
//! block, a typo) is discarded and the new block is written in its place.
//! Sibling keys are never read or modified.
//!
//! Functions here have no I/O side effects; on error the document is
//! returned to the caller unchanged.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::StorageAdapterConfig;

/// Top-level document key that holds the storage-adapter block.
pub const STORAGE_KEY: &str = "storage";

// ── Error type ────────────────────────────────────────────────────────────────

/// Errors that can occur while editing a configuration document.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The document's top level is not a JSON object, so no key can be
    /// assigned on it.
    #[error("config top level must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type name of the actual top-level value.
        found: &'static str,
    },

    /// The adapter block could not be serialized to a JSON value.
    #[error("failed to serialize storage adapter block: {0}")]
    Serialize(#[source] serde_json::Error),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Replaces the `storage` key of `doc` with the serialized `adapter` block.
///
/// If the key already exists its old value is discarded wholesale; if it
/// does not, it is appended after the existing keys. All sibling keys keep
/// their values and their order.
///
/// # Errors
///
/// Returns [`PatchError::NotAnObject`] when the document's top level is not
/// a JSON object, and [`PatchError::Serialize`] when the adapter block
/// cannot be converted to a JSON value. In both cases `doc` is unchanged.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use storcfg_core::{set_storage_adapter, StorageAdapterConfig};
///
/// let mut doc = json!({"url": "http://x"});
/// let adapter = StorageAdapterConfig::optimized_local("/var/data");
/// set_storage_adapter(&mut doc, &adapter).unwrap();
/// assert_eq!(doc["storage"]["active"], "optimized-local");
/// assert_eq!(doc["url"], "http://x");
/// ```
pub fn set_storage_adapter(
    doc: &mut Value,
    adapter: &StorageAdapterConfig,
) -> Result<(), PatchError> {
    let object = match doc {
        Value::Object(map) => map,
        other => {
            return Err(PatchError::NotAnObject {
                found: json_type_name(other),
            })
        }
    };

    let block = serde_json::to_value(adapter).map_err(PatchError::Serialize)?;

    if object.insert(STORAGE_KEY.to_string(), block).is_some() {
        debug!("replaced existing storage block");
    } else {
        debug!("added storage block");
    }
    Ok(())
}

/// Human-readable JSON type name used in error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_adds_storage_key_when_absent() {
        // Arrange
        let mut doc = json!({"url": "http://x"});
        let adapter = StorageAdapterConfig::optimized_local("/var/data");

        // Act
        set_storage_adapter(&mut doc, &adapter).expect("patch must succeed");

        // Assert
        assert_eq!(doc["storage"]["active"], "optimized-local");
        assert_eq!(doc["storage"]["optimized-local"]["storagePath"], "/var/data");
    }

    #[test]
    fn test_preserves_sibling_keys() {
        // Arrange: siblings of varying types, including a nested object.
        let mut doc = json!({
            "url": "http://x",
            "server": {"host": "0.0.0.0", "port": 2368},
            "logging": ["file", "stdout"],
        });
        let before = doc.clone();
        let adapter = StorageAdapterConfig::optimized_local("/var/data");

        // Act
        set_storage_adapter(&mut doc, &adapter).expect("patch must succeed");

        // Assert: every non-storage key is deeply equal to its prior value.
        for (key, value) in before.as_object().unwrap() {
            assert_eq!(&doc[key], value, "sibling key {key:?} must be untouched");
        }
    }

    #[test]
    fn test_replaces_existing_storage_block_wholesale() {
        // Arrange: an unrelated adapter is currently configured.
        let mut doc = json!({
            "storage": {
                "active": "s3",
                "s3": {"bucket": "media", "region": "eu-central-1"}
            }
        });
        let adapter = StorageAdapterConfig::optimized_local("/var/data");

        // Act
        set_storage_adapter(&mut doc, &adapter).expect("patch must succeed");

        // Assert: none of the old block's sub-keys survive.
        assert_eq!(doc["storage"]["active"], "optimized-local");
        assert!(doc["storage"].get("s3").is_none(), "old adapter must be gone");
    }

    #[test]
    fn test_appends_storage_after_existing_keys() {
        let mut doc = json!({"url": "http://x", "server": {}});
        let adapter = StorageAdapterConfig::optimized_local("/var/data");

        set_storage_adapter(&mut doc, &adapter).expect("patch must succeed");

        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["url", "server", "storage"]);
    }

    #[test]
    fn test_rejects_array_top_level() {
        // Arrange
        let mut doc = json!([1, 2, 3]);
        let adapter = StorageAdapterConfig::optimized_local("/var/data");

        // Act
        let result = set_storage_adapter(&mut doc, &adapter);

        // Assert
        assert!(matches!(
            result,
            Err(PatchError::NotAnObject { found: "array" })
        ));
        // The document must be untouched on error.
        assert_eq!(doc, json!([1, 2, 3]));
    }

    #[test]
    fn test_rejects_string_top_level() {
        let mut doc = json!("not an object");
        let adapter = StorageAdapterConfig::optimized_local("/var/data");

        let result = set_storage_adapter(&mut doc, &adapter);

        assert!(matches!(
            result,
            Err(PatchError::NotAnObject { found: "string" })
        ));
    }

    #[test]
    fn test_rejects_null_top_level() {
        let mut doc = Value::Null;
        let adapter = StorageAdapterConfig::optimized_local("/var/data");

        let result = set_storage_adapter(&mut doc, &adapter);

        assert!(matches!(
            result,
            Err(PatchError::NotAnObject { found: "null" })
        ));
    }

    #[test]
    fn test_not_an_object_error_names_the_found_type() {
        let mut doc = json!(42);
        let adapter = StorageAdapterConfig::optimized_local("/var/data");

        let err = set_storage_adapter(&mut doc, &adapter).unwrap_err();

        assert_eq!(
            err.to_string(),
            "config top level must be a JSON object, found number"
        );
    }

    #[test]
    fn test_patch_is_idempotent_on_the_value_level() {
        // Arrange
        let mut doc = json!({"url": "http://x"});
        let adapter = StorageAdapterConfig::optimized_local("/var/data");

        // Act: apply twice.
        set_storage_adapter(&mut doc, &adapter).expect("first patch");
        let after_first = doc.clone();
        set_storage_adapter(&mut doc, &adapter).expect("second patch");

        // Assert
        assert_eq!(doc, after_first);
    }
}
