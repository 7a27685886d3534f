//! Document editing for storcfg-core.
//!
//! Operates on an untyped `serde_json::Value` configuration document loaded
//! by the caller. The only edit this module knows is replacing the document's
//! `storage` key with a serialized adapter block.
//!
//! # Responsibilities
//!
//! - Replacing the `storage` key wholesale (never merging into it)
//! - Rejecting documents whose top level is not a JSON object
//!
//! # What does NOT belong here?
//!
//! - Reading or writing files (that is the CLI's infrastructure layer)
//! - The adapter block shape itself (that is the `domain` module)

pub mod apply;

// Re-export the primary entry points so callers can write
// `patch::set_storage_adapter`.
pub use apply::{set_storage_adapter, PatchError, STORAGE_KEY};
