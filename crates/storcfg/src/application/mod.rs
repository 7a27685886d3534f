//! Application layer for storcfg.
//!
//! Orchestrates the single use case this tool has: replacing the
//! storage-adapter block of a JSON config file on disk.
//!
//! # Responsibilities
//!
//! - Sequencing load, edit, and save so that every failure before the final
//!   save leaves the on-disk file untouched
//! - Combining the infrastructure and editing errors into one type
//!
//! # What does NOT belong here?
//!
//! - File I/O (that is the infrastructure layer)
//! - The adapter block shape (that is storcfg-core's domain layer)
//! - Exit codes and terminal output (that is `main.rs`)

pub mod configure_storage;

// Re-export so callers can write `application::configure_storage(...)`.
pub use configure_storage::{configure_storage, ConfigureStorageError};
