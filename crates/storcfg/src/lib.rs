//! storcfg library entry point.
//!
//! Re-exports the application and infrastructure modules so that integration
//! tests in `tests/` and the binary entry point in `main.rs` share the same
//! module tree.
//!
//! # Architecture
//!
//! ```text
//! main()                     CLI parsing, logging setup, exit codes
//!  └─ application/           configure_storage use case
//!       ├─ storcfg-core      adapter block types + document editing
//!       └─ infrastructure/   config_store: JSON file load/save
//! ```
//!
//! # Layer rules
//!
//! - `application` orchestrates: load, edit, save. It owns the combined
//!   error type but performs no I/O itself.
//! - `infrastructure` performs all file I/O and knows nothing about the
//!   adapter block's shape.

pub mod application;
pub mod infrastructure;
