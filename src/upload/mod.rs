//! Path-to-key mapping and upload orchestration.
//!
//! This is the core of the tool. [`paths`] turns a local root into the list of
//! files to send and the key for each of them; [`orchestrator`] validates the
//! request, obtains a storage client and issues one upload per file.
//!
//! ## Key derivation
//!
//! | root      | file               | key        | object key          |
//! |-----------|--------------------|------------|---------------------|
//! | `/data`   | `/data/a/b.txt`    | none       | `a/b.txt`           |
//! | `/data`   | `/data/a/b.txt`    | `prefix`   | `prefix/a/b.txt`    |
//! | `/data`   | `/data/a/b.txt`    | `prefix/`  | `prefix//a/b.txt`   |
//! | `/x/r.csv`| (single file)      | none       | `r.csv`             |
//! | `/x/r.csv`| (single file)      | `custom`   | `custom`            |
//!
//! ## Known gaps
//!
//! - Symlinked directories are followed without loop detection.
//! - Directories that cannot be listed are skipped silently; an empty
//!   directory and an unreadable one look the same unless
//!   [`paths::find_files_with`] is used.

/// Error taxonomy of an upload run
pub mod error;

/// Directory traversal and key derivation
pub mod paths;

/// Validate, connect, classify and upload
pub mod orchestrator;

pub use error::UploadError;
pub use orchestrator::{execute, UploadOrchestrator};
pub use paths::{derive_key, find_files, find_files_with, key_if_null};
