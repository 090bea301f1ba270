//! Object-storage collaborators for the upload step.
//!
//! The orchestrator never talks to S3 directly. It asks a [`StorageConnector`]
//! for an authenticated [`StorageClient`] once per run and then issues one
//! `put_object` per file. Tests substitute fakes for both traits; the binary
//! uses the rusoto implementation.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐  connect   ┌─────────────────────┐
//! │ UploadOrchestrator   │───────────▶│ StorageConnector    │
//! └──────────┬───────────┘            │ (RusotoConnector)   │
//!            │ put_object             └──────────┬──────────┘
//!            ▼                                   │ builds
//! ┌──────────────────────┐                       │
//! │ StorageClient        │◀──────────────────────┘
//! │ (S3StorageClient)    │
//! └──────────┬───────────┘
//!            ▼
//!      ┌────────────┐
//!      │ S3 Bucket  │
//!      └────────────┘
//! ```
//!
//! ## Usage Example
//!
//! ```no_run
//! use s3_upload::cloud::{ConnectOptions, RusotoConnector, StorageConnector};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let client = RusotoConnector.connect(&ConnectOptions::for_region(Some("us-east-1")))?;
//! client.put_object("release-bucket", "dist/app.tar.gz", Path::new("target/app.tar.gz"))?;
//! # Ok(())
//! # }
//! ```

/// Collaborator traits and connection options
pub mod client;

/// rusoto-backed S3 connector and client
pub mod s3;

pub use client::{ConnectOptions, StorageClient, StorageConnector};
pub use s3::{RusotoConnector, S3StorageClient};
