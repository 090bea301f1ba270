//! # s3-upload
//!
//! Upload a local file or directory tree to an S3 bucket as a build step.
//!
//! ## Overview
//!
//! Given a bucket, a local path, an optional key (or key prefix) and an
//! optional region, s3-upload authenticates through the default AWS
//! credential chain and uploads every file found at the path. Directory
//! structure below the path is preserved in the object keys.
//!
//! ## Usage
//!
//! ```no_run
//! use s3_upload::cloud::RusotoConnector;
//! use s3_upload::models::UploadRequest;
//! use s3_upload::upload::execute;
//!
//! # fn main() -> anyhow::Result<()> {
//! let request = UploadRequest::new("release-artifacts", "target/site")
//!     .with_key("docs/latest")
//!     .with_region("eu-west-1");
//!
//! let report = execute(&request, RusotoConnector)?;
//! println!("Uploaded {} objects", report.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: Upload request and report types
//! - [`upload`]: Path-to-key mapping and upload orchestration
//! - [`cloud`]: Storage collaborators and the rusoto S3 implementation
//! - [`config`]: Settings from YAML, environment and flags
//! - [`security`]: Credential scrubbing for log output
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Upload request and report types
pub mod models;

/// Path-to-key mapping and upload orchestration
pub mod upload;

/// Storage collaborators (S3)
pub mod cloud;

/// Settings loading and layering
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Security utilities for credential protection
pub mod security;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
