//! Build-step configuration.
//!
//! The bucket, path, key and region can come from a YAML file, from
//! `S3_UPLOAD_*` environment variables or from command-line flags. Each
//! source produces an [`UploadSettings`]; [`load_settings`] layers them and
//! [`UploadSettings::into_request`] turns the result into an upload request.
//!
//! ```yaml
//! bucket: release-artifacts
//! path: ${CI_PROJECT_DIR}/target/site
//! key: docs/latest
//! region: eu-west-1
//! ```

mod env_vars;
mod settings;

// Re-export settings
pub use settings::{load_settings, UploadSettings};

// Re-export environment variable functions
pub use env_vars::{expand_env_vars, expand_env_vars_with};
