use std::path::PathBuf;

use thiserror::Error;

use crate::constants::CREDENTIALS_DOCS_URL;

/// Why an upload run stopped.
///
/// Every variant is fatal: the run aborts on the first error and objects that
/// were already uploaded stay in the bucket.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Required input is missing or unusable. Raised before any I/O.
    #[error("{0}")]
    Configuration(String),

    /// The storage client could not be obtained.
    ///
    /// Usually no usable credential source was found. Client setup failures
    /// (runtime, HTTP stack) land here too; `source` names the actual cause.
    #[error(
        "Unable to authenticate to S3 with the available credentials. Make sure to either define \
         the environment variables or a credentials profile as described in {docs}",
        docs = CREDENTIALS_DOCS_URL
    )]
    Authentication {
        #[source]
        source: anyhow::Error,
    },

    /// A single object upload failed; the remaining files were skipped.
    #[error("Failed to upload {} to s3://{bucket}/{key}", .file.display())]
    Transfer {
        bucket: String,
        key: String,
        file: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl UploadError {
    pub fn configuration(message: impl Into<String>) -> Self {
        UploadError::Configuration(message.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, UploadError::Configuration(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, UploadError::Authentication { .. })
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self, UploadError::Transfer { .. })
    }
}
