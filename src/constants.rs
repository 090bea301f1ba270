//! Global constants for the s3-upload tool.
//!
//! Message texts and environment variable names live here so the binary,
//! the configuration layer and the tests agree on them.

// Configuration sources
/// Environment variable holding the target bucket
pub const ENV_BUCKET: &str = "S3_UPLOAD_BUCKET";

/// Environment variable holding the local file or directory to upload
pub const ENV_PATH: &str = "S3_UPLOAD_PATH";

/// Environment variable holding the object key or key prefix
pub const ENV_KEY: &str = "S3_UPLOAD_KEY";

/// Environment variable holding the AWS region
pub const ENV_REGION: &str = "S3_UPLOAD_REGION";

// Key derivation
/// Separator used inside object keys, independent of the host OS
pub const KEY_SEPARATOR: char = '/';

// Credential guidance
/// Where operators are sent when no usable credentials were found
pub const CREDENTIALS_DOCS_URL: &str =
    "https://github.com/rusoto/rusoto/blob/master/AWS-CREDENTIALS.md";

// Error messages
pub const ERROR_MISSING_BUCKET: &str =
    "You need to specify a bucket for the s3-upload goal configuration";
pub const ERROR_MISSING_PATH: &str =
    "You need to specify a path for the s3-upload goal configuration";
