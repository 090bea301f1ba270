use std::path::Path;

use log::{debug, info, warn};

use crate::cloud::{ConnectOptions, StorageClient, StorageConnector};
use crate::constants::ERROR_MISSING_BUCKET;
use crate::models::{UploadReport, UploadRequest, UploadedObject};
use crate::upload::error::UploadError;
use crate::upload::paths::{derive_key, find_files, key_if_null};

/// Runs one upload request against the storage service.
///
/// The pipeline is straight-line: validate the bucket, connect, classify the
/// path, then upload each file sequentially. The first failing upload aborts
/// the run.
pub struct UploadOrchestrator<C> {
    connector: C,
}

impl<C: StorageConnector> UploadOrchestrator<C> {
    pub fn new(connector: C) -> Self {
        UploadOrchestrator { connector }
    }

    /// Upload `request.path` to `request.bucket`.
    ///
    /// A directory is uploaded file by file, each key derived from the file's
    /// position below the directory and the optional `request.key` prefix. A
    /// single file is uploaded as `request.key`, or under its file name.
    ///
    /// # Errors
    ///
    /// * [`UploadError::Configuration`] - the bucket is empty; nothing was touched
    /// * [`UploadError::Authentication`] - the connector found no credentials
    /// * [`UploadError::Transfer`] - an upload failed; later files were skipped
    pub fn execute(&self, request: &UploadRequest) -> Result<UploadReport, UploadError> {
        if request.bucket.trim().is_empty() {
            return Err(UploadError::configuration(ERROR_MISSING_BUCKET));
        }

        info!(
            "Uploading {} to S3 bucket: {}",
            request.path.display(),
            request.bucket
        );

        let options = ConnectOptions::for_region(request.region.as_deref());
        let client = self
            .connector
            .connect(&options)
            .map_err(|source| UploadError::Authentication { source })?;

        let mut report = UploadReport {
            bucket: request.bucket.clone(),
            uploaded: Vec::new(),
        };

        if request.path.is_dir() {
            let files = find_files(&request.path);
            if files.is_empty() {
                warn!("No files found below {}", request.path.display());
            }

            for file in files {
                let key = derive_key(&file, &request.path, request.key.as_deref());
                upload_one(client.as_ref(), &request.bucket, key, &file, &mut report)?;
            }
        } else {
            let key = key_if_null(&request.path, request.key.as_deref());
            upload_one(client.as_ref(), &request.bucket, key, &request.path, &mut report)?;
        }

        info!(
            "Uploaded {} object(s) to s3://{}",
            report.len(),
            request.bucket
        );
        Ok(report)
    }
}

fn upload_one(
    client: &dyn StorageClient,
    bucket: &str,
    key: String,
    file: &Path,
    report: &mut UploadReport,
) -> Result<(), UploadError> {
    debug!("Uploading {} to s3://{}/{}", file.display(), bucket, key);

    if let Err(source) = client.put_object(bucket, &key, file) {
        return Err(UploadError::Transfer {
            bucket: bucket.to_string(),
            key,
            file: file.to_path_buf(),
            source,
        });
    }

    report.uploaded.push(UploadedObject {
        key,
        file: file.to_path_buf(),
    });
    Ok(())
}

/// Convenience wrapper for a one-off run.
pub fn execute<C: StorageConnector>(
    request: &UploadRequest,
    connector: C,
) -> Result<UploadReport, UploadError> {
    UploadOrchestrator::new(connector).execute(request)
}
