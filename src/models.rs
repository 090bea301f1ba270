use std::path::PathBuf;

/// A single run of the upload step.
///
/// Built once from the merged settings and never mutated afterwards. `bucket`
/// may still be empty here; `execute` rejects it before any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub bucket: String,
    pub path: PathBuf,
    /// Object key for a single file, key prefix for a directory.
    pub key: Option<String>,
    pub region: Option<String>,
}

impl UploadRequest {
    pub fn new(bucket: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        UploadRequest {
            bucket: bucket.into(),
            path: path.into(),
            key: None,
            region: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// One object that was written to the bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedObject {
    pub key: String,
    pub file: PathBuf,
}

/// Objects uploaded by a successful run, in upload order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub bucket: String,
    pub uploaded: Vec<UploadedObject>,
}

impl UploadReport {
    pub fn len(&self) -> usize {
        self.uploaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uploaded.is_empty()
    }

    /// Keys in upload order
    pub fn keys(&self) -> Vec<&str> {
        self.uploaded.iter().map(|object| object.key.as_str()).collect()
    }
}
