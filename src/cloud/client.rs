use std::path::Path;

use anyhow::Result;

/// Options handed to a [`StorageConnector`] when a client is requested.
///
/// The upload step always uses [`ConnectOptions::for_region`], i.e. no custom
/// endpoint and the storage default for path-style addressing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectOptions {
    pub region: Option<String>,
    /// Custom service endpoint, e.g. a MinIO or Ceph gateway
    pub endpoint: Option<String>,
    /// Put the bucket in the request path instead of the host name
    pub path_style_access: bool,
}

impl ConnectOptions {
    pub fn for_region(region: Option<&str>) -> Self {
        ConnectOptions {
            region: region.map(str::to_string),
            ..Default::default()
        }
    }
}

/// An authenticated object-storage client.
#[cfg_attr(test, mockall::automock)]
pub trait StorageClient {
    /// Upload the local `file` as `key` in `bucket` with a single PUT.
    ///
    /// Content type and length are left to the implementation.
    fn put_object(&self, bucket: &str, key: &str, file: &Path) -> Result<()>;
}

/// Resolves credentials and builds a [`StorageClient`].
///
/// Fails when no usable credential source is found or the client cannot be
/// set up. The orchestrator reports every failure here as
/// [`UploadError::Authentication`](crate::upload::UploadError::Authentication),
/// so the error should carry a human-readable cause.
pub trait StorageConnector {
    fn connect(&self, options: &ConnectOptions) -> Result<Box<dyn StorageClient>>;
}

impl<F> StorageConnector for F
where
    F: Fn(&ConnectOptions) -> Result<Box<dyn StorageClient>>,
{
    fn connect(&self, options: &ConnectOptions) -> Result<Box<dyn StorageClient>> {
        self(options)
    }
}
