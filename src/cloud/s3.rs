use std::path::Path;

use anyhow::{anyhow, Context, Result};
use bytes::BytesMut;
use futures_util::TryStreamExt;
use log::{debug, warn};
use rusoto_core::{ByteStream, HttpClient, Region};
use rusoto_credential::{DefaultCredentialsProvider, ProvideAwsCredentials};
use rusoto_s3::{PutObjectRequest, S3Client, S3};
use tokio::runtime::Runtime;
use tokio_util::codec::{BytesCodec, FramedRead};

use crate::cloud::client::{ConnectOptions, StorageClient, StorageConnector};

/// Resolve the rusoto region for the given options.
///
/// A custom endpoint always yields `Region::Custom`, named after the requested
/// region (or the default one). Unknown region names fall back to the default
/// region with a warning.
pub fn resolve_region(options: &ConnectOptions) -> Region {
    let region = match options.region.as_deref() {
        Some(name) => match name.parse::<Region>() {
            Ok(r) => r,
            Err(_) => {
                warn!("Invalid region '{}', using default", name);
                Region::default()
            }
        },
        None => Region::default(),
    };

    match &options.endpoint {
        Some(endpoint) => Region::Custom {
            name: region.name().to_string(),
            endpoint: endpoint.clone(),
        },
        None => region,
    }
}

/// Connects to Amazon S3 through rusoto's default credential chain.
///
/// The chain checks, in order, the `AWS_ACCESS_KEY_ID`/`AWS_SECRET_ACCESS_KEY`
/// environment variables, the shared credentials profile, and container or
/// instance metadata. Credentials are resolved at connect time so a missing
/// credential source surfaces before any file is touched.
#[derive(Debug, Default, Clone, Copy)]
pub struct RusotoConnector;

impl StorageConnector for RusotoConnector {
    /// Runtime and HTTP client setup failures are returned through the same
    /// path as missing credentials; their context names the failed step.
    fn connect(&self, options: &ConnectOptions) -> Result<Box<dyn StorageClient>> {
        let runtime = Runtime::new().context("S3 client setup failed: cannot create Tokio runtime")?;
        let region = resolve_region(options);

        if !options.path_style_access {
            debug!("rusoto always uses path-style requests; virtual-hosted addressing is not available");
        }

        let provider = DefaultCredentialsProvider::new()
            .context("S3 client setup failed: cannot create AWS credential provider")?;
        runtime
            .block_on(provider.credentials())
            .context("No AWS credentials found in the environment, profile or instance metadata")?;

        let client = {
            let _guard = runtime.enter();
            let http_client =
                HttpClient::new().context("S3 client setup failed: cannot create HTTP client")?;
            S3Client::new_with(http_client, provider, region.clone())
        };

        let storage = S3StorageClient {
            runtime,
            client,
            region,
        };
        debug!("Connected to S3 in region {}", storage.region().name());

        Ok(Box::new(storage))
    }
}

/// Blocking wrapper around the async rusoto client.
///
/// Every call runs to completion on the client's own runtime before returning.
pub struct S3StorageClient {
    runtime: Runtime,
    client: S3Client,
    region: Region,
}

impl S3StorageClient {
    pub fn region(&self) -> &Region {
        &self.region
    }

    async fn put_file(&self, bucket: &str, key: &str, file: &Path) -> Result<()> {
        let handle = tokio::fs::File::open(file)
            .await
            .context(format!("Failed to open {} for S3 upload", file.display()))?;
        let file_size = handle
            .metadata()
            .await
            .context(format!("Failed to get metadata for {}", file.display()))?
            .len();

        // PutObject needs the length up front, the body itself is streamed
        let stream = FramedRead::new(handle, BytesCodec::new()).map_ok(BytesMut::freeze);
        let request = PutObjectRequest {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body: Some(ByteStream::new_with_size(stream, file_size as usize)),
            content_length: Some(file_size as i64),
            ..Default::default()
        };

        self.client
            .put_object(request)
            .await
            .map_err(|e| anyhow!("PutObject failed: {}", e))?;

        debug!("Sent {} bytes from {} to s3://{}/{}", file_size, file.display(), bucket, key);
        Ok(())
    }
}

impl StorageClient for S3StorageClient {
    fn put_object(&self, bucket: &str, key: &str, file: &Path) -> Result<()> {
        self.runtime.block_on(self.put_file(bucket, key, file))
    }
}
