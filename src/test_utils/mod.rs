//! Test utilities for s3-upload
//!
//! Filesystem fixtures and an in-memory storage service for unit tests.

#![cfg(test)]

use anyhow::{bail, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use crate::cloud::{ConnectOptions, StorageClient, StorageConnector};

/// Creates a test file structure in a temporary directory
pub fn create_test_file_structure() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let base_path = temp_dir.path();

    // Create directory structure
    fs::create_dir_all(base_path.join("dir1/subdir1"))?;
    fs::create_dir_all(base_path.join("dir2"))?;
    fs::create_dir_all(base_path.join("empty"))?;

    // Create test files
    fs::write(base_path.join("file1.txt"), b"Test content 1")?;
    fs::write(base_path.join("file2.log"), b"Test log content")?;
    fs::write(base_path.join("dir1/file3.txt"), b"Test content 3")?;
    fs::write(base_path.join("dir1/subdir1/file4.txt"), b"Test content 4")?;
    fs::write(base_path.join("dir2/file5.log"), b"Another log file")?;

    Ok(temp_dir)
}

type Put = (String, String, PathBuf);

/// Connector whose clients record every upload instead of sending it.
///
/// Clones share the same log, so a test can keep one and hand another to the
/// code under test.
#[derive(Clone, Default)]
pub struct RecordingConnector {
    options: Arc<Mutex<Vec<ConnectOptions>>>,
    puts: Arc<Mutex<Vec<Put>>>,
}

impl RecordingConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options of every `connect` call, in order
    pub fn options(&self) -> Vec<ConnectOptions> {
        self.options.lock().unwrap().clone()
    }

    /// `(bucket, key, file)` of every upload, in order
    pub fn puts(&self) -> Vec<Put> {
        self.puts.lock().unwrap().clone()
    }
}

impl StorageConnector for RecordingConnector {
    fn connect(&self, options: &ConnectOptions) -> Result<Box<dyn StorageClient>> {
        self.options.lock().unwrap().push(options.clone());
        Ok(Box::new(RecordingClient {
            puts: Arc::clone(&self.puts),
        }))
    }
}

struct RecordingClient {
    puts: Arc<Mutex<Vec<Put>>>,
}

impl StorageClient for RecordingClient {
    fn put_object(&self, bucket: &str, key: &str, file: &Path) -> Result<()> {
        if !file.is_file() {
            bail!("No such file: {}", file.display());
        }
        self.puts
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string(), file.to_path_buf()));
        Ok(())
    }
}
