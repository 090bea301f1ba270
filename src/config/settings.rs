use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

use crate::cli::Args;
use crate::config::env_vars::expand_env_vars;
use crate::constants::{ENV_BUCKET, ENV_KEY, ENV_PATH, ENV_REGION, ERROR_MISSING_PATH};
use crate::models::UploadRequest;
use crate::upload::UploadError;

/// The four build-step parameters, as supplied by one configuration source.
///
/// Every field is optional so sources can be layered with [`merge`](Self::merge).
/// An empty string is a value, not an absence: `key: ""` means "upload under
/// an empty prefix", not "derive the key from the file name".
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadSettings {
    pub bucket: Option<String>,
    pub path: Option<String>,
    pub key: Option<String>,
    pub region: Option<String>,
}

impl UploadSettings {
    /// Load settings from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let settings = Self::from_yaml_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse YAML settings")
    }

    /// Settings from the `S3_UPLOAD_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Settings from an arbitrary variable lookup, keyed like the environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        UploadSettings {
            bucket: lookup(ENV_BUCKET),
            path: lookup(ENV_PATH),
            key: lookup(ENV_KEY),
            region: lookup(ENV_REGION),
        }
    }

    /// Settings given on the command line
    pub fn from_args(args: &Args) -> Self {
        UploadSettings {
            bucket: args.bucket.clone(),
            path: args.path.clone(),
            key: args.key.clone(),
            region: args.region.clone(),
        }
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: UploadSettings) -> Self {
        UploadSettings {
            bucket: overrides.bucket.or(self.bucket),
            path: overrides.path.or(self.path),
            key: overrides.key.or(self.key),
            region: overrides.region.or(self.region),
        }
    }

    /// Build the upload request.
    ///
    /// `$VAR` references in `path` are expanded. A missing bucket is passed
    /// through as empty; the orchestrator rejects it.
    pub fn into_request(self) -> Result<UploadRequest, UploadError> {
        let path = self
            .path
            .filter(|path| !path.trim().is_empty())
            .ok_or_else(|| UploadError::configuration(ERROR_MISSING_PATH))?;

        Ok(UploadRequest {
            bucket: self.bucket.unwrap_or_default(),
            path: PathBuf::from(expand_env_vars(&path)),
            key: self.key,
            region: self.region.filter(|region| !region.trim().is_empty()),
        })
    }
}

/// Resolve the settings for this run.
///
/// Sources, later wins:
/// 1. The YAML file given with `--config`
/// 2. `S3_UPLOAD_BUCKET`, `S3_UPLOAD_PATH`, `S3_UPLOAD_KEY`, `S3_UPLOAD_REGION`
/// 3. Command-line flags
pub fn load_settings(args: &Args) -> Result<UploadSettings> {
    let from_file = match &args.config {
        Some(path) => UploadSettings::from_yaml_file(path)?,
        None => UploadSettings::default(),
    };

    Ok(from_file
        .merge(UploadSettings::from_env())
        .merge(UploadSettings::from_args(args)))
}
