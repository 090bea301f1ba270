use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the s3-upload tool.
///
/// The four upload parameters may also come from a settings file or the
/// environment; flags given here take precedence over both.
#[derive(Parser, Debug)]
#[clap(name = "s3-upload", about = "Upload a file or directory tree to an S3 bucket")]
pub struct Args {
    /// S3 bucket to upload into
    #[clap(short, long)]
    pub bucket: Option<String>,

    /// Local file or directory to upload
    #[clap(short, long)]
    pub path: Option<String>,

    /// Object key for a file, or key prefix for a directory (default: file name / no prefix)
    #[clap(short, long)]
    pub key: Option<String>,

    /// AWS region of the bucket
    #[clap(long)]
    pub region: Option<String>,

    /// Path to settings YAML file
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}
