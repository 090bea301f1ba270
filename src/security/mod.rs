//! Security utilities.
//!
//! - Credential scrubbing to keep AWS secrets out of logged error chains

pub mod credential_scrubber;

pub use credential_scrubber::{safe_error_message, scrub_credentials};
