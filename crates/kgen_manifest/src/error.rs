//! Error types for manifest generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Errors that can occur while generating a manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("the --{0} flag is required")]
    MissingFlag(String),

    #[error("unknown placeholder in template: {{{{{0}}}}}")]
    UnknownPlaceholder(String),

    #[error("malformed template: {0}")]
    MalformedTemplate(String),

    #[error("template file not found: {0}")]
    TemplateFileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
