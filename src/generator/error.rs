use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("invalid mapping: {0}")]
    InvalidMapping(String),

    #[error("invalid mapping: {spec}")]
    InvalidPattern {
        spec: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("invalid package name: {0}")]
    InvalidPackageName(String),

    #[error("{context}: {}", path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not visit: {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("target already exists: {target} (source: {})", source_path.display())]
    DuplicateTarget { target: String, source_path: PathBuf },

    #[error("maximum allowed size exceeded: {size} bytes (max: {max}): {}", path.display())]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("test file not found: {0}")]
    TestFileNotFound(String),
}

impl GenerateError {
    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            context,
            path: path.into(),
            source,
        }
    }

    /// Whether the error stems from malformed command-line input rather
    /// than from the filesystem or the embedded data.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            GenerateError::InvalidMapping(_)
                | GenerateError::InvalidPattern { .. }
                | GenerateError::InvalidPackageName(_)
        )
    }
}
