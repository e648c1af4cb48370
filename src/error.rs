//! Crate-wide error types.
//!
//! Every failure of a filter run maps to one [`SobelError`] variant. None of
//! them is retried; a run either returns a fully written image or one of these.
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the PGM (P5) codec and its file helpers.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("bad magic number: expected \"P5\", found {0:?}")]
    BadMagic(String),

    #[error("malformed header: expected {expected}")]
    MalformedHeader { expected: &'static str },

    #[error("header field {field} is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unsupported max gray value {0} (must be in 1..=255)")]
    UnsupportedMaxGray(u32),

    #[error("image dimensions {width}x{height} overflow the addressable size")]
    DimensionOverflow { width: usize, height: usize },

    #[error("truncated pixel data: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    BufferMismatch { expected: usize, actual: usize },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum SobelError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("failed to allocate {bytes} bytes for the output image")]
    AllocationFailure { bytes: usize },

    #[error("failed to dispatch workers: {0}")]
    DispatchFailure(String),
}

impl SobelError {
    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        SobelError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for SobelError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        SobelError::DispatchFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_build_failure_maps_to_dispatch_failure() {
        let build_err = rayon::ThreadPoolBuilder::new()
            .num_threads(2)
            .spawn_handler(|_| Err(std::io::Error::other("no threads left")))
            .build()
            .unwrap_err();
        let err = SobelError::from(build_err);
        assert!(matches!(err, SobelError::DispatchFailure(_)));
        assert!(err.to_string().starts_with("failed to dispatch workers"));
    }
}
