use std::path::PathBuf;

use thiserror::Error;

/// Our custom result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the prediction pipeline.
///
/// Every variant is fatal to the invocation that produced it; nothing is
/// retried or recovered locally.
#[derive(Debug, Error)]
pub enum Error {
    /// A required environment variable is not set. Raised before any file
    /// or network activity.
    #[error("missing required environment variable {name}")]
    Configuration { name: &'static str },

    /// The image file could not be read.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A caller-supplied parameter failed validation.
    #[error("invalid score threshold {value:?}: {reason}")]
    InvalidArgument { value: String, reason: String },

    /// The remote service rejected or failed the call. The status message
    /// is passed through verbatim.
    #[error("prediction service error: {0}")]
    Service(#[from] tonic::Status),

    /// The transport channel to the service could not be established.
    #[error(transparent)]
    Transport(#[from] tonic::transport::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_names_the_variable() {
        let err = Error::Configuration { name: "PROJECT_ID" };
        assert_eq!(
            err.to_string(),
            "missing required environment variable PROJECT_ID"
        );
    }

    #[test]
    fn io_error_keeps_the_source() {
        use std::error::Error as _;
        let err = Error::Io {
            path: "missing.jpg".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
    }
}
