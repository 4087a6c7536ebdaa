//! Error types for heartline.

use heartline_catalog::CatalogError;

/// Top-level error type for the classifier and its host bridge.
#[derive(Debug, thiserror::Error)]
pub enum HeartlineError {
    /// Caller-supplied input was rejected (blank or oversized message,
    /// malformed payload).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The response catalog is incomplete or could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stdio channel read/write error.
    #[error("channel error: {0}")]
    Channel(String),

    /// Host protocol (envelope encode/decode) error.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, HeartlineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use heartline_catalog::{AgeGroup, BucketKey, Category};

    #[test]
    fn display_invalid_input() {
        let err = HeartlineError::InvalidInput("message is empty".into());
        assert_eq!(err.to_string(), "invalid input: message is empty");
    }

    #[test]
    fn catalog_error_converts() {
        let gap = CatalogError::ConfigurationGap(BucketKey::new(Category::Anger, AgeGroup::Senior));
        let err: HeartlineError = gap.into();
        assert!(matches!(err, HeartlineError::Catalog(_)));
        assert!(err.to_string().contains("Anger/Frustration/senior"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: HeartlineError = io.into();
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HeartlineError>();
    }
}
