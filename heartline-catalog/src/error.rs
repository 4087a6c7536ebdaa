//! Error types for the heartline-catalog crate.
//!
//! Every catalog error is a configuration defect. Callers are expected to
//! surface them at startup and refuse to serve, never at classification time.

use crate::types::BucketKey;

/// Errors raised while loading or validating a response catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A bucket the classifier can route to has no variants.
    #[error("configuration gap: no variants for {0}")]
    ConfigurationGap(BucketKey),

    /// A variant has a blank message or no tips.
    #[error("empty variant #{index} in {key}")]
    EmptyVariant { key: BucketKey, index: usize },

    /// An overlay file could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// An overlay file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Clone for CatalogError {
    fn clone(&self) -> Self {
        match self {
            Self::ConfigurationGap(key) => Self::ConfigurationGap(*key),
            Self::EmptyVariant { key, index } => Self::EmptyVariant {
                key: *key,
                index: *index,
            },
            Self::Parse(msg) => Self::Parse(msg.clone()),
            Self::Io(e) => Self::Io(std::io::Error::new(e.kind(), e.to_string())),
        }
    }
}

/// Convenience type alias for catalog results.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AgeGroup, Category};

    #[test]
    fn display_configuration_gap() {
        let err = CatalogError::ConfigurationGap(BucketKey::new(Category::Anxiety, AgeGroup::Teen));
        assert_eq!(
            err.to_string(),
            "configuration gap: no variants for Anxiety/teen/general"
        );
    }

    #[test]
    fn display_empty_variant() {
        let err = CatalogError::EmptyVariant {
            key: BucketKey::negated_sadness(AgeGroup::Senior),
            index: 2,
        };
        assert_eq!(err.to_string(), "empty variant #2 in Sadness/senior/negated");
    }

    #[test]
    fn clone_keeps_kind_and_message() {
        let gap = CatalogError::ConfigurationGap(BucketKey::new(Category::Anger, AgeGroup::Adult));
        assert_eq!(gap.clone().to_string(), gap.to_string());

        let io = CatalogError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        match io.clone() {
            CatalogError::Io(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
                assert_eq!(e.to_string(), "gone");
            }
            other => unreachable!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CatalogError>();
    }
}
