//! Error types for emotion aggregation and playlist selection.
//!
//! These are data-shape errors. Filesystem and dataset I/O is reported by the
//! catalog collaborators and wrapped with `anyhow` context at the edges.

use thiserror::Error;

use crate::emotion::EmotionLabel;

/// Errors surfaced by the recommendation core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// No emotion data supplied at all. An empty sequence is *not* this error.
    #[error("No emotions provided")]
    MissingInput,

    /// A label outside the closed set of seven emotions.
    #[error("Unknown emotion label: {0:?}")]
    UnknownEmotionKey(String),

    /// Neither a local nor a fixed catalog has entries for the emotion.
    #[error("No catalog available for emotion {0}")]
    NoCatalogAvailable(EmotionLabel),
}

/// Errors raised by song catalog collaborators.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A partition holds fewer rows than a draw without replacement requires.
    #[error("Partition for {emotion} has {available} songs, {requested} requested")]
    InsufficientCatalog {
        emotion: EmotionLabel,
        requested: usize,
        available: usize,
    },

    /// The song dataset could not be read or parsed.
    #[error("Failed to load song dataset: {0}")]
    Dataset(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(RecommendError::MissingInput.to_string(), "No emotions provided");
        let err = CatalogError::InsufficientCatalog {
            emotion: EmotionLabel::Happy,
            requested: 30,
            available: 4,
        };
        assert_eq!(err.to_string(), "Partition for Happy has 4 songs, 30 requested");
    }
}
