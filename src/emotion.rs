//! # Emotion Labels
//!
//! The closed set of facial-expression categories produced by the external
//! classifier. Variants are declared in the classifier's output index order so
//! that an arg-max index maps directly onto a label.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::RecommendError;

/// One of the seven emotion categories.
///
/// Parsing is ASCII case-insensitive and also accepts the `fear` shorthand
/// for [`EmotionLabel::Fearful`]. Display and serde both use the capitalized
/// canonical name (`"Happy"`, `"Sad"`, ...).
///
/// # Examples
///
/// ```
/// use emotune::emotion::EmotionLabel;
///
/// let label: EmotionLabel = "happy".parse().unwrap();
/// assert_eq!(label, EmotionLabel::Happy);
/// assert_eq!(label.to_string(), "Happy");
/// assert_eq!(EmotionLabel::from_index(4), Some(EmotionLabel::Neutral));
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum EmotionLabel {
    Angry,
    Disgusted,
    #[strum(to_string = "Fearful", serialize = "fear")]
    Fearful,
    Happy,
    #[default]
    Neutral,
    Sad,
    Surprised,
}

impl EmotionLabel {
    /// All labels in classifier index order.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Angry,
        EmotionLabel::Disgusted,
        EmotionLabel::Fearful,
        EmotionLabel::Happy,
        EmotionLabel::Neutral,
        EmotionLabel::Sad,
        EmotionLabel::Surprised,
    ];

    /// Maps a classifier output index (`0..=6`) onto its label.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this label in the classifier output.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical name, also used as the per-emotion directory name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Parses a label, reporting unknown input as
    /// [`RecommendError::UnknownEmotionKey`].
    pub fn parse_label(input: &str) -> Result<Self, RecommendError> {
        input
            .trim()
            .parse()
            .map_err(|_| RecommendError::UnknownEmotionKey(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order_matches_classifier() {
        let names: Vec<&str> = EmotionLabel::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(
            names,
            ["Angry", "Disgusted", "Fearful", "Happy", "Neutral", "Sad", "Surprised"]
        );
        for (i, label) in EmotionLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
            assert_eq!(EmotionLabel::from_index(i), Some(*label));
        }
        assert_eq!(EmotionLabel::from_index(7), None);
    }

    #[test]
    fn test_parsing_is_case_insensitive() {
        assert_eq!(EmotionLabel::parse_label("HAPPY").unwrap(), EmotionLabel::Happy);
        assert_eq!(EmotionLabel::parse_label(" sad ").unwrap(), EmotionLabel::Sad);
        assert_eq!(EmotionLabel::parse_label("fear").unwrap(), EmotionLabel::Fearful);
        assert_eq!(EmotionLabel::parse_label("Fearful").unwrap(), EmotionLabel::Fearful);
    }

    #[test]
    fn test_unknown_label_is_reported() {
        match EmotionLabel::parse_label("Bored") {
            Err(RecommendError::UnknownEmotionKey(key)) => assert_eq!(key, "Bored"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_display_and_serde_use_canonical_name() {
        assert_eq!(EmotionLabel::Fearful.to_string(), "Fearful");
        let json = serde_json::to_string(&EmotionLabel::Surprised).unwrap();
        assert_eq!(json, "\"Surprised\"");
        let back: EmotionLabel = serde_json::from_str("\"Disgusted\"").unwrap();
        assert_eq!(back, EmotionLabel::Disgusted);
    }

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(EmotionLabel::default(), EmotionLabel::Neutral);
    }
}
