//! # Emotion Aggregator
//!
//! Turns a noisy per-frame stream of emotion labels into an ordered list of
//! distinct emotions, most frequent first.
//!
//! ## Ordering
//!
//! Labels are counted, then stably sorted by descending count. Equal counts
//! keep the order in which each label first appeared in the input, so the
//! result is fully determined by the sequence.
//!
//! ```
//! use emotune::aggregator::{rank, dominant};
//! use emotune::emotion::EmotionLabel::*;
//!
//! let frames = [Happy, Happy, Sad, Happy];
//! assert_eq!(rank(&frames), vec![Happy, Sad]);
//! assert_eq!(dominant(&frames), Happy);
//! assert_eq!(dominant(&[]), Neutral);
//! ```

use log::{debug, trace};

use crate::emotion::EmotionLabel;
use crate::error::RecommendError;
use crate::schedule::MAX_EMOTIONS;

/// Frames scanned per session when no budget is given.
pub const DEFAULT_FRAME_BUDGET: usize = 20;

/// Distinct labels with their occurrence counts, in first-occurrence order.
fn tally(sequence: &[EmotionLabel]) -> Vec<(EmotionLabel, usize)> {
    let mut counts: Vec<(EmotionLabel, usize)> = Vec::with_capacity(EmotionLabel::ALL.len());
    for &label in sequence {
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts
}

/// Ranks the distinct labels of `sequence` by descending frequency.
///
/// Ties are broken by first occurrence. The result holds at most five labels;
/// an empty input yields an empty list.
#[must_use]
pub fn rank(sequence: &[EmotionLabel]) -> Vec<EmotionLabel> {
    let mut counts = tally(sequence);
    // `sort_by` is stable, which keeps first-occurrence order among ties.
    counts.sort_by(|(_, a), (_, b)| b.cmp(a));
    trace!("Emotion counts: {counts:?}");

    let ranked: Vec<EmotionLabel> = counts
        .into_iter()
        .take(MAX_EMOTIONS)
        .map(|(label, _)| label)
        .collect();
    debug!("Ranked {} frames into {ranked:?}", sequence.len());
    ranked
}

/// The single most frequent label, or `Neutral` when nothing was observed.
#[must_use]
pub fn dominant(sequence: &[EmotionLabel]) -> EmotionLabel {
    rank(sequence).first().copied().unwrap_or_default()
}

/// Distinct labels in the order they first appear, without a cap.
#[must_use]
pub fn distinct_in_order(sequence: &[EmotionLabel]) -> Vec<EmotionLabel> {
    tally(sequence).into_iter().map(|(label, _)| label).collect()
}

/// Parses string labels and ranks them.
///
/// # Errors
///
/// Fails with [`RecommendError::UnknownEmotionKey`] on the first label
/// outside the closed set.
pub fn rank_labels<S: AsRef<str>>(labels: &[S]) -> Result<Vec<EmotionLabel>, RecommendError> {
    let sequence = labels
        .iter()
        .map(|label| EmotionLabel::parse_label(label.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rank(&sequence))
}

/// Outcome of a finished [`ScanSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// Every label observed, in frame order.
    pub observed: Vec<EmotionLabel>,
    /// Ranked distinct labels, at most five.
    pub ranked: Vec<EmotionLabel>,
    /// Number of frames that were scanned.
    pub frames: usize,
}

impl ScanSummary {
    /// Dominant emotion of the scan, `Neutral` if no face was seen.
    #[must_use]
    pub fn dominant(&self) -> EmotionLabel {
        self.ranked.first().copied().unwrap_or_default()
    }

    /// Whether at least one face was classified during the scan.
    #[must_use]
    pub fn has_detections(&self) -> bool {
        !self.observed.is_empty()
    }
}

/// Multi-frame scanning session.
///
/// Each frame may contribute zero labels (no face) or several (one per
/// detected face). The session stops accepting frames once its budget is
/// spent.
#[derive(Debug, Clone)]
pub struct ScanSession {
    frame_budget: usize,
    frames: usize,
    observed: Vec<EmotionLabel>,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_BUDGET)
    }
}

impl ScanSession {
    #[must_use]
    pub fn new(frame_budget: usize) -> Self {
        Self {
            frame_budget,
            frames: 0,
            observed: Vec::new(),
        }
    }

    /// Records the labels detected in one frame.
    ///
    /// Returns `false` without recording anything if the budget is spent.
    pub fn record_frame<I>(&mut self, detections: I) -> bool
    where
        I: IntoIterator<Item = EmotionLabel>,
    {
        if self.is_complete() {
            return false;
        }
        self.frames += 1;
        self.observed.extend(detections);
        trace!("Frame {}/{} recorded", self.frames, self.frame_budget);
        true
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.frames >= self.frame_budget
    }

    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    #[must_use]
    pub fn finish(self) -> ScanSummary {
        let ranked = rank(&self.observed);
        ScanSummary {
            observed: self.observed,
            ranked,
            frames: self.frames,
        }
    }
}
