//! # Partitioned Song Table
//!
//! A large tagged song dataset segmented into five contiguous emotion
//! buckets. Rows are ordered by their emotion tag count and then by valence,
//! so low-tag, low-valence songs land in the `Sad` bucket and the remainder
//! past the last full bucket forms `Happy`.
//!
//! ## Bucket Layout
//!
//! ```text
//! [0, 18000)       Sad
//! [18000, 36000)   Fearful
//! [36000, 54000)   Angry
//! [54000, 72000)   Neutral
//! [72000, ..)      Happy
//! ```
//!
//! Emotions without a bucket of their own (`Disgusted`, `Surprised`) draw
//! from `Sad`.

use std::ops::Range;
use std::path::Path;

use log::{debug, info, warn};
use rand::Rng;
use serde::Deserialize;

use super::SongPartitions;
use crate::emotion::EmotionLabel;
use crate::error::CatalogError;
use crate::song::Song;

/// Rows per bucket in the standard dataset.
pub const DEFAULT_BUCKET_SIZE: usize = 18_000;

/// Buckets in table order.
pub const BUCKET_ORDER: [EmotionLabel; 5] = [
    EmotionLabel::Sad,
    EmotionLabel::Fearful,
    EmotionLabel::Angry,
    EmotionLabel::Neutral,
    EmotionLabel::Happy,
];

/// One song of the tagged dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SongRow {
    pub name: String,
    pub artist: String,
    pub link: String,
    /// Number of emotion tags attached to the song.
    pub emotional: u32,
    /// Valence (pleasantness) score.
    pub pleasant: f64,
}

impl SongRow {
    #[must_use]
    pub fn to_song(&self) -> Song {
        Song::new(&self.name, &self.artist, &self.link)
    }
}

#[derive(Debug, Deserialize)]
struct DatasetRecord {
    track: String,
    artist: String,
    lastfm_url: String,
    number_of_emotion_tags: u32,
    valence_tags: f64,
}

impl From<DatasetRecord> for SongRow {
    fn from(record: DatasetRecord) -> Self {
        Self {
            name: record.track,
            artist: record.artist,
            link: record.lastfm_url,
            emotional: record.number_of_emotion_tags,
            pleasant: record.valence_tags,
        }
    }
}

/// Bucket an emotion draws its songs from.
#[must_use]
pub fn bucket_for(emotion: EmotionLabel) -> EmotionLabel {
    match emotion {
        EmotionLabel::Neutral
        | EmotionLabel::Angry
        | EmotionLabel::Fearful
        | EmotionLabel::Happy => emotion,
        EmotionLabel::Sad | EmotionLabel::Disgusted | EmotionLabel::Surprised => {
            EmotionLabel::Sad
        }
    }
}

/// Sorted song table with fixed-size emotion buckets.
///
/// Loaded once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct PartitionedTable {
    rows: Vec<SongRow>,
    bucket_size: usize,
}

impl PartitionedTable {
    /// Sorts `rows` by `(emotional, pleasant)` and partitions them with the
    /// standard bucket size.
    #[must_use]
    pub fn from_rows(rows: Vec<SongRow>) -> Self {
        Self::with_bucket_size(rows, DEFAULT_BUCKET_SIZE)
    }

    /// Like [`PartitionedTable::from_rows`] with a custom bucket size.
    #[must_use]
    pub fn with_bucket_size(mut rows: Vec<SongRow>, bucket_size: usize) -> Self {
        rows.sort_by(|a, b| {
            a.emotional
                .cmp(&b.emotional)
                .then(a.pleasant.total_cmp(&b.pleasant))
        });
        Self { rows, bucket_size }
    }

    /// Reads the dataset CSV at `path`.
    ///
    /// Expects the columns `track`, `artist`, `lastfm_url`,
    /// `number_of_emotion_tags` and `valence_tags`; other columns are
    /// ignored. Rows that fail to parse are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Dataset`] if the file cannot be opened or its
    /// header cannot be read.
    pub fn from_csv(path: &Path) -> Result<Self, CatalogError> {
        Self::from_csv_with_bucket_size(path, DEFAULT_BUCKET_SIZE)
    }

    /// [`PartitionedTable::from_csv`] with a custom bucket size.
    pub fn from_csv_with_bucket_size(path: &Path, bucket_size: usize) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        reader.headers()?;

        let mut skipped = 0usize;
        let rows: Vec<SongRow> = reader
            .deserialize::<DatasetRecord>()
            .filter_map(|record| match record {
                Ok(record) => Some(SongRow::from(record)),
                Err(err) => {
                    skipped += 1;
                    debug!("Skipping dataset row: {err}");
                    None
                }
            })
            .collect();

        if skipped > 0 {
            warn!("Skipped {skipped} malformed rows in {}", path.display());
        }
        info!("Loaded {} songs from {}", rows.len(), path.display());
        Ok(Self::with_bucket_size(rows, bucket_size))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row range of the bucket `emotion` draws from, clamped to the table.
    #[must_use]
    pub fn bucket_range(&self, emotion: EmotionLabel) -> Range<usize> {
        let bucket = bucket_for(emotion);
        let position = BUCKET_ORDER
            .iter()
            .position(|b| *b == bucket)
            .unwrap_or_default();
        let start = (position * self.bucket_size).min(self.rows.len());
        let end = if position + 1 == BUCKET_ORDER.len() {
            self.rows.len()
        } else {
            ((position + 1) * self.bucket_size).min(self.rows.len())
        };
        start..end
    }

    /// Rows in the bucket `emotion` draws from.
    #[must_use]
    pub fn bucket(&self, emotion: EmotionLabel) -> &[SongRow] {
        &self.rows[self.bucket_range(emotion)]
    }
}

impl SongPartitions for PartitionedTable {
    fn available(&self, emotion: EmotionLabel) -> usize {
        self.bucket_range(emotion).len()
    }

    fn sample<R: Rng + ?Sized>(
        &self,
        emotion: EmotionLabel,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Song>, CatalogError> {
        let bucket = self.bucket(emotion);
        if bucket.len() < count {
            return Err(CatalogError::InsufficientCatalog {
                emotion,
                requested: count,
                available: bucket.len(),
            });
        }
        Ok(rand::seq::index::sample(rng, bucket.len(), count)
            .into_iter()
            .map(|i| bucket[i].to_song())
            .collect())
    }
}
