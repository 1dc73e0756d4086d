//! # Song Catalogs
//!
//! Where recommended songs come from.
//!
//! - [`local`] - audio files discovered per emotion on disk
//! - [`fixed`] - curated seven-song playlists compiled into the binary
//! - [`partition`] - large tagged dataset split into emotion buckets
//!
//! The single-emotion flow resolves a [`SongSource`]: local songs when any
//! exist for the emotion, the fixed playlist otherwise. The weighted flow
//! samples from a [`SongPartitions`] implementation.

pub mod fixed;
pub mod local;
pub mod partition;

use std::collections::HashMap;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::emotion::EmotionLabel;
use crate::error::CatalogError;
use crate::song::Song;
use fixed::FixedSong;

/// Lookup of locally stored song files per emotion.
pub trait LocalSongs {
    /// Audio filenames stored for `emotion`, or `None` when there are none.
    fn list(&self, emotion: EmotionLabel) -> Option<Vec<String>>;
}

/// Catalog with no local songs, so every lookup uses the fixed playlists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalSongs;

impl LocalSongs for NoLocalSongs {
    fn list(&self, _emotion: EmotionLabel) -> Option<Vec<String>> {
        None
    }
}

impl LocalSongs for HashMap<EmotionLabel, Vec<String>> {
    fn list(&self, emotion: EmotionLabel) -> Option<Vec<String>> {
        self.get(&emotion).filter(|files| !files.is_empty()).cloned()
    }
}

impl<T: LocalSongs + ?Sized> LocalSongs for &T {
    fn list(&self, emotion: EmotionLabel) -> Option<Vec<String>> {
        (**self).list(emotion)
    }
}

/// Song table partitioned by emotion, sampled without replacement.
pub trait SongPartitions {
    /// Rows available to draw for `emotion`.
    fn available(&self, emotion: EmotionLabel) -> usize;

    /// Draws `count` distinct songs for `emotion`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::InsufficientCatalog`] when fewer than `count` rows
    /// are available.
    fn sample<R: Rng + ?Sized>(
        &self,
        emotion: EmotionLabel,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Song>, CatalogError>;
}

/// Songs backing a single-emotion recommendation.
#[derive(Debug, Clone, PartialEq)]
pub enum SongSource {
    /// Every local song for the emotion, served in shuffled order.
    Local(Vec<Song>),
    /// The curated playlist, served in its fixed order.
    Fixed(&'static [FixedSong]),
}

impl SongSource {
    /// Prefers local songs for `emotion` and falls back to its fixed playlist.
    pub fn resolve<L: LocalSongs + ?Sized>(
        emotion: EmotionLabel,
        catalog: &L,
        base_url: &str,
    ) -> Self {
        match catalog.list(emotion) {
            Some(files) if !files.is_empty() => {
                debug!("Using {} local songs for {emotion}", files.len());
                Self::Local(local::local_songs(base_url, emotion, &files))
            }
            _ => {
                debug!("No local songs for {emotion}, using fixed playlist");
                Self::Fixed(fixed::playlist(emotion))
            }
        }
    }

    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Local(songs) => songs.len(),
            Self::Fixed(songs) => songs.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materializes the songs; local songs are shuffled with `rng`.
    pub fn into_songs<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<Song> {
        match self {
            Self::Local(mut songs) => {
                songs.shuffle(rng);
                songs
            }
            Self::Fixed(songs) => songs.iter().map(FixedSong::to_song).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_resolve_prefers_local() {
        let mut local = HashMap::new();
        local.insert(EmotionLabel::Happy, vec!["a.mp3".to_string(), "b.mp3".to_string()]);

        let source = SongSource::resolve(EmotionLabel::Happy, &local, "http://host/");
        assert!(source.is_local());
        assert_eq!(source.len(), 2);

        let source = SongSource::resolve(EmotionLabel::Sad, &local, "http://host/");
        assert_eq!(source, SongSource::Fixed(fixed::playlist(EmotionLabel::Sad)));
    }

    #[test]
    fn test_empty_local_listing_falls_back() {
        let mut local: HashMap<EmotionLabel, Vec<String>> = HashMap::new();
        local.insert(EmotionLabel::Angry, Vec::new());
        let source = SongSource::resolve(EmotionLabel::Angry, &local, "http://host/");
        assert!(!source.is_local());
        assert_eq!(source.len(), fixed::PLAYLIST_LEN);
    }

    #[test]
    fn test_fixed_songs_keep_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let songs = SongSource::resolve(EmotionLabel::Neutral, &NoLocalSongs, "http://host/")
            .into_songs(&mut rng);
        let expected: Vec<Song> = fixed::playlist(EmotionLabel::Neutral)
            .iter()
            .map(FixedSong::to_song)
            .collect();
        assert_eq!(songs, expected);
    }

    #[test]
    fn test_local_songs_are_permuted() {
        let files: Vec<String> = (0..12).map(|i| format!("{i:02}.mp3")).collect();
        let mut local = HashMap::new();
        local.insert(EmotionLabel::Sad, files.clone());

        let mut rng = StdRng::seed_from_u64(11);
        let songs = SongSource::resolve(EmotionLabel::Sad, &local, "http://host/")
            .into_songs(&mut rng);
        let mut names: Vec<String> = songs.iter().map(|s| s.name.clone()).collect();
        names.sort();
        assert_eq!(names, files);
        assert!(songs.iter().all(|s| s.is_local));
    }
}
