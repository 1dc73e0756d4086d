//! # Local Song Catalog
//!
//! Audio files dropped into a per-emotion directory take precedence over the
//! curated playlists. The layout mirrors what the web layer serves:
//!
//! ```text
//! <songs dir>/
//! ├── Happy/
//! │   ├── track one.mp3
//! │   └── track two.ogg
//! └── Sad/
//!     └── rain.wav
//! ```
//!
//! The directory is enumerated on every lookup, so files added while the
//! process runs are picked up by the next request.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};

use super::LocalSongs;
use crate::emotion::EmotionLabel;
use crate::song::Song;

/// File extensions recognized as playable audio.
pub const AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "wav", "ogg"];

/// URL path segment under which local songs are published.
pub const LOCAL_SONGS_SEGMENT: &str = "static/songs";

/// Artist shown for songs served from the local catalog.
pub const LOCAL_ARTIST: &str = "Local Track";

/// Filesystem-backed catalog rooted at a songs directory.
#[derive(Debug, Clone)]
pub struct LocalCatalog {
    root: PathBuf,
}

impl LocalCatalog {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the songs for `emotion`.
    #[must_use]
    pub fn emotion_dir(&self, emotion: EmotionLabel) -> PathBuf {
        self.root.join(emotion.as_str())
    }
}

impl LocalSongs for LocalCatalog {
    fn list(&self, emotion: EmotionLabel) -> Option<Vec<String>> {
        let dir = self.emotion_dir(emotion);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) => {
                trace!("No local songs at {}: {err}", dir.display());
                return None;
            }
        };

        let mut files: Vec<String> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable entry in {}: {err}", dir.display());
                    None
                }
            })
            // Follows symlinks so linked songs count as regular files.
            .filter(|entry| fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file()))
            .filter_map(|entry| match entry.file_name().into_string() {
                Ok(name) => Some(name),
                Err(name) => {
                    warn!("Skipping non UTF-8 filename {name:?} in {}", dir.display());
                    None
                }
            })
            .filter(|name| is_audio_file(name))
            .collect();
        files.sort();

        debug!("Found {} local songs for {emotion}", files.len());
        (!files.is_empty()).then_some(files)
    }
}

/// Whether `filename` carries a recognized audio extension (any case).
#[must_use]
pub fn is_audio_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Joins URL segments with exactly one `/` between them.
///
/// ```
/// use emotune::catalog::local::join_link;
///
/// assert_eq!(
///     join_link("http://localhost:5000/", &["static/songs", "Happy", "a.mp3"]),
///     "http://localhost:5000/static/songs/Happy/a.mp3"
/// );
/// ```
#[must_use]
pub fn join_link(base_url: &str, segments: &[&str]) -> String {
    segments.iter().fold(
        base_url.trim_end_matches('/').to_string(),
        |mut link, segment| {
            link.push('/');
            link.push_str(segment.trim_matches('/'));
            link
        },
    )
}

/// Public link for a local song file.
#[must_use]
pub fn local_song_link(base_url: &str, emotion: EmotionLabel, filename: &str) -> String {
    join_link(base_url, &[LOCAL_SONGS_SEGMENT, emotion.as_str(), filename])
}

/// Builds local [`Song`]s for the given filenames.
#[must_use]
pub fn local_songs(base_url: &str, emotion: EmotionLabel, filenames: &[String]) -> Vec<Song> {
    filenames
        .iter()
        .map(|filename| Song {
            name: filename.clone(),
            artist: LOCAL_ARTIST.to_string(),
            link: local_song_link(base_url, emotion, filename),
            track: filename.clone(),
            is_local: true,
        })
        .collect()
}
