//! # Playlist Allocation and Selection
//!
//! Two recommendation flows share the aggregator and the catalogs:
//!
//! ### Single dominant emotion
//! Used by the stateless classification endpoint. The most frequent emotion
//! picks one [`SongSource`]: all local songs for it in shuffled order, or its
//! seven-song fixed playlist.
//!
//! ```
//! use emotune::catalog::NoLocalSongs;
//! use emotune::emotion::EmotionLabel;
//! use emotune::recommend::recommend_dominant;
//!
//! let mut rng = rand::thread_rng();
//! let rec = recommend_dominant(Some(&[]), &NoLocalSongs, "http://localhost:5000/", &mut rng)?;
//! assert_eq!(rec.dominant_emotion, EmotionLabel::Neutral);
//! assert_eq!(rec.songs.len(), 7);
//! # Ok::<(), emotune::error::RecommendError>(())
//! ```
//!
//! ### Weighted multi-emotion playlist
//! Used after a multi-frame scan. Each ranked emotion receives a song count
//! from the [`WeightSchedule`] and that many songs are drawn at random from
//! its partition. Draws are concatenated in ranked order. A partition that
//! cannot satisfy its draw contributes nothing and is reported in the
//! allocation list instead of failing the whole playlist.

use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::aggregator;
use crate::catalog::{LocalSongs, SongPartitions, SongSource};
use crate::emotion::EmotionLabel;
use crate::error::{CatalogError, RecommendError};
use crate::schedule::{WeightSchedule, MAX_EMOTIONS};
use crate::song::Song;

/// Songs shown when a weighted playlist is displayed.
pub const DISPLAY_LIMIT: usize = 30;

/// Result of a single-emotion recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub dominant_emotion: EmotionLabel,
    pub songs: Vec<Song>,
}

/// Recommends songs for the dominant emotion of `emotions`.
///
/// An empty slice means nothing was detected and resolves to `Neutral`.
///
/// # Errors
///
/// - [`RecommendError::MissingInput`] when `emotions` is `None`
/// - [`RecommendError::NoCatalogAvailable`] if the resolved source is empty,
///   which the fixed playlists rule out
pub fn recommend_dominant<L, R>(
    emotions: Option<&[EmotionLabel]>,
    local: &L,
    base_url: &str,
    rng: &mut R,
) -> Result<Recommendation, RecommendError>
where
    L: LocalSongs + ?Sized,
    R: Rng + ?Sized,
{
    let emotions = emotions.ok_or(RecommendError::MissingInput)?;
    let dominant_emotion = aggregator::dominant(emotions);

    let source = SongSource::resolve(dominant_emotion, local, base_url);
    if source.is_empty() {
        return Err(RecommendError::NoCatalogAvailable(dominant_emotion));
    }
    let songs = source.into_songs(rng);
    info!("Recommending {} songs for {dominant_emotion}", songs.len());

    Ok(Recommendation {
        dominant_emotion,
        songs,
    })
}

/// [`recommend_dominant`] over raw label strings.
///
/// Unknown labels are logged and ignored; if none of the labels is known the
/// recommendation falls back to `Neutral`.
///
/// # Errors
///
/// Same as [`recommend_dominant`].
pub fn recommend_labels<S, L, R>(
    labels: Option<&[S]>,
    local: &L,
    base_url: &str,
    rng: &mut R,
) -> Result<Recommendation, RecommendError>
where
    S: AsRef<str>,
    L: LocalSongs + ?Sized,
    R: Rng + ?Sized,
{
    let labels = labels.ok_or(RecommendError::MissingInput)?;
    let emotions: Vec<EmotionLabel> = labels
        .iter()
        .filter_map(|label| match EmotionLabel::parse_label(label.as_ref()) {
            Ok(emotion) => Some(emotion),
            Err(err) => {
                warn!("{err}; ignoring");
                None
            }
        })
        .collect();
    recommend_dominant(Some(emotions.as_slice()), local, base_url, rng)
}

/// How one ranked emotion's draw turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DrawOutcome {
    /// `count` songs were drawn.
    Drawn { count: usize },
    /// The partition held only `available` songs; none were drawn.
    Shortfall { available: usize },
}

/// Song budget assigned to one ranked emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub emotion: EmotionLabel,
    pub requested: usize,
    pub outcome: DrawOutcome,
}

impl Allocation {
    /// Songs this emotion actually contributed.
    #[must_use]
    pub fn drawn(&self) -> usize {
        match self.outcome {
            DrawOutcome::Drawn { count } => count,
            DrawOutcome::Shortfall { .. } => 0,
        }
    }
}

/// Result of the weighted multi-emotion flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPlaylist {
    pub dominant_emotion: EmotionLabel,
    /// Drawn songs grouped by emotion, in ranked order.
    pub songs: Vec<Song>,
    /// One entry per ranked emotion, in ranked order.
    pub allocations: Vec<Allocation>,
}

impl WeightedPlaylist {
    /// Leading songs as presented to the listener.
    #[must_use]
    pub fn display_songs(&self) -> &[Song] {
        &self.songs[..self.songs.len().min(DISPLAY_LIMIT)]
    }

    /// Requested counts in ranked order.
    #[must_use]
    pub fn requested_counts(&self) -> Vec<usize> {
        self.allocations.iter().map(|a| a.requested).collect()
    }

    /// Whether any emotion fell short of its budget.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.allocations
            .iter()
            .any(|a| matches!(a.outcome, DrawOutcome::Shortfall { .. }))
    }
}

/// Builds the weighted playlist for an already ranked emotion list.
///
/// Lists longer than five are truncated. An empty list yields no songs and a
/// `Neutral` dominant emotion.
pub fn weighted_playlist<P, R>(ranked: &[EmotionLabel], partitions: &P, rng: &mut R) -> WeightedPlaylist
where
    P: SongPartitions + ?Sized,
    R: Rng + ?Sized,
{
    let ranked = &ranked[..ranked.len().min(MAX_EMOTIONS)];
    let dominant_emotion = ranked.first().copied().unwrap_or_default();

    let mut songs = Vec::with_capacity(WeightSchedule::total(ranked.len()));
    let mut allocations = Vec::with_capacity(ranked.len());

    for (position, &emotion) in ranked.iter().enumerate() {
        let requested = WeightSchedule::count_at(ranked.len(), position);
        let outcome = match partitions.sample(emotion, requested, rng) {
            Ok(drawn) => {
                debug!("Drew {} songs for {emotion}", drawn.len());
                let count = drawn.len();
                songs.extend(drawn);
                DrawOutcome::Drawn { count }
            }
            Err(CatalogError::InsufficientCatalog { available, .. }) => {
                warn!("Only {available} songs available for {emotion}, {requested} requested; skipping");
                DrawOutcome::Shortfall { available }
            }
            Err(err) => {
                warn!("Drawing songs for {emotion} failed: {err}; skipping");
                DrawOutcome::Shortfall {
                    available: partitions.available(emotion),
                }
            }
        };
        allocations.push(Allocation {
            emotion,
            requested,
            outcome,
        });
    }

    info!(
        "Weighted playlist for {dominant_emotion}: {} songs across {} emotions",
        songs.len(),
        ranked.len()
    );
    WeightedPlaylist {
        dominant_emotion,
        songs,
        allocations,
    }
}

/// Ranks a raw scan sequence and builds its weighted playlist.
pub fn scan_playlist<P, R>(sequence: &[EmotionLabel], partitions: &P, rng: &mut R) -> WeightedPlaylist
where
    P: SongPartitions + ?Sized,
    R: Rng + ?Sized,
{
    weighted_playlist(&aggregator::rank(sequence), partitions, rng)
}
