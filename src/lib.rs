//! Mood-driven song recommendations from facial emotion scans.
//!
//! Core modules:
//! - [`aggregator`] - Ranking of noisy per-frame emotion labels
//! - [`recommend`] - Single-emotion and weighted multi-emotion playlists
//! - [`catalog`] - Local, curated and partitioned song sources
//! - [`schedule`] - Song budget per ranked emotion
//!
//! ### Supporting Modules
//!
//! - [`emotion`] - The closed set of emotion labels
//! - [`song`] - Song records as returned to callers
//! - [`error`] - Error taxonomy
//! - [`config`] - Configuration and data directory management
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use emotune::catalog::local::LocalCatalog;
//! use emotune::catalog::partition::PartitionedTable;
//! use emotune::emotion::EmotionLabel::*;
//! use emotune::{aggregator, recommend};
//!
//! let mut rng = rand::thread_rng();
//!
//! // Stateless flow: one dominant emotion
//! let local = LocalCatalog::new("static/songs");
//! let rec = recommend::recommend_dominant(Some(&[Happy, Sad, Happy]), &local, "http://localhost:5000/", &mut rng)?;
//! println!("{} songs for {}", rec.songs.len(), rec.dominant_emotion);
//!
//! // Scan flow: weighted playlist across ranked emotions
//! let table = PartitionedTable::from_csv(std::path::Path::new("muse_v3.csv"))?;
//! let ranked = aggregator::rank(&[Sad, Sad, Angry, Happy]);
//! let playlist = recommend::weighted_playlist(&ranked, &table, &mut rng);
//! println!("{} songs, dominant {}", playlist.songs.len(), playlist.dominant_emotion);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Randomness
//!
//! Shuffling and sampling take any [`rand::Rng`]. Production code passes
//! `thread_rng()`; tests pass a seeded `StdRng`.
//!
//! ## Error Handling
//!
//! The core returns typed errors from [`error`]. Configuration and I/O at the
//! edges return `anyhow::Result` with context.

pub mod aggregator;
pub mod catalog;
pub mod cli;
pub mod completion;
pub mod config;
pub mod emotion;
pub mod error;
pub mod recommend;
pub mod schedule;
pub mod song;
