//! # Emotune - Mood-Driven Playlists
//!
//! Emotune maps the emotions detected on a face during a scan onto songs.
//! The classifier and camera loop live elsewhere; this binary takes the
//! resulting labels on the command line.
//!
//! ## Usage
//!
//! ```bash
//! # Songs for the dominant emotion (local files first, curated list otherwise)
//! emotune recommend Happy Happy Sad
//!
//! # Weighted playlist over the tagged dataset
//! emotune playlist --dataset muse_v3.csv Sad Sad Angry Happy
//!
//! # Inspect ranking and curated playlists
//! emotune rank Fearful Sad Sad
//! emotune catalog Happy
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info, warn};
use std::path::Path;

use emotune::aggregator;
use emotune::catalog::fixed;
use emotune::catalog::local::LocalCatalog;
use emotune::catalog::partition::PartitionedTable;
use emotune::cli::{self, Command};
use emotune::completion;
use emotune::config::RuntimeConfig;
use emotune::emotion::EmotionLabel;
use emotune::error::RecommendError;
use emotune::recommend::{self, Recommendation, WeightedPlaylist};

/// Configuration from the optional file, overridden by the environment.
fn load_config(path: Option<&Path>) -> Result<RuntimeConfig> {
    let config = match path {
        Some(path) => {
            let mut config = RuntimeConfig::load(path)?;
            config.apply_env(|key| std::env::var(key).ok());
            config
        }
        None => RuntimeConfig::from_env(),
    };
    debug!("Effective configuration: {config:?}");
    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn print_recommendation(rec: &Recommendation) {
    println!("Recommended songs for: {}", rec.dominant_emotion);
    for (idx, song) in rec.songs.iter().enumerate() {
        let origin = if song.is_local { " [local]" } else { "" };
        println!("{:>3}. {} - {}{origin}", idx + 1, song.name, song.artist);
        println!("     {}", song.link);
    }
}

fn print_weighted_playlist(playlist: &WeightedPlaylist) {
    println!("Recommended songs for: {}", playlist.dominant_emotion);
    for allocation in &playlist.allocations {
        match allocation.outcome {
            recommend::DrawOutcome::Drawn { count } => {
                println!("  {:<10} {count}/{}", allocation.emotion.as_str(), allocation.requested);
            }
            recommend::DrawOutcome::Shortfall { available } => {
                println!(
                    "  {:<10} skipped ({available} available, {} requested)",
                    allocation.emotion.as_str(),
                    allocation.requested
                );
            }
        }
    }
    if playlist.songs.is_empty() {
        println!("No recommendations available.");
        return;
    }
    for (idx, song) in playlist.display_songs().iter().enumerate() {
        println!("{:>3}. {} - {}", idx + 1, song.name, song.artist);
        println!("     {}", song.link);
    }
}

/// Main entry point for the Emotune application.
///
/// Logging is controlled via `RUST_LOG`:
/// - `RUST_LOG=debug emotune recommend Happy` - Enable debug logging
/// - `RUST_LOG=emotune::recommend=trace emotune playlist Sad` - Module-specific logging
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Recommend {
            emotions,
            songs_dir,
            base_url,
            output,
        } => {
            if emotions.is_empty() {
                return Err(RecommendError::MissingInput.into());
            }
            let mut config = config;
            if let Some(dir) = songs_dir {
                config.songs_dir = dir;
            }
            if let Some(url) = base_url {
                config.base_url = url;
            }

            let catalog = LocalCatalog::new(config.resolved_songs_dir()?);
            info!("Looking for local songs under {}", catalog.root().display());
            let rec = recommend::recommend_labels(
                Some(emotions.as_slice()),
                &catalog,
                &config.base_url,
                &mut rand::thread_rng(),
            )?;

            if output.json {
                print_json(&rec)?;
            } else {
                print_recommendation(&rec);
            }
        }
        Command::Playlist {
            emotions,
            dataset,
            bucket_size,
            output,
        } => {
            let ranked = aggregator::rank_labels(emotions.as_slice())?;
            if ranked.is_empty() {
                warn!("No emotions detected, nothing to recommend");
            }

            let dataset = dataset.unwrap_or(config.dataset_path);
            let table = PartitionedTable::from_csv_with_bucket_size(&dataset, bucket_size)
                .with_context(|| format!("Failed to load song dataset {}", dataset.display()))?;
            let playlist = recommend::weighted_playlist(&ranked, &table, &mut rand::thread_rng());

            if output.json {
                print_json(&playlist)?;
            } else {
                print_weighted_playlist(&playlist);
            }
        }
        Command::Rank { emotions } => {
            let ranked = aggregator::rank_labels(emotions.as_slice())?;
            let names: Vec<&str> = ranked.iter().map(|e| e.as_str()).collect();
            println!("Ranked: {}", names.join(", "));
            println!(
                "Dominant: {}",
                ranked.first().copied().unwrap_or_default()
            );
        }
        Command::Catalog { emotion } => {
            let emotions = match emotion {
                Some(name) => vec![EmotionLabel::parse_label(&name)?],
                None => EmotionLabel::ALL.to_vec(),
            };
            for emotion in emotions {
                println!("{emotion}:");
                for (idx, song) in fixed::playlist(emotion).iter().enumerate() {
                    println!("  {}. {} - {} ({})", idx + 1, song.name, song.artist, song.link);
                }
            }
        }
        Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(&shell), &mut cmd);
            if shell == cli::Shell::Fish {
                completion::generate_fish_emotion_completions(&mut std::io::stdout())
                    .context("Failed to write fish completions")?;
            }
        }
        Command::CompleteEmotions => {
            for name in completion::emotion_completions() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
