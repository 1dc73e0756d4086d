//! # Command-Line Interface Module
//!
//! This module defines the command-line interface for Emotune using Clap
//! derive macros.
//!
//! ## Commands
//!
//! - `recommend`: Songs for the dominant emotion of the given labels
//! - `playlist`: Weighted playlist across up to five ranked emotions
//! - `rank`: Show how a label sequence is ranked
//! - `catalog`: Print the curated fallback playlists
//!
//! ## Examples
//!
//! ```bash
//! emotune recommend Happy Happy Sad
//! emotune playlist --dataset muse_v3.csv Sad Angry Sad Happy
//! emotune catalog Neutral
//! ```

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{ENV_BASE_URL, ENV_DATASET, ENV_SONGS_DIR};

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "emotune")]
#[command(about = "Emotune: mood-driven playlists from facial emotion scans")]
#[command(version)]
pub struct Args {
    /// JSON configuration file
    ///
    /// Provides `songs_dir`, `base_url` and `dataset_path`. Flags and
    /// environment variables take precedence over the file.
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Output options shared by the recommendation commands
#[derive(ClapArgs, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend songs for the dominant emotion
    ///
    /// Counts the given labels and picks the most frequent one. All local
    /// songs stored for that emotion are returned in random order; without
    /// local songs its seven-song curated playlist is used.
    ///
    /// At least one label is required; unknown labels are ignored.
    Recommend {
        /// Detected emotion labels, one per observation
        #[arg(value_name = "EMOTION")]
        emotions: Vec<String>,

        /// Root directory holding one folder of audio files per emotion
        #[arg(long, env = ENV_SONGS_DIR, value_hint = clap::ValueHint::DirPath)]
        songs_dir: Option<PathBuf>,

        /// Base URL local song links are built on
        #[arg(long, env = ENV_BASE_URL)]
        base_url: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a weighted playlist from a scan
    ///
    /// Ranks the labels by frequency (at most five emotions) and draws a
    /// fixed number of songs per rank from the tagged song dataset:
    /// 30 | 30,20 | 55,20,15 | 30,29,18,9 | 10,7,6,5,2.
    Playlist {
        /// Emotion labels observed during the scan, in frame order
        #[arg(value_name = "EMOTION")]
        emotions: Vec<String>,

        /// Tagged song dataset (CSV)
        #[arg(long, env = ENV_DATASET, value_hint = clap::ValueHint::FilePath)]
        dataset: Option<PathBuf>,

        /// Rows per emotion bucket in the dataset
        #[arg(long, default_value_t = crate::catalog::partition::DEFAULT_BUCKET_SIZE)]
        bucket_size: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Rank emotion labels by frequency
    Rank {
        /// Emotion labels in observation order
        #[arg(value_name = "EMOTION")]
        emotions: Vec<String>,
    },

    /// Print the curated fallback playlists
    Catalog {
        /// Only print the playlist for this emotion
        emotion: Option<String>,
    },

    /// Generate shell completions
    ///
    /// Usage: emotune completion bash > ~/.local/share/bash-completion/completions/emotune
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// List emotion names for completion (hidden command)
    #[command(hide = true)]
    CompleteEmotions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_recommend() {
        let args = Args::try_parse_from(["emotune", "recommend", "Happy", "Sad", "--json"]).unwrap();
        match args.command {
            Command::Recommend {
                emotions, output, ..
            } => {
                assert_eq!(emotions, ["Happy", "Sad"]);
                assert!(output.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_playlist_defaults() {
        let args = Args::try_parse_from(["emotune", "playlist", "Angry"]).unwrap();
        match args.command {
            Command::Playlist { bucket_size, .. } => assert_eq!(bucket_size, 18_000),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
