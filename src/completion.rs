//! # Shell Completion Module
//!
//! Completion scripts for the `emotune` command line, generated through
//! clap's completion support.
//!
//! ## Usage
//!
//! ```bash
//! # Generate bash completions
//! emotune completion bash > ~/.local/share/bash-completion/completions/emotune
//!
//! # Generate zsh completions
//! emotune completion zsh > ~/.config/zsh/completions/_emotune
//! ```

use crate::cli::Shell;
use crate::emotion::EmotionLabel;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io::{self, Write};

/// Generate shell completions for the given shell on stdout
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate_completions_to(gen, cmd, &mut io::stdout());
}

/// Generate shell completions into `out`
pub fn generate_completions_to<G: Generator>(gen: G, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(gen, cmd, name, out);
}

/// Convert our Shell enum to clap_complete's Shell enum
#[must_use]
pub fn shell_to_completion_shell(shell: &Shell) -> CompletionShell {
    match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    }
}

/// Subcommands whose positional arguments are emotion labels
const EMOTION_SUBCOMMANDS: [&str; 4] = ["recommend", "playlist", "rank", "catalog"];

/// Append dynamic emotion completions to a fish script
///
/// The generated function asks the hidden `complete-emotions` command for
/// label names, so the list always matches the installed binary.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn generate_fish_emotion_completions(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "# Emotion label completion")?;
    writeln!(out, "function __emotune_complete_emotions")?;
    writeln!(out, "    if command -sq emotune")?;
    writeln!(out, "        emotune complete-emotions 2>/dev/null")?;
    writeln!(out, "    end")?;
    writeln!(out, "end")?;
    for subcommand in EMOTION_SUBCOMMANDS {
        writeln!(
            out,
            "complete -c emotune -f -n '__fish_seen_subcommand_from {subcommand}' -a '(__emotune_complete_emotions)' -d 'Emotion'"
        )?;
    }
    Ok(())
}

/// Emotion names offered when completing label arguments
#[must_use]
pub fn emotion_completions() -> Vec<&'static str> {
    EmotionLabel::ALL.iter().map(|e| e.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_shell_conversion() {
        assert_eq!(shell_to_completion_shell(&Shell::Bash), CompletionShell::Bash);
        assert_eq!(shell_to_completion_shell(&Shell::Zsh), CompletionShell::Zsh);
        assert_eq!(shell_to_completion_shell(&Shell::Fish), CompletionShell::Fish);
    }

    #[test]
    fn test_bash_script_mentions_subcommands() {
        let mut cmd = crate::cli::Args::command();
        let mut out = Vec::new();
        generate_completions_to(CompletionShell::Bash, &mut cmd, &mut out);

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("_emotune"));
        assert!(script.contains("recommend"));
        assert!(script.contains("playlist"));
    }

    #[test]
    fn test_fish_script_completes_emotions() {
        let mut out = Vec::new();
        generate_fish_emotion_completions(&mut out).unwrap();

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("emotune complete-emotions"));
        for subcommand in EMOTION_SUBCOMMANDS {
            assert!(script.contains(&format!("__fish_seen_subcommand_from {subcommand}'")));
        }
    }

    #[test]
    fn test_emotion_completions() {
        let names = emotion_completions();
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"Surprised"));
    }
}
