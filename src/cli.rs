//! # Command-Line Interface Module
//!
//! Defines the command-line interface for Segue using Clap derive macros.
//!
//! ## Commands
//!
//! - `next`: Pick one track that fits the play queue and enqueue it
//! - `album`: Pick one album that fits the play queue and enqueue it
//! - `similar`: Show catalog artists similar to an artist
//! - `ls`: List a directory of the music database
//! - `artists`, `albums`, `genres`: List catalog entities
//!
//! ## Examples
//!
//! ```bash
//! segue next
//! segue --user rj album --dry-run
//! segue similar "Miles Davis"
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

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
#[command(name = "segue")]
#[command(about = "Segue: picks the next track or album for a running MPD queue")]
#[command(version)]
pub struct Args {
    /// Read the catalog from a JSON array of track records instead of MPD
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    /// Feed snapshot with similar artists and loved/banned tracks
    #[arg(long, global = true, env = "SEGUE_FEEDS", value_hint = clap::ValueHint::FilePath)]
    pub feeds: Option<PathBuf>,

    /// Scrobbler user whose loved and banned tracks apply
    #[arg(long, global = true, env = "SEGUE_USER")]
    pub user: Option<String>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick the next track for the play queue
    ///
    /// The last track in the queue seeds the choice: tracks by similar
    /// artists are favoured, loved tracks more so, banned tracks never
    /// chosen. An empty queue gets a random track.
    Next {
        #[command(flatten)]
        queue: QueueArgs,
    },

    /// Pick the next album for the play queue
    ///
    /// Albums by artists similar to the last queued track are favoured. Only
    /// the tracks of the artist the album was chosen through are enqueued.
    Album {
        #[command(flatten)]
        queue: QueueArgs,
    },

    /// Show catalog artists similar to an artist, with scores
    Similar {
        /// Artist name, spelled any way the catalog would recognise
        #[arg(value_hint = clap::ValueHint::Other)]
        artist: String,
    },

    /// List a directory of the music database
    Ls {
        /// Directory path relative to the music directory
        #[arg(default_value = "")]
        path: String,
    },

    /// List every artist in the catalog
    Artists,

    /// List every album in the catalog
    Albums,

    /// List every genre in the catalog
    Genres,

    /// Generate shell completions
    ///
    /// Usage: segue completion bash > ~/.local/share/bash-completion/completions/segue
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// List artist names for completion (hidden command)
    #[command(hide = true)]
    CompleteArtists,
}

/// Options shared by the commands that pick something.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct QueueArgs {
    /// Print the pick instead of enqueueing it
    #[arg(long)]
    pub dry_run: bool,

    /// Use these paths as the queue instead of MPD's play queue
    #[arg(long, num_args = 1..)]
    pub queue: Option<Vec<String>>,

    /// Seed the random source, for reproducible picks
    #[arg(long)]
    pub seed: Option<u64>,
}
