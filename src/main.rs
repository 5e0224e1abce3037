//! # Segue
//!
//! Picks the next track or album for a running MPD queue, steering by artist
//! similarity and the user's loved and banned tracks.
//!
//! ## Usage
//!
//! ```bash
//! # Append one fitting track to the play queue
//! segue next
//!
//! # Append a fitting album, showing the pick only
//! segue album --dry-run
//!
//! # Work from an exported catalog and an explicit queue
//! segue --catalog library.json next --queue "jazz/davis/so what.flac"
//! ```
//!
//! Logging is controlled via `RUST_LOG`, e.g. `RUST_LOG=segue=debug segue next`.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{info, warn};
use segue::catalog::{Catalog, DirEntry};
use segue::cli::{self, Command, QueueArgs};
use segue::completion;
use segue::config::RuntimeConfig;
use segue::feed::FeedSnapshot;
use segue::generator::{PlaylistGenerator, Preferences};
use segue::library::Library;
use segue::mpd;
use segue::similarity::SimilarityResolver;
use segue::track::{format_duration, TrackRecord};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    if let Command::Completion { shell } = &args.command {
        let mut cmd = cli::Args::command();
        completion::generate_completions(
            completion::shell_to_completion_shell(shell),
            &mut cmd,
            &mut io::stdout(),
        );
        return Ok(());
    }

    let mut config = RuntimeConfig::new()?;
    if let Some(feeds) = args.feeds.clone() {
        config = config.with_feeds_path(feeds);
    }
    if let Some(user) = args.user.clone() {
        config = config.with_user(user);
    }

    let library = Arc::new(Library::from_records(load_records(args.catalog.as_deref())?));

    match args.command {
        Command::Next { queue } => {
            let mut generator = build_generator(&config, &library, &queue)?;
            let queue_paths = read_queue(&queue)?;
            let Some(path) = generator.next_track(&queue_paths[..]) else {
                anyhow::bail!("The catalog is empty, nothing to pick from");
            };
            if queue.dry_run {
                println!("{path}");
            } else {
                mpd::enqueue(&[path])?;
            }
        }
        Command::Album { queue } => {
            let mut generator = build_generator(&config, &library, &queue)?;
            let queue_paths = read_queue(&queue)?;
            let Some(pick) = generator.next_album(&queue_paths[..]) else {
                anyhow::bail!("The catalog is empty, nothing to pick from");
            };
            match &pick.artist {
                Some(artist) => info!("Picked `{}' by {artist}", pick.album),
                None => info!("Picked `{}'", pick.album),
            }
            if queue.dry_run {
                for path in &pick.paths {
                    println!("{path}");
                }
            } else {
                mpd::enqueue(&pick.paths)?;
            }
        }
        Command::Similar { artist } => {
            let catalog = library.snapshot();
            let Some(seed) = catalog.artist(&artist) else {
                anyhow::bail!("No artist named `{artist}' in the catalog");
            };
            let resolver = SimilarityResolver::with_attempts(
                load_feed(&config.feeds_path)?,
                config.similarity_attempts,
            );
            for candidate in resolver.similar_artists(&catalog, &seed) {
                println!("{:>6.1}  {}", candidate.weight, candidate.artist);
            }
        }
        Command::Ls { path } => print_directory(&library.snapshot(), &path),
        Command::Artists => {
            for artist in library.snapshot().artists() {
                println!("{artist}");
            }
        }
        Command::Albums => {
            for album in library.snapshot().albums() {
                println!("{album}");
            }
        }
        Command::Genres => {
            for genre in library.snapshot().genres() {
                println!("{genre}");
            }
        }
        Command::CompleteArtists => {
            for name in completion::artist_completions(&library.snapshot()) {
                println!("{name}");
            }
        }
        Command::Completion { .. } => unreachable!("handled before the catalog is loaded"),
    }

    Ok(())
}

/// Track records from `catalog` if given, otherwise from MPD.
fn load_records(catalog: Option<&Path>) -> Result<Vec<TrackRecord>> {
    match catalog {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog at {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid catalog at {}: expected an array of track records", path.display()))
        }
        None => mpd::list_all(),
    }
}

/// The feed snapshot at `path`. A missing file means no feed data.
fn load_feed(path: &Path) -> Result<FeedSnapshot> {
    if !path.exists() {
        warn!(
            "No feed snapshot at {}, picks will rely on genres only",
            path.display()
        );
        return Ok(FeedSnapshot::default());
    }
    FeedSnapshot::load(path)
        .with_context(|| format!("Failed to load feed snapshot at {}", path.display()))
}

fn build_generator(
    config: &RuntimeConfig,
    library: &Arc<Library>,
    queue: &QueueArgs,
) -> Result<PlaylistGenerator<FeedSnapshot>> {
    let feed = load_feed(&config.feeds_path)?;
    let preferences = match &config.user {
        Some(user) => Preferences::fetch(&feed, user, library.snapshot().normalizer()),
        None => Preferences::default(),
    };
    let resolver = SimilarityResolver::with_attempts(feed, config.similarity_attempts);
    let generator = PlaylistGenerator::new(Arc::clone(library), resolver, preferences, config.generator());
    Ok(match queue.seed {
        Some(seed) => generator.with_seed(seed),
        None => generator,
    })
}

fn read_queue(queue: &QueueArgs) -> Result<Vec<String>> {
    match &queue.queue {
        Some(paths) => Ok(paths.clone()),
        None => mpd::current_queue(),
    }
}

fn print_directory(catalog: &Catalog, path: &str) {
    for entry in catalog.list_directory(path) {
        match entry {
            DirEntry::Directory(_) => println!("{}/", entry.name()),
            DirEntry::File(track) => match track.record().duration() {
                Some(seconds) => println!("{}  [{}]  {track}", entry.name(), format_duration(seconds)),
                None => println!("{}  {track}", entry.name()),
            },
        }
    }
}
