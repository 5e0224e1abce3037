//! Picks what to play next, steering by artist similarity and the listener's
//! loved and banned tracks.
//!
//! Core modules:
//! - [`normalize`] - Fuzzy name keys
//! - [`track`] - Ingested track records and their field fallbacks
//! - [`catalog`] - Indexes over artists, albums, genres and paths
//! - [`library`] - Shared catalog with swap-in reloads
//! - [`feed`] - Similarity and preference feed contracts
//! - [`similarity`] - Similar artists restricted to the catalog
//! - [`selector`] - Biased weighted choice
//! - [`generator`] - Next track and next album
//!
//! ### Supporting Modules
//!
//! - [`mpd`] - MPD integration via the `mpc` command-line tool
//! - [`config`] - Configuration and data directory management
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```
//! use segue::feed::{FeedDocument, FeedSnapshot, SimilarArtist};
//! use segue::generator::{GeneratorConfig, PlaylistGenerator, Preferences};
//! use segue::library::Library;
//! use segue::similarity::SimilarityResolver;
//! use segue::track::TrackRecord;
//! use std::sync::Arc;
//!
//! let library = Arc::new(Library::from_records(vec![
//!     TrackRecord::from_tags([("file", "a.flac"), ("artist", "Miles Davis")]),
//!     TrackRecord::from_tags([("file", "b.flac"), ("artist", "John Coltrane")]),
//! ]));
//!
//! let mut document = FeedDocument::default();
//! document.similar.insert(
//!     "Miles Davis".to_string(),
//!     vec![SimilarArtist { similarity: 90.0, name: "John Coltrane".to_string(), key: String::new() }],
//! );
//! let resolver = SimilarityResolver::new(FeedSnapshot::new(document));
//!
//! let mut generator = PlaylistGenerator::new(
//!     library,
//!     resolver,
//!     Preferences::default(),
//!     GeneratorConfig::default(),
//! );
//! assert_eq!(generator.next_track(&["a.flac"]).as_deref(), Some("b.flac"));
//! ```
//!
//! ## Error Handling
//!
//! Picking never fails: unknown names give empty results, unreachable feeds
//! are retried and then ignored. Functions that touch the filesystem or MPD
//! return `anyhow::Result`; the feed seam uses [`feed::FeedError`].

pub mod catalog;
pub mod cli;
pub mod completion;
pub mod config;
pub mod feed;
pub mod generator;
pub mod library;
pub mod mpd;
pub mod normalize;
pub mod selector;
pub mod similarity;
pub mod track;
