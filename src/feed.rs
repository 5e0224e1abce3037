//! Contracts with the scrobbling service collaborator.
//!
//! The collaborator does the network work (rate limiting, scraping, its own
//! result cache). This crate only consumes what it returns:
//!
//! - [`SimilarityFeed`]: artists similar to a given artist, best match first
//! - [`PreferenceFeed`]: a user's loved and banned `(artist, title)` pairs
//!
//! [`FeedSnapshot`] implements both from a JSON document on disk, which is
//! how the command-line tool runs without network access.

use crate::normalize::Normalizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// One similar artist as reported by the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarArtist {
    /// 0 to 100.
    pub similarity: f64,
    pub name: String,
    /// The service's own simplified name. Not used for matching.
    #[serde(default)]
    pub key: String,
}

/// An `(artist, title)` pair from a preference list.
pub type TrackRef = (String, String);

#[derive(Error, Debug)]
pub enum FeedError {
    /// The service could not be reached. Worth retrying.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with something unusable.
    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FeedError {
    /// Whether a retry could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, FeedError::Transport(_))
    }
}

pub trait SimilarityFeed {
    /// Artists similar to `artist`, most similar first. An empty list means
    /// the service has no data, not that something failed.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] when the service is unreachable.
    fn similar_artists(&self, artist: &str) -> Result<Vec<SimilarArtist>, FeedError>;
}

pub trait PreferenceFeed {
    /// Tracks the user marked as loved.
    ///
    /// # Errors
    ///
    /// Returns an error when the list cannot be retrieved.
    fn loved_tracks(&self, user: &str) -> Result<Vec<TrackRef>, FeedError>;

    /// Tracks the user banned.
    ///
    /// # Errors
    ///
    /// Returns an error when the list cannot be retrieved.
    fn banned_tracks(&self, user: &str) -> Result<Vec<TrackRef>, FeedError>;
}

/// On-disk form of a [`FeedSnapshot`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedDocument {
    /// Artist name → similar artists.
    #[serde(default)]
    pub similar: HashMap<String, Vec<SimilarArtist>>,
    #[serde(default)]
    pub loved: Vec<TrackRef>,
    #[serde(default)]
    pub banned: Vec<TrackRef>,
}

/// Previously fetched feed results, served from memory.
///
/// Similarity lists are looked up by normalized artist name, so the document
/// may spell artists however the service did. Preference lists belong to a
/// single user and are returned for any user name.
#[derive(Debug, Default)]
pub struct FeedSnapshot {
    similar: HashMap<String, Vec<SimilarArtist>>,
    loved: Vec<TrackRef>,
    banned: Vec<TrackRef>,
    normalizer: Normalizer,
}

impl FeedSnapshot {
    pub fn new(document: FeedDocument) -> Self {
        let normalizer = Normalizer::new();
        let mut similar: HashMap<String, Vec<SimilarArtist>> = HashMap::new();
        for (artist, records) in document.similar {
            similar
                .entry(normalizer.normalize(&artist))
                .or_default()
                .extend(records);
        }
        // Spellings that normalize alike share one list, most similar first.
        for records in similar.values_mut() {
            records.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        }
        Self {
            similar,
            loved: document.loved,
            banned: document.banned,
            normalizer,
        }
    }

    /// Loads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, FeedError> {
        let content = fs::read_to_string(path)?;
        let document: FeedDocument = serde_json::from_str(&content)?;
        log::debug!(
            "Loaded feed snapshot from {} ({} artists, {} loved, {} banned)",
            path.display(),
            document.similar.len(),
            document.loved.len(),
            document.banned.len()
        );
        Ok(Self::new(document))
    }
}

impl SimilarityFeed for FeedSnapshot {
    fn similar_artists(&self, artist: &str) -> Result<Vec<SimilarArtist>, FeedError> {
        Ok(self
            .similar
            .get(&self.normalizer.normalize(artist))
            .cloned()
            .unwrap_or_default())
    }
}

impl PreferenceFeed for FeedSnapshot {
    fn loved_tracks(&self, _user: &str) -> Result<Vec<TrackRef>, FeedError> {
        Ok(self.loved.clone())
    }

    fn banned_tracks(&self, _user: &str) -> Result<Vec<TrackRef>, FeedError> {
        Ok(self.banned.clone())
    }
}
