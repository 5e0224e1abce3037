//! Similar artists, restricted to the catalog.
//!
//! Wraps a [`SimilarityFeed`] and turns its raw records into catalog
//! [`Artist`]s with a similarity weight. Transport failures are retried a
//! bounded number of times and then degrade to "no similar artists", which
//! sends the generator to its genre fallback instead of failing the request.

use crate::catalog::{Artist, Catalog};
use crate::feed::{FeedError, SimilarArtist, SimilarityFeed};
use log::{debug, warn};
use std::collections::HashSet;

/// Attempts per lookup before giving up.
pub const DEFAULT_ATTEMPTS: u32 = 3;

/// A catalog artist and its similarity to the seed (0 to 100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub artist: Artist<'a>,
    pub weight: f64,
}

pub struct SimilarityResolver<F> {
    feed: F,
    attempts: u32,
}

impl<F: SimilarityFeed> SimilarityResolver<F> {
    pub fn new(feed: F) -> Self {
        Self::with_attempts(feed, DEFAULT_ATTEMPTS)
    }

    pub fn with_attempts(feed: F, attempts: u32) -> Self {
        Self {
            feed,
            attempts: attempts.max(1),
        }
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    /// Catalog artists similar to `seed`, most similar first.
    ///
    /// The seed itself and artists missing from `catalog` are dropped. Never
    /// fails: unreachable feeds produce an empty list.
    pub fn similar_artists<'a>(&self, catalog: &'a Catalog, seed: &Artist<'_>) -> Vec<Candidate<'a>> {
        let records = self.fetch(seed.name());
        let mut seen = HashSet::new();
        let candidates: Vec<Candidate<'a>> = records
            .iter()
            .filter_map(|record| {
                let artist = catalog.artist(&record.name)?;
                (artist.key() != seed.key() && seen.insert(artist.key())).then_some(Candidate {
                    artist,
                    weight: record.similarity.max(0.0),
                })
            })
            .collect();
        debug!(
            "{} of {} similar artists for `{}' are in the catalog",
            candidates.len(),
            records.len(),
            seed.name()
        );
        candidates
    }

    fn fetch(&self, artist: &str) -> Vec<SimilarArtist> {
        for attempt in 1..=self.attempts {
            match self.feed.similar_artists(artist) {
                Ok(records) => return records,
                Err(err) if err.is_transient() && attempt < self.attempts => {
                    warn!("Lost connection to the similarity service ({err}), retrying ..");
                }
                Err(err) => {
                    report(&err, attempt);
                    return Vec::new();
                }
            }
        }
        Vec::new()
    }
}

fn report(err: &FeedError, attempt: u32) {
    if err.is_transient() {
        warn!("Lost connection to the similarity service {attempt} times in a row: {err}");
    } else {
        warn!("Ignoring similarity data: {err}");
    }
}
