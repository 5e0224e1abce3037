//! # Playlist Generator
//!
//! Picks the next track or album for a queue. The last queued track seeds the
//! choice:
//!
//! 1. Artists similar to the seed's artist become candidates, weighted by
//!    similarity. When there are few of them, artists sharing a genre with
//!    the seed join at a low flat weight.
//! 2. Candidate artists expand into their tracks. Artists already in the
//!    queue are damped, loved tracks are boosted, queued and banned tracks
//!    are dropped.
//! 3. The [weighted selector](crate::selector::choose) picks one.
//!
//! When a seed yields nothing, the seed moves one entry back in the queue.
//! Once every entry has been tried, the choice is uniformly random.
//!
//! Albums go through the same seeding but skip the per-track adjustments of
//! step 2.

use crate::catalog::{Album, Artist, Catalog, Track};
use crate::feed::{PreferenceFeed, SimilarityFeed, TrackRef};
use crate::library::Library;
use crate::normalize::Normalizer;
use crate::selector::choose;
use crate::similarity::{Candidate, SimilarityResolver};
use crate::track::UNKNOWN_ALBUM;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Compilation pseudo-artist. Loving one of its tracks says nothing about
/// the artists on it.
const VARIOUS_ARTISTS: &str = "Various Artists";

/// Tuning knobs of the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Weight multiplier for loved tracks.
    pub loved_multiplier: f64,
    /// Weight multiplier for tracks by artists with a loved track.
    pub loved_artist_multiplier: f64,
    /// An artist last queued at index `p` has its weight divided by
    /// `recency_factor × (p + 1)`.
    pub recency_factor: f64,
    /// Genre neighbours are added when at most this many similar artists
    /// are found.
    pub genre_threshold: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            loved_multiplier: 10.0,
            loved_artist_multiplier: 1.0,
            recency_factor: 10.0,
            genre_threshold: 3,
        }
    }
}

/// A user's loved and banned tracks as `artist-title` keys.
///
/// Fixed after construction.
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    loved_tracks: HashSet<String>,
    loved_artists: HashSet<String>,
    banned_tracks: HashSet<String>,
}

impl Preferences {
    /// Builds the sets from `(artist, title)` pairs.
    pub fn from_lists(normalizer: &Normalizer, loved: &[TrackRef], banned: &[TrackRef]) -> Self {
        let various = normalizer.normalize(VARIOUS_ARTISTS);
        let key = |(artist, title): &TrackRef| normalizer.create_key(&[artist.as_str(), title.as_str()]);

        Self {
            loved_tracks: loved.iter().map(key).collect(),
            loved_artists: loved
                .iter()
                .map(|(artist, _)| normalizer.normalize(artist))
                .filter(|artist| *artist != various)
                .collect(),
            banned_tracks: banned.iter().map(key).collect(),
        }
    }

    /// Fetches both lists for `user` once.
    ///
    /// A list that cannot be fetched counts as empty; the generator still
    /// works without preferences.
    pub fn fetch<P>(feed: &P, user: &str, normalizer: &Normalizer) -> Self
    where
        P: PreferenceFeed + ?Sized,
    {
        let loved = feed.loved_tracks(user).unwrap_or_else(|err| {
            warn!("Could not fetch loved tracks of {user}: {err}");
            Vec::new()
        });
        let banned = feed.banned_tracks(user).unwrap_or_else(|err| {
            warn!("Could not fetch banned tracks of {user}: {err}");
            Vec::new()
        });
        info!(
            "{user} has {} loved and {} banned tracks",
            loved.len(),
            banned.len()
        );
        Self::from_lists(normalizer, &loved, &banned)
    }

    pub fn is_loved(&self, track: &Track<'_>) -> bool {
        self.loved_tracks.contains(&track.preference_key())
    }

    pub fn is_banned(&self, track: &Track<'_>) -> bool {
        self.banned_tracks.contains(&track.preference_key())
    }

    pub fn is_loved_artist(&self, artist: &Artist<'_>) -> bool {
        self.loved_artists.contains(artist.key())
    }

    pub fn loved_count(&self) -> usize {
        self.loved_tracks.len()
    }

    pub fn banned_count(&self) -> usize {
        self.banned_tracks.len()
    }
}

/// An album chosen by [`PlaylistGenerator::next_album`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumPick {
    pub album: String,
    /// The artist the album was chosen through. `None` for random picks.
    pub artist: Option<String>,
    /// Paths to enqueue, ordered by (disc, track).
    pub paths: Vec<String>,
}

pub struct PlaylistGenerator<F> {
    library: Arc<Library>,
    resolver: SimilarityResolver<F>,
    preferences: Preferences,
    config: GeneratorConfig,
    rng: StdRng,
}

impl<F: SimilarityFeed> PlaylistGenerator<F> {
    pub fn new(
        library: Arc<Library>,
        resolver: SimilarityResolver<F>,
        preferences: Preferences,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            library,
            resolver,
            preferences,
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the random source with a seeded one, for reproducible picks.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn library(&self) -> &Arc<Library> {
        &self.library
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Path of the track to enqueue after `queue`.
    ///
    /// Queue entries are paths; those not in the catalog are ignored.
    /// Returns `None` only when the catalog is empty.
    pub fn next_track<S: AsRef<str>>(&mut self, queue: &[S]) -> Option<String> {
        let snapshot = self.library.snapshot();
        let catalog = snapshot.as_ref();
        let queue = resolve_queue(catalog, queue);

        let picked = self.relax(&queue, |generator, seed| {
            generator.candidates_from(catalog, &queue, seed)
        });
        let track = match picked {
            Some(track) => track,
            None => self.random_track(catalog, &queue)?,
        };
        debug!("Picked `{}' ({track})", track.path());
        Some(track.path().to_string())
    }

    /// The album to enqueue after `queue`.
    ///
    /// Albums are weighted by their artist's similarity only. The pick is
    /// restricted to the tracks of the artist it was reached through.
    pub fn next_album<S: AsRef<str>>(&mut self, queue: &[S]) -> Option<AlbumPick> {
        let snapshot = self.library.snapshot();
        let catalog = snapshot.as_ref();
        let queue = resolve_queue(catalog, queue);
        let unknown = catalog.normalize(UNKNOWN_ALBUM);

        let picked = self.relax(&queue, |generator, seed| {
            generator
                .artist_candidates(catalog, seed)
                .into_iter()
                .flat_map(|candidate| {
                    candidate
                        .artist
                        .albums()
                        .into_iter()
                        .map(move |album| (candidate.weight, (album, Some(candidate.artist))))
                })
                .filter(|(_, (album, _))| album.key() != unknown)
                .collect()
        });
        let (album, artist) = match picked {
            Some(pick) => pick,
            None => (self.random_album(catalog, &unknown)?, None),
        };

        let paths = catalog
            .tracks_by_album(album.key(), artist.map(|artist| artist.key()))
            .iter()
            .map(|track| track.path().to_string())
            .collect();
        debug!("Picked album `{album}'");
        Some(AlbumPick {
            album: album.name().to_string(),
            artist: artist.map(|artist| artist.name().to_string()),
            paths,
        })
    }

    /// Tries each queue entry as seed, latest first, until one yields
    /// candidates.
    fn relax<'c, T>(
        &mut self,
        queue: &[Track<'c>],
        candidates: impl Fn(&Self, Track<'c>) -> Vec<(f64, T)>,
    ) -> Option<T> {
        for seed in queue.iter().rev() {
            let found = candidates(self, *seed);
            if found.is_empty() {
                debug!("Nothing similar to `{seed}', trying the previous entry");
                continue;
            }
            debug!("{} candidates seeded by `{seed}'", found.len());
            return Some(choose(found, &mut self.rng));
        }
        None
    }

    /// Artists to draw from for `seed`, with their weights.
    ///
    /// Similar artists come first. If there are no more than
    /// [`genre_threshold`](GeneratorConfig::genre_threshold) of them, every
    /// other artist sharing a genre with `seed` is added at half the lowest
    /// similarity (1.0 if there is none). The seed's own artist is never a
    /// candidate.
    pub fn artist_candidates<'c>(&self, catalog: &'c Catalog, seed: Track<'c>) -> Vec<Candidate<'c>> {
        let seed_artist = seed.artist();
        let mut candidates = self.resolver.similar_artists(catalog, &seed_artist);
        if candidates.len() > self.config.genre_threshold {
            return candidates;
        }

        let weight = candidates
            .iter()
            .map(|candidate| candidate.weight)
            .reduce(f64::min)
            .map_or(1.0, |lowest| lowest / 2.0);
        let mut known: HashSet<&str> = candidates
            .iter()
            .map(|candidate| candidate.artist.key())
            .collect();
        known.insert(seed_artist.key());

        let before = candidates.len();
        for genre in seed.genres() {
            for artist in genre.artists() {
                if known.insert(artist.key()) {
                    candidates.push(Candidate { artist, weight });
                }
            }
        }
        debug!(
            "Added {} genre neighbours of `{seed_artist}' at weight {weight}",
            candidates.len() - before
        );
        candidates
    }

    /// Weighted tracks for the last entry of `queue`.
    pub fn track_candidates<'c>(&self, catalog: &'c Catalog, queue: &[Track<'c>]) -> Vec<(f64, Track<'c>)> {
        match queue.last() {
            Some(seed) => self.candidates_from(catalog, queue, *seed),
            None => Vec::new(),
        }
    }

    fn candidates_from<'c>(
        &self,
        catalog: &'c Catalog,
        queue: &[Track<'c>],
        seed: Track<'c>,
    ) -> Vec<(f64, Track<'c>)> {
        // Later positions overwrite earlier ones: the most recent one counts.
        let recency: HashMap<&str, usize> = queue
            .iter()
            .enumerate()
            .map(|(position, track)| (track.artist().key(), position))
            .collect();
        let queued: HashSet<&str> = queue.iter().map(|track| track.path()).collect();

        let mut weighted = Vec::new();
        for Candidate { artist, mut weight } in self.artist_candidates(catalog, seed) {
            if let Some(&position) = recency.get(artist.key()) {
                weight /= self.config.recency_factor * (position as f64 + 1.0);
            }
            if self.preferences.is_loved_artist(&artist) {
                weight *= self.config.loved_artist_multiplier;
            }
            for track in artist.tracks() {
                if queued.contains(track.path()) || self.preferences.is_banned(&track) {
                    continue;
                }
                let score = if self.preferences.is_loved(&track) {
                    weight * self.config.loved_multiplier
                } else {
                    weight
                };
                weighted.push((score, track));
            }
        }
        weighted
    }

    /// Uniform pick, avoiding queued and banned tracks while any other is
    /// left.
    fn random_track<'c>(&mut self, catalog: &'c Catalog, queue: &[Track<'c>]) -> Option<Track<'c>> {
        let eligible: Vec<Track<'c>> = catalog
            .tracks()
            .filter(|track| !queue.contains(track) && !self.preferences.is_banned(track))
            .collect();
        if let Some(track) = eligible.choose(&mut self.rng) {
            return Some(*track);
        }
        let all: Vec<Track<'c>> = catalog.tracks().collect();
        all.choose(&mut self.rng).copied()
    }

    fn random_album<'c>(&mut self, catalog: &'c Catalog, unknown: &str) -> Option<Album<'c>> {
        let albums: Vec<Album<'c>> = catalog.albums().collect();
        let named: Vec<Album<'c>> = albums
            .iter()
            .copied()
            .filter(|album| album.key() != unknown)
            .collect();
        named
            .choose(&mut self.rng)
            .or_else(|| albums.choose(&mut self.rng))
            .copied()
    }
}

/// Queue paths as catalog tracks, unknown ones dropped.
fn resolve_queue<'c, S: AsRef<str>>(catalog: &'c Catalog, queue: &[S]) -> Vec<Track<'c>> {
    queue
        .iter()
        .filter_map(|path| {
            let track = catalog.track_by_path(path.as_ref());
            if track.is_none() {
                debug!("Ignoring `{}': not in the catalog", path.as_ref());
            }
            track
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedDocument, FeedSnapshot, SimilarArtist};
    use crate::track::TrackRecord;

    fn record(file: &str, artist: &str, title: &str, album: Option<&str>, genre: Option<&str>) -> TrackRecord {
        let mut tags = vec![("file", file), ("artist", artist), ("title", title)];
        tags.extend(album.map(|album| ("album", album)));
        tags.extend(genre.map(|genre| ("genre", genre)));
        TrackRecord::from_tags(tags)
    }

    fn similar(similarity: f64, name: &str) -> SimilarArtist {
        SimilarArtist {
            similarity,
            name: name.to_string(),
            key: String::new(),
        }
    }

    fn library() -> Arc<Library> {
        Arc::new(Library::from_records(vec![
            record("a/1.flac", "Alpha", "One", Some("First"), Some("Rock")),
            record("a/2.flac", "Alpha", "Two", Some("First"), Some("Rock")),
            record("b/1.flac", "Bravo", "Three", Some("Second"), Some("Rock")),
            record("b/2.flac", "Bravo", "Four", None, Some("Rock")),
            record("c/1.flac", "Charlie", "Five", Some("Third"), Some("Pop")),
            record("d/1.flac", "Delta", "Six", Some("Fourth"), Some("Rock")),
            record("e/1.flac", "Echo", "Seven", Some("Fifth"), None),
            record("f/1.flac", "Foxtrot", "Eight", Some("Second"), None),
        ]))
    }

    fn generator(similar_to: &[(&str, Vec<SimilarArtist>)], preferences: Preferences) -> PlaylistGenerator<FeedSnapshot> {
        let mut document = FeedDocument::default();
        for (artist, records) in similar_to {
            document.similar.insert((*artist).to_string(), records.clone());
        }
        let resolver = SimilarityResolver::new(FeedSnapshot::new(document));
        PlaylistGenerator::new(library(), resolver, preferences, GeneratorConfig::default()).with_seed(17)
    }

    fn weights(candidates: &[(f64, Track<'_>)]) -> HashMap<String, f64> {
        candidates
            .iter()
            .map(|(weight, track)| (track.path().to_string(), *weight))
            .collect()
    }

    #[test]
    fn test_empty_queue_picks_any_catalog_track() {
        let mut generator = generator(&[], Preferences::default());
        let catalog = generator.library().snapshot();
        for _ in 0..50 {
            let path = generator.next_track::<&str>(&[]).unwrap();
            assert!(catalog.track_by_path(&path).is_some());
        }
    }

    #[test]
    fn test_empty_catalog_picks_nothing() {
        let resolver = SimilarityResolver::new(FeedSnapshot::default());
        let mut generator = PlaylistGenerator::new(
            Arc::new(Library::default()),
            resolver,
            Preferences::default(),
            GeneratorConfig::default(),
        );
        assert!(generator.next_track::<&str>(&[]).is_none());
        assert!(generator.next_album(&["x.flac"]).is_none());
    }

    #[test]
    fn test_similar_artists_carry_their_weight() {
        let generator = generator(
            &[("Alpha", vec![similar(80.0, "Charlie"), similar(40.0, "Echo"),
                similar(30.0, "Delta"), similar(20.0, "Bravo")])],
            Preferences::default(),
        );
        let catalog = generator.library().snapshot();
        let queue = vec![catalog.track_by_path("a/1.flac").unwrap()];

        let weights = weights(&generator.track_candidates(&catalog, &queue));
        assert_eq!(weights.len(), 5);
        assert_eq!(weights["c/1.flac"], 80.0);
        assert_eq!(weights["b/2.flac"], 20.0);
        assert!(!weights.contains_key("a/2.flac"));
    }

    #[test]
    fn test_genre_fallback_weight_is_half_the_lowest_similarity() {
        let generator = generator(&[("Alpha", vec![similar(40.0, "Charlie")])], Preferences::default());
        let catalog = generator.library().snapshot();
        let seed = catalog.track_by_path("a/1.flac").unwrap();

        let candidates = generator.artist_candidates(&catalog, seed);
        let names: Vec<_> = candidates.iter().map(|c| (c.artist.name(), c.weight)).collect();
        assert_eq!(names, vec![("Charlie", 40.0), ("Bravo", 20.0), ("Delta", 20.0)]);
    }

    #[test]
    fn test_genre_fallback_without_similarity_uses_unit_weight() {
        let generator = generator(&[], Preferences::default());
        let catalog = generator.library().snapshot();
        let seed = catalog.track_by_path("d/1.flac").unwrap();

        let candidates = generator.artist_candidates(&catalog, seed);
        assert!(candidates.iter().all(|c| c.weight == 1.0));
        let mut names: Vec<_> = candidates.iter().map(|c| c.artist.name()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Alpha", "Bravo"]);
    }

    #[test]
    fn test_recently_queued_artists_are_damped() {
        let generator = generator(
            &[("Bravo", vec![similar(50.0, "Alpha"), similar(50.0, "Charlie")])],
            Preferences::default(),
        );
        let catalog = generator.library().snapshot();
        let queue = vec![
            catalog.track_by_path("a/1.flac").unwrap(),
            catalog.track_by_path("b/1.flac").unwrap(),
        ];

        let weights = weights(&generator.track_candidates(&catalog, &queue));
        assert_eq!(weights["c/1.flac"], 50.0);
        assert_eq!(weights["a/2.flac"], 5.0);
        assert!(!weights.contains_key("a/1.flac"));
    }

    #[test]
    fn test_recency_divisor_grows_with_queue_position() {
        let library = Arc::new(Library::from_records(vec![
            record("a/1.flac", "Alpha", "One", None, None),
            record("a/2.flac", "Alpha", "Two", None, None),
            record("a/3.flac", "Alpha", "Three", None, None),
            record("b/1.flac", "Bravo", "One", None, None),
            record("b/2.flac", "Bravo", "Two", None, None),
            record("c/1.flac", "Charlie", "One", None, None),
        ]));
        let mut document = FeedDocument::default();
        document
            .similar
            .insert("Charlie".to_string(), vec![similar(60.0, "Alpha"), similar(60.0, "Bravo")]);
        let generator = PlaylistGenerator::new(
            library,
            SimilarityResolver::new(FeedSnapshot::new(document)),
            Preferences::default(),
            GeneratorConfig::default(),
        );
        let catalog = generator.library().snapshot();
        let queue: Vec<_> = ["a/1.flac", "b/1.flac", "c/1.flac"]
            .iter()
            .map(|path| catalog.track_by_path(path).unwrap())
            .collect();
        let weights = weights(&generator.track_candidates(&catalog, &queue));
        assert_eq!(weights["a/2.flac"], 6.0);
        assert_eq!(weights["b/2.flac"], 3.0);

        // Alpha queued at 0 and again at 2: the later position counts.
        let queue: Vec<_> = ["a/1.flac", "b/1.flac", "a/2.flac", "c/1.flac"]
            .iter()
            .map(|path| catalog.track_by_path(path).unwrap())
            .collect();
        let weights = self::weights(&generator.track_candidates(&catalog, &queue));
        assert_eq!(weights["a/3.flac"], 2.0);
        assert_eq!(weights["b/2.flac"], 3.0);
    }

    #[test]
    fn test_genre_fallback_applies_up_to_the_threshold() {
        let generator = generator(
            &[("Alpha", vec![similar(40.0, "Charlie"), similar(30.0, "Echo"), similar(20.0, "Foxtrot")])],
            Preferences::default(),
        );
        let catalog = generator.library().snapshot();
        let seed = catalog.track_by_path("a/1.flac").unwrap();

        let candidates = generator.artist_candidates(&catalog, seed);
        let names: Vec<_> = candidates.iter().map(|c| (c.artist.name(), c.weight)).collect();
        assert_eq!(
            names,
            vec![("Charlie", 40.0), ("Echo", 30.0), ("Foxtrot", 20.0), ("Bravo", 10.0), ("Delta", 10.0)]
        );
    }

    #[test]
    fn test_no_genre_fallback_past_the_threshold() {
        let generator = generator(
            &[("Alpha", vec![similar(40.0, "Charlie"), similar(30.0, "Echo"),
                similar(20.0, "Foxtrot"), similar(10.0, "Delta")])],
            Preferences::default(),
        );
        let catalog = generator.library().snapshot();
        let seed = catalog.track_by_path("a/1.flac").unwrap();

        let candidates = generator.artist_candidates(&catalog, seed);
        let names: Vec<_> = candidates.iter().map(|c| c.artist.name()).collect();
        assert_eq!(names, vec!["Charlie", "Echo", "Foxtrot", "Delta"]);
    }

    #[test]
    fn test_loved_and_banned_tracks() {
        let normalizer = Normalizer::new();
        let preferences = Preferences::from_lists(
            &normalizer,
            &[("ALPHA".to_string(), "two".to_string())],
            &[("Charlie".to_string(), "Five".to_string())],
        );
        let generator = generator(
            &[("Echo", vec![similar(10.0, "Alpha"), similar(10.0, "Charlie"),
                similar(10.0, "Delta"), similar(10.0, "Bravo")])],
            preferences,
        );
        let catalog = generator.library().snapshot();
        let queue = vec![catalog.track_by_path("e/1.flac").unwrap()];

        let weights = weights(&generator.track_candidates(&catalog, &queue));
        assert_eq!(weights["a/2.flac"], 100.0);
        assert_eq!(weights["a/1.flac"], 10.0);
        assert!(!weights.contains_key("c/1.flac"));
    }

    #[test]
    fn test_loved_artists_skip_various_artists() {
        let normalizer = Normalizer::new();
        let preferences = Preferences::from_lists(
            &normalizer,
            &[
                ("Various Artists".to_string(), "Hit".to_string()),
                ("The Alpha".to_string(), "One".to_string()),
            ],
            &[],
        );
        let catalog = library().snapshot();
        assert!(preferences.is_loved_artist(&catalog.artist("Alpha").unwrap()));
        assert_eq!(preferences.loved_count(), 2);
        assert_eq!(preferences.loved_artists.len(), 1);
    }

    #[test]
    fn test_seed_relaxes_towards_the_start_of_the_queue() {
        let mut generator = generator(&[("Alpha", vec![similar(90.0, "Charlie")])], Preferences::default());
        // Echo has no similar artists and no genre.
        let queue = ["a/1.flac", "e/1.flac"];
        for _ in 0..20 {
            let path = generator.next_track(&queue).unwrap();
            assert!(["c/1.flac", "b/1.flac", "b/2.flac", "d/1.flac"].contains(&path.as_str()));
        }
    }

    #[test]
    fn test_unknown_queue_paths_are_ignored() {
        let mut generator = generator(&[], Preferences::default());
        let path = generator.next_track(&["not/in/catalog.flac"]).unwrap();
        assert!(generator.library().snapshot().track_by_path(&path).is_some());
    }

    #[test]
    fn test_next_album_is_restricted_to_its_artist() {
        let mut generator = generator(
            &[("Echo", vec![similar(60.0, "Bravo"), similar(50.0, "Delta"),
                similar(40.0, "Charlie"), similar(30.0, "Alpha")])],
            Preferences::default(),
        );
        for _ in 0..20 {
            let pick = generator.next_album(&["e/1.flac"]).unwrap();
            assert_ne!(pick.album, "None");
            match pick.album.as_str() {
                "Second" => assert_eq!(pick.paths, vec!["b/1.flac"]),
                "Fourth" => assert_eq!(pick.paths, vec!["d/1.flac"]),
                "Third" => assert_eq!(pick.paths, vec!["c/1.flac"]),
                "First" => assert_eq!(pick.paths, vec!["a/1.flac", "a/2.flac"]),
                other => panic!("unexpected album {other}"),
            }
            assert!(pick.artist.is_some());
        }
    }

    #[test]
    fn test_next_album_with_empty_queue_is_random() {
        let mut generator = generator(&[], Preferences::default());
        let pick = generator.next_album::<&str>(&[]).unwrap();
        assert!(pick.artist.is_none());
        assert_ne!(pick.album, "None");
        assert!(!pick.paths.is_empty());
    }
}
