//! # Catalog Index
//!
//! The in-memory index over the device's track list. A single pass over the
//! ingested records builds four independent views:
//!
//! - artist key → track positions
//! - album key → track positions
//! - genre key → track positions
//! - a path tree for directory-style listing
//!
//! Positions refer into the catalog's own track list and are kept in
//! insertion order without duplicates. Keys are produced by the catalog's
//! [`Normalizer`], so differently spelled names of one artist share an entry.
//!
//! Entities ([`Track`], [`Artist`], [`Album`], [`Genre`]) are small `Copy`
//! handles borrowed from the catalog. They compare and hash by normalized key
//! and navigate to related entities through explicit methods.
//!
//! A catalog is immutable after [`Catalog::build`]. Rebuilding goes through
//! [`Library::reload`](crate::library::Library::reload), which swaps in a new
//! catalog instead of mutating one that readers may hold.

use crate::normalize::Normalizer;
use crate::track::TrackRecord;
use log::{debug, info, warn};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Instant;

/// Per-track keys, computed once at build time.
#[derive(Debug)]
struct TrackKeys {
    artist: String,
    album: String,
    genres: Vec<String>,
}

#[derive(Debug)]
struct IndexEntry {
    /// Display name of the first track seen with this key.
    name: String,
    positions: Vec<usize>,
}

/// Normalized key → ordered set of track positions.
#[derive(Debug, Default)]
struct Index {
    entries: HashMap<String, IndexEntry>,
}

impl Index {
    /// Positions arrive in increasing order, so comparing with the last one
    /// is enough to keep the set free of duplicates.
    fn insert(&mut self, key: &str, name: &str, position: usize) {
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| IndexEntry {
                name: name.to_string(),
                positions: Vec::new(),
            });
        if entry.positions.last() != Some(&position) {
            entry.positions.push(position);
        }
    }

    fn positions(&self, key: &str) -> &[usize] {
        self.entries
            .get(key)
            .map_or(&[][..], |entry| entry.positions.as_slice())
    }

    fn key_of(&self, key: &str) -> Option<&str> {
        self.entries.get_key_value(key).map(|(key, _)| key.as_str())
    }

    fn name<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map_or(key, |entry| entry.name.as_str())
    }

    /// Keys ordered by display name, case-insensitively first.
    fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry.name.as_str()))
            .collect();
        keys.sort_by(|(key_a, name_a), (key_b, name_b)| {
            collate(name_a, name_b).then_with(|| key_a.cmp(key_b))
        });
        keys.into_iter().map(|(key, _)| key).collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Locale-style ordering: case-insensitive, ties broken by code point.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Node of the path tree: a file, or a directory of named children.
#[derive(Debug)]
enum PathNode {
    File(usize),
    Directory(BTreeMap<String, PathNode>),
}

impl PathNode {
    fn root() -> Self {
        PathNode::Directory(BTreeMap::new())
    }

    /// Inserts `position` under the segments of `path`. Returns false when
    /// the path collides with an existing file or directory.
    fn insert(&mut self, path: &str, position: usize) -> bool {
        let segments: Vec<&str> = segments(path).collect();
        let Some((last, parents)) = segments.split_last() else {
            return false;
        };

        let mut node = self;
        for segment in parents {
            let PathNode::Directory(children) = node else {
                return false;
            };
            node = children
                .entry((*segment).to_string())
                .or_insert_with(PathNode::root);
        }

        match node {
            PathNode::Directory(children) if !children.contains_key(*last) => {
                children.insert((*last).to_string(), PathNode::File(position));
                true
            }
            _ => false,
        }
    }

    fn find(&self, path: &str) -> Option<&PathNode> {
        segments(path).try_fold(self, |node, segment| match node {
            PathNode::Directory(children) => children.get(segment),
            PathNode::File(_) => None,
        })
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// The indexed track collection.
pub struct Catalog {
    tracks: Vec<TrackRecord>,
    keys: Vec<TrackKeys>,
    artists: Index,
    albums: Index,
    genres: Index,
    tree: PathNode,
    normalizer: Arc<Normalizer>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("tracks", &self.tracks.len())
            .field("artists", &self.artists.len())
            .field("albums", &self.albums.len())
            .field("genres", &self.genres.len())
            .finish()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::build(Vec::new())
    }
}

impl Catalog {
    /// Builds a catalog with its own normalizer.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = TrackRecord>,
    {
        Self::build_with(records, Arc::new(Normalizer::new()))
    }

    /// Builds a catalog in one pass over `records`, sharing `normalizer`.
    ///
    /// Records without a path are skipped, as are repeated paths.
    pub fn build_with<I>(records: I, normalizer: Arc<Normalizer>) -> Self
    where
        I: IntoIterator<Item = TrackRecord>,
    {
        let started = Instant::now();
        let mut catalog = Self {
            tracks: Vec::new(),
            keys: Vec::new(),
            artists: Index::default(),
            albums: Index::default(),
            genres: Index::default(),
            tree: PathNode::root(),
            normalizer,
        };
        let mut skipped = 0usize;

        for record in records {
            let Some(path) = record.path() else {
                skipped += 1;
                continue;
            };
            let position = catalog.tracks.len();
            if !catalog.tree.insert(path, position) {
                warn!("Skipping `{path}': it collides with a path already in the catalog");
                skipped += 1;
                continue;
            }

            let artist = catalog.normalizer.normalize(record.artist());
            catalog.artists.insert(&artist, record.artist(), position);

            let album = catalog.normalizer.normalize(record.album());
            catalog.albums.insert(&album, record.album(), position);

            let mut genres: Vec<String> = Vec::new();
            for genre in record.genres() {
                let key = catalog.normalizer.normalize(genre);
                catalog.genres.insert(&key, genre, position);
                if !genres.contains(&key) {
                    genres.push(key);
                }
            }

            catalog.keys.push(TrackKeys { artist, album, genres });
            catalog.tracks.push(record);
        }

        if skipped > 0 {
            debug!("Skipped {skipped} records without a unique path");
        }
        info!(
            "Building the catalog took {:.3} seconds ({} tracks, {} artists, {} albums, {} genres)",
            started.elapsed().as_secs_f64(),
            catalog.tracks.len(),
            catalog.artists.len(),
            catalog.albums.len(),
            catalog.genres.len(),
        );
        catalog
    }

    /// The normalizer that produced this catalog's keys.
    pub fn normalizer(&self) -> &Arc<Normalizer> {
        &self.normalizer
    }

    pub fn normalize(&self, name: &str) -> String {
        self.normalizer.normalize(name)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    // -- Entity lookup ------------------------------------------------------

    /// The artist named `name`, if any track is attributed to it.
    pub fn artist(&self, name: &str) -> Option<Artist<'_>> {
        let key = self.artists.key_of(&self.normalize(name))?;
        Some(Artist { catalog: self, key })
    }

    pub fn album(&self, name: &str) -> Option<Album<'_>> {
        let key = self.albums.key_of(&self.normalize(name))?;
        Some(Album { catalog: self, key })
    }

    pub fn genre(&self, name: &str) -> Option<Genre<'_>> {
        let key = self.genres.key_of(&self.normalize(name))?;
        Some(Genre { catalog: self, key })
    }

    pub fn artist_exists(&self, name: &str) -> bool {
        self.artist(name).is_some()
    }

    pub fn track_by_path(&self, path: &str) -> Option<Track<'_>> {
        match self.tree.find(path)? {
            PathNode::File(position) => Some(Track::new(self, *position)),
            PathNode::Directory(_) => None,
        }
    }

    /// The track at `position` in ingestion order.
    pub fn track(&self, position: usize) -> Option<Track<'_>> {
        (position < self.tracks.len()).then(|| Track::new(self, position))
    }

    // -- Enumerations -------------------------------------------------------

    pub fn artists(&self) -> impl Iterator<Item = Artist<'_>> {
        self.artists
            .sorted_keys()
            .into_iter()
            .map(move |key| Artist { catalog: self, key })
    }

    pub fn albums(&self) -> impl Iterator<Item = Album<'_>> {
        self.albums
            .sorted_keys()
            .into_iter()
            .map(move |key| Album { catalog: self, key })
    }

    pub fn genres(&self) -> impl Iterator<Item = Genre<'_>> {
        self.genres
            .sorted_keys()
            .into_iter()
            .map(move |key| Genre { catalog: self, key })
    }

    /// All tracks in ingestion order.
    pub fn tracks(&self) -> impl Iterator<Item = Track<'_>> {
        (0..self.tracks.len()).map(move |position| Track::new(self, position))
    }

    // -- Index lookups ------------------------------------------------------

    fn at<'a>(&'a self, positions: &'a [usize]) -> impl Iterator<Item = Track<'a>> + 'a {
        positions
            .iter()
            .map(move |&position| Track::new(self, position))
    }

    /// Tracks attributed to `artist`, in ingestion order.
    pub fn tracks_by_artist(&self, artist: &str) -> impl Iterator<Item = Track<'_>> {
        self.at(self.artists.positions(&self.normalize(artist)))
    }

    /// Tracks on `album` ordered by (disc, track). With `artist`, only that
    /// artist's tracks are returned.
    pub fn tracks_by_album(&self, album: &str, artist: Option<&str>) -> Vec<Track<'_>> {
        let artist = artist.map(|artist| self.normalize(artist));
        let mut tracks: Vec<Track<'_>> = self
            .at(self.albums.positions(&self.normalize(album)))
            .filter(|track| {
                artist
                    .as_deref()
                    .map_or(true, |artist| track.keys().artist == artist)
            })
            .collect();
        tracks.sort_by_key(|track| (track.disc_number(), track.track_number()));
        tracks
    }

    pub fn tracks_by_genre(&self, genre: &str) -> impl Iterator<Item = Track<'_>> {
        self.at(self.genres.positions(&self.normalize(genre)))
    }

    // -- Cross references ---------------------------------------------------
    //
    // Derived from the base lookup's tracks. Distinct by key, in no
    // particular order.

    pub fn albums_by_artist(&self, artist: &str) -> Vec<Album<'_>> {
        distinct(self.tracks_by_artist(artist).map(|track| track.album()))
    }

    pub fn genres_by_artist(&self, artist: &str) -> Vec<Genre<'_>> {
        distinct(self.tracks_by_artist(artist).flat_map(|track| track.genres()))
    }

    pub fn artists_by_album(&self, album: &str) -> Vec<Artist<'_>> {
        distinct(
            self.tracks_by_album(album, None)
                .into_iter()
                .map(|track| track.artist()),
        )
    }

    pub fn genres_by_album(&self, album: &str) -> Vec<Genre<'_>> {
        distinct(
            self.tracks_by_album(album, None)
                .into_iter()
                .flat_map(|track| track.genres()),
        )
    }

    pub fn artists_by_genre(&self, genre: &str) -> Vec<Artist<'_>> {
        distinct(self.tracks_by_genre(genre).map(|track| track.artist()))
    }

    pub fn albums_by_genre(&self, genre: &str) -> Vec<Album<'_>> {
        distinct(self.tracks_by_genre(genre).map(|track| track.album()))
    }

    // -- Path tree ----------------------------------------------------------

    /// Direct children of the directory at `path`, sorted by name. Unknown
    /// paths and file paths list nothing.
    pub fn list_directory(&self, path: &str) -> Vec<DirEntry<'_>> {
        let prefix = segments(path).collect::<Vec<_>>().join("/");
        let Some(PathNode::Directory(children)) = self.tree.find(&prefix) else {
            return Vec::new();
        };
        children
            .iter()
            .map(|(name, node)| match node {
                PathNode::File(position) => DirEntry::File(Track::new(self, *position)),
                PathNode::Directory(_) if prefix.is_empty() => DirEntry::Directory(name.clone()),
                PathNode::Directory(_) => DirEntry::Directory(format!("{prefix}/{name}")),
            })
            .collect()
    }

    /// Number of direct children of the directory at `path`.
    pub fn directory_len(&self, path: &str) -> usize {
        match self.tree.find(path) {
            Some(PathNode::Directory(children)) => children.len(),
            _ => 0,
        }
    }
}

/// Keeps the first entity of each key.
fn distinct<T: Keyed, I: IntoIterator<Item = T>>(items: I) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.key().to_string()))
        .collect()
}

/// Entities that are identified by a normalized key.
pub trait Keyed {
    fn key(&self) -> &str;
}

macro_rules! named_entity {
    ($name:ident, $index:ident) => {
        #[derive(Clone, Copy)]
        pub struct $name<'a> {
            catalog: &'a Catalog,
            key: &'a str,
        }

        impl<'a> $name<'a> {
            /// Normalized key.
            pub fn key(&self) -> &'a str {
                self.key
            }

            /// Display name, as first seen during ingestion.
            pub fn name(&self) -> &'a str {
                self.catalog.$index.name(self.key)
            }

            pub fn catalog(&self) -> &'a Catalog {
                self.catalog
            }
        }

        impl Keyed for $name<'_> {
            fn key(&self) -> &str {
                self.key
            }
        }

        impl PartialEq for $name<'_> {
            fn eq(&self, other: &Self) -> bool {
                self.key == other.key
            }
        }

        impl Eq for $name<'_> {}

        impl Hash for $name<'_> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.key.hash(state);
            }
        }

        impl fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.key).finish()
            }
        }

        impl fmt::Display for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

named_entity!(Artist, artists);
named_entity!(Album, albums);
named_entity!(Genre, genres);

impl<'a> Artist<'a> {
    pub fn tracks(&self) -> impl Iterator<Item = Track<'a>> + 'a {
        self.catalog.at(self.catalog.artists.positions(self.key))
    }

    pub fn albums(&self) -> Vec<Album<'a>> {
        distinct(self.tracks().map(|track| track.album()))
    }

    pub fn genres(&self) -> Vec<Genre<'a>> {
        distinct(self.tracks().flat_map(|track| track.genres()))
    }
}

impl<'a> Album<'a> {
    /// Tracks ordered by (disc, track).
    pub fn tracks(&self) -> Vec<Track<'a>> {
        self.catalog.tracks_by_album(self.key, None)
    }

    pub fn artists(&self) -> Vec<Artist<'a>> {
        distinct(self.tracks().into_iter().map(|track| track.artist()))
    }

    pub fn genres(&self) -> Vec<Genre<'a>> {
        distinct(self.tracks().into_iter().flat_map(|track| track.genres()))
    }
}

impl<'a> Genre<'a> {
    pub fn tracks(&self) -> impl Iterator<Item = Track<'a>> + 'a {
        self.catalog.at(self.catalog.genres.positions(self.key))
    }

    pub fn artists(&self) -> Vec<Artist<'a>> {
        distinct(self.tracks().map(|track| track.artist()))
    }

    pub fn albums(&self) -> Vec<Album<'a>> {
        distinct(self.tracks().map(|track| track.album()))
    }
}

/// A track in a catalog. Compares by path, which is unique per catalog.
#[derive(Clone, Copy)]
pub struct Track<'a> {
    catalog: &'a Catalog,
    position: usize,
}

impl<'a> Track<'a> {
    fn new(catalog: &'a Catalog, position: usize) -> Self {
        Self { catalog, position }
    }

    fn keys(&self) -> &'a TrackKeys {
        &self.catalog.keys[self.position]
    }

    /// The underlying record.
    pub fn record(&self) -> &'a TrackRecord {
        &self.catalog.tracks[self.position]
    }

    /// Ingestion position.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn path(&self) -> &'a str {
        self.record().path().unwrap_or_default()
    }

    pub fn title(&self) -> &'a str {
        self.record().title()
    }

    pub fn track_number(&self) -> u32 {
        self.record().track_number()
    }

    pub fn disc_number(&self) -> u32 {
        self.record().disc_number()
    }

    pub fn artist(&self) -> Artist<'a> {
        Artist {
            catalog: self.catalog,
            key: self.keys().artist.as_str(),
        }
    }

    pub fn album(&self) -> Album<'a> {
        Album {
            catalog: self.catalog,
            key: self.keys().album.as_str(),
        }
    }

    pub fn genres(&self) -> impl Iterator<Item = Genre<'a>> + 'a {
        let catalog = self.catalog;
        self.keys()
            .genres
            .iter()
            .map(move |key| Genre { catalog, key: key.as_str() })
    }

    /// The `artist-title` key that preference feeds are matched against.
    pub fn preference_key(&self) -> String {
        self.catalog
            .normalizer
            .create_key(&[self.record().artist(), self.title()])
    }
}

impl PartialEq for Track<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.path() == other.path()
    }
}

impl Eq for Track<'_> {}

impl Hash for Track<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path().hash(state);
    }
}

impl Keyed for Track<'_> {
    fn key(&self) -> &str {
        self.path()
    }
}

impl fmt::Debug for Track<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Track").field(&self.path()).finish()
    }
}

impl fmt::Display for Track<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.record().artist(), self.title())
    }
}

/// Any catalog entity, for callers that navigate without knowing the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity<'a> {
    Track(Track<'a>),
    Artist(Artist<'a>),
    Album(Album<'a>),
    Genre(Genre<'a>),
}

impl<'a> Entity<'a> {
    pub fn key(&self) -> &'a str {
        match self {
            Entity::Track(track) => track.path(),
            Entity::Artist(artist) => artist.key(),
            Entity::Album(album) => album.key(),
            Entity::Genre(genre) => genre.key(),
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Entity::Track(track) => track.title(),
            Entity::Artist(artist) => artist.name(),
            Entity::Album(album) => album.name(),
            Entity::Genre(genre) => genre.name(),
        }
    }

    /// Tracks belonging to the entity; a track is its own single member.
    pub fn tracks(&self) -> Vec<Track<'a>> {
        match self {
            Entity::Track(track) => vec![*track],
            Entity::Artist(artist) => artist.tracks().collect(),
            Entity::Album(album) => album.tracks(),
            Entity::Genre(genre) => genre.tracks().collect(),
        }
    }

    pub fn artists(&self) -> Vec<Artist<'a>> {
        match self {
            Entity::Track(track) => vec![track.artist()],
            Entity::Artist(artist) => vec![*artist],
            Entity::Album(album) => album.artists(),
            Entity::Genre(genre) => genre.artists(),
        }
    }
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirEntry<'a> {
    /// Full path of a subdirectory.
    Directory(String),
    File(Track<'a>),
}

impl DirEntry<'_> {
    pub fn path(&self) -> &str {
        match self {
            DirEntry::Directory(path) => path,
            DirEntry::File(track) => track.path(),
        }
    }

    /// Last path segment.
    pub fn name(&self) -> &str {
        let path = self.path();
        path.rsplit('/').next().unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tags: &[(&str, &str)]) -> TrackRecord {
        TrackRecord::from_tags(tags.iter().copied())
    }

    fn sample() -> Catalog {
        Catalog::build(vec![
            record(&[("file", "rock/beatles/abbey road/02.flac"), ("artist", "The Beatles"),
                ("album", "Abbey Road"), ("title", "Something"), ("track", "2"), ("genre", "Rock")]),
            record(&[("file", "rock/beatles/abbey road/01.flac"), ("artist", "Beatles, The"),
                ("album", "Abbey Road"), ("title", "Come Together"), ("track", "1/17"), ("genre", "Rock")]),
            record(&[("file", "rock/beatles/abbey road/d2-01.flac"), ("artist", "The Beatles"),
                ("album", "Abbey Road"), ("title", "Bonus"), ("track", "1"), ("disc", "2")]),
            record(&[("file", "jazz/davis/kind of blue/01.flac"), ("artist", "Miles Davis"),
                ("album", "Kind of Blue"), ("title", "So What"), ("genre", "Jazz"), ("genre", "Modal")]),
            record(&[("file", "jazz/loose.flac"), ("performer", "Keith Jarrett"), ("genre", "jazz")]),
            record(&[("title", "No path")]),
        ])
    }

    #[test]
    fn test_records_without_path_are_excluded() {
        let catalog = sample();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.tracks().all(|track| !track.path().is_empty()));
    }

    #[test]
    fn test_duplicate_paths_are_skipped() {
        let catalog = Catalog::build(vec![
            record(&[("file", "a.flac"), ("title", "First")]),
            record(&[("file", "a.flac"), ("title", "Second")]),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.track_by_path("a.flac").unwrap().title(), "First");
    }

    #[test]
    fn test_spellings_of_one_artist_share_an_entity() {
        let catalog = sample();
        let artists: Vec<_> = catalog.artists().map(|artist| artist.key()).collect();
        assert_eq!(artists.iter().filter(|key| **key == "beatles").count(), 1);
        assert_eq!(catalog.tracks_by_artist("Beatles, The").count(), 3);
        assert_eq!(catalog.tracks_by_artist("the beatles").count(), 3);

        let first = catalog.track_by_path("rock/beatles/abbey road/01.flac").unwrap();
        let second = catalog.track_by_path("rock/beatles/abbey road/02.flac").unwrap();
        assert_eq!(first.artist(), second.artist());
        assert_eq!(first.artist().name(), "The Beatles");
    }

    #[test]
    fn test_sentinels() {
        let catalog = sample();
        let loose = catalog.track_by_path("jazz/loose.flac").unwrap();
        assert_eq!(loose.artist().name(), "Keith Jarrett");
        assert_eq!(loose.album().name(), "None");

        let catalog = Catalog::build(vec![record(&[("file", "x.flac")])]);
        let track = catalog.track(0).unwrap();
        assert_eq!(track.artist().name(), "Unknown");
        assert_eq!(track.genres().count(), 0);
        assert_eq!(catalog.genres().count(), 0);
    }

    #[test]
    fn test_enumerations_are_sorted() {
        let catalog = sample();
        let artists: Vec<_> = catalog.artists().map(|artist| artist.name()).collect();
        assert_eq!(artists, vec!["Keith Jarrett", "Miles Davis", "The Beatles"]);
        let albums: Vec<_> = catalog.albums().map(|album| album.name()).collect();
        assert_eq!(albums, vec!["Abbey Road", "Kind of Blue", "None"]);
        let genres: Vec<_> = catalog.genres().map(|genre| genre.name()).collect();
        assert_eq!(genres, vec!["Jazz", "Modal", "Rock"]);
    }

    #[test]
    fn test_tracks_keep_ingestion_order() {
        let catalog = sample();
        let positions: Vec<_> = catalog.tracks().map(|track| track.position()).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_album_tracks_sorted_by_disc_then_track() {
        let catalog = sample();
        let titles: Vec<_> = catalog
            .tracks_by_album("Abbey Road", None)
            .iter()
            .map(|track| track.title())
            .collect();
        assert_eq!(titles, vec!["Come Together", "Something", "Bonus"]);

        let filtered = catalog.tracks_by_album("Abbey Road", Some("Miles Davis"));
        assert!(filtered.is_empty());
        let filtered = catalog.tracks_by_album("abbey road", Some("Beatles"));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_unknown_keys_return_empty() {
        let catalog = sample();
        assert_eq!(catalog.tracks_by_artist("Nobody").count(), 0);
        assert!(catalog.tracks_by_album("Nothing", None).is_empty());
        assert_eq!(catalog.tracks_by_genre("Polka").count(), 0);
        assert!(catalog.albums_by_artist("Nobody").is_empty());
        assert!(catalog.artist("Nobody").is_none());
        assert!(catalog.list_directory("no/such/dir").is_empty());
        assert!(catalog.track_by_path("rock").is_none());
    }

    #[test]
    fn test_genre_spellings_merge() {
        let catalog = sample();
        let jazz: Vec<_> = catalog.tracks_by_genre("JAZZ").map(|track| track.path()).collect();
        assert_eq!(jazz, vec!["jazz/davis/kind of blue/01.flac", "jazz/loose.flac"]);
    }

    #[test]
    fn test_cross_references_are_distinct() {
        let catalog = sample();
        let albums = catalog.albums_by_artist("The Beatles");
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].name(), "Abbey Road");

        let genres = catalog.genres_by_artist("Miles Davis");
        let mut names: Vec<_> = genres.iter().map(|genre| genre.name()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Jazz", "Modal"]);

        let artists = catalog.artists_by_genre("Jazz");
        assert_eq!(artists.len(), 2);
        assert_eq!(catalog.artists_by_album("Abbey Road").len(), 1);
        assert_eq!(catalog.genres_by_album("Abbey Road").len(), 1);
        assert_eq!(catalog.albums_by_genre("Jazz").len(), 2);

        let keys: HashSet<_> = artists.iter().map(|artist| artist.key()).collect();
        assert_eq!(keys.len(), artists.len());
    }

    #[test]
    fn test_entity_navigation() {
        let catalog = sample();
        let davis = catalog.artist("Miles Davis").unwrap();
        assert_eq!(davis.albums()[0].name(), "Kind of Blue");
        assert_eq!(davis.genres().len(), 2);

        let jazz = catalog.genre("jazz").unwrap();
        assert_eq!(jazz.artists().len(), 2);
        assert_eq!(jazz.albums().len(), 2);

        let abbey = catalog.album("Abbey Road").unwrap();
        assert_eq!(abbey.artists(), vec![catalog.artist("The Beatles").unwrap()]);

        let entity = Entity::Album(abbey);
        assert_eq!(entity.tracks().len(), 3);
        assert_eq!(entity.name(), "Abbey Road");
        assert_eq!(Entity::Genre(jazz).artists().len(), 2);
    }

    #[test]
    fn test_directory_listing() {
        let catalog = sample();
        let root: Vec<_> = catalog.list_directory("/").iter().map(|e| e.path().to_string()).collect();
        assert_eq!(root, vec!["jazz", "rock"]);

        let jazz = catalog.list_directory("jazz");
        let names: Vec<_> = jazz.iter().map(DirEntry::name).collect();
        assert_eq!(names, vec!["davis", "loose.flac"]);
        assert_eq!(jazz[0], DirEntry::Directory("jazz/davis".to_string()));
        assert!(matches!(jazz[1], DirEntry::File(track) if track.path() == "jazz/loose.flac"));

        let abbey = catalog.list_directory("/rock/beatles/abbey road/");
        let names: Vec<_> = abbey.iter().map(DirEntry::name).collect();
        assert_eq!(names, vec!["01.flac", "02.flac", "d2-01.flac"]);
        assert_eq!(catalog.directory_len("rock/beatles/abbey road"), 3);
        assert_eq!(catalog.directory_len("jazz/loose.flac"), 0);
    }

    #[test]
    fn test_preference_key() {
        let catalog = sample();
        let track = catalog.track_by_path("rock/beatles/abbey road/01.flac").unwrap();
        assert_eq!(track.preference_key(), "beatles-come together");
    }
}
