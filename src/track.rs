//! Track records as ingested from the playback device.
//!
//! A [`TrackRecord`] is a plain structured copy of the tags the device
//! reports. Logical fields with fallbacks (artist, title, album) are exposed
//! through explicit accessor methods; nothing is looked up by name at runtime.

use serde::{Deserialize, Deserializer, Serialize};

/// Artist attributed to tracks with no artist, performer or composer tag.
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Album attributed to tracks with no album tag.
pub const UNKNOWN_ALBUM: &str = "None";

/// One ingested track. Immutable once it is part of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Path relative to the device's music directory. Records without one
    /// are never ingested.
    #[serde(default, deserialize_with = "first_text", alias = "File")]
    pub file: Option<String>,
    #[serde(default, deserialize_with = "first_text", alias = "Artist")]
    pub artist: Option<String>,
    #[serde(default, deserialize_with = "first_text", alias = "Performer")]
    pub performer: Option<String>,
    #[serde(default, deserialize_with = "first_text", alias = "Composer")]
    pub composer: Option<String>,
    #[serde(default, deserialize_with = "first_text", alias = "Album")]
    pub album: Option<String>,
    #[serde(default, deserialize_with = "all_text", alias = "Genre")]
    pub genre: Vec<String>,
    #[serde(default, deserialize_with = "first_text", alias = "Title")]
    pub title: Option<String>,
    /// Stream or playlist entry name.
    #[serde(default, deserialize_with = "first_text", alias = "Name")]
    pub name: Option<String>,
    /// Track number, possibly `"3/12"`.
    #[serde(default, deserialize_with = "first_text", alias = "Track")]
    pub track: Option<String>,
    /// Disc number, possibly `"1/2"`.
    #[serde(default, deserialize_with = "first_text", alias = "Disc")]
    pub disc: Option<String>,
    /// Duration in seconds.
    #[serde(default, deserialize_with = "first_text", alias = "Time")]
    pub time: Option<String>,
}

/// Tag values arrive as a string, a list of strings, or a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    List(Vec<String>),
    Number(serde_json::Number),
}

impl RawValue {
    fn into_vec(self) -> Vec<String> {
        match self {
            RawValue::Text(text) => vec![text],
            RawValue::List(list) => list,
            RawValue::Number(number) => vec![number.to_string()],
        }
    }
}

fn first_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawValue>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.into_vec().into_iter().next()))
}

fn all_text<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawValue>::deserialize(deserializer)?;
    Ok(raw.map(RawValue::into_vec).unwrap_or_default())
}

/// Returns the trimmed value if it has any content.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl TrackRecord {
    /// Builds a record from `key: value` pairs. Keys are matched
    /// case-insensitively, repeated genres accumulate, unknown keys are ignored.
    pub fn from_tags<'a, I>(tags: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut record = Self::default();
        for (key, value) in tags {
            let value = value.to_string();
            match key.trim().to_ascii_lowercase().as_str() {
                "file" => record.file = Some(value),
                "artist" => record.artist = Some(value),
                "performer" => record.performer = Some(value),
                "composer" => record.composer = Some(value),
                "album" => record.album = Some(value),
                "genre" => record.genre.push(value),
                "title" => record.title = Some(value),
                "name" => record.name = Some(value),
                "track" => record.track = Some(value),
                "disc" => record.disc = Some(value),
                "time" => record.time = Some(value),
                _ => {}
            }
        }
        record
    }

    /// The file path, if the record has a usable one. Paths are kept as
    /// given, surrounding spaces included, so the device can find them again.
    pub fn path(&self) -> Option<&str> {
        self.file.as_deref().filter(|path| !path.trim().is_empty())
    }

    /// Streams are identified by a URL instead of a file path.
    pub fn is_stream(&self) -> bool {
        self.path()
            .is_some_and(|path| path.starts_with("http://") || path.starts_with("https://"))
    }

    /// Streams put their metadata in the title as `"Artist - Title"`.
    fn stream_parts(&self) -> Option<(&str, &str)> {
        present(self.title.as_ref())?
            .split_once(" - ")
            .map(|(artist, title)| (artist.trim(), title.trim()))
    }

    /// Attributed artist: `artist`, then `performer`, then `composer`,
    /// else [`UNKNOWN_ARTIST`].
    pub fn artist(&self) -> &str {
        if self.is_stream() {
            return self
                .stream_parts()
                .map(|(artist, _)| artist)
                .filter(|artist| !artist.is_empty())
                .unwrap_or(UNKNOWN_ARTIST);
        }
        present(self.artist.as_ref())
            .or_else(|| present(self.performer.as_ref()))
            .or_else(|| present(self.composer.as_ref()))
            .unwrap_or(UNKNOWN_ARTIST)
    }

    /// Display title: `title`, then `name`, then the last path segment.
    pub fn title(&self) -> &str {
        if self.is_stream() {
            if let Some((_, title)) = self.stream_parts() {
                return title;
            }
        }
        present(self.title.as_ref())
            .or_else(|| present(self.name.as_ref()))
            .or_else(|| self.path().and_then(|path| path.rsplit('/').next()))
            .unwrap_or("")
    }

    /// Album title, else [`UNKNOWN_ALBUM`].
    pub fn album(&self) -> &str {
        present(self.album.as_ref()).unwrap_or(UNKNOWN_ALBUM)
    }

    /// Non-blank genre tags in tag order.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre
            .iter()
            .map(|genre| genre.trim())
            .filter(|genre| !genre.is_empty())
    }

    /// Track number; the numeric prefix of the tag, or 0.
    pub fn track_number(&self) -> u32 {
        leading_number(self.track.as_deref())
    }

    /// Disc number; the numeric prefix of the tag, or 0.
    pub fn disc_number(&self) -> u32 {
        leading_number(self.disc.as_deref())
    }

    /// Duration in whole seconds.
    pub fn duration(&self) -> Option<u32> {
        let time = present(self.time.as_ref())?;
        time.starts_with(|c: char| c.is_ascii_digit())
            .then(|| leading_number(Some(time)))
    }
}

/// Parses the leading run of ASCII digits (`"03/12"` is 3). Anything else is 0.
fn leading_number(value: Option<&str>) -> u32 {
    let value = value.unwrap_or("").trim();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().unwrap_or(0)
}

/// Formats seconds as `m:ss`, or `h:mm:ss` past the hour.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
