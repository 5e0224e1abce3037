//! # MPD Adapter
//!
//! Talks to the Music Player Daemon through the `mpc` command-line client:
//!
//! - [`list_all`] dumps the device's database as [`TrackRecord`]s for
//!   [`Catalog::build`](crate::catalog::Catalog::build)
//! - [`current_queue`] reads the paths in the play queue
//! - [`enqueue`] appends chosen paths to the play queue
//!
//! `mpc` prints one line per song in the layout given by `--format`. Fields
//! are separated by tabs and missing tags come out empty. Multiple genres in
//! one tag are separated by `;`.

use crate::track::TrackRecord;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::process::Command;

/// Tags requested from `mpc`, in output order.
const FIELDS: [&str; 11] = [
    "file", "artist", "performer", "composer", "album", "genre", "title", "name", "track",
    "disc", "time",
];

/// Verifies that `mpc` is installed and MPD answers.
///
/// # Errors
///
/// Returns an error if `mpc` cannot be run or cannot reach MPD.
pub fn get_client() -> Result<()> {
    let output = Command::new("mpc")
        .arg("version")
        .output()
        .context("Failed to execute mpc command. Please install mpc (MPD client)")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "Failed to connect to MPD. Make sure MPD is running and MPD_HOST is set correctly.\nError: {}",
            stderr.trim()
        );
    }
    Ok(())
}

/// The `--format` argument matching [`FIELDS`].
pub fn listall_format() -> String {
    FIELDS
        .iter()
        .map(|field| format!("%{field}%"))
        .collect::<Vec<_>>()
        .join("\t")
}

/// Every song in MPD's database.
///
/// # Errors
///
/// Returns an error if MPD is unreachable or `mpc listall` fails.
pub fn list_all() -> Result<Vec<TrackRecord>> {
    get_client().context("Cannot read the music database")?;

    let output = Command::new("mpc")
        .arg("--format")
        .arg(listall_format())
        .arg("listall")
        .output()
        .context("Failed to execute mpc listall")?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("mpc listall failed: {}", stderr.trim());
    }

    let records = parse_listall(&String::from_utf8_lossy(&output.stdout));
    info!("Read {} songs from MPD", records.len());
    Ok(records)
}

/// Parses `mpc listall` output produced with [`listall_format`].
pub fn parse_listall(output: &str) -> Vec<TrackRecord> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> TrackRecord {
    let mut tags: Vec<(&str, String)> = Vec::new();
    for (field, raw) in FIELDS.iter().zip(line.split('\t')) {
        let value = raw.trim();
        if value.is_empty() {
            continue;
        }
        match *field {
            "file" => tags.push(("file", raw.to_string())),
            "genre" => tags.extend(
                value
                    .split(';')
                    .map(str::trim)
                    .filter(|genre| !genre.is_empty())
                    .map(|genre| ("genre", genre.to_string())),
            ),
            "time" => match parse_time(value) {
                Ok(seconds) => tags.push(("time", seconds.to_string())),
                Err(err) => debug!("Ignoring duration of `{line}': {err}"),
            },
            _ => tags.push((*field, value.to_string())),
        }
    }
    TrackRecord::from_tags(tags.iter().map(|(key, value)| (*key, value.as_str())))
}

/// Parses `mpc` durations (`SS`, `M:SS` or `H:MM:SS`) into seconds.
fn parse_time(time: &str) -> Result<u32> {
    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() > 3 || parts.iter().any(|part| part.is_empty()) {
        anyhow::bail!("Invalid time format: {time}");
    }
    parts.iter().try_fold(0u32, |total, part| {
        let value: u32 = part
            .parse()
            .with_context(|| format!("Invalid time format: {time}"))?;
        total
            .checked_mul(60)
            .and_then(|total| total.checked_add(value))
            .with_context(|| format!("Invalid time format: {time}"))
    })
}

/// Paths currently in the play queue, in play order.
///
/// # Errors
///
/// Returns an error if MPD is unreachable or `mpc playlist` fails.
pub fn current_queue() -> Result<Vec<String>> {
    get_client().context("Cannot read the play queue")?;

    let output = Command::new("mpc")
        .arg("--format")
        .arg("%file%")
        .arg("playlist")
        .output()
        .context("Failed to execute mpc playlist")?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("mpc playlist failed: {}", stderr.trim());
    }

    let queue = parse_queue(&String::from_utf8_lossy(&output.stdout));
    debug!("Play queue holds {} songs", queue.len());
    Ok(queue)
}

pub fn parse_queue(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Appends `paths` to the play queue. Returns how many were added.
///
/// # Errors
///
/// Returns an error if MPD is unreachable or none of the paths could be
/// added.
pub fn enqueue(paths: &[String]) -> Result<usize> {
    if paths.is_empty() {
        anyhow::bail!("Nothing to enqueue");
    }
    get_client().context("Cannot enqueue: MPD connection failed")?;

    let mut added = 0;
    for path in paths {
        let output = Command::new("mpc")
            .arg("add")
            .arg(path)
            .output()
            .with_context(|| format!("Failed to execute mpc add for: {path}"))?;
        if output.status.success() {
            debug!("Added `{path}' to the play queue");
            added += 1;
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("Failed to add `{path}' to the play queue: {}", stderr.trim());
        }
    }

    if added == 0 {
        anyhow::bail!(
            "Failed to add any of {} songs to the play queue. Is MPD's database up to date?",
            paths.len()
        );
    }
    info!("Added {added} of {} songs to the play queue", paths.len());
    Ok(added)
}
