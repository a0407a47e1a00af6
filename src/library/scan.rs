use std::path::Path;

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::{IdBasis, LibrarySettings};
use crate::error::{Error, Result};

use super::id::TrackId;
use super::model::TrackEntry;
use super::paths::{audio_base_name, normalize_extensions, relative_url, sibling_url};
use super::tags::{TagRead, read_tags};

/// Walk `work_dir/music_dir` and build one entry per audio file.
///
/// Entries come out in walk order. A missing root or an unreadable directory
/// aborts the scan. Dangling symlinks and symlink loops are skipped, and
/// broken or missing tags only blank out artist and album.
pub fn scan(settings: &LibrarySettings) -> Result<Vec<TrackEntry>> {
    let root = settings.scan_root();
    if !root.is_dir() {
        return Err(Error::MissingRoot(root));
    }

    let extensions = normalize_extensions(&settings.extensions);
    let mut tracks: Vec<TrackEntry> = Vec::new();

    for entry in WalkDir::new(&root).follow_links(settings.follow_links) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_bad_link(&err) => {
                warn!("skipping {err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if !is_regular_or_linked_file(&entry) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        let Some(name) = audio_base_name(&file_name, &extensions) else {
            continue;
        };

        let track = track_entry(entry.path(), name, settings)?;
        debug!(
            "{} -> {:?} (artist {:?}, album {:?}, cover {:?}, lyric {:?})",
            track.audio_path(),
            track.name(),
            track.artist(),
            track.album(),
            track.cover_path(),
            track.lyric_path()
        );
        tracks.push(track);
    }

    Ok(tracks)
}

/// A walk error caused by a symlink (dangling target or loop) rather than by
/// a directory that cannot be read.
fn is_bad_link(err: &walkdir::Error) -> bool {
    if err.loop_ancestor().is_some() {
        return true;
    }
    err.path()
        .and_then(|p| p.symlink_metadata().ok())
        .is_some_and(|m| m.file_type().is_symlink())
}

/// Plain files, plus symlinks that resolve to a file when links are not followed.
fn is_regular_or_linked_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if file_type.is_symlink() {
        if entry.path().is_file() {
            return true;
        }
        if !entry.path().exists() {
            debug!("{}: dangling symlink", entry.path().display());
        }
    }
    false
}

fn track_entry(path: &Path, name: &str, settings: &LibrarySettings) -> Result<TrackEntry> {
    let audio_url = relative_url(path, &settings.work_dir);
    let lyric_url = sibling_url(path, &audio_url, name, &settings.lyric_extension);
    let cover_url = sibling_url(path, &audio_url, name, &settings.cover_extension);

    let id = match settings.id_basis {
        IdBasis::Walked => TrackId::from_path(path),
        IdBasis::Absolute => {
            let abs = std::path::absolute(path).map_err(|source| Error::Resolve {
                path: path.to_path_buf(),
                source,
            })?;
            TrackId::from_path(&abs)
        }
    };
    debug!("{audio_url}: id {id}");

    let read = read_tags(path);
    log_tag_read(&audio_url, &read);

    Ok(TrackEntry::new(
        &id,
        name.to_string(),
        read.into_tags(),
        audio_url,
        cover_url,
        lyric_url,
    ))
}

fn log_tag_read(audio_url: &str, read: &TagRead) {
    match read {
        TagRead::Found(_) => {}
        TagRead::NoTags => debug!("{audio_url}: no tags"),
        TagRead::Unsupported => debug!("{audio_url}: unsupported format, tags skipped"),
        TagRead::Unreadable(e) => warn!("{audio_url}: unreadable: {e}"),
        TagRead::Corrupt(e) => warn!("{audio_url}: bad audio or tag data: {e}"),
    }
}
