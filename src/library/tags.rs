use std::path::Path;

use lofty::config::ParseOptions;
use lofty::error::{ErrorKind, LoftyError};
use lofty::file::TaggedFile;
use lofty::prelude::*;
use lofty::probe::Probe;

/// Artist and album as shown in the playlist; empty when unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub artist: String,
    pub album: String,
}

/// Outcome of reading embedded tags from one audio file.
///
/// Only `Found` carries metadata; every other variant ends up as empty
/// artist/album in the manifest.
#[derive(Debug)]
pub enum TagRead {
    Found(TrackTags),
    /// The file parsed but carries no tag at all.
    NoTags,
    /// The container format is not one the reader understands.
    Unsupported,
    /// The file could not be opened or read.
    Unreadable(LoftyError),
    /// The file was recognized but its structure or tag data is broken.
    Corrupt(LoftyError),
}

impl TagRead {
    pub fn into_tags(self) -> TrackTags {
        match self {
            TagRead::Found(tags) => tags,
            _ => TrackTags::default(),
        }
    }
}

/// Parse tags only. Audio properties are skipped so a tag with no frames
/// after it still reads.
fn read_tagged(path: &Path) -> Result<TaggedFile, LoftyError> {
    let tagged = Probe::open(path)?
        .options(ParseOptions::new().read_properties(false))
        .guess_file_type()?
        .read()?;
    Ok(tagged)
}

/// Read artist and album from the primary tag, or the first tag present.
pub fn read_tags(path: &Path) -> TagRead {
    let tagged = match read_tagged(path) {
        Ok(tagged) => tagged,
        Err(e) => {
            return match e.kind() {
                ErrorKind::UnknownFormat => TagRead::Unsupported,
                ErrorKind::Io(_) => TagRead::Unreadable(e),
                _ => TagRead::Corrupt(e),
            };
        }
    };

    let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
        return TagRead::NoTags;
    };

    TagRead::Found(TrackTags {
        artist: tag.artist().map(|v| v.into_owned()).unwrap_or_default(),
        album: tag.album().map(|v| v.into_owned()).unwrap_or_default(),
    })
}
