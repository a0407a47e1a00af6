use serde::Serialize;

use super::id::TrackId;
use super::tags::TrackTags;

/// `source` value for every track found on disk.
pub const LOCAL_SOURCE: &str = "local";

/// One audio file as the player sees it.
///
/// Field order is the JSON key order. The `*_id` fields carry the track id
/// exactly when their path is non-empty; `new` is the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackEntry {
    id: String,
    name: String,
    artist: String,
    album: String,
    #[serde(rename = "url")]
    audio_path: String,
    #[serde(rename = "pic")]
    cover_path: String,
    #[serde(rename = "lyric")]
    lyric_path: String,
    source: &'static str,
    #[serde(rename = "url_id")]
    audio_id: String,
    #[serde(rename = "pic_id")]
    cover_id: String,
    #[serde(rename = "lyric_id")]
    lyric_id: String,
}

fn id_if_present(id: &TrackId, path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        id.as_str().to_string()
    }
}

impl TrackEntry {
    pub fn new(
        id: &TrackId,
        name: String,
        tags: TrackTags,
        audio_path: String,
        cover_path: String,
        lyric_path: String,
    ) -> Self {
        Self {
            id: id.as_str().to_string(),
            name,
            artist: tags.artist,
            album: tags.album,
            audio_id: id_if_present(id, &audio_path),
            cover_id: id_if_present(id, &cover_path),
            lyric_id: id_if_present(id, &lyric_path),
            audio_path,
            cover_path,
            lyric_path,
            source: LOCAL_SOURCE,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn audio_path(&self) -> &str {
        &self.audio_path
    }

    pub fn cover_path(&self) -> &str {
        &self.cover_path
    }

    pub fn lyric_path(&self) -> &str {
        &self.lyric_path
    }

    #[cfg(test)]
    pub fn source(&self) -> &str {
        self.source
    }

    #[cfg(test)]
    pub fn audio_id(&self) -> &str {
        &self.audio_id
    }

    #[cfg(test)]
    pub fn cover_id(&self) -> &str {
        &self.cover_id
    }

    #[cfg(test)]
    pub fn lyric_id(&self) -> &str {
        &self.lyric_id
    }

    pub fn has_cover(&self) -> bool {
        !self.cover_path.is_empty()
    }

    pub fn has_lyric(&self) -> bool {
        !self.lyric_path.is_empty()
    }
}
