use serde::Serialize;

use crate::config::ManifestSettings;
use crate::library::TrackEntry;

/// The playlist object the player reads from `music_list.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistManifest {
    id: String,
    name: String,
    #[serde(rename = "cover")]
    cover_path: String,
    creator_name: String,
    #[serde(rename = "creatorAvatar")]
    creator_avatar_path: String,
    #[serde(rename = "item")]
    items: Vec<TrackEntry>,
}

impl PlaylistManifest {
    pub fn new(settings: &ManifestSettings) -> Self {
        Self {
            id: settings.id.clone(),
            name: settings.name.clone(),
            cover_path: settings.cover.clone(),
            creator_name: settings.creator_name.clone(),
            creator_avatar_path: settings.creator_avatar.clone(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, track: TrackEntry) {
        self.items.push(track);
    }

    pub fn items(&self) -> &[TrackEntry] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
