use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings for one manifest generation run.
///
/// File format: TOML
/// Default path: `MUSICLIST_CONFIG_PATH`, or `music_list.toml` in the current directory.
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MUSICLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub manifest: ManifestSettings,
    pub library: LibrarySettings,
    pub output: OutputSettings,
}

/// Identity fields of the generated playlist.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ManifestSettings {
    pub id: String,
    pub name: String,
    /// Playlist cover, as a URL path understood by the player.
    pub cover: String,
    pub creator_name: String,
    pub creator_avatar: String,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            id: "9527".to_string(),
            name: "自定义列表".to_string(),
            cover: "/images/album.png".to_string(),
            creator_name: "EXP".to_string(),
            creator_avatar: "/images/avatar.jpg".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdBasis {
    /// Hash the path as produced by the walk (`./static/a/Song.mp3`).
    #[serde(alias = "walk", alias = "relative")]
    Walked,
    /// Hash the absolute (not canonicalized) path: `..` and symlinks are kept as written.
    Absolute,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Root that `url`, `pic` and `lyric` paths are made relative to.
    pub work_dir: PathBuf,
    /// Directory under `work_dir` that is scanned for audio files.
    pub music_dir: PathBuf,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Extension of the sibling lyric file.
    pub lyric_extension: String,
    /// Extension of the sibling cover image.
    pub cover_extension: String,
    /// Whether to descend into symlinked directories. Symlinked files are
    /// picked up either way.
    pub follow_links: bool,
    /// Which path string the track id is derived from.
    pub id_basis: IdBasis,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            music_dir: PathBuf::from("static"),
            extensions: vec!["mp3".into(), "wma".into()],
            lyric_extension: "lrc".to_string(),
            cover_extension: "jpg".to_string(),
            follow_links: false,
            id_basis: IdBasis::Walked,
        }
    }
}

impl LibrarySettings {
    /// Directory the walk starts from.
    pub fn scan_root(&self) -> PathBuf {
        self.work_dir.join(&self.music_dir)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Manifest location, relative to `library.work_dir`.
    pub path: PathBuf,
    /// Spaces per indentation level in the pretty-printed JSON.
    pub indent: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("static").join("music_list.json"),
            indent: 4,
        }
    }
}
