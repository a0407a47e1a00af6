//! Playlist manifest model and its JSON writer.

mod model;
mod write;

pub use model::PlaylistManifest;
