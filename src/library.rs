//! Library scanning: walks the music directory and turns every audio file
//! into a [`TrackEntry`] with its sibling lyric/cover paths, tags and id.

mod id;
mod model;
mod paths;
mod scan;
mod tags;

pub use id::TrackId;
pub use model::{LOCAL_SOURCE, TrackEntry};
pub use scan::scan;
pub use tags::TrackTags;

#[cfg(test)]
pub(crate) mod fixtures;
