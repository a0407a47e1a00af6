use std::fmt;
use std::path::Path;

use md5::{Digest, Md5};

/// Track identifier derived from the text of a path.
///
/// The same path string always yields the same id; the file's content is
/// never read, so moving a file changes its id and editing it does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(String);

impl TrackId {
    pub fn from_path_str(path: &str) -> Self {
        Self(format!("{:x}", Md5::digest(path.as_bytes())))
    }

    pub fn from_path(path: &Path) -> Self {
        Self::from_path_str(&path.to_string_lossy())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
