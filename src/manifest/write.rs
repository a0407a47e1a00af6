use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};

use super::model::PlaylistManifest;

impl PlaylistManifest {
    /// Render as a one-element JSON array, pretty-printed with `indent`
    /// spaces. Non-ASCII text is written as-is.
    pub fn to_json(&self, indent: usize) -> Result<Vec<u8>> {
        let indent = " ".repeat(indent);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        [self].serialize(&mut ser)?;
        Ok(buf)
    }

    /// Replace whatever is at `path` with this manifest.
    pub fn write_to(&self, path: &Path, indent: usize) -> Result<()> {
        let json = self.to_json(indent)?;
        let write_err = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_err)?;
        let mut out = BufWriter::new(file);
        out.write_all(&json).map_err(write_err)?;
        out.flush().map_err(write_err)?;
        Ok(())
    }
}
