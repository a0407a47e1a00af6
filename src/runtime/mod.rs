use std::path::PathBuf;

use log::{info, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::library;
use crate::manifest::PlaylistManifest;

mod settings;

pub(crate) use settings::load_settings;


pub fn run() -> Result<()> {
    let settings = load_settings()?;
    generate(&settings).map(|_| ())
}

/// Scan the library and write the manifest. Returns the path written.
///
/// Nothing is written unless the whole scan succeeds.
pub fn generate(settings: &Settings) -> Result<PathBuf> {
    let root = settings.library.scan_root();
    info!("scanning {}", root.display());

    let tracks = library::scan(&settings.library)?;

    let mut manifest = PlaylistManifest::new(&settings.manifest);
    for track in tracks {
        manifest.push(track);
    }
    if manifest.is_empty() {
        warn!("no audio files found under {}", root.display());
    }

    let out = settings.library.work_dir.join(&settings.output.path);
    manifest.write_to(&out, settings.output.indent)?;

    let lyrics = manifest.items().iter().filter(|t| t.has_lyric()).count();
    let covers = manifest.items().iter().filter(|t| t.has_cover()).count();
    info!(
        "wrote {} tracks ({lyrics} with lyrics, {covers} with covers) to {}",
        manifest.len(),
        out.display()
    );

    Ok(out)
}
