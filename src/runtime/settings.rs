use crate::config;
use crate::error::{Error, Result};

/// Load and validate settings. A broken config file or environment value
/// stops the run instead of silently falling back to the default output path.
pub fn load_settings() -> Result<config::Settings> {
    let settings = config::Settings::load()?;
    settings.validate().map_err(Error::InvalidConfig)?;
    Ok(settings)
}
