use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then applies environment
/// variables (prefix `MUSICLIST__`) on top, and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MUSICLIST")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("library.extensions")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let has_extension = self
            .library
            .extensions
            .iter()
            .any(|e| !e.trim().trim_start_matches('.').is_empty());
        if !has_extension {
            return Err("library.extensions must name at least one extension".to_string());
        }
        if self.output.path.as_os_str().is_empty() {
            return Err("output.path must not be empty".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `MUSICLIST_CONFIG_PATH` or the working directory default.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MUSICLIST_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// `music_list.toml` in the current directory, next to the `static` tree it describes.
pub fn default_config_path() -> Option<PathBuf> {
    env::current_dir().ok().map(|d| d.join("music_list.toml"))
}
