use super::load::resolve_config_path;
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn defaults_match_the_player_layout() {
    let s = Settings::default();
    assert_eq!(s.manifest.id, "9527");
    assert_eq!(s.manifest.name, "自定义列表");
    assert_eq!(s.manifest.cover, "/images/album.png");
    assert_eq!(s.manifest.creator_name, "EXP");
    assert_eq!(s.manifest.creator_avatar, "/images/avatar.jpg");
    assert_eq!(s.library.scan_root(), PathBuf::from(".").join("static"));
    assert_eq!(s.library.extensions, vec!["mp3".to_string(), "wma".to_string()]);
    assert_eq!(s.library.lyric_extension, "lrc");
    assert_eq!(s.library.cover_extension, "jpg");
    assert_eq!(s.library.id_basis, IdBasis::Walked);
    assert!(!s.library.follow_links);
    assert_eq!(s.output.path, PathBuf::from("static").join("music_list.json"));
    assert_eq!(s.output.indent, 4);
    assert!(s.validate().is_ok());
}

#[test]
fn validate_rejects_empty_extension_list() {
    let mut s = Settings::default();
    s.library.extensions = vec![" . ".to_string(), String::new()];
    assert!(s.validate().is_err());
}

#[test]
fn validate_rejects_empty_output_path() {
    let mut s = Settings::default();
    s.output.path = PathBuf::new();
    assert!(s.validate().is_err());
}

#[test]
fn resolve_config_path_prefers_musiclist_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MUSICLIST_CONFIG_PATH", "/tmp/musiclist-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/musiclist-test-config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("music_list.toml");
    std::fs::write(
        &cfg_path,
        r#"
[manifest]
id = "42"
name = "Road trip"
creator_name = "me"

[library]
work_dir = "/srv/site"
music_dir = "songs"
extensions = ["mp3", "flac"]
follow_links = false
id_basis = "absolute"

[output]
path = "songs/list.json"
indent = 2
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MUSICLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MUSICLIST__LIBRARY__MUSIC_DIR");

    let s = Settings::load().unwrap();
    assert_eq!(s.manifest.id, "42");
    assert_eq!(s.manifest.name, "Road trip");
    assert_eq!(s.manifest.creator_name, "me");
    // Unset keys keep their defaults.
    assert_eq!(s.manifest.cover, "/images/album.png");
    assert_eq!(s.library.work_dir, PathBuf::from("/srv/site"));
    assert_eq!(s.library.music_dir, PathBuf::from("songs"));
    assert_eq!(s.library.extensions, vec!["mp3".to_string(), "flac".to_string()]);
    assert!(!s.library.follow_links);
    assert_eq!(s.library.id_basis, IdBasis::Absolute);
    assert_eq!(s.library.lyric_extension, "lrc");
    assert_eq!(s.output.path, PathBuf::from("songs/list.json"));
    assert_eq!(s.output.indent, 2);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("music_list.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
music_dir = "songs"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MUSICLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("MUSICLIST__LIBRARY__MUSIC_DIR", "tracks");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.music_dir, PathBuf::from("tracks"));
}

#[test]
fn settings_load_without_file_uses_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let _g1 = EnvGuard::set(
        "MUSICLIST_CONFIG_PATH",
        dir.path().join("missing.toml").to_str().unwrap(),
    );
    let _g2 = EnvGuard::remove("MUSICLIST__LIBRARY__MUSIC_DIR");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.music_dir, PathBuf::from("static"));
    assert_eq!(s.manifest.id, "9527");
}

#[test]
fn malformed_config_file_is_fatal() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("music_list.toml");
    std::fs::write(&cfg_path, "[library\nmusic_dir = ").unwrap();

    let _g1 = EnvGuard::set("MUSICLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MUSICLIST__LIBRARY__MUSIC_DIR");

    assert!(matches!(
        crate::runtime::load_settings(),
        Err(crate::error::Error::Config(_))
    ));
}

#[test]
fn config_failing_validation_is_fatal() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("music_list.toml");
    std::fs::write(
        &cfg_path,
        r#"
[output]
path = ""
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MUSICLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MUSICLIST__LIBRARY__MUSIC_DIR");

    assert!(matches!(
        crate::runtime::load_settings(),
        Err(crate::error::Error::InvalidConfig(_))
    ));
}
