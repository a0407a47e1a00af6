use std::path::Path;

/// Lowercase, dot-less, non-empty extensions.
pub fn normalize_extensions(exts: &[String]) -> Vec<String> {
    exts.iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Base name of `file_name` if it ends (case-insensitively) with one of
/// `exts`; the matched `.ext` suffix is removed.
pub fn audio_base_name<'a>(file_name: &'a str, exts: &[String]) -> Option<&'a str> {
    exts.iter().find_map(|ext| {
        let suffix_len = ext.len() + 1;
        let split = file_name.len().checked_sub(suffix_len)?;
        if !file_name.is_char_boundary(split) {
            return None;
        }
        let (base, suffix) = file_name.split_at(split);
        (suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(ext)).then_some(base)
    })
}

/// `path` relative to `work_dir`, with `/` separators.
pub fn relative_url(path: &Path, work_dir: &Path) -> String {
    let rel = path.strip_prefix(work_dir).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

/// Player path of the `<base>.<ext>` file next to the audio file, or an empty
/// string when no such file exists on disk right now.
pub fn sibling_url(audio_path: &Path, audio_url: &str, base: &str, ext: &str) -> String {
    let file_name = format!("{base}.{}", ext.trim_start_matches('.'));
    if !audio_path.with_file_name(&file_name).exists() {
        return String::new();
    }
    match audio_url.rfind('/') {
        Some(i) => format!("{}/{file_name}", &audio_url[..i]),
        None => file_name,
    }
}
