//! Track eligibility and path utilities

use globset::{GlobBuilder, GlobMatcher};
use std::path::{Component, Path, PathBuf};

use crate::error::RunError;
use crate::types::split_extension;
use crate::utils::config::AUDIO_EXTENSIONS;

/// User-supplied narrowing of which audio files count as tracks.
#[derive(Clone, Debug)]
pub enum TypeFilter {
    /// `*64kb.mp3`: matched against the whole file name, case-insensitively.
    Glob(GlobMatcher),
    /// `flac` or `.FLAC`: compared to the file's extension, case-insensitively.
    Extension(String),
}

impl TypeFilter {
    /// Glob when `raw` contains any of `* ? [ ]`, extension otherwise.
    pub fn parse(raw: &str) -> Result<Self, RunError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(RunError::Config("file type cannot be blank".to_string()));
        }
        if raw.contains(['*', '?', '[', ']']) {
            let glob = GlobBuilder::new(raw)
                .case_insensitive(true)
                .literal_separator(false)
                .build()
                .map_err(|e| RunError::Config(format!("file type pattern \"{raw}\": {e}")))?;
            Ok(TypeFilter::Glob(glob.compile_matcher()))
        } else {
            Ok(TypeFilter::Extension(normalize_extension(raw)))
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            TypeFilter::Glob(m) => m.is_match(file_name),
            TypeFilter::Extension(ext) => extension_of(file_name) == *ext,
        }
    }
}

/// Lowercased extension without the leading dot.
fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

fn extension_of(file_name: &str) -> String {
    normalize_extension(split_extension(file_name).1)
}

/// True if `file_name` has a known audio extension (case-insensitive).
pub fn is_audio_file(file_name: &str) -> bool {
    let ext = extension_of(file_name);
    AUDIO_EXTENSIONS.contains(&ext.as_str())
}

/// True if `file_name` passes the type filter (if any) and is an audio file.
pub fn is_track(file_name: &str, filter: Option<&TypeFilter>) -> bool {
    filter.is_none_or(|f| f.matches(file_name)) && is_audio_file(file_name)
}

/// Convert absolute path to relative path from base
pub fn path_relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(|p| p.to_path_buf())
}

/// Canonical form of `path` even when its tail does not exist yet: the longest existing
/// ancestor is canonicalized and the missing components are appended lexically.
pub fn canonicalize_lenient(path: &Path) -> Result<PathBuf, RunError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| RunError::io(path, e))?
            .join(path)
    };
    let mut missing: Vec<&std::ffi::OsStr> = Vec::new();
    let mut probe = absolute.as_path();
    loop {
        match probe.canonicalize() {
            Ok(found) => {
                let mut out = found;
                for name in missing.iter().rev() {
                    out.push(name);
                }
                return Ok(normalize_lexically(&out));
            }
            Err(e) => match (probe.parent(), probe.file_name()) {
                (Some(parent), Some(name)) => {
                    missing.push(name);
                    probe = parent;
                }
                _ => return Err(RunError::io(path, e)),
            },
        }
    }
}

/// Resolve `.` and `..` without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// True if `path` equals `base` or lies below it. Both should be canonical.
pub fn is_within(path: &Path, base: &Path) -> bool {
    path.starts_with(base)
}
