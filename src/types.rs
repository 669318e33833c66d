//! Public and internal types for the albumflat API and pipeline.

use std::path::PathBuf;
use std::time::Duration;

use crate::engine::compare::SortMode;
use crate::error::RunError;
use crate::utils::config::ALBUM_NUM_MAX;

/// One file discovered by the tree walk.
///
/// `steps_down` holds the directory names from the source root to the file's parent;
/// it is empty for files directly in the root (or when the source is a single file).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaf {
    pub steps_down: Vec<String>,
    pub file_name: String,
    /// Absolute or root-relative path of the source file, as produced by the walk.
    pub path: PathBuf,
    /// Size in bytes, read from the walk's metadata.
    pub size: u64,
}

impl Leaf {
    /// File name without its last extension.
    pub fn stem(&self) -> &str {
        split_extension(&self.file_name).0
    }

    /// Last extension including the leading dot, or `""`.
    pub fn extension(&self) -> &str {
        split_extension(&self.file_name).1
    }
}

/// Split `name` into `(stem, ".ext")`. Dotfiles like `.hidden` have no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(0) | None => (name, ""),
        Some(i) => name.split_at(i),
    }
}

/// Aggregate statistics of a scan pass.
///
/// Built by folding per-file contributions; [`PassStatistics::merge`] is associative, so
/// partial statistics can be combined in any grouping. Diagnostics keep traversal order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassStatistics {
    pub track_count: usize,
    pub total_bytes: u64,
    /// One line per foreign (non-audio) file, in traversal order.
    pub diagnostics: Vec<String>,
}

impl PassStatistics {
    pub fn add_track(&mut self, bytes: u64) {
        self.track_count += 1;
        self.total_bytes += bytes;
    }

    pub fn add_diagnostic(&mut self, line: String) {
        self.diagnostics.push(line);
    }

    /// Combine `other` after `self`.
    pub fn merge(mut self, other: PassStatistics) -> PassStatistics {
        self.track_count += other.track_count;
        self.total_bytes += other.total_bytes;
        self.diagnostics.extend(other.diagnostics);
        self
    }
}

/// Final report of a run.
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// Tracks copied (or that would be copied under dry-run / counted under count-only).
    pub track_count: usize,
    pub total_bytes: u64,
    pub elapsed: Duration,
    /// Destination root; `None` in count-only mode.
    pub destination: Option<PathBuf>,
    pub dry_run: bool,
    pub diagnostics: Vec<String>,
}

/// Run configuration. Assembled once (defaults → `.albumflat.toml` → CLI) and read-only after.
#[derive(Clone, Debug, Default)]
pub struct Opts {
    /// Walk last-file-first and number tracks from N down to 1.
    pub reverse: bool,
    /// Sort lexicographically instead of naturally.
    pub sort_lex: bool,
    /// Keep the source subdirectory structure at the destination.
    pub tree_dst: bool,
    /// Write straight into the destination path without creating an album directory.
    pub drop_dst: bool,
    /// Remove an existing destination album directory before copying.
    pub overwrite: bool,
    /// Go through naming and reporting without touching the filesystem.
    pub dry_run: bool,
    /// Only run the scan pass and report its statistics.
    pub count_only: bool,
    /// Insert `[step][step]-` after the ordinal in flat mode.
    pub prepend_subdir_name: bool,
    /// Keep original file names (tree mode only).
    pub strip_decorations: bool,
    /// Ask the tag writer not to set track numbers.
    pub drop_track_number: bool,
    /// Title tag from the source file name.
    pub file_title: bool,
    /// Title tag from the numbered destination file name; wins over `file_title`.
    pub file_title_num: bool,
    /// Extension (`flac`) or glob (`*64kb.mp3`) narrowing which audio files count.
    pub file_type: Option<String>,
    /// Replaces file titles and the album directory name.
    pub unified_name: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    /// 0..=99, prefixed to the album directory name.
    pub album_num: Option<u32>,
    /// Verbose output (per-track progress lines instead of a bar).
    pub verbose: bool,
}

impl Opts {
    pub fn sort_mode(&self) -> SortMode {
        if self.sort_lex {
            SortMode::Lexicographic
        } else {
            SortMode::Natural
        }
    }

    /// Album tag value handed to the tag writer: explicit album, else the unified name.
    pub fn album_tag(&self) -> Option<&str> {
        self.album.as_deref().or(self.unified_name.as_deref())
    }

    /// Reject values that cannot produce a sane run.
    pub fn validate(&self) -> Result<(), RunError> {
        if let Some(n) = self.album_num
            && n > ALBUM_NUM_MAX
        {
            return Err(RunError::Config(format!(
                "album number {n} is out of range 0..{ALBUM_NUM_MAX}"
            )));
        }
        let named = [
            ("file type", &self.file_type),
            ("unified name", &self.unified_name),
            ("artist", &self.artist),
            ("album", &self.album),
        ];
        for (label, value) in named {
            if let Some(v) = value
                && v.trim().is_empty()
            {
                return Err(RunError::Config(format!("{label} cannot be blank")));
            }
        }
        // Both end up inside file and directory names.
        let path_parts = [("unified name", &self.unified_name), ("artist", &self.artist)];
        for (label, value) in path_parts {
            if let Some(v) = value
                && (v.contains(['/', '\\']) || matches!(v.trim(), "." | ".."))
            {
                return Err(RunError::Config(format!(
                    "{label} \"{v}\" cannot contain path separators or be a relative directory"
                )));
            }
        }
        Ok(())
    }
}
