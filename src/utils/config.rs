//! Application configuration constants.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    /// Per-album settings file looked up in the source directory.
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- Tracks ----

/// Lowercase extensions (no dot) of files that count as tracks.
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "ogg", "m4a", "m4b", "opus", "wma", "flac", "ape", "wav",
];

/// Highest accepted `--album-num`.
pub const ALBUM_NUM_MAX: u32 = 99;

// ---- Progress ----

/// Progress bar tuning.
pub struct ProgressConsts;

impl ProgressConsts {
    /// Label shown in front of the copy bar.
    pub const BAR_DESC: &'static str = "Copying";
    /// Unit shown after the track counter.
    pub const BAR_UNIT: &'static str = " tracks";
}
