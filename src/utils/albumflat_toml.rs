//! Load `.albumflat.toml` from the source directory (CLI only). The library never reads it;
//! callers build [`Opts`] themselves.

use serde::Deserialize;
use std::path::Path;

use crate::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub struct AlbumflatToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsSection {
    reverse: Option<bool>,
    sort_lex: Option<bool>,
    tree_dst: Option<bool>,
    drop_dst: Option<bool>,
    overwrite: Option<bool>,
    prepend_subdir_name: Option<bool>,
    strip_decorations: Option<bool>,
    drop_tracknumber: Option<bool>,
    file_title: Option<bool>,
    file_title_num: Option<bool>,
    verbose: Option<bool>,
    file_type: Option<String>,
    unified_name: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    album_num: Option<u32>,
}

/// Load the settings file from `dir` if present. Returns None if missing, unreadable or malformed
/// (malformed files are logged).
pub fn load_albumflat_toml(dir: &Path) -> Option<AlbumflatToml> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = std::fs::read_to_string(&path).ok()?;
    parse_albumflat_toml(&s)
        .map_err(|e| log::warn!("{}: {}", path.display(), e))
        .ok()
}

pub fn parse_albumflat_toml(s: &str) -> Result<AlbumflatToml, toml::de::Error> {
    toml::from_str(s)
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => Some $opts_field:ident) => {
        if let Some(v) = $sec.$sec_field.clone() {
            $opts.$opts_field = Some(v);
        }
    };
    ($sec:expr, $opts:expr, $sec_field:ident => $opts_field:ident) => {
        if let Some(v) = $sec.$sec_field.clone() {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI.
/// `dry_run` and `count_only` are never read from the file.
pub fn apply_file_to_opts(file: &AlbumflatToml, opts: &mut Opts) {
    let sec = &file.settings;
    apply_file_opt!(sec, opts, reverse => reverse);
    apply_file_opt!(sec, opts, sort_lex => sort_lex);
    apply_file_opt!(sec, opts, tree_dst => tree_dst);
    apply_file_opt!(sec, opts, drop_dst => drop_dst);
    apply_file_opt!(sec, opts, overwrite => overwrite);
    apply_file_opt!(sec, opts, prepend_subdir_name => prepend_subdir_name);
    apply_file_opt!(sec, opts, strip_decorations => strip_decorations);
    apply_file_opt!(sec, opts, drop_tracknumber => drop_track_number);
    apply_file_opt!(sec, opts, file_title => file_title);
    apply_file_opt!(sec, opts, file_title_num => file_title_num);
    apply_file_opt!(sec, opts, verbose => verbose);
    apply_file_opt!(sec, opts, file_type => Some file_type);
    apply_file_opt!(sec, opts, unified_name => Some unified_name);
    apply_file_opt!(sec, opts, artist => Some artist);
    apply_file_opt!(sec, opts, album => Some album);
    apply_file_opt!(sec, opts, album_num => Some album_num);
}
