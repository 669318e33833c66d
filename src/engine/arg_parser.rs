use clap::Parser;
use std::path::PathBuf;

/// Copies an album tree into a serially numbered, naturally sorted destination.
///
/// Only a namesake of the source directory is created at the destination, and every track is
/// copied into it with a serial number prefix. Files are written strictly in sequence, either
/// starting with number one or in reverse, which matters for devices that play files in
/// filesystem order.
#[derive(Clone, Parser)]
#[command(name = "albumflat", version)]
#[command(about = "Copy an album tree into a serially numbered, naturally sorted destination.")]
pub struct Cli {
    /// Source directory, or a single audio file.
    #[arg(value_name = "SRC")]
    pub src: PathBuf,

    /// General destination directory (must exist).
    #[arg(value_name = "DST")]
    pub dst: PathBuf,

    /// Verbose output: one line per track instead of a progress bar.
    #[arg(long, short = 'v', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Do not set track numbers.
    #[arg(long, short = 'd', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub drop_tracknumber: Option<bool>,

    /// Keep original file names (with --tree-dst).
    #[arg(long, short = 's', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub strip_decorations: Option<bool>,

    /// Use the file name for the title tag.
    #[arg(long, short = 'f', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub file_title: Option<bool>,

    /// Use the numbered file name for the title tag.
    #[arg(long, short = 'F', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub file_title_num: Option<bool>,

    /// Sort files lexicographically instead of naturally.
    #[arg(long, short = 'x', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub sort_lex: Option<bool>,

    /// Retain the tree structure of the source album at destination.
    #[arg(long, short = 't', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub tree_dst: Option<bool>,

    /// Do not create a destination album directory; write straight into DST.
    #[arg(long, short = 'p', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub drop_dst: Option<bool>,

    /// Copy files in reverse order (number one file is the last to be copied).
    #[arg(long, short = 'r', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub reverse: Option<bool>,

    /// Silently remove an existing destination album directory.
    #[arg(long, short = 'w', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub overwrite: Option<bool>,

    /// Go through naming and reporting without modifying anything (trumps --overwrite).
    #[arg(long, short = 'y')]
    pub dry_run: bool,

    /// Just count the files.
    #[arg(long, short = 'c')]
    pub count: bool,

    /// Prepend the subdirectory names to each file name (flat destination only).
    #[arg(long, short = 'i', num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub prepend_subdir_name: Option<bool>,

    /// Accept only the given audio type: an extension (flac) or a glob ('*64kb.mp3').
    #[arg(long, short = 'e', value_name = "EXT|GLOB")]
    pub file_type: Option<String>,

    /// Name used for every file title and the album directory.
    #[arg(long, short = 'u', value_name = "TEXT")]
    pub unified_name: Option<String>,

    /// Artist tag.
    #[arg(long, short = 'a', value_name = "TEXT")]
    pub artist: Option<String>,

    /// Album tag.
    #[arg(long, short = 'm', value_name = "TEXT")]
    pub album: Option<String>,

    /// Prepend a two-digit number (0..99) to the destination album directory name.
    #[arg(long, short = 'b', value_name = "N", value_parser = clap::value_parser!(u32).range(0..=99))]
    pub album_num: Option<u32>,
}
