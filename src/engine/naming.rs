//! Destination naming: decorated track file names and the album directory name.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::{Leaf, Opts};

/// Leading ordinal decoration of a source stem: `01 - `, `02. `, `3_`, `4) `.
static LEADING_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\s*[-._)]+\s*").unwrap());

/// Number of digits needed to print `total`.
pub fn ordinal_width(total: usize) -> usize {
    total.to_string().len()
}

/// `ordinal` zero-padded to the width of `total`: total 120, ordinal 7 → `007`.
pub fn pad_ordinal(ordinal: usize, total: usize) -> String {
    format!("{:0width$}", ordinal, width = ordinal_width(total))
}

/// Stem with a leading ordinal decoration removed. A stem that is nothing but the
/// decoration, or that starts with a decimal number (`1.5 Hours`), is returned unchanged.
pub fn strip_leading_ordinal(stem: &str) -> &str {
    match LEADING_ORDINAL.find(stem) {
        Some(m) => {
            let rest = &stem[m.end()..];
            match rest.chars().next() {
                Some(c) if !c.is_ascii_digit() => rest,
                _ => stem,
            }
        }
        None => stem,
    }
}

/// Destination file name for `leaf` at `ordinal` of `total`.
///
/// `<ordinal>-[step][step]-<title><.ext>`; the bracketed infix only with
/// `prepend_subdir_name` in flat mode. The title is `<unified> - <artist>` when a unified
/// name is set, else the source stem. With `strip_decorations` in tree mode the
/// original file name is kept.
pub fn decorate_file(leaf: &Leaf, ordinal: usize, total: usize, opts: &Opts) -> String {
    if opts.strip_decorations && opts.tree_dst {
        return leaf.file_name.clone();
    }
    let mut name = pad_ordinal(ordinal, total);
    name.push('-');
    if opts.prepend_subdir_name && !opts.tree_dst && !leaf.steps_down.is_empty() {
        for step in &leaf.steps_down {
            name.push('[');
            name.push_str(step);
            name.push(']');
        }
        name.push('-');
    }
    match opts.unified_name.as_deref() {
        Some(unified) => {
            name.push_str(unified);
            if let Some(artist) = opts.artist.as_deref() {
                name.push_str(" - ");
                name.push_str(artist);
            }
        }
        None => name.push_str(strip_leading_ordinal(leaf.stem())),
    }
    name.push_str(leaf.extension());
    name
}

/// Album directory name: `[NN-]<artist - unified | unified | source name>`.
/// `None` when `drop_dst` is set (files go straight into the destination path).
pub fn decorate_root(opts: &Opts, src: &Path) -> Option<String> {
    if opts.drop_dst {
        return None;
    }
    let prefix = opts
        .album_num
        .map(|n| format!("{n:02}-"))
        .unwrap_or_default();
    let base = match (opts.unified_name.as_deref(), opts.artist.as_deref()) {
        (Some(unified), Some(artist)) => format!("{artist} - {unified}"),
        (Some(unified), None) => unified.to_string(),
        _ => source_name(src),
    };
    Some(format!("{prefix}{base}"))
}

/// Last component of `src`, resolving `.`/`..` through the filesystem when needed.
fn source_name(src: &Path) -> String {
    let named = src
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty());
    named
        .or_else(|| {
            src.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| src.to_string_lossy().into_owned())
}

/// True when the run creates its own album directory under the destination path.
pub fn creates_album_dir(src: &Path, opts: &Opts) -> bool {
    !opts.drop_dst && !src.is_file()
}

/// Where tracks are written: `dst/<album dir>`, or `dst` itself with `drop_dst` or a single-file source.
pub fn destination_root(src: &Path, dst: &Path, opts: &Opts) -> PathBuf {
    if !creates_album_dir(src, opts) {
        return dst.to_path_buf();
    }
    match decorate_root(opts, src) {
        Some(name) => dst.join(name),
        None => dst.to_path_buf(),
    }
}
