//! Copy pass: second walk of the source, writing each track to its decorated destination.
//!
//! Runs `Preparing → Copying → VerifyingCount → Done`; any error is fatal and leaves
//! already-copied files in place.

use anyhow::Context;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::engine::filter::{canonicalize_lenient, is_within};
use crate::engine::naming::{creates_album_dir, decorate_file};
use crate::engine::progress::{ProgressEvent, ProgressSink, TrackProgress};
use crate::engine::tagging::{TagRequest, TagWriter};
use crate::error::RunError;
use crate::pipeline::walk::walk;
use crate::types::split_extension;
use crate::{Leaf, Opts, PassStatistics, Report, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyPhase {
    Preparing,
    Copying,
    VerifyingCount,
    Done,
}

/// Copy every track under `src` into `dst_root` in walk order.
///
/// `stats` must come from a scan of the same `src` with the same `opts`; its track count
/// sizes the ordinal padding and is checked against the number of tracks actually visited.
/// Under dry-run nothing is created, copied or tagged, but every planned destination is
/// still reported to `sink`.
pub fn copy_album(
    src: &Path,
    dst_root: &Path,
    stats: &PassStatistics,
    opts: &Opts,
    sink: &mut dyn ProgressSink,
    tags: &mut dyn TagWriter,
) -> Result<Report> {
    let start = Instant::now();
    let total = stats.track_count;

    let mut phase = CopyPhase::Preparing;
    debug!("copy pass: {:?} {}", phase, dst_root.display());
    let owns_root = creates_album_dir(src, opts);
    check_overlap(src, dst_root, owns_root, opts.dry_run)?;
    prepare_destination(dst_root, owns_root, opts)?;

    phase = CopyPhase::Copying;
    debug!("copy pass: {:?} {} track(s)", phase, total);
    sink.on_event(&ProgressEvent::Started { total });
    let mut copied = 0_usize;
    let mut total_bytes = 0_u64;
    for leaf in walk(src, opts)?.leaves() {
        let leaf = leaf?;
        if copied >= total {
            return Err(RunError::CountMismatch {
                scanned: total,
                copied: copied + 1,
            }
            .into());
        }
        let ordinal = if opts.reverse {
            total - copied
        } else {
            copied + 1
        };
        let progress = copy_leaf(&leaf, ordinal, total, dst_root, opts, tags)?;
        copied += 1;
        total_bytes += leaf.size;
        sink.on_event(&ProgressEvent::Track(progress));
    }

    phase = CopyPhase::VerifyingCount;
    debug!("copy pass: {:?} {} of {}", phase, copied, total);
    if copied != total {
        return Err(RunError::CountMismatch {
            scanned: total,
            copied,
        }
        .into());
    }

    phase = CopyPhase::Done;
    debug!("copy pass: {:?}", phase);
    let report = Report {
        track_count: copied,
        total_bytes,
        elapsed: start.elapsed(),
        destination: Some(dst_root.to_path_buf()),
        dry_run: opts.dry_run,
        diagnostics: stats.diagnostics.clone(),
    };
    sink.on_event(&ProgressEvent::Finished(report.clone()));
    Ok(report)
}

/// Refuse a destination inside the source, or an album directory that would contain the
/// source. Under dry-run the conflict is only logged.
pub fn check_overlap(src: &Path, dst_root: &Path, owns_root: bool, dry_run: bool) -> Result<()> {
    let src_canonical = src.canonicalize().map_err(|e| RunError::io(src, e))?;
    let dst_canonical = canonicalize_lenient(dst_root)?;
    let inside_source = is_within(&dst_canonical, &src_canonical);
    let contains_source = owns_root && is_within(&src_canonical, &dst_canonical);
    if !inside_source && !contains_source {
        return Ok(());
    }
    let err = RunError::Overlap {
        src: src_canonical,
        dst: dst_canonical,
    };
    if dry_run {
        warn!("{err}; dry run continues without writing");
        return Ok(());
    }
    Err(err.into())
}

/// Create the album directory, replacing an existing one only with `overwrite`.
/// Writing straight into the destination path (`owns_root == false`) needs no preparation.
fn prepare_destination(dst_root: &Path, owns_root: bool, opts: &Opts) -> Result<()> {
    let exists = dst_root.symlink_metadata().is_ok();
    if opts.dry_run {
        if owns_root && exists && !opts.overwrite {
            warn!(
                "destination \"{}\" already exists; a real run needs --overwrite",
                dst_root.display()
            );
        }
        return Ok(());
    }
    if !owns_root {
        return Ok(());
    }
    if exists {
        if !opts.overwrite {
            return Err(RunError::DestinationExists(dst_root.to_path_buf()).into());
        }
        warn!("removing existing destination \"{}\"", dst_root.display());
        let removed = if dst_root.is_dir() {
            fs::remove_dir_all(dst_root)
        } else {
            fs::remove_file(dst_root)
        };
        removed.map_err(|e| RunError::io(dst_root, e))?;
    }
    fs::create_dir(dst_root).map_err(|e| RunError::io(dst_root, e))?;
    Ok(())
}

fn destination_dir(leaf: &Leaf, dst_root: &Path, opts: &Opts) -> PathBuf {
    if opts.tree_dst {
        leaf.steps_down
            .iter()
            .fold(dst_root.to_path_buf(), |dir, step| dir.join(step))
    } else {
        dst_root.to_path_buf()
    }
}

/// Copy (or plan) one track and hand it to the tag writer.
fn copy_leaf(
    leaf: &Leaf,
    ordinal: usize,
    total: usize,
    dst_root: &Path,
    opts: &Opts,
    tags: &mut dyn TagWriter,
) -> Result<TrackProgress> {
    let dir = destination_dir(leaf, dst_root, opts);
    let file_name = decorate_file(leaf, ordinal, total, opts);
    let destination = dir.join(&file_name);
    let mut progress = TrackProgress {
        ordinal,
        total,
        destination,
        source_bytes: leaf.size,
        byte_delta: None,
    };
    if opts.dry_run {
        return Ok(progress);
    }
    let destination = &progress.destination;
    if opts.tree_dst {
        fs::create_dir_all(&dir).map_err(|e| RunError::io(&dir, e))?;
    }
    if destination.symlink_metadata().is_ok() && !opts.overwrite {
        return Err(RunError::DestinationExists(destination.clone()).into());
    }
    fs::copy(&leaf.path, destination).map_err(|e| RunError::io(destination, e))?;
    let written = fs::metadata(destination)
        .map_err(|e| RunError::io(destination, e))?
        .len();
    tags.write_tags(&TagRequest {
        ordinal,
        total,
        path: destination,
        artist: opts.artist.as_deref(),
        album: opts.album_tag(),
        unified_name: opts.unified_name.as_deref(),
        title: title_tag(leaf, &file_name, opts),
        drop_track_number: opts.drop_track_number,
    })
    .with_context(|| format!("write tags to \"{}\"", destination.display()))?;
    progress.byte_delta = Some(written as i64 - leaf.size as i64);
    Ok(progress)
}

/// Title handed to the tag writer for a track written as `file_name`.
fn title_tag<'a>(leaf: &'a Leaf, file_name: &'a str, opts: &'a Opts) -> Option<&'a str> {
    if opts.file_title_num {
        Some(split_extension(file_name).0)
    } else if opts.file_title {
        Some(leaf.stem())
    } else {
        opts.unified_name.as_deref()
    }
}
