//! Albumflat: copies an album tree into a serially numbered, naturally sorted destination.
//!
//! The source is walked twice with the same ordering: a scan pass measures it, then a copy
//! pass writes each track under a name derived from its ordinal position.

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::RunError;
pub use types::*;

use log::debug;
use std::path::Path;
use std::time::Instant;

use engine::naming::destination_root;
use engine::progress::{ProgressEvent, ProgressSink};
use engine::tagging::TagWriter;

/// Result alias used by public albumflat API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: scan `src`, then copy its tracks under `dst` (or only count them).
///
/// - `src` may be a directory or a single audio file.
/// - `dst` must be an existing directory; the album directory is created inside it unless
///   `opts.drop_dst` is set or `src` is a file.
/// - `sink` receives per-track and summary events; `tags` is called after each real copy.
///
/// Fails with a [`RunError`] inside the returned [`Error`] for every fatal condition.
pub fn flatten_album(
    src: &Path,
    dst: &Path,
    opts: &Opts,
    sink: &mut dyn ProgressSink,
    tags: &mut dyn TagWriter,
) -> Result<Report> {
    let start = Instant::now();
    let config_str = format!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    debug!("{}", config_str);

    opts.validate()?;
    check_paths(src, dst, opts)?;

    let stats = pipeline::scan(src, opts)?;
    if opts.count_only {
        let report = Report {
            track_count: stats.track_count,
            total_bytes: stats.total_bytes,
            elapsed: start.elapsed(),
            destination: None,
            dry_run: opts.dry_run,
            diagnostics: stats.diagnostics,
        };
        sink.on_event(&ProgressEvent::Finished(report.clone()));
        return Ok(report);
    }
    if stats.track_count == 0 {
        return Err(RunError::NoTracks(src.to_path_buf()).into());
    }

    let dst_root = destination_root(src, dst, opts);
    pipeline::copy_album(src, &dst_root, &stats, opts, sink, tags)
}

/// Source must exist; destination must be an existing directory (not needed when only counting).
fn check_paths(src: &Path, dst: &Path, opts: &Opts) -> std::result::Result<(), RunError> {
    if src.as_os_str().is_empty() {
        return Err(RunError::Config("source path cannot be blank".to_string()));
    }
    if !src.exists() {
        return Err(RunError::Config(format!(
            "source \"{}\" is not there",
            src.display()
        )));
    }
    if opts.count_only {
        return Ok(());
    }
    if dst.as_os_str().is_empty() {
        return Err(RunError::Config(
            "destination path cannot be blank".to_string(),
        ));
    }
    if !dst.is_dir() {
        return Err(RunError::Config(format!(
            "destination \"{}\" is not an existing directory",
            dst.display()
        )));
    }
    Ok(())
}
