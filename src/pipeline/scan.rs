//! Scan pass: one read-only walk that counts tracks, sums their sizes and notes foreign files.

use log::debug;
use std::path::Path;

use crate::engine::filter::path_relative_to;
use crate::pipeline::walk::{WalkItem, walk};
use crate::{Opts, PassStatistics, Result};

/// Walk `root` once and fold every file into [`PassStatistics`]. Uses the same walk and
/// eligibility rule as the copy pass, so its track count is what the copy pass will visit.
pub fn scan(root: &Path, opts: &Opts) -> Result<PassStatistics> {
    let mut tree = walk(root, opts)?;
    let base = tree.root().to_path_buf();
    let stats = tree.try_fold(PassStatistics::default(), |mut stats, item| {
        match item? {
            WalkItem::Track(leaf) => stats.add_track(leaf.size),
            WalkItem::Foreign(path) => stats.add_diagnostic(foreign_line(&base, &path)),
        }
        Ok::<_, anyhow::Error>(stats)
    })?;
    debug!(
        "scan: {} track(s), {} bytes, {} foreign file(s)",
        stats.track_count,
        stats.total_bytes,
        stats.diagnostics.len()
    );
    Ok(stats)
}

fn foreign_line(root: &Path, path: &Path) -> String {
    let shown = path_relative_to(path, root)
        .filter(|rel| !rel.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf());
    format!("not an audio file: {}", shown.display())
}
