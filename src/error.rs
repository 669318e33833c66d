//! Fatal error taxonomy for a run. Carried inside `anyhow::Error`; use
//! `err.downcast_ref::<RunError>()` to classify a failure.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    /// Bad option value or unusable source/destination path. Raised before any traversal.
    #[error("configuration error: {0}")]
    Config(String),

    /// Destination album directory (or file, with `drop_dst`) exists and `overwrite` is not set.
    #[error("destination \"{}\" already exists (use --overwrite to replace it)", .0.display())]
    DestinationExists(PathBuf),

    /// Destination resolves inside the source tree, or would remove a directory that contains it.
    #[error("destination \"{}\" overlaps source \"{}\"", .dst.display(), .src.display())]
    Overlap { src: PathBuf, dst: PathBuf },

    #[error("I/O error at \"{}\"", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory listing failed mid-walk (permission denied, symlink loop, broken link).
    #[error("walk failed at {}: {message}", .path.as_ref().map(|p| format!("\"{}\"", p.display())).unwrap_or_else(|| "<unknown path>".to_string()))]
    Walk {
        path: Option<PathBuf>,
        message: String,
    },

    /// Copy pass visited a different number of tracks than the scan pass counted.
    #[error("track count mismatch: scanned {scanned}, copied {copied}; source tree changed during the run")]
    CountMismatch { scanned: usize, copied: usize },

    #[error("no audio files found at \"{}\"", .0.display())]
    NoTracks(PathBuf),
}

impl RunError {
    /// Wrap an `io::Error` with the path it happened at.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RunError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<walkdir::Error> for RunError {
    fn from(err: walkdir::Error) -> Self {
        let message = match err.loop_ancestor() {
            Some(ancestor) => format!("symlink loop back to \"{}\"", ancestor.display()),
            None => err
                .io_error()
                .map(|e| e.to_string())
                .unwrap_or_else(|| err.to_string()),
        };
        RunError::Walk {
            path: err.path().map(PathBuf::from),
            message,
        }
    }
}
