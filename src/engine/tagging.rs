//! Tag writer seam: called once per copied file, after the copy, in copy order.

use log::debug;
use std::path::Path;

use crate::Result;

/// Everything a tag writer needs to know about one copied track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagRequest<'a> {
    pub ordinal: usize,
    pub total: usize,
    pub path: &'a Path,
    pub artist: Option<&'a str>,
    /// Configured album, or the unified name when no album is set.
    pub album: Option<&'a str>,
    pub unified_name: Option<&'a str>,
    /// Title tag: numbered or source file stem on request, else the unified name.
    pub title: Option<&'a str>,
    pub drop_track_number: bool,
}

pub trait TagWriter {
    fn write_tags(&mut self, request: &TagRequest<'_>) -> Result<()>;
}

impl<F> TagWriter for F
where
    F: FnMut(&TagRequest<'_>) -> Result<()>,
{
    fn write_tags(&mut self, request: &TagRequest<'_>) -> Result<()> {
        self(request)
    }
}

/// Leaves files untouched; logs what would have been tagged.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkipTags;

impl TagWriter for SkipTags {
    fn write_tags(&mut self, request: &TagRequest<'_>) -> Result<()> {
        debug!(
            "tags for {}: track {}, title {:?}, artist {:?}, album {:?}",
            request.path.display(),
            if request.drop_track_number {
                "-".to_string()
            } else {
                format!("{}/{}", request.ordinal, request.total)
            },
            request.title,
            request.artist,
            request.album
        );
        Ok(())
    }
}
