//! Ordered tree walk: a lazy, restartable sequence of leaves shared by the scan and copy passes.
//!
//! Each directory's children are split into subdirectories and files by entry type, and each
//! group is sorted on its own. Forward walks descend into subdirectories first and then yield
//! the directory's own files; reverse walks yield files first and sort with swapped operands,
//! so the whole sequence comes out last-file-first.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::engine::compare::{SortMode, compare};
use crate::engine::filter::{TypeFilter, is_audio_file, is_track, path_relative_to};
use crate::error::RunError;
use crate::types::split_extension;
use crate::{Leaf, Opts};

/// One file seen by the walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkItem {
    Track(Leaf),
    /// File without an audio extension; reported, never copied.
    Foreign(PathBuf),
}

/// Iterator over [`WalkItem`]s in copy order. Errors are fatal for the caller.
pub struct TreeWalk {
    root: PathBuf,
    entries: walkdir::IntoIter,
    filter: Option<TypeFilter>,
}

/// Start a fresh walk of `root` (directory or single file) with the ordering from `opts`.
pub fn walk(root: &Path, opts: &Opts) -> Result<TreeWalk, RunError> {
    let filter = opts
        .file_type
        .as_deref()
        .map(TypeFilter::parse)
        .transpose()?;
    let mode = opts.sort_mode();
    let reverse = opts.reverse;
    let entries = WalkDir::new(root)
        .follow_links(true)
        .sort_by(move |a, b| order_entries(a, b, mode, reverse))
        .into_iter();
    Ok(TreeWalk {
        root: root.to_path_buf(),
        entries,
        filter,
    })
}

/// Sibling order: directories before files (files before directories when reversed), then
/// directory names or file stems under `mode`, then full names as a tie-break.
fn order_entries(a: &DirEntry, b: &DirEntry, mode: SortMode, reverse: bool) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    if a_dir != b_dir {
        return if a_dir != reverse {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    let a_name = a.file_name().to_string_lossy();
    let b_name = b.file_name().to_string_lossy();
    let (a_key, b_key) = if a_dir {
        (a_name.as_ref(), b_name.as_ref())
    } else {
        (split_extension(&a_name).0, split_extension(&b_name).0)
    };
    compare(a_key, b_key, mode, reverse)
        .then_with(|| compare(&a_name, &b_name, SortMode::Lexicographic, reverse))
}

/// Directory names from `root` down to the parent of `path`.
fn steps_down(root: &Path, path: &Path) -> Vec<String> {
    path_relative_to(path, root)
        .as_deref()
        .and_then(Path::parent)
        .map(|parent| {
            parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default()
}

impl TreeWalk {
    /// Only the tracks, in walk order.
    pub fn leaves(self) -> impl Iterator<Item = Result<Leaf, RunError>> {
        self.filter_map(|item| match item {
            Ok(WalkItem::Track(leaf)) => Some(Ok(leaf)),
            Ok(WalkItem::Foreign(_)) => None,
            Err(e) => Some(Err(e)),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Iterator for TreeWalk {
    type Item = Result<WalkItem, RunError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err.into())),
            };
            if entry.file_type().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if !entry.file_type().is_file() || !is_audio_file(&name) {
                return Some(Ok(WalkItem::Foreign(entry.into_path())));
            }
            if !is_track(&name, self.filter.as_ref()) {
                // Audio, but narrowed out by the type filter.
                continue;
            }
            let size = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(err) => return Some(Err(err.into())),
            };
            let steps_down = steps_down(&self.root, entry.path());
            return Some(Ok(WalkItem::Track(Leaf {
                steps_down,
                file_name: name,
                path: entry.into_path(),
                size,
            })));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_down_lists_parent_dirs() {
        let root = Path::new("/music/album");
        assert_eq!(
            steps_down(root, Path::new("/music/album/CD1/Bonus/a.mp3")),
            vec!["CD1".to_string(), "Bonus".to_string()]
        );
        assert!(steps_down(root, Path::new("/music/album/a.mp3")).is_empty());
    }

    #[test]
    fn single_file_root_has_no_steps() {
        let root = Path::new("/music/ada.ogg");
        assert!(steps_down(root, root).is_empty());
    }
}
