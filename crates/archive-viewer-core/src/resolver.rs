//! Path resolution against an [`ArchiveTree`].

use crate::path::segments;
use crate::tree::{ArchiveTree, Node};

/// Direct children of a resolved directory, split into folders and files.
///
/// Both halves keep the tree's stored order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing<'a> {
    pub folders: Vec<&'a Node>,
    pub files: Vec<&'a Node>,
}

impl<'a> Listing<'a> {
    /// Folders followed by files: the displayed item list.
    pub fn items(&self) -> Vec<&'a Node> {
        self.folders.iter().chain(self.files.iter()).copied().collect()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.folders.len() + self.files.len()
    }

    /// Check if the listing has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The directory `path` names, if every segment matches a directory.
pub fn find_directory<'a>(path: &str, tree: &'a ArchiveTree) -> Option<&'a Node> {
    segments(path).try_fold(tree.root(), |current, part| current.child_directory(part))
}

/// Resolve `path` to the children of the directory it names.
///
/// Each segment must match a directory child of the current node. An
/// unmatched segment yields an empty listing rather than an error; use
/// [`find_directory`] to tell "missing" from "empty".
pub fn resolve<'a>(path: &str, tree: &'a ArchiveTree) -> Listing<'a> {
    let Some(current) = find_directory(path, tree) else {
        return Listing::default();
    };

    let (folders, files): (Vec<&Node>, Vec<&Node>) =
        current.children.iter().partition(|c| c.is_directory());
    Listing { folders, files }
}
