//! Archive-wide image index.
//!
//! A flat, pre-order list of every image file in the tree. It is built once
//! when the session is created and defines carousel adjacency, so the order
//! never depends on which folder or page the user is looking at.

use crate::api::view_file_url;
use crate::path::join_path;
use crate::session::{ResourceLocator, SessionId};
use crate::tree::{ArchiveTree, Node};

/// One image of the archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageEntry {
    /// File name
    pub name: String,
    /// Full path from the archive root
    pub path: String,
    /// Where the full-resolution bytes are served
    pub locator: ResourceLocator,
}

/// Ordered image entries of one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageIndex {
    entries: Vec<ImageEntry>,
}

impl ImageIndex {
    /// Walk the tree depth-first, pre-order, children in stored order.
    ///
    /// Uses an explicit stack so deep archives cannot overflow the call stack.
    pub fn build(tree: &ArchiveTree, session: &SessionId) -> Self {
        let mut entries = Vec::new();
        let mut stack: Vec<(&Node, String)> = tree
            .root()
            .children
            .iter()
            .rev()
            .map(|child| (child, child.name.clone()))
            .collect();

        while let Some((node, path)) = stack.pop() {
            if node.is_directory() {
                for child in node.children.iter().rev() {
                    stack.push((child, join_path(&path, &child.name)));
                }
            } else if node.is_image_file() {
                entries.push(ImageEntry {
                    name: node.name.clone(),
                    locator: view_file_url(session, &path),
                    path,
                });
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    /// Position of the image at `path`, if it is indexed.
    pub fn position(&self, path: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }

    /// Check if `path` names an indexed image.
    pub fn contains(&self, path: &str) -> bool {
        self.position(path).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.entries.iter()
    }
}
