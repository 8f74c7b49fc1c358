//! Archive tree model.
//!
//! The tree arrives once per session from `POST /process-archive` and is
//! never mutated afterwards. Children keep the order the server sent them
//! in; that order drives both the listing and the image index.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

// =============================================================================
// Node
// =============================================================================

/// Entry type on the wire (`"file"` or `"directory"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// One file or directory of the extracted archive.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Node {
    /// Entry name, unique among its siblings
    pub name: String,
    /// File or directory
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Ordered children (directories only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Whether the backend classified this file as an image
    #[serde(default)]
    pub is_image: bool,
}

impl Node {
    /// Create a file node.
    pub fn file(name: &str, is_image: bool) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::File,
            children: Vec::new(),
            is_image,
        }
    }

    /// Create a directory node with the given children.
    pub fn directory(name: &str, children: Vec<Node>) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::Directory,
            children,
            is_image: false,
        }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Check if this entry is an image file.
    ///
    /// A directory never counts as an image, whatever the wire flag says.
    pub fn is_image_file(&self) -> bool {
        self.kind == NodeKind::File && self.is_image
    }

    /// Find a directory child by name.
    pub fn child_directory(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|c| c.is_directory() && c.name == name)
    }

    /// Icon classification for files; `None` for directories.
    pub fn file_kind(&self) -> Option<FileKind> {
        match self.kind {
            NodeKind::File => Some(FileKind::from_name(&self.name)),
            NodeKind::Directory => None,
        }
    }
}

// =============================================================================
// File Kind
// =============================================================================

/// File classification used to pick list and tree icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Document,
    Spreadsheet,
    Presentation,
    Archive,
    Text,
    Image,
    Audio,
    Video,
    Code,
    Other,
}

impl FileKind {
    /// Detect the file kind from its extension.
    pub fn from_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Self::Other;
        };
        match ext.to_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "doc" | "docx" => Self::Document,
            "xls" | "xlsx" => Self::Spreadsheet,
            "ppt" | "pptx" => Self::Presentation,
            "zip" | "rar" | "7z" | "tar" | "gz" | "bz2" => Self::Archive,
            "txt" | "log" => Self::Text,
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" | "svg" => Self::Image,
            "mp3" | "wav" | "ogg" => Self::Audio,
            "mp4" | "mov" | "avi" | "mkv" => Self::Video,
            "js" | "json" | "py" | "html" | "css" | "sh" => Self::Code,
            _ => Self::Other,
        }
    }
}

// =============================================================================
// Archive Tree
// =============================================================================

/// Immutable archive hierarchy owned by one session.
///
/// Cloning shares the underlying nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveTree {
    root: Arc<Node>,
}

impl ArchiveTree {
    /// Wrap a root node received from the server.
    pub fn new(root: Node) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Tree with an empty root directory.
    pub fn empty() -> Self {
        Self::new(Node::directory("root", Vec::new()))
    }

    /// The root node. Its own name is not part of any path.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Shared handle to the root node.
    pub fn shared_root(&self) -> Arc<Node> {
        Arc::clone(&self.root)
    }

    /// Check if the archive has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

impl Default for ArchiveTree {
    fn default() -> Self {
        Self::empty()
    }
}
