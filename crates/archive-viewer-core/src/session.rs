//! Session identity.
//!
//! A session correlates one extracted archive with its tree and the
//! byte-serving endpoint. Each successful submission creates a new one and
//! the previous session is dropped wholesale.

use std::fmt;

use crate::api::view_file_url;
use crate::image_index::ImageIndex;
use crate::tree::ArchiveTree;

/// Server-assigned session identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client-side freshness token.
///
/// Increases with every submission; asynchronous results tagged with an
/// older token belong to a superseded session and are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionToken(u64);

impl SessionToken {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// URL from which the byte-serving endpoint returns a file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceLocator(String);

impl ResourceLocator {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One extracted archive: identity, tree, and the image index built from it.
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    token: SessionToken,
    tree: ArchiveTree,
    images: ImageIndex,
}

impl Session {
    /// Create a session and build its image index (once).
    pub fn new(id: SessionId, token: SessionToken, tree: ArchiveTree) -> Self {
        let images = ImageIndex::build(&tree, &id);
        Self {
            id,
            token,
            tree,
            images,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn token(&self) -> SessionToken {
        self.token
    }

    pub fn tree(&self) -> &ArchiveTree {
        &self.tree
    }

    pub fn images(&self) -> &ImageIndex {
        &self.images
    }

    /// Locator for any file of this session.
    pub fn locator(&self, path: &str) -> ResourceLocator {
        view_file_url(&self.id, path)
    }
}
