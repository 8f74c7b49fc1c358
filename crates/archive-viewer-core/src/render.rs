//! Render model.
//!
//! A plain snapshot of everything the shell draws, derived from
//! [`ViewerState`](crate::viewer::ViewerState) after every command.

use std::sync::Arc;

use crate::carousel::ImageDisplay;
use crate::lazy_load::ThumbnailState;
use crate::navigator::{Crumb, Tab};
use crate::paginator::PageWindow;
use crate::session::{ResourceLocator, SessionId};
use crate::theme::Theme;
use crate::tree::{FileKind, Node};

/// Submission status shown above the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// Whole-screen snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderModel {
    pub theme: Theme,
    pub status: Status,
    /// Present while a session is active
    pub browser: Option<BrowserView>,
    /// Present while the carousel is open
    pub carousel: Option<CarouselView>,
}

/// The folder browser of the active session.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserView {
    pub session_id: SessionId,
    /// Root of the sidebar tree, shared with the session; expansion is
    /// carried separately
    pub root: Arc<Node>,
    pub expanded: Vec<String>,
    pub current_path: String,
    pub breadcrumbs: Vec<Crumb>,
    pub tab: Tab,
    pub page: PageWindow,
    /// Items of the current page, folders first
    pub items: Vec<ItemView>,
    pub images_on_page: usize,
    pub images_in_folder: usize,
}

impl BrowserView {
    /// Image items of the current page (the "images only" tab).
    pub fn images(&self) -> impl Iterator<Item = &ItemView> {
        self.items.iter().filter(|i| i.is_image)
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.iter().any(|p| p == path)
    }
}

/// One row of the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    pub is_image: bool,
    /// `None` for folders
    pub file_kind: Option<FileKind>,
    /// Download / view location; `None` for folders
    pub locator: Option<ResourceLocator>,
    /// Lazy-load state; `None` for non-images
    pub thumbnail: Option<ThumbnailState>,
}

impl ItemView {
    /// A thumbnail opens the carousel only after its own load succeeded.
    pub fn thumbnail_ready(&self) -> bool {
        self.thumbnail == Some(ThumbnailState::Loaded)
    }
}

/// The open carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselView {
    pub name: String,
    pub path: String,
    /// 1-based
    pub position: usize,
    pub total: usize,
    pub can_prev: bool,
    pub can_next: bool,
    pub display: ImageDisplay,
}
