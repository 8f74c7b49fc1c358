//! State core for the archive viewer.
//!
//! Turns the tree description returned by the extraction backend into
//! everything the browser shell renders:
//!
//! - [`ArchiveTree`] and [`resolve`] - the immutable tree and path lookup
//! - [`Navigator`] and [`Paginator`] - current folder, breadcrumbs, pages
//! - [`ImageIndex`] and [`Carousel`] - archive-wide image carousel
//! - [`LazyLoader`] - one-shot, visibility-triggered thumbnail loads
//! - [`ViewerState`] - the session aggregate driven by [`Command`]s
//!
//! Nothing in this crate touches the browser. Asynchronous work is handed
//! to the host as [`Task`]s and comes back through the `complete_*`
//! methods on [`ViewerState`], which drop stale results.

pub mod api;
pub mod carousel;
pub mod config;
pub mod error;
pub mod image_index;
pub mod lazy_load;
pub mod loader;
pub mod navigator;
pub mod paginator;
pub mod path;
pub mod render;
pub mod resolver;
pub mod session;
pub mod theme;
pub mod tree;
pub mod viewer;

pub use api::{ProcessedArchive, interpret_response, view_file_url};
pub use carousel::{Carousel, CarouselLoad, ImageDisplay};
pub use error::{ApiError, LoadError};
pub use image_index::{ImageEntry, ImageIndex};
pub use lazy_load::{LazyLoader, ThumbnailLoad, ThumbnailState, VisibilityPort};
pub use loader::{ImageLoader, LoadOutcome};
pub use navigator::{Crumb, Navigator, Tab, TreeExpansion};
pub use paginator::{PageWindow, Paginator};
pub use render::{BrowserView, CarouselView, ItemView, RenderModel, Status};
pub use resolver::{Listing, find_directory, resolve};
pub use session::{ResourceLocator, Session, SessionId, SessionToken};
pub use theme::Theme;
pub use tree::{ArchiveTree, FileKind, Node, NodeKind};
pub use viewer::{Command, Dispatch, SubmissionTicket, Task, ViewerOptions, ViewerState};
