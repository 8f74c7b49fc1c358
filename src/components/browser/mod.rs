//! Folder browser of the active session.
//!
//! - [`Browser`] - layout, listing tabs and stats
//! - [`TreeView`] - collapsible sidebar tree
//! - [`Breadcrumbs`] - path trail
//! - [`FileList`] - folders and files of the current page
//! - [`ImageGrid`] - lazy-loaded thumbnails of the current page
//! - [`Pagination`] - page controls

mod breadcrumbs;
#[allow(clippy::module_inception)]
mod browser;
mod file_list;
mod image_grid;
mod pagination;
mod tree_view;

pub use breadcrumbs::Breadcrumbs;
pub use browser::Browser;
pub use file_list::FileList;
pub use image_grid::ImageGrid;
pub use pagination::Pagination;
pub use tree_view::TreeView;
