//! UI components built with Leptos.
//!
//! - [`Header`] - title bar and theme toggle
//! - [`ArchiveForm`] - URL submission with status
//! - [`Browser`] - folder tree, breadcrumbs, listing tabs and pagination
//! - [`Carousel`] - archive-wide image modal
//! - [`icons`] - centralized icon definitions (change theme here)

pub mod archive_form;
pub mod browser;
pub mod carousel;
pub mod header;
pub mod icons;

pub use archive_form::ArchiveForm;
pub use browser::Browser;
pub use carousel::Carousel;
pub use header::Header;
