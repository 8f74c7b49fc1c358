//! Browser-side utilities.
//!
//! - [`dom`] - window, storage and root-element access
//! - [`console`] - leveled logging to the browser console
//! - [`fetch`] - archive submission and image probing
//! - [`preferences`] - theme persistence
//! - [`visibility`] - `IntersectionObserver` visibility port

pub mod console;
pub mod dom;
pub mod fetch;
pub mod preferences;
pub mod visibility;

pub use fetch::{BrowserImageLoader, process_archive};
pub use visibility::IntersectionPort;
