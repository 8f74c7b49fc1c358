//! Core configuration constants.
//!
//! Values shared by the state core and the browser shell. Anything that
//! only the shell needs lives in the shell's own `config.rs`.

// =============================================================================
// Pagination
// =============================================================================

/// Number of items shown per page in the folder listing.
pub const PAGE_SIZE: usize = 20;

// =============================================================================
// Lazy Loading
// =============================================================================

/// Visibility-detection margin: thumbnails start loading 200px before
/// they scroll into view.
pub const VISIBILITY_ROOT_MARGIN: &str = "0px 0px 200px 0px";

/// Fraction of a thumbnail that must intersect the viewport (plus margin).
pub const VISIBILITY_THRESHOLD: f64 = 0.01;

/// Transparent 1x1 GIF shown until a thumbnail is loaded.
pub const LAZY_PLACEHOLDER: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAP///wAAACH5BAEAAAAALAAAAAABAAEAAAICRAEAOw==";

/// Inline error placeholder shown when an image fails to load.
pub const ERROR_PLACEHOLDER: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='400' height='300'%3E%3Crect width='100%25' height='100%25' fill='%23fecaca'/%3E%3Ctext x='50%25' y='50%25' fill='%23991b1b' font-family='sans-serif' font-size='24' text-anchor='middle' dominant-baseline='middle'%3EImage Error%3C/text%3E%3C/svg%3E";

// =============================================================================
// Backend Endpoints
// =============================================================================

/// Archive submission endpoint.
pub const PROCESS_ARCHIVE_ENDPOINT: &str = "/process-archive";

/// File byte-serving endpoint prefix (`/view-file/{session}/{path}`).
pub const VIEW_FILE_ENDPOINT: &str = "/view-file";

// =============================================================================
// Preferences
// =============================================================================

/// localStorage key for the display theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Label of the first breadcrumb entry.
pub const ROOT_LABEL: &str = "Root";

/// Error shown when the archive form is submitted empty.
pub const EMPTY_URL_MESSAGE: &str = "Please enter an archive URL.";
