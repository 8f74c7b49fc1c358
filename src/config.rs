//! Application configuration.
//!
//! Shell-only constants. Values shared with the state core (page size,
//! endpoints, storage key, placeholders) live in
//! `archive_viewer_core::config`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "Archive Viewer";

/// Short description shown under the name.
pub const APP_TAGLINE: &str = "Browse the contents of a remote archive";

// =============================================================================
// Network Configuration
// =============================================================================

/// Full-size and thumbnail image load timeout in milliseconds.
pub const IMAGE_LOAD_TIMEOUT_MS: i32 = 30000;

// =============================================================================
// Display
// =============================================================================

/// Media query for the platform's ambient color scheme.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class set on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

