//! Theme persistence in localStorage.

use archive_viewer_core::Theme;
use archive_viewer_core::config::THEME_STORAGE_KEY;
use thiserror::Error;

use super::dom;

/// Preference storage errors.
#[derive(Debug, Clone, Error)]
pub enum PreferenceError {
    #[error("localStorage not available")]
    StorageUnavailable,
    #[error("failed to save preference")]
    SaveFailed,
}

/// Raw stored theme value, if any.
pub fn load_theme() -> Option<String> {
    let storage = dom::local_storage()?;
    storage.get_item(THEME_STORAGE_KEY).ok()?
}

/// Persist the theme chosen by the user.
pub fn store_theme(theme: Theme) -> Result<(), PreferenceError> {
    let storage = dom::local_storage().ok_or(PreferenceError::StorageUnavailable)?;
    storage
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|_| PreferenceError::SaveFailed)
}
