//! Network utilities.
//!
//! - [`process_archive`] - `POST /process-archive` through gloo-net
//! - [`BrowserImageLoader`] - image loads probed with `HtmlImageElement`,
//!   raced against a timeout

use archive_viewer_core::api::ProcessArchiveRequest;
use archive_viewer_core::config::PROCESS_ARCHIVE_ENDPOINT;
use archive_viewer_core::{
    ApiError, ImageLoader, LoadError, ProcessedArchive, ResourceLocator, interpret_response,
};
use gloo_net::http::Request;
use js_sys::{Array, Promise};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::config::IMAGE_LOAD_TIMEOUT_MS;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// The timeout promise resolves to `undefined`, so `promise` must resolve
/// to something else for completion to be told apart from a timeout.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Archive Submission
// =============================================================================

/// Submit an archive URL for extraction.
///
/// No timeout: extracting a large archive legitimately takes a while.
pub async fn process_archive(archive_url: &str) -> Result<ProcessedArchive, ApiError> {
    let response = Request::post(PROCESS_ARCHIVE_ENDPOINT)
        .json(&ProcessArchiveRequest { archive_url })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    interpret_response(status, &status_text, &body)
}

// =============================================================================
// Image Loading
// =============================================================================

/// Loads images through an off-screen `HtmlImageElement`.
///
/// The browser caches the bytes, so the `<img>` that later displays the
/// same locator renders immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserImageLoader;

impl ImageLoader for BrowserImageLoader {
    async fn load(&self, locator: &ResourceLocator) -> Result<(), LoadError> {
        let image = HtmlImageElement::new().map_err(|_| LoadError::Unavailable)?;

        // onload resolves with the load event, never `undefined`
        let probe = Promise::new(&mut |resolve, reject| {
            image.set_onload(Some(&resolve));
            image.set_onerror(Some(&reject));
        });
        image.set_src(locator.as_str());

        let result = match race_with_timeout(probe, IMAGE_LOAD_TIMEOUT_MS).await {
            RaceResult::Completed(_) => Ok(()),
            RaceResult::TimedOut => Err(LoadError::Timeout),
            RaceResult::Error(msg) => Err(LoadError::Failed(msg)),
        };

        image.set_onload(None);
        image.set_onerror(None);
        result
    }
}
