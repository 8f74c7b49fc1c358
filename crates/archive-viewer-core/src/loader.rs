//! Image resource loading seam.
//!
//! The core never fetches anything itself. The host implements
//! [`ImageLoader`] (in the browser: an `HtmlImageElement` probe) and feeds
//! each [`LoadOutcome`] back to the state that issued the ticket.

use std::future::Future;

use crate::error::LoadError;
use crate::session::ResourceLocator;

/// Loads one image resource to completion.
pub trait ImageLoader {
    fn load(&self, locator: &ResourceLocator) -> impl Future<Output = Result<(), LoadError>>;
}

/// Result of an image load as seen by the state machines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

impl From<Result<(), LoadError>> for LoadOutcome {
    fn from(result: Result<(), LoadError>) -> Self {
        match result {
            Ok(()) => Self::Loaded,
            Err(_) => Self::Failed,
        }
    }
}

/// Run a load and collapse the result into an outcome.
pub async fn load_outcome<L: ImageLoader>(loader: &L, locator: &ResourceLocator) -> LoadOutcome {
    loader.load(locator).await.into()
}
