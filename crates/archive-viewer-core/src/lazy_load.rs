//! One-shot deferred thumbnail loading.
//!
//! Thumbnails start as placeholders. The host's [`VisibilityPort`] reports
//! when one nears the viewport, which moves it to `Loading` exactly once;
//! the finished load moves it to `Loaded` or `Errored` and it stays there.

use std::collections::HashMap;

use crate::loader::LoadOutcome;
use crate::session::{ResourceLocator, SessionToken};

/// Lifecycle of one thumbnail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThumbnailState {
    Placeholder,
    Loading,
    Loaded,
    Errored,
}

impl ThumbnailState {
    /// Loaded or errored; never changes again.
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Loaded | Self::Errored)
    }
}

/// Ticket for one thumbnail load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThumbnailLoad {
    pub session: SessionToken,
    pub path: String,
    pub locator: ResourceLocator,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Thumbnail {
    locator: ResourceLocator,
    state: ThumbnailState,
}

/// Thumbnail states of one session, keyed by image path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyLoader {
    session: SessionToken,
    thumbnails: HashMap<String, Thumbnail>,
}

impl LazyLoader {
    pub fn new(session: SessionToken) -> Self {
        Self {
            session,
            thumbnails: HashMap::new(),
        }
    }

    /// Track a thumbnail. Re-registering keeps the existing state.
    ///
    /// Returns `true` only the first time, when the host should arm it.
    pub fn register(&mut self, path: &str, locator: ResourceLocator) -> bool {
        if self.thumbnails.contains_key(path) {
            return false;
        }
        self.thumbnails.insert(
            path.to_string(),
            Thumbnail {
                locator,
                state: ThumbnailState::Placeholder,
            },
        );
        true
    }

    /// Visibility notification. Only the first one for a placeholder
    /// starts a load; later ones are ignored.
    pub fn notify_visible(&mut self, path: &str) -> Option<ThumbnailLoad> {
        let thumbnail = self.thumbnails.get_mut(path)?;
        if thumbnail.state != ThumbnailState::Placeholder {
            return None;
        }
        thumbnail.state = ThumbnailState::Loading;
        Some(ThumbnailLoad {
            session: self.session,
            path: path.to_string(),
            locator: thumbnail.locator.clone(),
        })
    }

    /// Apply a finished load. Returns `false` for stale or repeated results.
    pub fn complete(&mut self, load: &ThumbnailLoad, outcome: LoadOutcome) -> bool {
        if load.session != self.session {
            return false;
        }
        match self.thumbnails.get_mut(&load.path) {
            Some(thumbnail) if thumbnail.state == ThumbnailState::Loading => {
                thumbnail.state = match outcome {
                    LoadOutcome::Loaded => ThumbnailState::Loaded,
                    LoadOutcome::Failed => ThumbnailState::Errored,
                };
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, path: &str) -> Option<ThumbnailState> {
        self.thumbnails.get(path).map(|t| t.state)
    }

    pub fn is_loaded(&self, path: &str) -> bool {
        self.state(path) == Some(ThumbnailState::Loaded)
    }

    pub fn session(&self) -> SessionToken {
        self.session
    }
}

/// Host visibility detection.
///
/// `register` calls `on_visible` at most once, when the handle comes within
/// the fixed margin of the viewport.
pub trait VisibilityPort {
    type Handle;

    /// Whether the host can detect visibility at all.
    fn is_available(&self) -> bool;

    fn register(
        &self,
        handle: Self::Handle,
        locator: &ResourceLocator,
        on_visible: Box<dyn FnOnce()>,
    );
}

/// Arm a handle, or fire `on_visible` immediately when the port is
/// unavailable (eager loading).
pub fn arm<P: VisibilityPort>(
    port: &P,
    handle: P::Handle,
    locator: &ResourceLocator,
    on_visible: Box<dyn FnOnce()>,
) {
    if port.is_available() {
        port.register(handle, locator, on_visible);
    } else {
        on_visible();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Pending = Vec<(String, Box<dyn FnOnce()>)>;

    /// Collects registrations; `fire_all` makes every handle visible.
    struct MockPort {
        available: bool,
        pending: RefCell<Pending>,
    }

    impl MockPort {
        fn new(available: bool) -> Self {
            Self {
                available,
                pending: RefCell::new(Vec::new()),
            }
        }

        fn fire_all(&self) {
            let pending: Pending = self.pending.borrow_mut().drain(..).collect();
            for (_, on_visible) in pending {
                on_visible();
            }
        }
    }

    impl VisibilityPort for MockPort {
        type Handle = String;

        fn is_available(&self) -> bool {
            self.available
        }

        fn register(&self, handle: String, _: &ResourceLocator, on_visible: Box<dyn FnOnce()>) {
            self.pending.borrow_mut().push((handle, on_visible));
        }
    }

    fn locator(path: &str) -> ResourceLocator {
        ResourceLocator::new(format!("/view-file/s/{}", path))
    }

    fn token() -> SessionToken {
        SessionToken::default().next()
    }

    /// Registers `path` and arms it through `port`; visible loads are
    /// collected into `loads`.
    fn arm_thumbnail(
        port: &MockPort,
        lazy: &Rc<RefCell<LazyLoader>>,
        loads: &Rc<RefCell<Vec<ThumbnailLoad>>>,
        path: &str,
    ) {
        lazy.borrow_mut().register(path, locator(path));
        let (lazy, loads, key) = (lazy.clone(), loads.clone(), path.to_string());
        arm(
            port,
            path.to_string(),
            &locator(path),
            Box::new(move || {
                if let Some(load) = lazy.borrow_mut().notify_visible(&key) {
                    loads.borrow_mut().push(load);
                }
            }),
        );
    }

    #[test]
    fn test_one_shot_visibility() {
        let mut lazy = LazyLoader::new(token());
        lazy.register("a.png", locator("a.png"));
        assert_eq!(lazy.state("a.png"), Some(ThumbnailState::Placeholder));

        let load = lazy.notify_visible("a.png").unwrap();
        assert_eq!(lazy.state("a.png"), Some(ThumbnailState::Loading));
        assert!(lazy.notify_visible("a.png").is_none());

        assert!(lazy.complete(&load, LoadOutcome::Loaded));
        assert!(lazy.notify_visible("a.png").is_none());
        assert!(!lazy.complete(&load, LoadOutcome::Failed));
        assert!(lazy.is_loaded("a.png"));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut lazy = LazyLoader::new(token());
        assert!(lazy.register("a.png", locator("a.png")));
        let load = lazy.notify_visible("a.png").unwrap();
        lazy.complete(&load, LoadOutcome::Failed);

        assert!(!lazy.register("a.png", locator("a.png")));
        assert_eq!(lazy.state("a.png"), Some(ThumbnailState::Errored));
    }

    #[test]
    fn test_unknown_handle() {
        let mut lazy = LazyLoader::new(token());
        assert!(lazy.notify_visible("ghost.png").is_none());
        assert_eq!(lazy.state("ghost.png"), None);
    }

    #[test]
    fn test_stale_session_completion_dropped() {
        let mut lazy = LazyLoader::new(token());
        lazy.register("a.png", locator("a.png"));
        let mut load = lazy.notify_visible("a.png").unwrap();
        load.session = SessionToken::default();
        assert!(!lazy.complete(&load, LoadOutcome::Loaded));
        assert_eq!(lazy.state("a.png"), Some(ThumbnailState::Loading));
    }

    #[test]
    fn test_port_firing_twice_loads_once() {
        let port = MockPort::new(true);
        let lazy = Rc::new(RefCell::new(LazyLoader::new(token())));
        let loads = Rc::new(RefCell::new(Vec::new()));

        // A page re-render arms the same thumbnail again.
        arm_thumbnail(&port, &lazy, &loads, "a.png");
        arm_thumbnail(&port, &lazy, &loads, "a.png");
        assert!(loads.borrow().is_empty());

        port.fire_all();
        assert_eq!(loads.borrow().len(), 1);

        let load = loads.borrow()[0].clone();
        assert!(lazy.borrow_mut().complete(&load, LoadOutcome::Loaded));
        assert!(!lazy.borrow_mut().complete(&load, LoadOutcome::Failed));
        assert_eq!(lazy.borrow().state("a.png"), Some(ThumbnailState::Loaded));
    }

    #[test]
    fn test_unavailable_port_loads_eagerly() {
        let port = MockPort::new(false);
        let lazy = Rc::new(RefCell::new(LazyLoader::new(token())));
        let loads = Rc::new(RefCell::new(Vec::new()));

        arm_thumbnail(&port, &lazy, &loads, "a.png");
        arm_thumbnail(&port, &lazy, &loads, "b.png");

        assert!(port.pending.borrow().is_empty());
        let paths: Vec<_> = loads.borrow().iter().map(|l| l.path.clone()).collect();
        assert_eq!(paths, vec!["a.png", "b.png"]);
    }
}
