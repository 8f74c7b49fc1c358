//! Modal image carousel.
//!
//! A small state machine over the [`ImageIndex`]: `closed` or
//! `open(index)`. Every transition into `open` issues a [`CarouselLoad`]
//! ticket for the full-resolution image; a completion is applied only when
//! the ticket still describes what is on screen.

use crate::image_index::{ImageEntry, ImageIndex};
use crate::loader::LoadOutcome;
use crate::session::{ResourceLocator, SessionToken};

/// What the carousel currently shows for the open image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageDisplay {
    /// Full-resolution load in flight
    Loading,
    /// Loaded; show the resource
    Ready(ResourceLocator),
    /// Load failed; show the error placeholder, navigation still works
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum CarouselState {
    Closed,
    Open { index: usize, display: ImageDisplay },
}

/// Ticket for one full-resolution load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselLoad {
    pub session: SessionToken,
    pub generation: u64,
    pub index: usize,
    pub locator: ResourceLocator,
}

/// Carousel controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    state: CarouselState,
    /// Bumped on every transition; outstanding tickets with an older
    /// generation are stale.
    generation: u64,
}

impl Carousel {
    pub fn new() -> Self {
        Self {
            state: CarouselState::Closed,
            generation: 0,
        }
    }

    /// Open on the image at `path`. Unknown paths leave the carousel as is.
    pub fn open(
        &mut self,
        path: &str,
        images: &ImageIndex,
        session: SessionToken,
    ) -> Option<CarouselLoad> {
        let index = images.position(path)?;
        self.show(index, images, session)
    }

    /// Step forward; no-op on the last image or when closed.
    pub fn next(&mut self, images: &ImageIndex, session: SessionToken) -> Option<CarouselLoad> {
        let index = self.index()?;
        if index + 1 >= images.len() {
            return None;
        }
        self.show(index + 1, images, session)
    }

    /// Step back; no-op on the first image or when closed.
    pub fn prev(&mut self, images: &ImageIndex, session: SessionToken) -> Option<CarouselLoad> {
        let index = self.index()?;
        if index == 0 {
            return None;
        }
        self.show(index - 1, images, session)
    }

    /// Close from any state. Outstanding loads become stale.
    pub fn close(&mut self) {
        self.state = CarouselState::Closed;
        self.generation += 1;
    }

    /// Apply a finished load. Returns `false` when the ticket is stale.
    pub fn complete(&mut self, load: &CarouselLoad, outcome: LoadOutcome) -> bool {
        if load.generation != self.generation {
            return false;
        }
        match &mut self.state {
            CarouselState::Open { index, display } if *index == load.index => {
                *display = match outcome {
                    LoadOutcome::Loaded => ImageDisplay::Ready(load.locator.clone()),
                    LoadOutcome::Failed => ImageDisplay::Failed,
                };
                true
            }
            _ => false,
        }
    }

    fn show(
        &mut self,
        index: usize,
        images: &ImageIndex,
        session: SessionToken,
    ) -> Option<CarouselLoad> {
        let entry = images.get(index)?;
        self.generation += 1;
        self.state = CarouselState::Open {
            index,
            display: ImageDisplay::Loading,
        };
        Some(CarouselLoad {
            session,
            generation: self.generation,
            index,
            locator: entry.locator.clone(),
        })
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, CarouselState::Open { .. })
    }

    /// Current index when open.
    pub fn index(&self) -> Option<usize> {
        match self.state {
            CarouselState::Open { index, .. } => Some(index),
            CarouselState::Closed => None,
        }
    }

    pub fn display(&self) -> Option<&ImageDisplay> {
        match &self.state {
            CarouselState::Open { display, .. } => Some(display),
            CarouselState::Closed => None,
        }
    }

    /// Entry currently shown.
    pub fn current<'a>(&self, images: &'a ImageIndex) -> Option<&'a ImageEntry> {
        images.get(self.index()?)
    }

    pub fn can_prev(&self) -> bool {
        self.index().is_some_and(|i| i > 0)
    }

    pub fn can_next(&self, images: &ImageIndex) -> bool {
        self.index().is_some_and(|i| i + 1 < images.len())
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionId;
    use crate::tree::{ArchiveTree, Node};

    fn create_test_index() -> ImageIndex {
        let tree = ArchiveTree::new(Node::directory(
            "root",
            vec![
                Node::directory(
                    "a",
                    vec![Node::file("x.png", true), Node::file("y.txt", false)],
                ),
                Node::file("z.jpg", true),
            ],
        ));
        ImageIndex::build(&tree, &SessionId::new("s"))
    }

    fn token() -> SessionToken {
        SessionToken::default().next()
    }

    #[test]
    fn test_open_and_step() {
        let images = create_test_index();
        let mut carousel = Carousel::new();

        let load = carousel.open("a/x.png", &images, token()).unwrap();
        assert_eq!(load.index, 0);
        assert!(!carousel.can_prev());
        assert!(carousel.can_next(&images));

        let load = carousel.next(&images, token()).unwrap();
        assert_eq!(load.index, 1);
        assert_eq!(carousel.current(&images).unwrap().path, "z.jpg");
        assert!(carousel.can_prev());
        assert!(!carousel.can_next(&images));
    }

    #[test]
    fn test_boundaries_do_not_wrap() {
        let images = create_test_index();
        let mut carousel = Carousel::new();

        carousel.open("a/x.png", &images, token());
        let before = carousel.clone();
        assert!(carousel.prev(&images, token()).is_none());
        assert_eq!(carousel, before);

        carousel.open("z.jpg", &images, token());
        let before = carousel.clone();
        assert!(carousel.next(&images, token()).is_none());
        assert_eq!(carousel, before);
    }

    #[test]
    fn test_open_unknown_path_is_noop() {
        let images = create_test_index();
        let mut carousel = Carousel::new();
        assert!(carousel.open("a/y.txt", &images, token()).is_none());
        assert!(carousel.open("nope.png", &images, token()).is_none());
        assert!(!carousel.is_open());
    }

    #[test]
    fn test_step_when_closed_is_noop() {
        let images = create_test_index();
        let mut carousel = Carousel::new();
        assert!(carousel.next(&images, token()).is_none());
        assert!(carousel.prev(&images, token()).is_none());
    }

    #[test]
    fn test_superseded_load_is_dropped() {
        let images = create_test_index();
        let mut carousel = Carousel::new();

        let first = carousel.open("a/x.png", &images, token()).unwrap();
        let second = carousel.next(&images, token()).unwrap();

        assert!(!carousel.complete(&first, LoadOutcome::Loaded));
        assert_eq!(carousel.display(), Some(&ImageDisplay::Loading));

        assert!(carousel.complete(&second, LoadOutcome::Loaded));
        assert_eq!(
            carousel.display(),
            Some(&ImageDisplay::Ready(second.locator.clone()))
        );
    }

    #[test]
    fn test_close_then_reopen_drops_old_load() {
        let images = create_test_index();
        let mut carousel = Carousel::new();

        let before_close = carousel.open("z.jpg", &images, token()).unwrap();
        carousel.close();
        assert!(!carousel.complete(&before_close, LoadOutcome::Loaded));

        let reopened = carousel.open("z.jpg", &images, token()).unwrap();
        assert_eq!(reopened.index, before_close.index);
        assert!(!carousel.complete(&before_close, LoadOutcome::Loaded));
        assert_eq!(carousel.display(), Some(&ImageDisplay::Loading));
        assert!(carousel.complete(&reopened, LoadOutcome::Failed));
        assert_eq!(carousel.display(), Some(&ImageDisplay::Failed));
    }

    #[test]
    fn test_failure_keeps_navigation() {
        let images = create_test_index();
        let mut carousel = Carousel::new();

        let load = carousel.open("a/x.png", &images, token()).unwrap();
        carousel.complete(&load, LoadOutcome::Failed);
        assert!(carousel.next(&images, token()).is_some());
        assert_eq!(carousel.index(), Some(1));
    }
}
