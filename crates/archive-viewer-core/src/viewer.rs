//! Session aggregate and command dispatcher.
//!
//! [`ViewerState`] owns the theme, the submission status and at most one
//! active session (tree, navigator, carousel, thumbnails). The host sends
//! [`Command`]s, draws the returned [`RenderModel`] and runs the returned
//! [`Task`]s, feeding their results back through the `complete_*` methods.

use crate::api::ProcessedArchive;
use crate::carousel::{Carousel, CarouselLoad};
use crate::config::{EMPTY_URL_MESSAGE, PAGE_SIZE};
use crate::error::ApiError;
use crate::lazy_load::{LazyLoader, ThumbnailLoad};
use crate::loader::LoadOutcome;
use crate::navigator::{Navigator, Tab};
use crate::paginator::Paginator;
use crate::path::join_path;
use crate::render::{BrowserView, CarouselView, ItemView, RenderModel, Status};
use crate::session::{Session, SessionToken};
use crate::theme::Theme;

// =============================================================================
// Commands & Tasks
// =============================================================================

/// User intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Navigate(String),
    SetPage(usize),
    SelectTab(Tab),
    ToggleFolder(String),
    OpenCarousel(String),
    NextImage,
    PrevImage,
    CloseCarousel,
    ThumbnailVisible(String),
    ToggleTheme,
    /// The platform color scheme changed (`true` for dark).
    SystemThemeChanged(bool),
}

/// Side effect the host must run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Task {
    LoadFullImage(CarouselLoad),
    LoadThumbnail(ThumbnailLoad),
    PersistTheme(Theme),
}

/// Outcome of one command.
#[derive(Clone, Debug, PartialEq)]
pub struct Dispatch {
    pub render: RenderModel,
    pub tasks: Vec<Task>,
}

/// An archive submission in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub token: SessionToken,
    /// Trimmed archive URL to post
    pub url: String,
}

// =============================================================================
// Viewer State
// =============================================================================

/// Construction options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerOptions {
    /// Items per page; zero falls back to the default
    pub page_size: usize,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
        }
    }
}

#[derive(Clone, Debug)]
struct ActiveSession {
    session: Session,
    navigator: Navigator,
    carousel: Carousel,
    lazy: LazyLoader,
}

impl ActiveSession {
    fn new(session: Session) -> Self {
        let mut navigator = Navigator::new();
        navigator.navigate("", session.tree());
        let lazy = LazyLoader::new(session.token());
        Self {
            session,
            navigator,
            carousel: Carousel::new(),
            lazy,
        }
    }

    /// Track every image on the visible page with the lazy loader.
    fn register_page(&mut self, paginator: &Paginator) {
        let tree = self.session.tree();
        let listing = self.navigator.listing(tree);
        let window = paginator.window(self.navigator.current_page(), listing.len());
        let parent = self.navigator.current_path();
        for node in window.slice(&listing.items()) {
            if node.is_image_file() {
                let path = join_path(parent, &node.name);
                let locator = self.session.locator(&path);
                self.lazy.register(&path, locator);
            }
        }
    }
}

/// Whole client state.
#[derive(Clone, Debug)]
pub struct ViewerState {
    paginator: Paginator,
    theme: Theme,
    /// Set once the theme comes from storage or a toggle; the platform
    /// scheme is followed until then.
    theme_pinned: bool,
    status: Status,
    token: SessionToken,
    active: Option<ActiveSession>,
}

impl ViewerState {
    pub fn new(options: ViewerOptions, theme: Theme) -> Self {
        Self {
            paginator: Paginator::new(options.page_size),
            theme,
            theme_pinned: false,
            status: Status::Idle,
            token: SessionToken::default(),
            active: None,
        }
    }

    /// Start from the stored theme preference, or follow the platform
    /// color scheme when nothing valid is stored.
    pub fn with_preferences(
        options: ViewerOptions,
        stored: Option<&str>,
        prefers_dark: bool,
    ) -> Self {
        let mut viewer = Self::new(options, Theme::initial(stored, prefers_dark));
        viewer.theme_pinned = stored.and_then(Theme::parse).is_some();
        viewer
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn session(&self) -> Option<&Session> {
        self.active.as_ref().map(|a| &a.session)
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Start an archive submission.
    ///
    /// An empty URL only records the error. Otherwise the previous session
    /// is dropped and a ticket with a fresh token is returned.
    pub fn begin_submission(&mut self, url: &str) -> Option<SubmissionTicket> {
        let url = url.trim();
        if url.is_empty() {
            self.status = Status::Error(EMPTY_URL_MESSAGE.to_string());
            return None;
        }

        self.token = self.token.next();
        self.active = None;
        self.status = Status::Loading;
        Some(SubmissionTicket {
            token: self.token,
            url: url.to_string(),
        })
    }

    /// Apply a submission result. Returns `false` if a newer submission
    /// has superseded `ticket`.
    pub fn complete_submission(
        &mut self,
        ticket: &SubmissionTicket,
        result: Result<ProcessedArchive, ApiError>,
    ) -> bool {
        if ticket.token != self.token {
            return false;
        }

        match result {
            Ok(archive) => {
                let session = Session::new(archive.session_id, ticket.token, archive.tree);
                let mut active = ActiveSession::new(session);
                active.register_page(&self.paginator);
                self.active = Some(active);
                self.status = Status::Idle;
            }
            Err(e) => {
                self.active = None;
                self.status = Status::Error(e.to_string());
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Apply a command and return the new render model with its tasks.
    pub fn dispatch(&mut self, command: Command) -> Dispatch {
        let tasks = self.apply(command);
        Dispatch {
            render: self.render(),
            tasks,
        }
    }

    fn apply(&mut self, command: Command) -> Vec<Task> {
        match command {
            Command::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.theme_pinned = true;
                return vec![Task::PersistTheme(self.theme)];
            }
            Command::SystemThemeChanged(prefers_dark) => {
                if !self.theme_pinned {
                    self.theme = Theme::ambient(prefers_dark);
                }
                return Vec::new();
            }
            _ => {}
        }

        let paginator = self.paginator;
        let Some(active) = self.active.as_mut() else {
            return Vec::new();
        };
        let token = active.session.token();
        let mut tasks = Vec::new();

        match command {
            Command::Navigate(path) => {
                active.navigator.navigate(&path, active.session.tree());
                active.register_page(&paginator);
            }
            Command::SetPage(page) => {
                active
                    .navigator
                    .set_page(page, active.session.tree(), &paginator);
                active.register_page(&paginator);
            }
            Command::SelectTab(tab) => active.navigator.select_tab(tab),
            Command::ToggleFolder(path) => active.navigator.toggle_folder(&path),
            Command::OpenCarousel(path) => {
                let images = active.session.images();
                tasks.extend(
                    active
                        .carousel
                        .open(&path, images, token)
                        .map(Task::LoadFullImage),
                );
            }
            Command::NextImage => {
                let images = active.session.images();
                tasks.extend(active.carousel.next(images, token).map(Task::LoadFullImage));
            }
            Command::PrevImage => {
                let images = active.session.images();
                tasks.extend(active.carousel.prev(images, token).map(Task::LoadFullImage));
            }
            Command::CloseCarousel => active.carousel.close(),
            Command::ThumbnailVisible(path) => {
                tasks.extend(active.lazy.notify_visible(&path).map(Task::LoadThumbnail));
            }
            Command::ToggleTheme | Command::SystemThemeChanged(_) => {}
        }
        tasks
    }

    /// Apply a full-image load result; stale results return `false`.
    pub fn complete_carousel_load(&mut self, load: &CarouselLoad, outcome: LoadOutcome) -> bool {
        match self.active.as_mut() {
            Some(active) if active.session.token() == load.session => {
                active.carousel.complete(load, outcome)
            }
            _ => false,
        }
    }

    /// Apply a thumbnail load result; stale results return `false`.
    pub fn complete_thumbnail_load(&mut self, load: &ThumbnailLoad, outcome: LoadOutcome) -> bool {
        match self.active.as_mut() {
            Some(active) if active.session.token() == load.session => {
                active.lazy.complete(load, outcome)
            }
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    /// Snapshot the current state.
    pub fn render(&self) -> RenderModel {
        RenderModel {
            theme: self.theme,
            status: self.status.clone(),
            browser: self.active.as_ref().map(|a| self.browser_view(a)),
            carousel: self.active.as_ref().and_then(carousel_view),
        }
    }

    fn browser_view(&self, active: &ActiveSession) -> BrowserView {
        let session = &active.session;
        let navigator = &active.navigator;
        let parent = navigator.current_path();

        let listing = navigator.listing(session.tree());
        let page = self.paginator.window(navigator.current_page(), listing.len());
        let items: Vec<ItemView> = page
            .slice(&listing.items())
            .iter()
            .map(|node| {
                let path = join_path(parent, &node.name);
                let is_dir = node.is_directory();
                let is_image = node.is_image_file();
                ItemView {
                    name: node.name.clone(),
                    is_dir,
                    is_image,
                    file_kind: node.file_kind(),
                    locator: (!is_dir).then(|| session.locator(&path)),
                    thumbnail: if is_image { active.lazy.state(&path) } else { None },
                    path,
                }
            })
            .collect();

        BrowserView {
            session_id: session.id().clone(),
            root: session.tree().shared_root(),
            expanded: navigator.expansion().iter().map(str::to_string).collect(),
            current_path: parent.to_string(),
            breadcrumbs: navigator.breadcrumbs().to_vec(),
            tab: navigator.tab(),
            page,
            images_on_page: items.iter().filter(|i| i.is_image).count(),
            images_in_folder: listing.files.iter().filter(|f| f.is_image_file()).count(),
            items,
        }
    }
}

fn carousel_view(active: &ActiveSession) -> Option<CarouselView> {
    let images = active.session.images();
    let carousel = &active.carousel;
    let index = carousel.index()?;
    let entry = images.get(index)?;
    Some(CarouselView {
        name: entry.name.clone(),
        path: entry.path.clone(),
        position: index + 1,
        total: images.len(),
        can_prev: carousel.can_prev(),
        can_next: carousel.can_next(images),
        display: carousel.display()?.clone(),
    })
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(ViewerOptions::default(), Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::ImageDisplay;
    use crate::lazy_load::ThumbnailState;
    use crate::session::SessionId;
    use crate::tree::{ArchiveTree, Node};

    fn create_test_archive(id: &str) -> ProcessedArchive {
        ProcessedArchive {
            session_id: SessionId::new(id),
            tree: ArchiveTree::new(Node::directory(
                "root",
                vec![
                    Node::directory(
                        "a",
                        vec![Node::file("x.png", true), Node::file("y.txt", false)],
                    ),
                    Node::file("z.jpg", true),
                ],
            )),
        }
    }

    fn loaded_viewer() -> ViewerState {
        let mut viewer = ViewerState::default();
        let ticket = viewer.begin_submission(" https://example.com/a.zip ").unwrap();
        assert_eq!(ticket.url, "https://example.com/a.zip");
        assert!(viewer.complete_submission(&ticket, Ok(create_test_archive("1"))));
        viewer
    }

    fn load_tasks(tasks: &[Task]) -> Vec<CarouselLoad> {
        tasks
            .iter()
            .filter_map(|t| match t {
                Task::LoadFullImage(load) => Some(load.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let mut viewer = ViewerState::default();
        assert!(viewer.begin_submission("   ").is_none());
        assert_eq!(
            viewer.status(),
            &Status::Error(EMPTY_URL_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_submission_opens_root() {
        let viewer = loaded_viewer();
        let render = viewer.render();
        assert_eq!(render.status, Status::Idle);
        let browser = render.browser.unwrap();
        assert_eq!(browser.current_path, "");
        let names: Vec<_> = browser.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "z.jpg"]);
        assert_eq!(browser.items[1].thumbnail, Some(ThumbnailState::Placeholder));
        assert_eq!(browser.images_in_folder, 1);
    }

    #[test]
    fn test_submission_loading_clears_previous_session() {
        let mut viewer = loaded_viewer();
        viewer.begin_submission("https://example.com/b.zip").unwrap();
        let render = viewer.render();
        assert_eq!(render.status, Status::Loading);
        assert!(render.browser.is_none());
    }

    #[test]
    fn test_failure_clears_state() {
        let mut viewer = loaded_viewer();
        let ticket = viewer.begin_submission("https://example.com/bad.zip").unwrap();
        viewer.complete_submission(&ticket, Err(ApiError::Server("bad archive".to_string())));
        let render = viewer.render();
        assert_eq!(render.status, Status::Error("bad archive".to_string()));
        assert!(render.browser.is_none());
        assert!(render.carousel.is_none());
    }

    #[test]
    fn test_superseded_submission_is_ignored() {
        let mut viewer = ViewerState::default();
        let old = viewer.begin_submission("https://example.com/old.zip").unwrap();
        let new = viewer.begin_submission("https://example.com/new.zip").unwrap();

        assert!(!viewer.complete_submission(&old, Ok(create_test_archive("old"))));
        assert_eq!(viewer.status(), &Status::Loading);

        assert!(viewer.complete_submission(&new, Ok(create_test_archive("new"))));
        assert_eq!(viewer.session().unwrap().id().as_str(), "new");
    }

    #[test]
    fn test_commands_without_session_are_noops() {
        let mut viewer = ViewerState::default();
        for command in [
            Command::Navigate("a".to_string()),
            Command::OpenCarousel("z.jpg".to_string()),
            Command::NextImage,
            Command::ThumbnailVisible("z.jpg".to_string()),
        ] {
            let dispatch = viewer.dispatch(command);
            assert!(dispatch.tasks.is_empty());
            assert!(dispatch.render.browser.is_none());
        }
    }

    #[test]
    fn test_toggle_theme_persists() {
        let mut viewer = ViewerState::new(ViewerOptions::default(), Theme::Dark);
        let dispatch = viewer.dispatch(Command::ToggleTheme);
        assert_eq!(dispatch.render.theme, Theme::Light);
        assert_eq!(dispatch.tasks, vec![Task::PersistTheme(Theme::Light)]);
    }

    #[test]
    fn test_follows_system_scheme_until_pinned() {
        let mut viewer = ViewerState::with_preferences(ViewerOptions::default(), None, false);
        assert_eq!(viewer.theme(), Theme::Light);

        // The platform scheme may only become known after startup.
        let dispatch = viewer.dispatch(Command::SystemThemeChanged(true));
        assert_eq!(dispatch.render.theme, Theme::Dark);
        assert!(dispatch.tasks.is_empty());

        viewer.dispatch(Command::ToggleTheme);
        viewer.dispatch(Command::SystemThemeChanged(true));
        assert_eq!(viewer.theme(), Theme::Light);
    }

    #[test]
    fn test_stored_theme_ignores_system_scheme() {
        let mut viewer =
            ViewerState::with_preferences(ViewerOptions::default(), Some("light"), true);
        assert_eq!(viewer.theme(), Theme::Light);
        viewer.dispatch(Command::SystemThemeChanged(true));
        assert_eq!(viewer.theme(), Theme::Light);

        let mut garbage =
            ViewerState::with_preferences(ViewerOptions::default(), Some("sepia"), true);
        assert_eq!(garbage.theme(), Theme::Dark);
        garbage.dispatch(Command::SystemThemeChanged(false));
        assert_eq!(garbage.theme(), Theme::Light);
    }

    #[test]
    fn test_render_shares_session_tree() {
        let mut viewer = loaded_viewer();
        let first = viewer.render().browser.unwrap();
        let second = viewer
            .dispatch(Command::ThumbnailVisible("z.jpg".to_string()))
            .render
            .browser
            .unwrap();
        let session_root = viewer.session().unwrap().tree().shared_root();
        assert!(std::sync::Arc::ptr_eq(&first.root, &session_root));
        assert!(std::sync::Arc::ptr_eq(&first.root, &second.root));
    }

    #[test]
    fn test_select_tab_keeps_path() {
        let mut viewer = loaded_viewer();
        viewer.dispatch(Command::Navigate("a".to_string()));
        let browser = viewer
            .dispatch(Command::SelectTab(Tab::ImagesOnly))
            .render
            .browser
            .unwrap();
        assert_eq!(browser.tab, Tab::ImagesOnly);
        assert_eq!(browser.current_path, "a");
        assert_eq!(browser.images().count(), 1);

        let browser = viewer
            .dispatch(Command::Navigate("a".to_string()))
            .render
            .browser
            .unwrap();
        assert_eq!(browser.tab, Tab::AllFiles);
    }

    #[test]
    fn test_thumbnail_visible_once() {
        let mut viewer = loaded_viewer();
        let first = viewer.dispatch(Command::ThumbnailVisible("z.jpg".to_string()));
        assert_eq!(first.tasks.len(), 1);
        let second = viewer.dispatch(Command::ThumbnailVisible("z.jpg".to_string()));
        assert!(second.tasks.is_empty());

        let Task::LoadThumbnail(load) = &first.tasks[0] else {
            panic!("expected a thumbnail load");
        };
        assert_eq!(load.locator.as_str(), "/view-file/1/z.jpg");
        assert!(viewer.complete_thumbnail_load(load, LoadOutcome::Loaded));
        let browser = viewer.render().browser.unwrap();
        assert!(browser.items[1].thumbnail_ready());
    }

    #[test]
    fn test_carousel_flow() {
        let mut viewer = loaded_viewer();
        let dispatch = viewer.dispatch(Command::OpenCarousel("a/x.png".to_string()));
        let loads = load_tasks(&dispatch.tasks);
        assert_eq!(loads.len(), 1);
        let view = dispatch.render.carousel.unwrap();
        assert_eq!((view.position, view.total), (1, 2));
        assert!(!view.can_prev && view.can_next);
        assert_eq!(view.display, ImageDisplay::Loading);

        assert!(viewer.complete_carousel_load(&loads[0], LoadOutcome::Loaded));
        let view = viewer.render().carousel.unwrap();
        assert_eq!(view.display, ImageDisplay::Ready(loads[0].locator.clone()));

        let view = viewer.dispatch(Command::NextImage).render.carousel.unwrap();
        assert_eq!(view.path, "z.jpg");
        assert!(view.can_prev && !view.can_next);

        assert!(viewer.dispatch(Command::CloseCarousel).render.carousel.is_none());
    }

    #[test]
    fn test_old_session_loads_dropped() {
        let mut viewer = loaded_viewer();
        let opened = viewer.dispatch(Command::OpenCarousel("z.jpg".to_string()));
        let carousel_load = load_tasks(&opened.tasks)[0].clone();
        let Task::LoadThumbnail(thumb_load) = viewer
            .dispatch(Command::ThumbnailVisible("z.jpg".to_string()))
            .tasks[0]
            .clone()
        else {
            panic!("expected a thumbnail load");
        };

        let ticket = viewer.begin_submission("https://example.com/again.zip").unwrap();
        viewer.complete_submission(&ticket, Ok(create_test_archive("2")));
        viewer.dispatch(Command::OpenCarousel("z.jpg".to_string()));

        assert!(!viewer.complete_carousel_load(&carousel_load, LoadOutcome::Loaded));
        assert!(!viewer.complete_thumbnail_load(&thumb_load, LoadOutcome::Loaded));
        let render = viewer.render();
        assert_eq!(render.carousel.unwrap().display, ImageDisplay::Loading);
        assert_eq!(
            render.browser.unwrap().items[1].thumbnail,
            Some(ThumbnailState::Placeholder)
        );
    }

    #[test]
    fn test_page_size_option() {
        let mut viewer = ViewerState::new(ViewerOptions { page_size: 1 }, Theme::Light);
        let ticket = viewer.begin_submission("u").unwrap();
        viewer.complete_submission(&ticket, Ok(create_test_archive("1")));
        let browser = viewer.dispatch(Command::SetPage(2)).render.browser.unwrap();
        assert_eq!(browser.page.total_pages, 2);
        let names: Vec<_> = browser.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["z.jpg"]);
    }
}
