//! Root application module.
//!
//! Owns the single [`ViewerState`] and the render model derived from it,
//! and runs the asynchronous tasks the state core hands back.

use archive_viewer_core::loader::load_outcome;
use archive_viewer_core::{Command, RenderModel, Task, Theme, ViewerOptions, ViewerState};
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::components::{ArchiveForm, Browser, Carousel, Header};
use crate::config::{DARK_CLASS, PREFERS_DARK_QUERY};
use crate::utils::{BrowserImageLoader, console, dom, preferences, process_archive};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// The viewer state itself is not reactive; every mutation goes through
/// [`AppContext`] and publishes a fresh [`RenderModel`] afterwards.
#[derive(Clone, Copy)]
pub struct AppContext {
    viewer: StoredValue<ViewerState>,
    /// Latest snapshot; components read from here.
    pub render: RwSignal<RenderModel>,
}

impl AppContext {
    pub fn new(stored_theme: Option<&str>, prefers_dark: bool) -> Self {
        let viewer =
            ViewerState::with_preferences(ViewerOptions::default(), stored_theme, prefers_dark);
        let render = viewer.render();
        Self {
            viewer: StoredValue::new(viewer),
            render: RwSignal::new(render),
        }
    }

    /// Apply a command, publish the new render model and run its tasks.
    pub fn dispatch(&self, command: Command) {
        let Some(dispatch) = self.viewer.try_update_value(|v| v.dispatch(command)) else {
            return;
        };
        self.render.set(dispatch.render);
        self.run_tasks(dispatch.tasks);
    }

    /// Submit an archive URL.
    pub fn submit(&self, url: String) {
        let ticket = self
            .viewer
            .try_update_value(|v| v.begin_submission(&url))
            .flatten();
        self.publish();

        let Some(ticket) = ticket else {
            return;
        };
        console::info(&format!("Processing archive {}", ticket.url));

        let ctx = *self;
        spawn_local(async move {
            let result = process_archive(&ticket.url).await;
            if let Err(e) = &result {
                console::warn(&format!("Archive submission failed: {}", e));
            }
            let applied = ctx
                .viewer
                .try_update_value(|v| v.complete_submission(&ticket, result))
                .unwrap_or(false);
            if applied {
                ctx.publish();
            } else {
                console::warn("Dropped response of a superseded submission");
            }
        });
    }

    fn publish(&self) {
        if let Some(render) = self.viewer.try_with_value(|v| v.render()) {
            self.render.set(render);
        }
    }

    fn run_tasks(&self, tasks: Vec<Task>) {
        for task in tasks {
            let ctx = *self;
            match task {
                Task::LoadFullImage(load) => spawn_local(async move {
                    let outcome = load_outcome(&BrowserImageLoader, &load.locator).await;
                    let applied = ctx
                        .viewer
                        .try_update_value(|v| v.complete_carousel_load(&load, outcome))
                        .unwrap_or(false);
                    if applied {
                        ctx.publish();
                    } else {
                        console::warn(&format!("Dropped stale image load for {}", load.locator));
                    }
                }),
                Task::LoadThumbnail(load) => spawn_local(async move {
                    let outcome = load_outcome(&BrowserImageLoader, &load.locator).await;
                    let applied = ctx
                        .viewer
                        .try_update_value(|v| v.complete_thumbnail_load(&load, outcome))
                        .unwrap_or(false);
                    if applied {
                        ctx.publish();
                    } else {
                        console::warn(&format!("Dropped stale thumbnail load for {}", load.path));
                    }
                }),
                Task::PersistTheme(theme) => {
                    if let Err(e) = preferences::store_theme(theme) {
                        console::error(&format!("Theme not saved: {}", e));
                    }
                }
            }
        }
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let stored = preferences::load_theme();
    let ctx = AppContext::new(stored.as_deref(), dom::matches_media(PREFERS_DARK_QUERY));
    provide_context(ctx);

    // Follow later scheme changes until the user picks a theme
    let prefers_dark = use_media_query(PREFERS_DARK_QUERY);
    Effect::new(move |previous: Option<bool>| {
        let dark = prefers_dark.get();
        if previous.is_some_and(|p| p != dark) {
            ctx.dispatch(Command::SystemThemeChanged(dark));
        }
        dark
    });

    // Mirror the theme onto <html>
    Effect::new(move || {
        let dark = ctx.render.with(|r| r.theme) == Theme::Dark;
        dom::set_root_class(DARK_CLASS, dark);
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="fatal">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Header />
            <main class="container">
                <ArchiveForm />
                <Browser />
            </main>
            <Carousel />
        </ErrorBoundary>
    }
}
