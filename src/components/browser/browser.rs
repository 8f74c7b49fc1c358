//! Browser layout: sidebar tree next to the listing.

use archive_viewer_core::{BrowserView, Command, Tab};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Breadcrumbs, FileList, ImageGrid, Pagination, TreeView};
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Derive a value from the active browser view.
pub(super) fn use_browser<T>(
    f: impl Fn(&BrowserView) -> T + Send + Sync + 'static,
) -> Memo<Option<T>>
where
    T: PartialEq + Send + Sync + 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    Memo::new(move |_| ctx.render.with(|r| r.browser.as_ref().map(&f)))
}

#[component]
pub fn Browser() -> impl IntoView {
    let session = use_browser(|b| b.session_id.clone());
    let tab = use_browser(|b| b.tab);

    view! {
        <Show when=move || session.with(Option::is_some)>
            <div class=css::layout>
                <aside class=css::sidebar aria-label="Folder tree">
                    <TreeView />
                </aside>
                <section class=css::content>
                    <Breadcrumbs />
                    <Tabs />
                    {move || match tab.get() {
                        Some(Tab::ImagesOnly) => view! { <ImageGrid /> }.into_any(),
                        _ => view! { <FileList /> }.into_any(),
                    }}
                    <Pagination />
                </section>
            </div>
        </Show>
    }
}

#[component]
fn Tabs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let tab = use_browser(|b| b.tab);
    let item_count = use_browser(|b| b.page.total_items);
    let image_count = use_browser(|b| b.images_in_folder);

    let tab_class = move |t: Tab| {
        if tab.get() == Some(t) {
            format!("{} {}", css::tab, css::tabActive)
        } else {
            css::tab.to_string()
        }
    };

    view! {
        <div class=css::tabs role="tablist">
            <button
                class=move || tab_class(Tab::AllFiles)
                role="tab"
                aria-selected=move || tab.get() == Some(Tab::AllFiles)
                on:click=move |_| ctx.dispatch(Command::SelectTab(Tab::AllFiles))
            >
                <Icon icon=ic::LIST />
                {move || format!("All Files ({})", item_count.get().unwrap_or(0))}
            </button>
            <button
                class=move || tab_class(Tab::ImagesOnly)
                role="tab"
                aria-selected=move || tab.get() == Some(Tab::ImagesOnly)
                on:click=move |_| ctx.dispatch(Command::SelectTab(Tab::ImagesOnly))
            >
                <Icon icon=ic::GRID />
                {move || format!("Images ({})", image_count.get().unwrap_or(0))}
            </button>
        </div>
    }
}
