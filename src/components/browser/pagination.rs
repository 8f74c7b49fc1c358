//! Page controls for the open folder.

use archive_viewer_core::Command;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::browser::use_browser;
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/pagination.module.css");

#[component]
pub fn Pagination() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let page = use_browser(|b| b.page);

    let current = move || page.get().map(|p| p.page).unwrap_or(1);
    let has_prev = move || page.get().is_some_and(|p| p.has_prev());
    let has_next = move || page.get().is_some_and(|p| p.has_next());

    view! {
        <div class=css::pagination>
            <span class=css::summary>
                {move || page.get().map(|p| {
                    format!("Items {}-{} of {}", p.first_item(), p.last_item(), p.total_items)
                })}
            </span>
            <Show when=move || page.get().is_some_and(|p| p.shows_controls())>
                <div class=css::controls>
                    <button
                        class=css::button
                        disabled=move || !has_prev()
                        aria-label="Previous page"
                        on:click=move |_| ctx.dispatch(Command::SetPage(current().saturating_sub(1)))
                    >
                        <Icon icon=ic::CHEVRON_LEFT />
                    </button>
                    <span class=css::position>
                        {move || page.get().map(|p| format!("Page {} of {}", p.page, p.display_pages()))}
                    </span>
                    <button
                        class=css::button
                        disabled=move || !has_next()
                        aria-label="Next page"
                        on:click=move |_| ctx.dispatch(Command::SetPage(current() + 1))
                    >
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                </div>
            </Show>
        </div>
    }
}
