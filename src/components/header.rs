//! Title bar with the theme toggle.

use archive_viewer_core::{Command, Theme};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};

stylance::import_crate_style!(css, "src/components/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_dark = Memo::new(move |_| ctx.render.with(|r| r.theme) == Theme::Dark);

    view! {
        <header class=css::header>
            <div class=css::titles>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::tagline>{APP_TAGLINE}</p>
            </div>
            <button
                class=css::themeToggle
                on:click=move |_| ctx.dispatch(Command::ToggleTheme)
                title=move || if is_dark.get() { "Switch to light theme" } else { "Switch to dark theme" }
                aria-label="Toggle theme"
            >
                {move || if is_dark.get() {
                    view! { <Icon icon=ic::SUN /> }
                } else {
                    view! { <Icon icon=ic::MOON /> }
                }}
            </button>
        </header>
    }
}
