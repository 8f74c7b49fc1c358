//! Breadcrumb trail from the root to the open folder.

use archive_viewer_core::Command;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::browser::use_browser;
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/breadcrumbs.module.css");

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let crumbs = use_browser(|b| b.breadcrumbs.clone());

    view! {
        <nav class=css::breadcrumbs aria-label="Breadcrumb">
            {move || {
                let crumbs = crumbs.get().unwrap_or_default();
                let last = crumbs.len().saturating_sub(1);
                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        let separator = (i > 0).then(|| view! {
                            <span class=css::separator aria-hidden="true">
                                <Icon icon=ic::CHEVRON_RIGHT />
                            </span>
                        });
                        let segment = if i == last {
                            view! {
                                <span class=css::current aria-current="page">{crumb.label}</span>
                            }
                            .into_any()
                        } else {
                            let path = crumb.path;
                            view! {
                                <button
                                    class=css::link
                                    on:click=move |_| ctx.dispatch(Command::Navigate(path.clone()))
                                >
                                    {crumb.label}
                                </button>
                            }
                            .into_any()
                        };
                        view! { {separator} {segment} }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
