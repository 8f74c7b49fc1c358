//! Listing rows for the "all files" tab.

use archive_viewer_core::{Command, ItemView};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::browser::use_browser;
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let items = use_browser(|b| b.items.clone());

    view! {
        <div class=css::list role="list">
            <Show
                when=move || items.with(|i| i.as_ref().is_some_and(|i| !i.is_empty()))
                fallback=|| view! { <p class=css::empty>"This folder is empty."</p> }
            >
                <For
                    each=move || items.get().unwrap_or_default()
                    key=|item| (item.path.clone(), item.locator.clone())
                    children=move |item| view! { <FileListItem item=item /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn FileListItem(item: ItemView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = ic::for_kind(item.file_kind);
    let path = item.path.clone();
    let is_dir = item.is_dir;
    let is_image = item.is_image;

    let handle_click = move |_: leptos::ev::MouseEvent| {
        if is_dir {
            ctx.dispatch(Command::Navigate(path.clone()));
        } else if is_image {
            ctx.dispatch(Command::OpenCarousel(path.clone()));
        }
    };

    let row_class = if is_dir || is_image {
        format!("{} {}", css::row, css::clickable)
    } else {
        css::row.to_string()
    };
    let name_class = if is_dir {
        format!("{} {}", css::name, css::nameDir)
    } else {
        css::name.to_string()
    };
    let label = if is_dir {
        format!("Folder: {}", item.name)
    } else {
        format!("File: {}", item.name)
    };

    view! {
        <div class=row_class role="listitem" aria-label=label on:click=handle_click>
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>{item.name.clone()}</span>
            <span class=css::actions>
                {item.locator.map(|locator| view! {
                    <a
                        class=css::download
                        href=locator.to_string()
                        download=item.name
                        title="Download"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <Icon icon=ic::DOWNLOAD />
                    </a>
                })}
                {is_dir.then(|| view! { <Icon icon=ic::CHEVRON_RIGHT /> })}
            </span>
        </div>
    }
}
