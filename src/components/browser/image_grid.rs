//! Thumbnail grid for the "images only" tab.
//!
//! Every thumbnail starts as a placeholder and is armed with the
//! visibility port when it mounts. Its state comes from the render model,
//! so it follows the lazy loader without being re-created.

use archive_viewer_core::config::{ERROR_PLACEHOLDER, LAZY_PLACEHOLDER};
use archive_viewer_core::lazy_load::arm;
use archive_viewer_core::{Command, ItemView, ThumbnailState};
use leptos::prelude::*;

use super::browser::use_browser;
use crate::app::AppContext;
use crate::utils::IntersectionPort;

stylance::import_crate_style!(css, "src/components/browser/image_grid.module.css");

#[component]
pub fn ImageGrid() -> impl IntoView {
    let images = use_browser(|b| b.images().cloned().collect::<Vec<_>>());
    let on_page = use_browser(|b| b.images_on_page);
    let in_folder = use_browser(|b| b.images_in_folder);

    view! {
        <p class=css::stats>
            {move || format!(
                "{} image(s) on this page, {} in this folder",
                on_page.get().unwrap_or(0),
                in_folder.get().unwrap_or(0),
            )}
        </p>
        <Show
            when=move || images.with(|i| i.as_ref().is_some_and(|i| !i.is_empty()))
            fallback=|| view! { <p class=css::empty>"No images on this page."</p> }
        >
            <div class=css::grid>
                <For
                    each=move || images.get().unwrap_or_default()
                    key=|item| (item.path.clone(), item.locator.clone())
                    children=move |item| view! { <Thumbnail item=item /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn Thumbnail(item: ItemView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let Some(locator) = item.locator else {
        return None;
    };
    let path = item.path;
    let name = item.name;

    let state = {
        let path = path.clone();
        use_browser(move |b| {
            b.items
                .iter()
                .find(|i| i.path == path)
                .and_then(|i| i.thumbnail)
        })
    };
    let loaded = move || state.get().flatten() == Some(ThumbnailState::Loaded);

    // Arm once the <img> is in the DOM; dropping the port disconnects it.
    let image_ref = NodeRef::<leptos::html::Img>::new();
    let port = StoredValue::new_local(IntersectionPort::new());
    let armed = StoredValue::new(false);
    {
        let (path, locator) = (path.clone(), locator.clone());
        Effect::new(move || {
            let Some(image) = image_ref.get() else {
                return;
            };
            if armed.get_value() {
                return;
            }
            armed.set_value(true);
            let path = path.clone();
            port.with_value(|port| {
                arm(
                    port,
                    image.into(),
                    &locator,
                    Box::new(move || ctx.dispatch(Command::ThumbnailVisible(path))),
                )
            });
        });
    }

    let src = {
        let locator = locator.to_string();
        move || match state.get().flatten() {
            Some(ThumbnailState::Loaded) => locator.clone(),
            Some(ThumbnailState::Errored) => ERROR_PLACEHOLDER.to_string(),
            _ => LAZY_PLACEHOLDER.to_string(),
        }
    };
    let class = move || {
        if loaded() {
            format!("{} {}", css::thumbnail, css::ready)
        } else {
            css::thumbnail.to_string()
        }
    };

    let handle_click = move |_: leptos::ev::MouseEvent| {
        if loaded() {
            ctx.dispatch(Command::OpenCarousel(path.clone()));
        }
    };

    Some(view! {
        <figure class=css::card on:click=handle_click>
            <img node_ref=image_ref class=class src=src alt=name.clone() />
            <figcaption class=css::caption title=name.clone()>{name.clone()}</figcaption>
        </figure>
    })
}
