//! Full-screen image carousel.
//!
//! `Escape` closes, arrow keys step through the archive-wide image order,
//! clicking the backdrop closes. Steps stop at either end.

use archive_viewer_core::config::ERROR_PLACEHOLDER;
use archive_viewer_core::{Command, ImageDisplay};
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/carousel.module.css");

#[component]
pub fn Carousel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let view_model = Memo::new(move |_| ctx.render.with(|r| r.carousel.clone()));
    let is_open = Memo::new(move |_| view_model.with(Option::is_some));

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            ctx.dispatch(Command::CloseCarousel);
        }
        "ArrowLeft" => {
            ev.prevent_default();
            ctx.dispatch(Command::PrevImage);
        }
        "ArrowRight" => {
            ev.prevent_default();
            ctx.dispatch(Command::NextImage);
        }
        _ => {}
    };

    // Only direct clicks on the backdrop close; clicks inside the frame bubble here too
    let handle_backdrop = move |ev: ev::MouseEvent| {
        if ev.target() == ev.current_target() {
            ctx.dispatch(Command::CloseCarousel);
        }
    };

    // Focus the modal when it opens so arrow keys reach it
    let container_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if is_open.get()
            && let Some(el) = container_ref.get()
        {
            let _ = el.focus();
        }
    });

    let can_prev = move || view_model.with(|v| v.as_ref().is_some_and(|v| v.can_prev));
    let can_next = move || view_model.with(|v| v.as_ref().is_some_and(|v| v.can_next));

    view! {
        <Show when=move || is_open.get()>
            <div
                node_ref=container_ref
                class=css::backdrop
                tabindex="-1"
                role="dialog"
                aria-modal="true"
                on:keydown=handle_keydown
                on:click=handle_backdrop
            >
                <button
                    class=format!("{} {}", css::control, css::close)
                    aria-label="Close (Esc)"
                    on:click=move |_| ctx.dispatch(Command::CloseCarousel)
                >
                    <Icon icon=ic::CLOSE />
                </button>
                <button
                    class=format!("{} {}", css::control, css::prev)
                    aria-label="Previous image"
                    disabled=move || !can_prev()
                    on:click=move |_| ctx.dispatch(Command::PrevImage)
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
                <figure class=css::frame>
                    {move || view_model.get().map(|v| match v.display {
                        ImageDisplay::Loading => view! {
                            <div class=css::loading role="status">
                                <span class=css::spinner aria-hidden="true"></span>
                            </div>
                        }
                        .into_any(),
                        ImageDisplay::Ready(locator) => view! {
                            <img class=css::image src=locator.to_string() alt=v.name.clone() />
                        }
                        .into_any(),
                        ImageDisplay::Failed => view! {
                            <img class=css::image src=ERROR_PLACEHOLDER alt="Image failed to load" />
                        }
                        .into_any(),
                    })}
                    <figcaption class=css::caption>
                        {move || view_model.get().map(|v| format!("{} ({} / {})", v.name, v.position, v.total))}
                    </figcaption>
                </figure>
                <button
                    class=format!("{} {}", css::control, css::next)
                    aria-label="Next image"
                    disabled=move || !can_next()
                    on:click=move |_| ctx.dispatch(Command::NextImage)
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>
        </Show>
    }
}
