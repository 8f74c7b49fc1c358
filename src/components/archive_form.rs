//! Archive URL form with submission status.

use archive_viewer_core::Status;
use leptos::{ev, prelude::*};

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/archive_form.module.css");

#[component]
pub fn ArchiveForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (url, set_url) = signal(String::new());
    let status = Memo::new(move |_| ctx.render.with(|r| r.status.clone()));
    let is_loading = Memo::new(move |_| status.get() == Status::Loading);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !is_loading.get_untracked() {
            ctx.submit(url.get_untracked());
        }
    };

    view! {
        <section class=css::panel>
            <form class=css::form on:submit=handle_submit>
                <input
                    class=css::input
                    type="url"
                    placeholder="https://example.com/archive.zip"
                    aria-label="Archive URL"
                    prop:value=move || url.get()
                    on:input=move |ev| set_url.set(event_target_value(&ev))
                />
                <button class=css::submit type="submit" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Processing..." } else { "Open Archive" }}
                </button>
            </form>
            {move || match status.get() {
                Status::Idle => None,
                Status::Loading => Some(view! {
                    <div class=css::loading role="status">
                        <span class=css::spinner aria-hidden="true"></span>
                        "Downloading and extracting archive..."
                    </div>
                }.into_any()),
                Status::Error(message) => Some(view! {
                    <div class=css::error role="alert">{message}</div>
                }.into_any()),
            }}
        </section>
    }
}
