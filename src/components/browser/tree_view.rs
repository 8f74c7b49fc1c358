//! Collapsible folder tree.
//!
//! Folder names navigate, carets expand or collapse, image files open the
//! carousel. The open folder is highlighted and its ancestors are kept
//! expanded by the navigator.

use archive_viewer_core::config::ROOT_LABEL;
use archive_viewer_core::path::join_path;
use archive_viewer_core::{Command, Node};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::browser::use_browser;
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/tree_view.module.css");

#[component]
pub fn TreeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    // Keyed on the session so the tree is rebuilt only for a new archive
    let session = use_browser(|b| b.session_id.clone());
    let at_root = use_browser(|b| b.current_path.is_empty());

    view! {
        <div class=css::tree role="tree">
            <div
                class=move || item_class(at_root.get().unwrap_or(false))
                role="treeitem"
                on:click=move |_| ctx.dispatch(Command::Navigate(String::new()))
            >
                <span class=css::icon><Icon icon=ic::HOME /></span>
                <span class=css::label>{ROOT_LABEL}</span>
            </div>
            {move || session.get().and_then(|_| {
                ctx.render.with_untracked(|r| r.browser.as_ref().map(|b| b.root.clone()))
            }).map(|root| {
                root.children
                    .iter()
                    .cloned()
                    .map(|child| {
                        let path = child.name.clone();
                        view! { <TreeNode node=child path=path /> }
                    })
                    .collect_view()
            })}
        </div>
    }
}

fn item_class(selected: bool) -> String {
    if selected {
        format!("{} {}", css::item, css::selected)
    } else {
        css::item.to_string()
    }
}

#[component]
fn TreeNode(node: Node, path: String) -> AnyView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    if !node.is_directory() {
        let is_image = node.is_image_file();
        let icon = ic::for_kind(node.file_kind());
        let open_path = path.clone();
        return view! {
            <div
                class=if is_image { format!("{} {}", css::item, css::clickable) } else { css::item.to_string() }
                role="treeitem"
                title=path
                on:click=move |_| {
                    if is_image {
                        ctx.dispatch(Command::OpenCarousel(open_path.clone()));
                    }
                }
            >
                <span class=css::caret></span>
                <span class=css::icon><Icon icon=icon /></span>
                <span class=css::label>{node.name}</span>
            </div>
        }
        .into_any();
    }

    let expanded = {
        let path = path.clone();
        use_browser(move |b| b.is_expanded(&path))
    };
    let selected = {
        let path = path.clone();
        use_browser(move |b| b.current_path == path)
    };
    let is_expanded = move || expanded.get().unwrap_or(false);

    let toggle_path = path.clone();
    let nav_path = path.clone();
    let has_children = !node.children.is_empty();
    let children = StoredValue::new(node.children);

    view! {
        <div role="treeitem" aria-expanded=move || is_expanded().to_string()>
            <div
                class=move || item_class(selected.get().unwrap_or(false))
                on:click=move |_| ctx.dispatch(Command::Navigate(nav_path.clone()))
            >
                <button
                    class=css::caret
                    aria-label="Toggle folder"
                    disabled=!has_children
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.dispatch(Command::ToggleFolder(toggle_path.clone()));
                    }
                >
                    {has_children.then(|| view! {
                        <span class=move || {
                            if is_expanded() { format!("{} {}", css::chevron, css::open) } else { css::chevron.to_string() }
                        }>
                            <Icon icon=ic::CHEVRON_RIGHT />
                        </span>
                    })}
                </button>
                <span class=css::icon><Icon icon=ic::FOLDER /></span>
                <span class=css::label>{node.name}</span>
            </div>
            {move || is_expanded().then(|| {
                let parent = path.clone();
                view! {
                    <div class=css::children role="group">
                        {children.get_value()
                            .into_iter()
                            .map(|child| {
                                let path = join_path(&parent, &child.name);
                                view! { <TreeNode node=child path=path /> }
                            })
                            .collect_view()}
                    </div>
                }
            })}
        </div>
    }
    .into_any()
}
