//! Folder navigation state.
//!
//! Tracks the open folder, the current page, the breadcrumb trail, the
//! active listing tab and which sidebar tree folders are expanded. The
//! displayed item list is never stored; it is resolved from the tree on
//! demand.

use std::collections::BTreeSet;

use crate::config::ROOT_LABEL;
use crate::paginator::{PageWindow, Paginator};
use crate::path::{ancestors, normalize, prefixes, segments};
use crate::resolver::{Listing, find_directory, resolve};
use crate::tree::ArchiveTree;

/// Listing tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    /// Every folder and file (default)
    #[default]
    AllFiles,
    /// Image thumbnails of the current page
    ImagesOnly,
}

/// One breadcrumb entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Display label (folder name, or the root label)
    pub label: String,
    /// Path navigated to when clicked
    pub path: String,
}

impl Crumb {
    fn root() -> Self {
        Self {
            label: ROOT_LABEL.to_string(),
            path: String::new(),
        }
    }
}

/// Expanded folders of the sidebar tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeExpansion {
    expanded: BTreeSet<String>,
}

impl TreeExpansion {
    /// Flip one folder between expanded and collapsed.
    pub fn toggle(&mut self, path: &str) {
        let path = normalize(path);
        if !self.expanded.remove(&path) {
            self.expanded.insert(path);
        }
    }

    /// Expand every proper ancestor of `path` so it is visible.
    pub fn reveal(&mut self, path: &str) {
        self.expanded.extend(ancestors(path));
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Expanded paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

/// Navigation state for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    current_path: String,
    current_page: usize,
    breadcrumbs: Vec<Crumb>,
    tab: Tab,
    expansion: TreeExpansion,
}

impl Navigator {
    /// Navigator at the root, page 1.
    pub fn new() -> Self {
        Self {
            current_path: String::new(),
            current_page: 1,
            breadcrumbs: vec![Crumb::root()],
            tab: Tab::AllFiles,
            expansion: TreeExpansion::default(),
        }
    }

    /// Open a folder.
    ///
    /// Resets to page 1 and the "all files" tab, rebuilds the breadcrumb
    /// trail, reveals the folder in the sidebar tree, and returns the
    /// freshly resolved listing.
    pub fn navigate<'a>(&mut self, path: &str, tree: &'a ArchiveTree) -> Listing<'a> {
        let listing = resolve(path, tree);

        self.current_path = normalize(path);
        self.breadcrumbs = std::iter::once(Crumb::root())
            .chain(
                segments(path)
                    .zip(prefixes(path))
                    .map(|(label, path)| Crumb {
                        label: label.to_string(),
                        path,
                    }),
            )
            .collect();
        self.current_page = 1;
        self.tab = Tab::AllFiles;
        if find_directory(path, tree).is_some() {
            self.expansion.reveal(&self.current_path);
        }

        listing
    }

    /// Request a page of the current folder; the result is clamped.
    pub fn set_page(
        &mut self,
        requested: usize,
        tree: &ArchiveTree,
        paginator: &Paginator,
    ) -> PageWindow {
        let listing = resolve(&self.current_path, tree);
        let window = paginator.window(requested, listing.len());
        self.current_page = window.page;
        window
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn toggle_folder(&mut self, path: &str) {
        self.expansion.toggle(path);
    }

    /// Resolve the current folder (recomputed on every call).
    pub fn listing<'a>(&self, tree: &'a ArchiveTree) -> Listing<'a> {
        resolve(&self.current_path, tree)
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn breadcrumbs(&self) -> &[Crumb] {
        &self.breadcrumbs
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn expansion(&self) -> &TreeExpansion {
        &self.expansion
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    fn create_test_tree() -> ArchiveTree {
        let many: Vec<Node> = (0..45)
            .map(|i| Node::file(&format!("f{:02}.txt", i), false))
            .collect();
        ArchiveTree::new(Node::directory(
            "root",
            vec![
                Node::directory(
                    "a",
                    vec![Node::directory("b", vec![Node::directory("c", Vec::new())])],
                ),
                Node::directory("big", many),
            ],
        ))
    }

    fn crumb_paths(nav: &Navigator) -> Vec<&str> {
        nav.breadcrumbs().iter().map(|c| c.path.as_str()).collect()
    }

    #[test]
    fn test_new_is_root() {
        let nav = Navigator::new();
        assert_eq!(nav.current_path(), "");
        assert_eq!(nav.current_page(), 1);
        assert_eq!(crumb_paths(&nav), vec![""]);
        assert_eq!(nav.breadcrumbs()[0].label, ROOT_LABEL);
    }

    #[test]
    fn test_breadcrumbs() {
        let tree = create_test_tree();
        let mut nav = Navigator::new();
        nav.navigate("a/b/c", &tree);
        assert_eq!(crumb_paths(&nav), vec!["", "a", "a/b", "a/b/c"]);
        let labels: Vec<_> = nav.breadcrumbs().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec![ROOT_LABEL, "a", "b", "c"]);
    }

    #[test]
    fn test_navigate_normalizes_path() {
        let tree = create_test_tree();
        let mut nav = Navigator::new();
        nav.navigate("/a/b/", &tree);
        assert_eq!(nav.current_path(), "a/b");
        assert_eq!(crumb_paths(&nav), vec!["", "a", "a/b"]);
    }

    #[test]
    fn test_navigate_resets_page_and_tab() {
        let tree = create_test_tree();
        let paginator = Paginator::default();
        let mut nav = Navigator::new();
        nav.navigate("big", &tree);
        nav.set_page(3, &tree, &paginator);
        nav.select_tab(Tab::ImagesOnly);
        assert_eq!(nav.current_page(), 3);

        nav.navigate("big", &tree);
        assert_eq!(nav.current_page(), 1);
        assert_eq!(nav.tab(), Tab::AllFiles);
    }

    #[test]
    fn test_navigate_is_idempotent() {
        let tree = create_test_tree();
        let mut nav = Navigator::new();
        let first = nav.navigate("a/b", &tree);
        let after_first = nav.clone();
        let second = nav.navigate("a/b", &tree);
        assert_eq!(first, second);
        assert_eq!(nav, after_first);
    }

    #[test]
    fn test_set_page_clamps() {
        let tree = create_test_tree();
        let paginator = Paginator::default();
        let mut nav = Navigator::new();
        nav.navigate("big", &tree);

        let window = nav.set_page(5, &tree, &paginator);
        assert_eq!(window.page, 3);
        assert_eq!(nav.current_page(), 3);

        nav.navigate("a/b/c", &tree);
        let window = nav.set_page(4, &tree, &paginator);
        assert_eq!(window.page, 1);
    }

    #[test]
    fn test_unknown_path_yields_empty_listing() {
        let tree = create_test_tree();
        let mut nav = Navigator::new();
        let listing = nav.navigate("nope/deeper", &tree);
        assert!(listing.is_empty());
        assert_eq!(nav.current_path(), "nope/deeper");
    }

    #[test]
    fn test_unknown_path_reveals_nothing() {
        let tree = create_test_tree();
        let mut nav = Navigator::new();
        nav.navigate("nope/deeper", &tree);
        assert!(!nav.expansion().is_expanded("nope"));
        nav.navigate("a/missing", &tree);
        assert!(!nav.expansion().is_expanded("a"));
        assert_eq!(nav.expansion().iter().count(), 0);
    }

    #[test]
    fn test_navigate_reveals_ancestors() {
        let tree = create_test_tree();
        let mut nav = Navigator::new();
        nav.navigate("a/b/c", &tree);
        assert!(nav.expansion().is_expanded("a"));
        assert!(nav.expansion().is_expanded("a/b"));
        assert!(!nav.expansion().is_expanded("a/b/c"));
    }

    #[test]
    fn test_toggle_folder() {
        let mut nav = Navigator::new();
        nav.toggle_folder("a");
        assert!(nav.expansion().is_expanded("a"));
        nav.toggle_folder("/a/");
        assert!(!nav.expansion().is_expanded("a"));
    }
}
