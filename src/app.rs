//! Bookmark Tree App
//!
//! Loads the configured bookmarks and mounts the tree.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::BookmarkTreeView;
use crate::config::TreeConfig;
use crate::context::TreeContext;
use crate::ids::IdMint;
use crate::models::BookmarkCategoryRecord;
use crate::store::{store_export, AppState};
use crate::tree::BookmarkTree;

#[component]
pub fn App() -> impl IntoView {
    let config = TreeConfig::from_location();
    log::info!(
        "[APP] Loading {} categories (editing={})",
        config.seed.len(),
        config.is_editing
    );

    let tree = BookmarkTree::from_records(&config.seed, config.is_editing, IdMint::new());
    let store = Store::new(AppState::new(tree));

    // Provide context to all children
    provide_context(store);
    provide_context(TreeContext::new(config));

    let on_change = Callback::new(move |snapshot: Vec<BookmarkCategoryRecord>| {
        let count: usize = snapshot.iter().map(|c| c.bookmarks.len()).sum();
        log::debug!("[APP] Tree now has {} categories, {} bookmarks", snapshot.len(), count);
    });

    let exported = move || serde_json::to_string_pretty(&store_export(&store)).unwrap_or_default();

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Bookmarks"</h1>
                <BookmarkTreeView on_change=on_change />
                <details class="export">
                    <summary>"Export"</summary>
                    <pre>{exported}</pre>
                </details>
            </main>
        </div>
    }
}
