//! Bookmark Tree View Component
//!
//! The column of categories. Owns category-level structure changes and
//! reports every new snapshot to the host.

use leptos::prelude::*;

use crate::components::{Button, TreeColumnCategoryView};
use crate::context::use_tree_context;
use crate::events::TreeUpdateEvent;
use crate::models::BookmarkCategoryRecord;
use crate::store::{store_add_category, store_apply_category_update, store_export, store_read, use_app_store};
use crate::tree::TreeColumnCategory;

#[component]
pub fn BookmarkTreeView(
    /// Receives the exported tree after every change
    on_change: Callback<Vec<BookmarkCategoryRecord>>,
) -> impl IntoView {
    let ctx = use_tree_context();
    let store = use_app_store();

    let on_category_update = Callback::new(move |event: TreeUpdateEvent<TreeColumnCategory>| {
        log::debug!("[TREE] {} {}", event.kind(), event.updated().id);
        if let Err(e) = store_apply_category_update(&store, event) {
            log::error!("[TREE] {}", e);
        }
    });

    Effect::new(move |_| {
        on_change.run(store_export(&store));
    });

    let add_category = Callback::new(move |_: ()| {
        let id = store_add_category(&store, &ctx.new_category_name());
        log::debug!("[TREE] Added {}", id);
    });

    view! {
        <ul class="tree">
            <For
                each=move || store_read(&store, |t| t.category_ids())
                key=|id| *id
                children=move |id| {
                    view! { <TreeColumnCategoryView category_id=id on_update=on_category_update /> }
                }
            />
        </ul>
        <Show when=move || ctx.is_editing>
            <Button label="add category" on_click=add_category />
        </Show>
    }
}
