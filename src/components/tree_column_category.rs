//! Tree Column Category Component
//!
//! One category: clickable title, ordered bookmark rows and, in edit mode,
//! an add button. The whole node is a drag source and a drop zone.

use leptos::prelude::*;
use web_sys::{DragEvent, MouseEvent};

use leptos_dragdrop::*;

use crate::components::{Button, EditTarget, Editor, TreeItemRow};
use crate::context::use_tree_context;
use crate::drag::{category_drag_options, DragPayload};
use crate::editor::{EditorFinishEvent, EditorOptions};
use crate::events::TreeUpdateEvent;
use crate::ids::CategoryId;
use crate::store::{
    store_apply_bookmark_update, store_category, store_read, store_read_untracked, store_update_category,
    use_app_store,
};
use crate::tree::{TreeColumnCategory, TreeItem};

#[component]
pub fn TreeColumnCategoryView(
    category_id: CategoryId,
    on_update: Callback<TreeUpdateEvent<TreeColumnCategory>>,
) -> impl IntoView {
    let ctx = use_tree_context();
    let store = use_app_store();
    let dnd = ctx.dnd;

    let dom_id = category_id.to_string();
    let header_id = category_id.header_id();

    let name = Memo::new(move |_| {
        store_read(&store, |t| t.category(category_id).map(|c| c.name.clone()))
            .unwrap_or_default()
    });
    let bookmarks = Memo::new(move |_| {
        store_read(&store, |t| t.category(category_id).map(|c| c.bookmarks.clone()))
            .unwrap_or_default()
    });

    // Editor over the title, and editor over the add placeholder
    let title_target = RwSignal::new(None::<EditTarget>);
    let adding = RwSignal::new(None::<EditTarget>);

    // ========================
    // Title editing
    // ========================

    let on_title_click = {
        let header_id = header_id.clone();
        move |_: MouseEvent| {
            if !ctx.is_editing || ctx.drag_just_ended() {
                return;
            }
            match store_read_untracked(&store, |t| t.edit_target(&header_id)) {
                Ok(target) => title_target.set(Some(target)),
                Err(e) => log::error!("[TREE] {}", e),
            }
        }
    };

    let on_title_finish = Callback::new(move |event: EditorFinishEvent| {
        title_target.set(None);
        let Some(current) = store_category(&store, category_id) else {
            log::error!("[TREE] Title editor finished on missing {}", category_id);
            return;
        };
        if let Some(update) = current.title_finished(&event) {
            on_update.run(update);
        }
    });

    // ========================
    // Bookmark list
    // ========================

    let on_bookmark_update = Callback::new(move |event: TreeUpdateEvent<TreeItem>| {
        log::debug!("[TREE] {} {} in {}", event.kind(), event.updated().id, category_id);
        if let Err(e) = store_apply_bookmark_update(&store, category_id, event) {
            log::error!("[TREE] {}", e);
        }
    });

    let start_add = Callback::new(move |_: ()| {
        adding.set(Some(EditTarget {
            id: format!("{}-new", category_id),
            name: ctx.new_bookmark_name(),
            url: Some(String::new()),
        }));
    });

    // The placeholder goes away whatever the outcome
    let on_add_finish = Callback::new(move |event: EditorFinishEvent| {
        adding.set(None);
        let ids = store_read_untracked(&store, |t| t.ids().clone());
        let default_link = ctx.default_link();
        match store_update_category(&store, category_id, |c| c.add_finished(&event, &default_link, &ids)) {
            Ok(Some(id)) => log::debug!("[TREE] Added {} to {}", id, category_id),
            Ok(None) => {}
            Err(e) => log::error!("[TREE] {}", e),
        }
    });

    // ========================
    // DnD handlers
    // ========================

    let options = category_drag_options();
    let on_dragstart = make_on_dragstart(dnd, dom_id.clone(), options.clone(), move || {
        store_category(&store, category_id)
            .map(|c| DragPayload::Category(c.export()).encode())
            .unwrap_or_default()
    });
    let on_dragover = make_on_dragover(dnd, dom_id.clone(), options.clone());
    let on_dragleave = make_on_dragleave(dnd, dom_id.clone());
    let on_drop = make_on_drop(dnd, dom_id.clone(), options, move |data: String| {
        let payload = match DragPayload::decode(&data) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("[DND] Ignoring drop on {}: {}", category_id, e);
                return;
            }
        };
        log::debug!("[DND] {} dropped on {}", payload.kind(), category_id);
        let ids = store_read_untracked(&store, |t| t.ids().clone());
        match store_update_category(&store, category_id, |c| c.drop_payload(payload, &ids)) {
            Ok(Some(event)) => on_update.run(event),
            Ok(None) => {}
            Err(e) => log::error!("[TREE] {}", e),
        }
    });
    let on_dragend = make_on_dragend(dnd, move || match store_category(&store, category_id) {
        Some(current) => on_update.run(TreeUpdateEvent::Delete { updated: current }),
        None => log::error!("[TREE] Drag ended on missing {}", category_id),
    });

    let column_class = {
        let dom_id = dom_id.clone();
        move || {
            let mut c = String::from("category");
            if is_drop_target(dnd, &dom_id) {
                c.push_str(" drop-target");
            }
            c
        }
    };

    view! {
        <li
            class=column_class
            id=dom_id
            draggable=if ctx.is_editing { "true" } else { "false" }
            on:dragstart=move |ev: DragEvent| {
                if ctx.is_editing {
                    on_dragstart(ev);
                }
            }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:dragend=on_dragend
        >
            {move || match title_target.get() {
                Some(target) => view! {
                    <Editor target=target options=EditorOptions::title() on_finish=on_title_finish />
                }
                .into_any(),
                None => view! {
                    <h1 id=header_id.clone() class="category-title" on:click=on_title_click.clone()>
                        {move || name.get()}
                    </h1>
                }
                .into_any(),
            }}

            <ul class="bookmarks">
                <For
                    each=move || bookmarks.get()
                    key=|item| (item.id, item.name.clone(), item.url.clone())
                    children=move |item| {
                        view! { <TreeItemRow item=item on_update=on_bookmark_update /> }
                    }
                />
                {move || {
                    adding
                        .get()
                        .map(|target| {
                            view! {
                                <Editor
                                    target=target
                                    options=EditorOptions::new_bookmark()
                                    on_finish=on_add_finish
                                />
                            }
                        })
                }}
            </ul>

            <Show when=move || ctx.is_editing>
                <Button label="add" title="add bookmark" on_click=start_add />
            </Show>
        </li>
    }
}
