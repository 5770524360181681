//! Tree Item Component
//!
//! A single bookmark row inside a category.

use leptos::prelude::*;
use web_sys::{DragEvent, MouseEvent};

use leptos_dragdrop::*;

use crate::components::{EditTarget, Editor};
use crate::context::use_tree_context;
use crate::drag::{bookmark_drag_options, DragPayload};
use crate::editor::{EditorFinishEvent, EditorOptions};
use crate::events::TreeUpdateEvent;
use crate::store::{store_read_untracked, use_app_store};
use crate::tree::TreeItem;

/// A bookmark row; hosts an editor on demand in edit mode
#[component]
pub fn TreeItemRow(item: TreeItem, on_update: Callback<TreeUpdateEvent<TreeItem>>) -> impl IntoView {
    let ctx = use_tree_context();
    let store = use_app_store();
    let dnd = ctx.dnd;

    let dom_id = item.id.to_string();
    let (edit_target, set_edit_target) = signal(None::<EditTarget>);

    let open_editor = {
        let dom_id = dom_id.clone();
        move |ev: MouseEvent| {
            if !ctx.is_editing {
                return;
            }
            ev.prevent_default();
            if ctx.drag_just_ended() {
                return;
            }
            match store_read_untracked(&store, |t| t.edit_target(&dom_id)) {
                Ok(target) => set_edit_target.set(Some(target)),
                Err(e) => log::error!("[TREE] {}", e),
            }
        }
    };

    let on_finish = {
        let item = item.clone();
        Callback::new(move |event: EditorFinishEvent| {
            set_edit_target.set(None);
            if let Some(update) = item.editor_finished(&event) {
                on_update.run(update);
            }
        })
    };

    // DnD handlers
    let options = bookmark_drag_options();
    let on_dragstart = {
        let item = item.clone();
        make_on_dragstart(dnd, dom_id.clone(), options.clone(), move || {
            DragPayload::Bookmark(item.export()).encode()
        })
    };
    let on_dragover = make_on_dragover(dnd, dom_id.clone(), options.clone());
    let on_dragleave = make_on_dragleave(dnd, dom_id.clone());
    let on_drop = {
        let item = item.clone();
        make_on_drop(dnd, dom_id.clone(), options, move |data: String| {
            let payload = match DragPayload::decode(&data) {
                Ok(payload) => payload,
                Err(e) => {
                    log::warn!("[DND] Ignoring drop on {}: {}", item.id, e);
                    return;
                }
            };
            log::debug!("[DND] {} dropped on {}", payload.kind(), item.id);
            let ids = store_read_untracked(&store, |t| t.ids().clone());
            if let Some(event) = item.drop_payload(payload, &ids) {
                on_update.run(event);
            }
        })
    };
    let on_dragend = {
        let item = item.clone();
        make_on_dragend(dnd, move || on_update.run(TreeUpdateEvent::Delete { updated: item.clone() }))
    };

    let row_class = {
        let dom_id = dom_id.clone();
        move || {
            let mut c = String::from("bookmark");
            if is_drop_target(dnd, &dom_id) {
                c.push_str(" drop-target");
            }
            c
        }
    };

    let name = item.name.clone();
    let url = item.url.clone();

    move || match edit_target.get() {
        Some(target) => view! {
            <Editor target=target options=EditorOptions::bookmark() on_finish=on_finish />
        }
        .into_any(),
        None => {
            let on_dragstart = on_dragstart.clone();
            view! {
                <li
                    class=row_class.clone()
                    id=dom_id.clone()
                    draggable=if ctx.is_editing { "true" } else { "false" }
                    on:dragstart=move |ev: DragEvent| {
                        if ctx.is_editing {
                            on_dragstart(ev);
                        }
                    }
                    on:dragover=on_dragover.clone()
                    on:dragleave=on_dragleave.clone()
                    on:drop=on_drop.clone()
                    on:dragend=on_dragend.clone()
                    on:click=open_editor.clone()
                >
                    <a href=url.clone()>
                        {name.clone()}
                    </a>
                </li>
            }
            .into_any()
        }
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use reactive_stores::Store;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use crate::config::TreeConfig;
    use crate::context::TreeContext;
    use crate::ids::IdMint;
    use crate::store::AppState;
    use crate::tree::BookmarkTree;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_clicking_row_opens_editor() {
        let doc = web_sys::window().unwrap().document().unwrap();
        let host: web_sys::HtmlElement = doc.create_element("ul").unwrap().unchecked_into();
        doc.body().unwrap().append_child(&host).unwrap();

        let config = TreeConfig::default();
        let tree = BookmarkTree::from_records(&config.seed, true, IdMint::new());
        let item = tree.categories()[0].bookmarks[0].clone();
        let row_id = item.id.to_string();

        let _handle = leptos::mount::mount_to(host.clone(), move || {
            provide_context(Store::new(AppState::new(tree)));
            provide_context(TreeContext::new(config));
            view! { <TreeItemRow item=item on_update=Callback::new(|_: TreeUpdateEvent<TreeItem>| {}) /> }
        });
        assert!(host.query_selector("li.editor").unwrap().is_none());

        // Click the row itself, not the link inside it
        let row: web_sys::HtmlElement = doc.get_element_by_id(&row_id).unwrap().unchecked_into();
        row.click();
        TimeoutFuture::new(0).await;

        assert!(host.query_selector("li.editor").unwrap().is_some());
        host.remove();
    }
}
