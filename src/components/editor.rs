//! Inline Editor Component
//!
//! Replaces a title or bookmark row with a text input, a toolbar and an
//! optional link input. Emits exactly one `EditorFinishEvent`.

use gloo_timers::future::TimeoutFuture;
use leptos::html::{Input, Li};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::components::{EditTarget, Toolbar};
use crate::editor::{EditorButton, EditorFinishEvent, EditorOptions, EditorState};

/// Whether the document's focused element lies inside `root`
pub fn focus_is_within(root: &web_sys::Node) -> bool {
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    match active {
        Some(el) => root.contains(Some(el.unchecked_ref::<web_sys::Node>())),
        None => false,
    }
}

/// Run one state transition and report the outcome, if it produced one.
/// State is latched before the callback runs; the latch hides the subtree
/// and ignores any further input or focus changes.
fn step(
    state: RwSignal<EditorState>,
    on_finish: Callback<EditorFinishEvent>,
    target_id: StoredValue<String>,
    transition: impl FnOnce(&mut EditorState) -> Option<EditorFinishEvent>,
) {
    if let Some(event) = state.try_update(transition).flatten() {
        log::debug!("[EDITOR] {:?} on {}", event.kind, target_id.get_value());
        on_finish.run(event);
    }
}

#[component]
pub fn Editor(
    target: EditTarget,
    options: EditorOptions,
    on_finish: Callback<EditorFinishEvent>,
) -> impl IntoView {
    log::debug!("[EDITOR] Open on {}", target.id);

    let state = RwSignal::new(EditorState::new(&target.name, target.url.as_deref(), &options));
    let root = NodeRef::<Li>::new();
    let text_input = NodeRef::<Input>::new();
    let target_id = StoredValue::new(target.id.clone());

    let save = move || step(state, on_finish, target_id, EditorState::save);

    // Focus is not settled during focusout; decide after this dispatch turn
    let on_focusout = move |_: web_sys::FocusEvent| {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            let inside = root
                .try_get_untracked()
                .flatten()
                .map(|li| focus_is_within(&li))
                .unwrap_or(false);
            step(state, on_finish, target_id, |s| s.focus_settled(inside));
        });
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            save();
        }
    };

    let on_press = Callback::new(move |button: EditorButton| {
        step(state, on_finish, target_id, |s| s.press(button));
    });

    Effect::new(move |_| {
        if let Some(input) = text_input.get() {
            let _ = input.focus();
        }
    });

    let buttons = options.buttons.clone();
    let is_open = move || !state.with(|s| s.is_finished());
    let link_open = move || state.with(|s| s.link_editor_is_open());

    view! {
        <Show when=is_open>
            <li class="editor" node_ref=root>
                <div class="firstRow">
                    <input
                        type="text"
                        node_ref=text_input
                        value=state.with_untracked(|s| s.text().to_string())
                        on:input=move |ev| state.update(|s| s.set_text(event_target_value(&ev)))
                        on:keydown=on_keydown
                        on:focusout=on_focusout
                    />
                    <Toolbar buttons=buttons.clone() on_press=on_press />
                </div>
                <Show when=link_open>
                    <div class="secondRow">
                        <input
                            type="text"
                            placeholder="https://"
                            value=state.with_untracked(|s| s.link().to_string())
                            on:input=move |ev| state.update(|s| s.set_link(event_target_value(&ev)))
                            on:keydown=on_keydown
                            on:focusout=on_focusout
                        />
                    </div>
                </Show>
            </li>
        </Show>
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_focus_is_within_tracks_active_element() {
        let doc = document();
        let body = doc.body().unwrap();

        let li = doc.create_element("li").unwrap();
        let inner = doc.create_element("input").unwrap();
        li.append_child(&inner).unwrap();
        let outer = doc.create_element("input").unwrap();
        body.append_child(&li).unwrap();
        body.append_child(&outer).unwrap();

        inner.unchecked_ref::<web_sys::HtmlElement>().focus().unwrap();
        assert!(focus_is_within(&li));

        outer.unchecked_ref::<web_sys::HtmlElement>().focus().unwrap();
        assert!(!focus_is_within(&li));

        li.remove();
        outer.remove();
    }
}
