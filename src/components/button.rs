//! Button Component

use leptos::prelude::*;
use web_sys::MouseEvent;

/// A labeled clickable control
///
/// With `keep_focus`, pressing the button does not steal focus from an
/// input, so an open editor does not see a focus-out.
#[component]
pub fn Button(
    #[prop(into)] label: String,
    #[prop(into, optional)] title: String,
    #[prop(optional)] keep_focus: bool,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="tree-button"
            title=title
            on:mousedown=move |ev: MouseEvent| {
                if keep_focus {
                    ev.prevent_default();
                }
            }
            on:click=move |ev: MouseEvent| {
                ev.stop_propagation();
                on_click.run(());
            }
        >
            {label}
        </button>
    }
}
