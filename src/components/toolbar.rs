//! Toolbar Component

use leptos::prelude::*;

use crate::components::Button;
use crate::editor::EditorButton;

/// Row of editor buttons; forwards which one was pressed
#[component]
pub fn Toolbar(buttons: Vec<EditorButton>, on_press: Callback<EditorButton>) -> impl IntoView {
    view! {
        <div class="toolbar">
            {buttons
                .into_iter()
                .map(|button| {
                    view! {
                        <Button
                            label=button.label()
                            title=button.name()
                            keep_focus=true
                            on_click=Callback::new(move |_: ()| on_press.run(button))
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
