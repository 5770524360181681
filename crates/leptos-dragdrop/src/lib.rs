//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos.
//! Every draggable node carries a kind tag ("category", "bookmark", ...).
//! A drag source lists the zone kinds it may land on, a drop zone lists the
//! drag kinds it accepts. The payload itself travels on the DataTransfer.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

/// DataTransfer format used for payloads
pub const DATA_FORMAT: &str = "text";

/// How long `drag_just_ended` stays raised after a drag (ms)
const DRAG_END_GRACE_MS: i32 = 100;

/// Drag/drop behaviour of a single node
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragOptions {
    /// Kind tag of this node, both as drag item and as drop zone
    pub kind: String,
    /// Zone kinds this node may be dropped on
    pub valid_dropzones: Vec<String>,
    /// Drag kinds this node accepts when used as a drop zone
    pub valid_drag_items: Vec<String>,
}

impl DragOptions {
    pub fn new(kind: &str, valid_dropzones: &[&str], valid_drag_items: &[&str]) -> Self {
        Self {
            kind: kind.to_string(),
            valid_dropzones: valid_dropzones.iter().map(|s| s.to_string()).collect(),
            valid_drag_items: valid_drag_items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The node currently being dragged
#[derive(Clone, Debug, PartialEq)]
pub struct DragSource {
    pub element_id: String,
    pub kind: String,
    pub valid_dropzones: Vec<String>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragSource>>,
    pub dragging_write: WriteSignal<Option<DragSource>>,
    /// Element id of the zone currently hovered by an acceptable drag
    pub drop_target_read: ReadSignal<Option<String>>,
    pub drop_target_write: WriteSignal<Option<String>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragSource>);
    let (drop_target_read, drop_target_write) = signal(None::<String>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
    }
}

/// Whether a zone accepts the given drag source.
/// A node never accepts itself.
pub fn accepts(source: &DragSource, zone_id: &str, zone: &DragOptions) -> bool {
    source.element_id != zone_id
        && source.valid_dropzones.iter().any(|k| *k == zone.kind)
        && zone.valid_drag_items.iter().any(|k| *k == source.kind)
}

/// Whether a `dropEffect` reported at dragend means the drop landed
pub fn drop_succeeded(drop_effect: &str) -> bool {
    drop_effect != "none"
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            DRAG_END_GRACE_MS,
        );
        cb.forget();
    }
}

/// Create dragstart handler for a draggable node.
/// `data` is evaluated at drag time so the payload reflects current state.
pub fn make_on_dragstart<F>(
    dnd: DndSignals,
    element_id: String,
    options: DragOptions,
    data: F,
) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn() -> String + Clone + 'static,
{
    move |ev: DragEvent| {
        // Nested draggables: innermost node owns the drag
        ev.stop_propagation();
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data(DATA_FORMAT, &data());
            dt.set_effect_allowed("move");
        }
        log::debug!("[DND] dragstart {} ({})", element_id, options.kind);
        dnd.dragging_write.set(Some(DragSource {
            element_id: element_id.clone(),
            kind: options.kind.clone(),
            valid_dropzones: options.valid_dropzones.clone(),
        }));
    }
}

/// Create dragover handler for a drop zone.
/// Unacceptable drags are left to bubble to an outer zone, except a node
/// hovering over itself.
pub fn make_on_dragover(
    dnd: DndSignals,
    element_id: String,
    options: DragOptions,
) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        let Some(source) = dnd.dragging_read.get_untracked() else { return };
        if source.element_id == element_id {
            // Hovering itself: not a drop, and not the outer zone's either
            ev.stop_propagation();
            return;
        }
        if !accepts(&source, &element_id, &options) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        if dnd.drop_target_read.get_untracked().as_deref() != Some(element_id.as_str()) {
            dnd.drop_target_write.set(Some(element_id.clone()));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: DndSignals, element_id: String) -> impl Fn(DragEvent) + Clone + 'static {
    move |_ev: DragEvent| {
        if dnd.drop_target_read.get_untracked().as_deref() == Some(element_id.as_str()) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Create drop handler for a drop zone; `on_drop` receives the raw payload
pub fn make_on_drop<F>(
    dnd: DndSignals,
    element_id: String,
    options: DragOptions,
    on_drop: F,
) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(String) + Clone + 'static,
{
    move |ev: DragEvent| {
        let Some(source) = dnd.dragging_read.get_untracked() else { return };
        if source.element_id == element_id {
            ev.stop_propagation();
            return;
        }
        if !accepts(&source, &element_id, &options) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        dnd.drop_target_write.set(None);

        let data = ev
            .data_transfer()
            .and_then(|dt| dt.get_data(DATA_FORMAT).ok())
            .unwrap_or_default();
        log::debug!("[DND] drop {} on {}", source.element_id, element_id);
        on_drop(data);
    }
}

/// Create dragend handler for a draggable node.
/// `on_moved` only runs when the drop landed somewhere.
pub fn make_on_dragend<F>(dnd: DndSignals, on_moved: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn() + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.stop_propagation();
        let moved = ev
            .data_transfer()
            .map(|dt| drop_succeeded(&dt.drop_effect()))
            .unwrap_or(false);
        end_drag(&dnd);
        if moved {
            on_moved();
        }
    }
}

/// Whether the node with this id is the hovered drop target
pub fn is_drop_target(dnd: DndSignals, element_id: &str) -> bool {
    dnd.drop_target_read.get().as_deref() == Some(element_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(id: &str, kind: &str, zones: &[&str]) -> DragSource {
        DragSource {
            element_id: id.to_string(),
            kind: kind.to_string(),
            valid_dropzones: zones.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_category_zone_accepts_both_kinds() {
        let zone = DragOptions::new("category", &["category"], &["category", "bookmark"]);
        assert!(accepts(&source("category-2", "category", &["category"]), "category-1", &zone));
        assert!(accepts(&source("bookmark-4", "bookmark", &["category", "bookmark"]), "category-1", &zone));
    }

    #[test]
    fn test_bookmark_zone_rejects_category() {
        let zone = DragOptions::new("bookmark", &["category", "bookmark"], &["bookmark"]);
        assert!(!accepts(&source("category-2", "category", &["category"]), "bookmark-1", &zone));
        assert!(accepts(&source("bookmark-3", "bookmark", &["category", "bookmark"]), "bookmark-1", &zone));
    }

    #[test]
    fn test_never_accepts_self() {
        let zone = DragOptions::new("category", &["category"], &["category", "bookmark"]);
        assert!(!accepts(&source("category-1", "category", &["category"]), "category-1", &zone));
    }

    #[test]
    fn test_drop_succeeded() {
        assert!(drop_succeeded("move"));
        assert!(drop_succeeded("copy"));
        assert!(!drop_succeeded("none"));
    }
}
