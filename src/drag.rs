//! Drag Payloads
//!
//! Snapshots of a dragged category or bookmark, carried on the DataTransfer
//! as JSON. The drop target rebuilds a fresh node from the snapshot.
//!
//! Wire form: `{"kind":"bookmark","payload":{"name":..,"url":..}}`.
//! The older `{"classList":["bookmark"], "n":.., "u":..}` form is still
//! decoded; its leading class tag decides the type.

use leptos_dragdrop::DragOptions;
use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};
use crate::models::{BookmarkCategoryRecord, BookmarkRecord};

pub const CATEGORY_KIND: &str = "category";
pub const BOOKMARK_KIND: &str = "bookmark";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum DragPayload {
    Category(BookmarkCategoryRecord),
    Bookmark(BookmarkRecord),
}

impl DragPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            DragPayload::Category(_) => CATEGORY_KIND,
            DragPayload::Bookmark(_) => BOOKMARK_KIND,
        }
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn decode(data: &str) -> TreeResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(data).map_err(|e| TreeError::MalformedPayload(e.to_string()))?;

        if value.get("kind").is_some() {
            return serde_json::from_value(value).map_err(|e| TreeError::MalformedPayload(e.to_string()));
        }

        let tag = value
            .get("classList")
            .and_then(|list| list.as_array())
            .and_then(|list| list.first())
            .and_then(|tag| tag.as_str())
            .ok_or_else(|| TreeError::MalformedPayload("missing leading class tag".to_string()))?
            .to_string();

        let malformed = |e: serde_json::Error| TreeError::MalformedPayload(e.to_string());
        match tag.as_str() {
            CATEGORY_KIND => serde_json::from_value(value).map(DragPayload::Category).map_err(malformed),
            BOOKMARK_KIND => serde_json::from_value(value).map(DragPayload::Bookmark).map_err(malformed),
            other => Err(TreeError::MalformedPayload(format!("unknown class tag `{}`", other))),
        }
    }
}

/// Categories land on categories and take both kinds
pub fn category_drag_options() -> DragOptions {
    DragOptions::new(CATEGORY_KIND, &[CATEGORY_KIND], &[CATEGORY_KIND, BOOKMARK_KIND])
}

/// Bookmarks land on either kind and take only bookmarks
pub fn bookmark_drag_options() -> DragOptions {
    DragOptions::new(BOOKMARK_KIND, &[CATEGORY_KIND, BOOKMARK_KIND], &[BOOKMARK_KIND])
}


// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use leptos_dragdrop::{drop_succeeded, DATA_FORMAT};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_payload_survives_data_transfer() {
        let dt = web_sys::DataTransfer::new().unwrap();
        let payload = DragPayload::Category(BookmarkCategoryRecord {
            name: "Work".into(),
            bookmarks: vec![BookmarkRecord::new("Docs", "http://x")],
        });
        dt.set_data(DATA_FORMAT, &payload.encode()).unwrap();

        let data = dt.get_data(DATA_FORMAT).unwrap();
        assert_eq!(DragPayload::decode(&data).unwrap(), payload);
    }

    #[wasm_bindgen_test]
    fn test_drop_effect_decides_removal() {
        let dt = web_sys::DataTransfer::new().unwrap();
        dt.set_drop_effect("none");
        assert!(!drop_succeeded(&dt.drop_effect()));
        dt.set_drop_effect("move");
        assert!(drop_succeeded(&dt.drop_effect()));
    }
}
