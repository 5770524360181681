//! Inline Editor State
//!
//! The state machine behind the `Editor` component. It holds the edited
//! text and link, and latches after the first terminal outcome so that each
//! editor reports exactly one of save/close/delete.

/// Link value used when the edit target has no url
pub const DEFAULT_LINK: &str = "#";

/// Toolbar buttons an editor may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorButton {
    Cancel,
    Delete,
    Link,
}

impl EditorButton {
    /// Button identity as forwarded by the toolbar
    pub fn name(&self) -> &'static str {
        match self {
            EditorButton::Cancel => "cancel",
            EditorButton::Delete => "delete",
            EditorButton::Link => "link",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EditorButton::Cancel => "✗",
            EditorButton::Delete => "🗑",
            EditorButton::Link => "🔗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    pub buttons: Vec<EditorButton>,
    pub open_with_link_input: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            buttons: vec![EditorButton::Cancel, EditorButton::Delete],
            open_with_link_input: false,
        }
    }
}

impl EditorOptions {
    /// Category title: rename or delete, no link row
    pub fn title() -> Self {
        Self::default()
    }

    /// Freshly added bookmark: link row starts open
    pub fn new_bookmark() -> Self {
        Self {
            buttons: vec![EditorButton::Cancel, EditorButton::Link],
            open_with_link_input: true,
        }
    }

    /// Existing bookmark row
    pub fn bookmark() -> Self {
        Self {
            buttons: vec![EditorButton::Cancel, EditorButton::Delete, EditorButton::Link],
            open_with_link_input: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishKind {
    Save,
    Close,
    Delete,
}

/// Terminal outcome of an editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorFinishEvent {
    pub kind: FinishKind,
    pub edit_result: EditResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    text: String,
    link: String,
    link_editor_is_open: bool,
    buttons: Vec<EditorButton>,
    finished: bool,
}

impl EditorState {
    pub fn new(text: &str, link: Option<&str>, options: &EditorOptions) -> Self {
        Self {
            text: text.to_string(),
            link: link.unwrap_or(DEFAULT_LINK).to_string(),
            link_editor_is_open: options.open_with_link_input,
            buttons: options.buttons.clone(),
            finished: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn link_editor_is_open(&self) -> bool {
        self.link_editor_is_open
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn set_text(&mut self, text: String) {
        if !self.finished {
            self.text = text;
        }
    }

    pub fn set_link(&mut self, link: String) {
        if !self.finished {
            self.link = link;
        }
    }

    /// Enter key, or focus settled outside the editor
    pub fn save(&mut self) -> Option<EditorFinishEvent> {
        self.finish(FinishKind::Save)
    }

    /// Deferred focus-out check; `focus_inside` is the settled focus state
    pub fn focus_settled(&mut self, focus_inside: bool) -> Option<EditorFinishEvent> {
        if focus_inside {
            None
        } else {
            self.save()
        }
    }

    /// Dispatch a toolbar press by button identity
    pub fn press(&mut self, button: EditorButton) -> Option<EditorFinishEvent> {
        if self.finished || !self.buttons.contains(&button) {
            return None;
        }
        match button {
            EditorButton::Cancel => self.finish(FinishKind::Close),
            EditorButton::Delete => self.finish(FinishKind::Delete),
            EditorButton::Link => {
                self.link_editor_is_open = !self.link_editor_is_open;
                None
            }
        }
    }

    fn finish(&mut self, kind: FinishKind) -> Option<EditorFinishEvent> {
        if self.finished {
            return None;
        }
        self.finished = true;
        Some(EditorFinishEvent {
            kind,
            edit_result: EditResult {
                text: self.text.clone(),
                link: self.link.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_link_defaults() {
        let state = EditorState::new("Work", None, &EditorOptions::title());
        assert_eq!(state.link(), "#");
        assert!(!state.link_editor_is_open());
    }

    #[test]
    fn test_unchanged_save_returns_initial_values() {
        let mut state = EditorState::new("Docs", Some("http://x"), &EditorOptions::bookmark());
        let event = state.save().unwrap();
        assert_eq!(event.kind, FinishKind::Save);
        assert_eq!(event.edit_result, EditResult { text: "Docs".into(), link: "http://x".into() });
    }

    #[test]
    fn test_only_one_outcome() {
        let mut state = EditorState::new("Docs", None, &EditorOptions::bookmark());
        assert!(state.press(EditorButton::Delete).is_some());
        assert!(state.save().is_none());
        assert!(state.press(EditorButton::Cancel).is_none());
        assert!(state.focus_settled(false).is_none());
        assert!(state.is_finished());
    }

    #[test]
    fn test_input_after_finish_is_ignored() {
        let mut state = EditorState::new("Docs", None, &EditorOptions::bookmark());
        state.save();
        state.set_text("changed".into());
        assert_eq!(state.text(), "Docs");
    }

    #[test]
    fn test_cancel_returns_current_values_as_close() {
        let mut state = EditorState::new("Docs", None, &EditorOptions::bookmark());
        state.set_text("Draft".into());
        let event = state.press(EditorButton::Cancel).unwrap();
        assert_eq!(event.kind, FinishKind::Close);
        assert_eq!(event.edit_result.text, "Draft");
    }

    #[test]
    fn test_link_toggle_preserves_value() {
        let mut state = EditorState::new("Docs", Some("http://x"), &EditorOptions::bookmark());
        assert!(state.press(EditorButton::Link).is_none());
        assert!(state.link_editor_is_open());
        assert!(state.press(EditorButton::Link).is_none());
        assert!(!state.link_editor_is_open());
        assert_eq!(state.link(), "http://x");
        assert!(!state.is_finished());
    }

    #[test]
    fn test_link_edit_survives_toggle() {
        let mut state = EditorState::new("New", Some(""), &EditorOptions::new_bookmark());
        assert!(state.link_editor_is_open());
        state.set_link("http://y".into());
        state.press(EditorButton::Link);
        state.press(EditorButton::Link);
        assert_eq!(state.save().unwrap().edit_result.link, "http://y");
    }

    #[test]
    fn test_unlisted_button_is_ignored() {
        let mut state = EditorState::new("Work", None, &EditorOptions::title());
        assert!(state.press(EditorButton::Link).is_none());
        assert!(!state.link_editor_is_open());
    }

    #[test]
    fn test_focus_inside_does_not_save() {
        let mut state = EditorState::new("Docs", None, &EditorOptions::bookmark());
        assert!(state.focus_settled(true).is_none());
        assert!(!state.is_finished());
        assert_eq!(state.focus_settled(false).unwrap().kind, FinishKind::Save);
    }
}
