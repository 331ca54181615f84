//! Uncommitted text behind the input modal.

/// Local draft of the text being edited.
///
/// The caller owns both `is_open` and `value`; the buffer only remembers
/// what was typed and which `value` the typing started from. A draft made
/// against an older `value` is never shown, so the first frame after the
/// dialog opens already holds the caller's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    draft: Option<Draft>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Draft {
    base: String,
    text: String,
}

impl EditBuffer {
    /// Text to show for the caller's current `value`.
    pub fn text<'a>(&'a self, value: &'a str) -> &'a str {
        match &self.draft {
            Some(draft) if draft.base == value => &draft.text,
            _ => value,
        }
    }

    pub fn edit(&mut self, value: &str, text: impl Into<String>) {
        self.draft = Some(Draft {
            base: value.to_string(),
            text: text.into(),
        });
    }

    /// Forgets the draft. Called when the dialog opens, closes or the
    /// caller pushes a new `value`.
    pub fn reset(&mut self) {
        self.draft = None;
    }

    /// Drops the edit; the caller's `value` shows again.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// The text to hand to the caller. The draft stays until the next reset.
    pub fn commit(&self, value: &str) -> String {
        self.text(value).to_string()
    }
}
