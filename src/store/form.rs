//! Bookmark form reducer: in-progress edits for a single bookmark.
//!
//! No validation happens here — that belongs to the UI layer. Fields update
//! one at a time by name; reset returns the canonical all-empty default.

use log::warn;

use crate::store::action::Action;
use crate::types::bookmark::{BookmarkDraft, TagsField};

/// In-progress form values. `tags` stays in the comma-joined form the user
/// typed; the gateway splits it at save time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkForm {
    pub title: String,
    pub url: String,
    pub description: String,
    pub tags: String,
}

impl BookmarkForm {
    /// Builds a save draft from the current form values. `id` comes from the
    /// caller: `None` for a create, the persisted id for an update.
    pub fn to_draft(&self, id: Option<String>) -> BookmarkDraft {
        BookmarkDraft {
            id,
            title: self.title.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
            tags: TagsField::Text(self.tags.clone()),
        }
    }
}

pub fn reduce(form: &mut BookmarkForm, action: &Action) {
    match action {
        Action::FormUpdateValue { name, value } => match name.as_str() {
            "title" => form.title = value.clone(),
            "url" => form.url = value.clone(),
            "description" => form.description = value.clone(),
            "tags" => form.tags = value.clone(),
            other => warn!("ignoring update for unknown form field {:?}", other),
        },
        Action::FormReset => *form = BookmarkForm::default(),
        _ => {}
    }
}
