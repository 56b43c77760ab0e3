//! Puka client state store.
//!
//! A single owned state tree mutated only through dispatched [`Action`]s.
//! Each slice has its own pure reducer; `dispatch` fans one action across all
//! of them, so composition is structural — no ambient globals. Dispatch is
//! serialized by `&mut self`: every transition applies atomically and two
//! tags' events can interleave between dispatches but never within one.

pub mod action;
pub mod entities;
pub mod form;
pub mod selected_tag;
pub mod sync;
pub mod tag_collections;

pub use action::{Action, SelectedTag, TagFilter};
pub use form::BookmarkForm;
pub use sync::BookmarkSync;
pub use tag_collections::{TagBookmarks, TagCollections};

use crate::services::normalizer::Entities;

/// The whole addressable state tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub selected_tag: SelectedTag,
    pub entities: Entities,
    pub bookmarks_by_tag: TagCollections,
    pub bookmark_form: BookmarkForm,
}

/// Store driver: owns the state tree and applies actions to it.
pub struct Store {
    state: State,
}

impl Store {
    /// Creates a store with empty entity and collection tables, the
    /// uninitialized tag sentinel, and a blank form.
    pub fn new() -> Self {
        Self {
            state: State::default(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Applies one action to every slice reducer.
    pub fn dispatch(&mut self, action: Action) {
        selected_tag::reduce(&mut self.state.selected_tag, &action);
        entities::reduce(&mut self.state.entities, &action);
        tag_collections::reduce(&mut self.state.bookmarks_by_tag, &action);
        form::reduce(&mut self.state.bookmark_form, &action);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
