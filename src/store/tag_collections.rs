//! Per-tag collection state machine.
//!
//! Tracks, per tag, the fetch-in-progress and invalidation flags, the
//! accumulated ordered-unique id list, the pagination cursor, and the
//! end-of-list flag.

use std::collections::HashMap;

use crate::store::action::{Action, TagFilter};

/// Collection state for a single tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBookmarks {
    pub is_fetching: bool,
    pub did_invalidate: bool,
    pub at_end: bool,
    /// Ordered set of bookmark ids; a set-union of every successful fetch.
    pub items: Vec<String>,
    pub next_page: Option<String>,
    pub last_updated: Option<i64>,
}

/// Per-tag collection table keyed by filter.
pub type TagCollections = HashMap<TagFilter, TagBookmarks>;

/// Routes tag-scoped events to the owning tag's slice, creating a default
/// slice on first sight of a tag.
pub fn reduce(collections: &mut TagCollections, action: &Action) {
    let tag = match action {
        Action::InvalidateTag(tag) | Action::FetchPending(tag) => tag,
        Action::FetchSuccess { tag, .. } | Action::FetchFailure { tag, .. } => tag,
        _ => return,
    };
    reduce_tag(collections.entry(tag.clone()).or_default(), action);
}

fn reduce_tag(slice: &mut TagBookmarks, action: &Action) {
    match action {
        Action::InvalidateTag(_) => slice.did_invalidate = true,
        Action::FetchPending(_) => slice.is_fetching = true,
        Action::FetchSuccess {
            payload,
            received_at,
            ..
        } => {
            slice.is_fetching = false;
            slice.did_invalidate = false;
            union_items(&mut slice.items, payload.entities.bookmarks.keys());
            slice.next_page = payload.next_page.clone();
            slice.at_end = slice.next_page.is_none();
            slice.last_updated = Some(*received_at);
        }
        // Stale data beats no data: a failed fetch only drops the flag.
        Action::FetchFailure { .. } => slice.is_fetching = false,
        _ => {}
    }
}

/// Stable union: known ids keep their position, unseen ids append in payload
/// order. Backends occasionally repeat a bookmark across pages; it must still
/// appear exactly once.
fn union_items<'a, I>(items: &mut Vec<String>, incoming: I)
where
    I: IntoIterator<Item = &'a String>,
{
    for id in incoming {
        if !items.iter().any(|known| known == id) {
            items.push(id.clone());
        }
    }
}
