use std::fmt;

use crate::services::normalizer::NormalizedPayload;

/// Scope of a bookmark collection: everything, or a single tag.
///
/// `All` models the implicit "no tag filter" view and keys its own slice in
/// the per-tag collection state like any real tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagFilter {
    All,
    Tag(String),
}

impl TagFilter {
    pub fn tag<S: Into<String>>(tag: S) -> Self {
        TagFilter::Tag(tag.into())
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::All => write!(f, "(all)"),
            TagFilter::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

/// The tag currently being viewed. Starts out as a sentinel distinct from any
/// real selection, including the "all bookmarks" case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectedTag {
    #[default]
    Uninitialized,
    Selected(TagFilter),
}

/// Events dispatched against the store. Each slice reducer receives the whole
/// event and reacts only to the kinds it cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTag(TagFilter),
    /// Marks a tag's cached collection stale, forcing a future refetch while
    /// the cached items stay visible.
    InvalidateTag(TagFilter),
    FetchPending(TagFilter),
    FetchSuccess {
        tag: TagFilter,
        payload: NormalizedPayload,
        received_at: i64,
    },
    FetchFailure {
        tag: TagFilter,
        message: String,
    },
    /// A save round-trip succeeded; the normalized response lands in the
    /// entity table but is not attributable to any tag.
    SaveSuccess {
        payload: NormalizedPayload,
    },
    FormUpdateValue {
        name: String,
        value: String,
    },
    FormReset,
}
