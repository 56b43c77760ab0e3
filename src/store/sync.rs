//! Dispatch layer tying the store to the HTTP gateway.
//!
//! Implements the operations the UI collaborator drives: tag selection and
//! invalidation, lifecycle-tracked fetches, form edits, and submit. Gateway
//! failures are caught here and turned into failure events — reducers then
//! downgrade `is_fetching` while keeping previously-fetched data intact. No
//! retry logic lives here; a failed fetch needs an explicit new fetch.

use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use crate::services::credential_store::CredentialSource;
use crate::services::gateway::{collection_endpoint, resolve_cursor, BookmarkGateway};
use crate::store::action::{Action, SelectedTag, TagFilter};
use crate::store::{State, Store};
use crate::types::errors::GatewayError;

/// Sync engine: one store, one gateway, one base API URL.
pub struct BookmarkSync<C: CredentialSource> {
    store: Store,
    gateway: BookmarkGateway<C>,
    base: String,
}

impl<C: CredentialSource> BookmarkSync<C> {
    pub fn new<S: Into<String>>(base: S, credentials: C) -> Self {
        Self {
            store: Store::new(),
            gateway: BookmarkGateway::new(credentials),
            base: base.into(),
        }
    }

    pub fn state(&self) -> &State {
        self.store.state()
    }

    pub fn select_tag(&mut self, tag: TagFilter) {
        self.store.dispatch(Action::SelectTag(tag));
    }

    /// Marks a tag's collection stale so the next `fetch_bookmarks_if_needed`
    /// refetches it even though cached items are still shown.
    pub fn invalidate_tag(&mut self, tag: TagFilter) {
        self.store.dispatch(Action::InvalidateTag(tag));
    }

    /// Cache policy: fetch when the tag is unknown or empty, skip while a
    /// fetch is in flight, and refetch only after invalidation.
    pub fn should_fetch(&self, tag: &TagFilter) -> bool {
        match self.store.state().bookmarks_by_tag.get(tag) {
            None => true,
            Some(slice) if slice.is_fetching => false,
            Some(slice) if slice.items.is_empty() => true,
            Some(slice) => slice.did_invalidate,
        }
    }

    /// Fetches the next page for a tag, driving its slice through
    /// pending → success/failure. Resumes from the slice's stored cursor;
    /// an invalidated (or unknown) tag starts over from page one. The
    /// per-tag slice serializes its own transitions; fetches for different
    /// tags may interleave arbitrarily.
    pub async fn fetch_bookmarks(&mut self, tag: TagFilter) -> Result<(), GatewayError> {
        let cursor = self
            .store
            .state()
            .bookmarks_by_tag
            .get(&tag)
            .filter(|slice| !slice.did_invalidate)
            .and_then(|slice| slice.next_page.clone());

        self.store.dispatch(Action::FetchPending(tag.clone()));

        let result = match (&cursor, &tag) {
            (Some(next), _) => {
                self.gateway
                    .fetch_collection(&resolve_cursor(&self.base, next))
                    .await
            }
            (None, TagFilter::All) => {
                self.gateway
                    .fetch_collection(&collection_endpoint(&self.base))
                    .await
            }
            (None, TagFilter::Tag(name)) => self.gateway.fetch_by_tag(&self.base, name).await,
        };

        match result {
            Ok(payload) => {
                self.store.dispatch(Action::FetchSuccess {
                    tag,
                    payload,
                    received_at: now(),
                });
                Ok(())
            }
            Err(err) => {
                warn!("bookmark fetch for {} failed: {}", tag, err);
                self.store.dispatch(Action::FetchFailure {
                    tag,
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Fetches only when [`should_fetch`](Self::should_fetch) says so.
    /// Returns whether a fetch was issued.
    pub async fn fetch_bookmarks_if_needed(
        &mut self,
        tag: TagFilter,
    ) -> Result<bool, GatewayError> {
        if !self.should_fetch(&tag) {
            return Ok(false);
        }
        self.fetch_bookmarks(tag).await.map(|_| true)
    }

    pub fn update_form_field<S: Into<String>>(&mut self, name: S, value: S) {
        self.store.dispatch(Action::FormUpdateValue {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn reset_form(&mut self) {
        self.store.dispatch(Action::FormReset);
    }

    /// Submits the current form: POST for a create (`id` is `None`), PATCH to
    /// the id-addressed endpoint for an update. On success the normalized
    /// response merges into the entity table, the form resets, and the
    /// selected tag is invalidated so the next fetch reflects the save. On
    /// failure the form keeps its edits.
    pub async fn submit_bookmark(&mut self, id: Option<String>) -> Result<(), GatewayError> {
        let draft = self.store.state().bookmark_form.to_draft(id);
        let endpoint = collection_endpoint(&self.base);

        let result = match draft.id {
            Some(_) => self.gateway.update_bookmark(&endpoint, &draft).await,
            None => self.gateway.save_bookmark(&endpoint, &draft).await,
        };

        match result {
            Ok(payload) => {
                self.store.dispatch(Action::SaveSuccess { payload });
                self.store.dispatch(Action::FormReset);
                if let SelectedTag::Selected(tag) = self.store.state().selected_tag.clone() {
                    self.store.dispatch(Action::InvalidateTag(tag));
                }
                Ok(())
            }
            Err(err) => {
                warn!("bookmark save failed: {}", err);
                Err(err)
            }
        }
    }
}

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
