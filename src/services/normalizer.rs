//! Response Normalizer for the Puka client.
//!
//! Converts a raw JSON-API document — single resource or collection — into a
//! flat entity map keyed by id, plus the next-page cursor. This is the only
//! place raw payload shape is interpreted; everything downstream works with
//! [`NormalizedPayload`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::bookmark::BookmarkAttributes;
use crate::types::errors::NormalizationError;
use crate::types::wire::Document;

/// Flat entity tables produced by normalization. Keyed by resource id;
/// insertion order follows document order, which the per-tag union relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    pub bookmarks: IndexMap<String, BookmarkAttributes>,
}

/// A normalized API response: entities plus the pagination cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPayload {
    pub entities: Entities,
    pub next_page: Option<String>,
}

/// Normalizes a document into entity tables.
///
/// Every attributes object gains an `id` copied from its sibling resource id.
/// Fails on the first resource missing `id` or `attributes`; no partial
/// result is produced — the caller must not merge anything from a payload
/// that did not normalize in full.
pub fn normalize(document: Document) -> Result<NormalizedPayload, NormalizationError> {
    let next_page = document.links.and_then(|links| links.next);

    let resources = document.data.into_resources();
    let mut bookmarks = IndexMap::with_capacity(resources.len());
    for resource in resources {
        let id = resource.id.ok_or(NormalizationError::MissingId)?;
        let mut attributes = resource
            .attributes
            .ok_or_else(|| NormalizationError::MissingAttributes(id.clone()))?;
        attributes.id = id.clone();
        bookmarks.insert(id, attributes);
    }

    Ok(NormalizedPayload {
        entities: Entities { bookmarks },
        next_page,
    })
}
