//! JSON-API wire types for the Puka bookmarks endpoint.
//!
//! The backend speaks `application/vnd.api+json`: a collection response is
//! `{ "data": [ { id, attributes } ... ], "links": { "next": ... } }` and a
//! single-resource response is `{ "data": { id, attributes } }`. The
//! single-vs-collection split is resolved here, once, as a tagged union —
//! never by shape-sniffing in callers.

use serde::Deserialize;

use crate::types::bookmark::BookmarkAttributes;

/// Top-level response document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub data: PrimaryData,
    #[serde(default)]
    pub links: Option<Links>,
}

/// Primary data of a document: one resource or a collection of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    Collection(Vec<Resource>),
    Single(Resource),
}

impl PrimaryData {
    /// Flattens to a list of resources in document order.
    pub fn into_resources(self) -> Vec<Resource> {
        match self {
            PrimaryData::Collection(resources) => resources,
            PrimaryData::Single(resource) => vec![resource],
        }
    }
}

/// A single resource object. `id` and `attributes` are optional at the wire
/// level so the normalizer can reject their absence explicitly rather than
/// through a generic parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub attributes: Option<BookmarkAttributes>,
}

/// Pagination links. Only `next` is consumed by this client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub next: Option<String>,
}
