//! Unit tests for the response normalizer.
//!
//! These tests exercise `normalize` on collection and single-resource
//! JSON-API documents, the id-duplication rule, cursor extraction, and the
//! all-or-nothing handling of malformed resources.

use puka_client::services::normalizer::normalize;
use puka_client::types::errors::NormalizationError;
use puka_client::types::wire::Document;

fn parse(body: &str) -> Document {
    serde_json::from_str(body).expect("document should parse")
}

/// A collection document flattens to an id-keyed map in document order, with
/// the next-page cursor pulled out of `links.next`.
#[test]
fn test_collection_normalizes_to_entity_map() {
    let document = parse(
        r#"{
            "data": [
                { "id": "1", "type": "bookmarks", "attributes": { "title": "One", "url": "https://one.example", "description": "", "tags": ["go"] } },
                { "id": "2", "type": "bookmarks", "attributes": { "title": "Two", "url": "https://two.example", "description": "", "tags": [] } }
            ],
            "links": { "next": "/v0/bookmarks?page=2" }
        }"#,
    );

    let payload = normalize(document).unwrap();

    let ids: Vec<&String> = payload.entities.bookmarks.keys().collect();
    assert_eq!(ids, ["1", "2"]);
    assert_eq!(payload.next_page.as_deref(), Some("/v0/bookmarks?page=2"));
    assert_eq!(payload.entities.bookmarks["1"].title, "One");
    assert_eq!(payload.entities.bookmarks["1"].tags, ["go"]);
}

/// Every attributes object gains an `id` copied from its sibling resource id.
#[test]
fn test_id_is_copied_into_attributes() {
    let document = parse(
        r#"{ "data": { "id": "9", "attributes": { "title": "Nine", "url": "https://nine.example" } } }"#,
    );

    let payload = normalize(document).unwrap();

    let bookmark = &payload.entities.bookmarks["9"];
    assert_eq!(bookmark.id, "9");
    assert_eq!(bookmark.title, "Nine");
}

/// A single-resource document normalizes to a one-entry map with no cursor.
#[test]
fn test_single_resource_document() {
    let document = parse(
        r#"{ "data": { "id": "42", "attributes": { "title": "Answer", "url": "https://example.com", "description": "d", "tags": ["a", "b"] } } }"#,
    );

    let payload = normalize(document).unwrap();

    assert_eq!(payload.entities.bookmarks.len(), 1);
    assert!(payload.next_page.is_none());
    assert_eq!(payload.entities.bookmarks["42"].tags, ["a", "b"]);
}

/// Absent `links` means no next page.
#[test]
fn test_missing_links_yields_no_cursor() {
    let document = parse(r#"{ "data": [] }"#);

    let payload = normalize(document).unwrap();

    assert!(payload.entities.bookmarks.is_empty());
    assert!(payload.next_page.is_none());
}

/// A resource without an id rejects the whole payload — nothing is returned
/// for the well-formed records either.
#[test]
fn test_missing_id_rejects_whole_payload() {
    let document = parse(
        r#"{
            "data": [
                { "id": "1", "attributes": { "title": "One", "url": "u" } },
                { "attributes": { "title": "No id", "url": "u" } }
            ]
        }"#,
    );

    let err = normalize(document).unwrap_err();
    assert_eq!(err, NormalizationError::MissingId);
}

/// A resource without attributes fails with the offending id.
#[test]
fn test_missing_attributes_rejects_whole_payload() {
    let document = parse(r#"{ "data": [ { "id": "7", "type": "bookmarks" } ] }"#);

    let err = normalize(document).unwrap_err();
    assert_eq!(err, NormalizationError::MissingAttributes("7".to_string()));
}

/// Attribute fields missing on the wire default to empty rather than failing.
#[test]
fn test_sparse_attributes_default_empty() {
    let document = parse(r#"{ "data": { "id": "3", "attributes": {} } }"#);

    let payload = normalize(document).unwrap();

    let bookmark = &payload.entities.bookmarks["3"];
    assert_eq!(bookmark.id, "3");
    assert!(bookmark.title.is_empty());
    assert!(bookmark.url.is_empty());
    assert!(bookmark.tags.is_empty());
}
