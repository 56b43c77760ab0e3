//! HTTP Gateway for the Puka client.
//!
//! Issues fetch and save requests against the bookmarks endpoint, attaches
//! the JSON-API content negotiation headers and the persisted auth token, and
//! classifies HTTP outcomes. Results always pass through the normalizer; the
//! gateway never mutates shared state — callers dispatch the results.
//!
//! There is no timeout or cancellation here: a request that never resolves
//! suspends its caller indefinitely, and the owning tag stays in its fetching
//! state. Known gap, inherited deliberately.

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;

use crate::services::credential_store::CredentialSource;
use crate::services::normalizer::{normalize, NormalizedPayload};
use crate::types::bookmark::BookmarkDraft;
use crate::types::errors::{GatewayError, NormalizationError};
use crate::types::wire::Document;

/// Content type of the bookmarks API.
pub const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Builds the collection endpoint for a base API URL.
pub fn collection_endpoint(base: &str) -> String {
    format!("{}/bookmarks", base.trim_end_matches('/'))
}

/// Resolves a pagination cursor against the API base URL. `links.next` comes
/// back as either an absolute URL or a host-relative path.
pub fn resolve_cursor(base: &str, cursor: &str) -> String {
    if cursor.starts_with("http://") || cursor.starts_with("https://") {
        return cursor.to_string();
    }
    if let Some(path) = cursor.strip_prefix('/') {
        return format!("{}/{}", origin(base), path);
    }
    format!("{}/{}", base.trim_end_matches('/'), cursor)
}

/// Scheme plus authority of a base URL, without any path.
fn origin(base: &str) -> String {
    let scheme_end = base.find("://").map(|i| i + 3).unwrap_or(0);
    match base[scheme_end..].find('/') {
        Some(i) => base[..scheme_end + i].to_string(),
        None => base.trim_end_matches('/').to_string(),
    }
}

/// Returns the HTTP method for saving a draft: PATCH when the bookmark
/// already has an id (update), POST otherwise (create). This presence check
/// is the sole create-vs-update disambiguation rule.
pub fn save_method(draft: &BookmarkDraft) -> Method {
    if draft.id.is_some() {
        Method::PATCH
    } else {
        Method::POST
    }
}

/// Builds the JSON-API save envelope for a draft.
///
/// Comma-joined tags are split into an ordered list; the wire format never
/// carries the comma-joined form. `id` is omitted entirely for a create.
pub fn save_envelope(draft: &BookmarkDraft) -> serde_json::Value {
    let mut data = serde_json::json!({
        "type": "bookmarks",
        "attributes": {
            "title": draft.title,
            "url": draft.url,
            "description": draft.description,
            "tags": draft.tags.to_list(),
        },
    });
    if let Some(id) = &draft.id {
        data["id"] = serde_json::Value::String(id.clone());
    }
    serde_json::json!({ "data": data })
}

/// HTTP gateway over the bookmarks API.
///
/// Tag-agnostic by design: scoping a request to a tag happens through
/// endpoint construction, and attributing a result to a tag is the caller's
/// responsibility.
pub struct BookmarkGateway<C: CredentialSource> {
    http: reqwest::Client,
    credentials: C,
}

impl<C: CredentialSource> BookmarkGateway<C> {
    /// Creates a gateway reading its auth token from the given source.
    /// Redirects are followed transparently (reqwest default policy).
    pub fn new(credentials: C) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    /// Fetches a collection from the given endpoint.
    pub async fn fetch_collection(&self, endpoint: &str) -> Result<NormalizedPayload, GatewayError> {
        debug!("GET {}", endpoint);
        self.fetch(self.http.get(endpoint)).await
    }

    /// Fetches the collection filtered to a single tag. The tag travels as a
    /// percent-encoded query parameter, so tags containing `&`, `#`, or
    /// spaces arrive intact.
    pub async fn fetch_by_tag(&self, base: &str, tag: &str) -> Result<NormalizedPayload, GatewayError> {
        let endpoint = collection_endpoint(base);
        debug!("GET {} (tag {})", endpoint, tag);
        self.fetch(self.http.get(&endpoint).query(&[("filter[tags]", tag)]))
            .await
    }

    async fn fetch(&self, request: reqwest::RequestBuilder) -> Result<NormalizedPayload, GatewayError> {
        let response = request
            .header(ACCEPT, JSON_API_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| GatewayError::Remote(e.to_string()))?;
        Self::decode(response).await
    }

    /// Saves a draft to the given endpoint: POST to create, PATCH to update,
    /// with the persisted auth token appended as a `token` query parameter.
    pub async fn save_bookmark(
        &self,
        endpoint: &str,
        draft: &BookmarkDraft,
    ) -> Result<NormalizedPayload, GatewayError> {
        let token = self
            .credentials
            .auth_token()
            .map_err(|e| GatewayError::Credential(e.to_string()))?;

        let method = save_method(draft);
        debug!("{} {}", method, endpoint);
        let mut request = self
            .http
            .request(method, endpoint)
            .header(ACCEPT, JSON_API_CONTENT_TYPE)
            .header(CONTENT_TYPE, JSON_API_CONTENT_TYPE)
            .body(save_envelope(draft).to_string());
        match token {
            Some(token) => request = request.query(&[("token", token)]),
            None => debug!("no auth token in local state; saving without one"),
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Remote(e.to_string()))?;
        Self::decode(response).await
    }

    /// Saves an existing bookmark to an endpoint addressed by its id.
    /// Fails with [`GatewayError::MissingId`] before any I/O if the draft has
    /// no id — the composed endpoint would be malformed.
    pub async fn update_bookmark(
        &self,
        endpoint: &str,
        draft: &BookmarkDraft,
    ) -> Result<NormalizedPayload, GatewayError> {
        let id = draft.id.as_deref().ok_or(GatewayError::MissingId)?;
        self.save_bookmark(&format!("{}/{}", endpoint, id), draft)
            .await
    }

    /// Classifies the HTTP outcome and normalizes the body. Status 200–299
    /// parses the body as a JSON-API document; anything else fails with the
    /// status text.
    async fn decode(response: reqwest::Response) -> Result<NormalizedPayload, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Remote(status.to_string()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Remote(e.to_string()))?;
        let document: Document = serde_json::from_str(&body)
            .map_err(|e| NormalizationError::MalformedDocument(e.to_string()))?;
        Ok(normalize(document)?)
    }
}
