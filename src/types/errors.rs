use std::fmt;

// === NormalizationError ===

/// Errors raised while normalizing a raw API payload into the entity table shape.
///
/// A malformed resource rejects the whole payload — a partial normalize would
/// break the per-id atomicity of the entity table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    /// The response body could not be parsed as a JSON-API document.
    MalformedDocument(String),
    /// A resource in the payload has no `id` field.
    MissingId,
    /// The resource with the given id has no `attributes` object.
    MissingAttributes(String),
}

impl fmt::Display for NormalizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizationError::MalformedDocument(msg) => {
                write!(f, "Malformed API document: {}", msg)
            }
            NormalizationError::MissingId => write!(f, "Resource is missing an id"),
            NormalizationError::MissingAttributes(id) => {
                write!(f, "Resource {} is missing attributes", id)
            }
        }
    }
}

impl std::error::Error for NormalizationError {}

// === GatewayError ===

/// Errors raised by HTTP gateway operations.
#[derive(Debug)]
pub enum GatewayError {
    /// The server answered with a non-2xx status, or the request never got a
    /// response at all. Carries the status text (or transport error text).
    Remote(String),
    /// The response arrived but could not be normalized.
    Normalization(NormalizationError),
    /// An update was attempted on a bookmark that has no id yet.
    MissingId,
    /// The auth token could not be read from local state.
    Credential(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Remote(msg) => write!(f, "Remote error: {}", msg),
            GatewayError::Normalization(err) => write!(f, "Normalization error: {}", err),
            GatewayError::MissingId => {
                write!(f, "Cannot address a bookmark that has no id")
            }
            GatewayError::Credential(msg) => write!(f, "Credential error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<NormalizationError> for GatewayError {
    fn from(err: NormalizationError) -> Self {
        GatewayError::Normalization(err)
    }
}

// === CredentialError ===

/// Errors raised by the local credential store.
#[derive(Debug)]
pub enum CredentialError {
    /// The backing key/value store failed.
    Storage(String),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::Storage(msg) => write!(f, "Credential storage error: {}", msg),
        }
    }
}

impl std::error::Error for CredentialError {}
