// Puka client services
// Services provide the I/O edges of the sync core: payload normalization,
// the HTTP gateway, and persisted credential storage.

pub mod credential_store;
pub mod gateway;
pub mod normalizer;
