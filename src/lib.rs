//! Puka client core — client-side state synchronization for the Puka
//! bookmark manager.
//!
//! Normalizes JSON-API responses into a flat entity table, fetches and saves
//! bookmarks over HTTP, and tracks fetch lifecycle and per-tag pagination in
//! a reducer-driven store. The UI layer is an external collaborator: it reads
//! the state tree and drives [`store::BookmarkSync`].

pub mod services;
pub mod store;
pub mod types;
