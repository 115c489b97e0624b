//! Client library for the timetrack time-tracking service.
//!
//! Centralizes all communication with the remote service: bearer token
//! storage, authenticated request dispatch, and typed JSON decoding. The
//! rendering layer (the `timetrack` CLI binary here) stays a thin consumer.

pub mod api;
pub mod session;

pub use api::auth::{KeyringStore, MemoryStore, StoreError, TokenStore};
pub use api::client::{ApiClient, ExtraHeaders};
pub use api::error::ApiError;
pub use session::AuthSession;
