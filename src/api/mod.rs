//! API client module for the timetrack service.
//!
//! Provides the HTTP client with bearer auth injection, token persistence,
//! account and time-entry operations, and request/response types matching
//! the timetrack backend API.

pub mod account;
pub mod auth;
pub mod client;
pub mod error;
pub mod time;
pub mod types;
