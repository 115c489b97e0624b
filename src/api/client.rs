//! HTTP client with bearer auth header injection.
//!
//! All requests send `Content-Type: application/json`. When a session token
//! is stored, requests additionally send `Authorization: Bearer <token>`.
//! Response bodies are parsed as JSON on both success and failure so that
//! service-provided failure messages survive into the returned error.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::auth::TokenStore;
use super::error::ApiError;

/// Fallback error text when a failure response carries no `message` field.
const GENERIC_ERROR: &str = "An error occurred";

/// Caller-supplied extra headers in any of the three accepted shapes.
///
/// All shapes funnel through one normalization into a `HeaderMap` before the
/// merge, so call sites never branch on the shape. Later entries overwrite
/// earlier ones for the same name.
pub enum ExtraHeaders {
    /// Ready-made header collection.
    Map(HeaderMap),
    /// Ordered name/value pairs.
    Pairs(Vec<(String, String)>),
    /// Plain string mapping.
    Plain(BTreeMap<String, String>),
}

impl ExtraHeaders {
    fn into_header_map(self) -> Result<HeaderMap, ApiError> {
        match self {
            ExtraHeaders::Map(map) => Ok(map),
            ExtraHeaders::Pairs(pairs) => Self::collect(pairs),
            ExtraHeaders::Plain(map) => Self::collect(map),
        }
    }

    fn collect<I>(entries: I) -> Result<HeaderMap, ApiError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut map = HeaderMap::new();
        for (name, value) in entries {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

impl From<HeaderMap> for ExtraHeaders {
    fn from(map: HeaderMap) -> Self {
        ExtraHeaders::Map(map)
    }
}

impl From<Vec<(String, String)>> for ExtraHeaders {
    fn from(pairs: Vec<(String, String)>) -> Self {
        ExtraHeaders::Pairs(pairs)
    }
}

impl From<BTreeMap<String, String>> for ExtraHeaders {
    fn from(map: BTreeMap<String, String>) -> Self {
        ExtraHeaders::Plain(map)
    }
}

/// HTTP client wrapper for timetrack API communication.
///
/// Holds the base URL and the injected token store. The store is read at the
/// start of every request, so a login or logout between calls is observed by
/// the next call; a request already in flight keeps the token it captured.
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a new API client with the given base URL and token store.
    pub fn new(base_url: &str, store: Arc<dyn TokenStore>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    /// Read the stored session token. Absent is `Ok(None)`, not an error.
    pub fn token(&self) -> Result<Option<String>, ApiError> {
        Ok(self.store.get()?)
    }

    /// Persist the session token, overwriting any prior value.
    pub fn set_token(&self, token: &str) -> Result<(), ApiError> {
        Ok(self.store.set(token)?)
    }

    /// Delete the session token. Idempotent if none is stored.
    pub fn remove_token(&self) -> Result<(), ApiError> {
        Ok(self.store.remove()?)
    }

    /// Dispatch a request to `base_url + endpoint` and decode the JSON response.
    ///
    /// Headers are `Content-Type: application/json` merged with the caller's
    /// extras; the Authorization header is injected after the merge so a
    /// stored token always wins. The body is parsed as JSON even on non-2xx
    /// status; failures surface the parsed body's `message` field.
    pub async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        extra_headers: Option<ExtraHeaders>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(extra) = extra_headers {
            headers.extend(extra.into_header_map()?);
        }

        if let Some(token) = self.store.get()? {
            let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
            headers.insert(AUTHORIZATION, bearer);
        }

        log::debug!("{} {}", method, url);

        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let data: serde_json::Value = response.json().await?;

        if !status.is_success() {
            let message = data
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(GENERIC_ERROR)
                .to_string();
            return Err(ApiError::Api { status, message });
        }

        Ok(serde_json::from_value(data)?)
    }

    /// Send a GET request with the default headers.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(Method::GET, endpoint, None::<&()>, None).await
    }

    /// Send a POST request with a JSON body and the default headers.
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, Some(body), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_header_shapes_normalize_identically() {
        let entries = [("x-request-id", "abc-123"), ("accept-language", "en")];

        let mut raw = HeaderMap::new();
        for (k, v) in &entries {
            raw.insert(
                HeaderName::from_bytes(k.as_bytes()).unwrap(),
                HeaderValue::from_str(v).unwrap(),
            );
        }

        let from_map = ExtraHeaders::Map(raw).into_header_map().unwrap();
        let from_pairs = ExtraHeaders::Pairs(pairs(&entries))
            .into_header_map()
            .unwrap();
        let from_plain = ExtraHeaders::Plain(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
        .into_header_map()
        .unwrap();

        assert_eq!(from_map, from_pairs);
        assert_eq!(from_pairs, from_plain);
    }

    #[test]
    fn test_pair_list_last_value_wins() {
        let map = ExtraHeaders::Pairs(pairs(&[("x-tag", "one"), ("x-tag", "two")]))
            .into_header_map()
            .unwrap();
        assert_eq!(map.get("x-tag").unwrap(), "two");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let result = ExtraHeaders::Pairs(pairs(&[("bad header", "v")])).into_header_map();
        assert!(matches!(result, Err(ApiError::InvalidHeader(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let store = Arc::new(crate::api::auth::MemoryStore::new());
        let client = ApiClient::new("http://localhost:8000/", store);
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
