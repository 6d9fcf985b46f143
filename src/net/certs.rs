//! Certifications feed loading: network first, inline copy second.
//!
//! Client-side (csr): real HTTP via `gloo-net` and a DOM read of the inline
//! `<script>` blob. Other builds: the network step reports `Unavailable`, so
//! only the resolution logic runs.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a `LoadError` value that steers the resolution toward
//! the next source. None of them reach the user; the worst case is an empty
//! table.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "certs_test.rs"]
mod certs_test;

use serde_json::Value;

use super::types::CertificationRecord;

/// Why a source could not supply records.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("unexpected HTTP status: {0}")]
    Status(u16),
    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
    /// The payload is not JSON.
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The payload is JSON but not an array.
    #[error("expected a JSON array of records")]
    NotAnArray,
    /// The inline fallback element is missing or empty.
    #[error("inline fallback data not found")]
    MissingInline,
    /// No browser environment to fetch from.
    #[error("network fetch unavailable outside the browser")]
    Unavailable,
}

/// The single source that supplied the active dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dataset {
    Network(Vec<CertificationRecord>),
    Fallback(Vec<CertificationRecord>),
    Empty,
}

impl Dataset {
    /// Short label for logging.
    pub fn origin(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Fallback(_) => "inline fallback",
            Self::Empty => "empty",
        }
    }

    pub fn into_records(self) -> Vec<CertificationRecord> {
        match self {
            Self::Network(records) | Self::Fallback(records) => records,
            Self::Empty => Vec::new(),
        }
    }
}

/// Parse a feed payload. Only a top-level JSON array is accepted.
///
/// # Errors
///
/// Returns `Malformed` for invalid JSON and `NotAnArray` for any other
/// top-level shape.
pub fn parse_records(raw: &str) -> Result<Vec<CertificationRecord>, LoadError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Array(items) => Ok(items.iter().map(CertificationRecord::from_value).collect()),
        _ => Err(LoadError::NotAnArray),
    }
}

/// Pick the active dataset from the network outcome and the inline text.
///
/// The inline text is only consulted when the network step failed; the two
/// sources are never merged.
pub fn resolve_dataset(
    network: Result<Vec<CertificationRecord>, LoadError>,
    inline: Option<&str>,
) -> Dataset {
    let network_err = match network {
        Ok(records) => return Dataset::Network(records),
        Err(err) => err,
    };
    let inline_result = inline
        .filter(|text| !text.trim().is_empty())
        .ok_or(LoadError::MissingInline)
        .and_then(parse_records);
    match inline_result {
        Ok(records) => {
            note_fallback(&network_err);
            Dataset::Fallback(records)
        }
        Err(inline_err) => {
            leptos::logging::warn!("certifications unavailable: {network_err}; inline: {inline_err}");
            Dataset::Empty
        }
    }
}

fn note_fallback(err: &LoadError) {
    leptos::logging::log!("certifications fetch failed ({err}); using inline copy");
}

/// Fetch and parse the feed at `url`, bypassing the HTTP cache.
///
/// # Errors
///
/// Returns a `LoadError` for transport failures, non-2xx statuses, and
/// payloads `parse_records` rejects.
pub async fn fetch_records(url: &str) -> Result<Vec<CertificationRecord>, LoadError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .cache(web_sys::RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(LoadError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| LoadError::Body(e.to_string()))?;
        parse_records(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(LoadError::Unavailable)
    }
}

/// Text content of the inline fallback element, if present.
pub fn read_inline(element_id: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?
            .document()?
            .get_element_by_id(element_id)?
            .text_content()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = element_id;
        None
    }
}

/// Run the full two-step resolution against the live page.
pub async fn load_dataset(url: &str, inline_id: &str) -> Dataset {
    match fetch_records(url).await {
        Ok(records) => resolve_dataset(Ok(records), None),
        Err(err) => resolve_dataset(Err(err), read_inline(inline_id).as_deref()),
    }
}
