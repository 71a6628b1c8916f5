//! Hero collection loading
//!
//! The fetch itself lives in the web frontend; this module owns everything
//! after the response arrives: status checks, JSON decoding and per-record
//! shape validation. Both the page and the validator go through
//! [`load_from_response`] so they fail on exactly the same inputs.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use zenith_types::HeroRecord;

/// The page-wide hero collection. Loaded once, never mutated.
pub type HeroCollection = Arc<[HeroRecord]>;

const EXPECTED_ARRAY: &str = "Data format is incorrect - expected an array";

/// Failure modes of the initial data load. All of them are fatal for the
/// page session; there is no retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Response status was outside 200-299
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    /// Payload was not an array of hero records
    #[error("{0}")]
    Format(String),

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),
}

impl LoadError {
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

/// Reject non-success statuses.
pub fn check_status(status: u16, status_text: &str) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::Http {
            status,
            status_text: status_text.to_string(),
        })
    }
}

/// Decode and validate a hero collection from JSON text.
///
/// The top level must be an array; every element must carry a string `name`
/// and, when present, correctly typed `description`, `image` and `series`.
pub fn parse_heroes(body: &str) -> Result<Vec<HeroRecord>, LoadError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| LoadError::Format(format!("{EXPECTED_ARRAY} ({e})")))?;

    let Value::Array(items) = value else {
        return Err(LoadError::Format(EXPECTED_ARRAY.to_string()));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value::<HeroRecord>(item).map_err(|e| {
                LoadError::Format(format!("Data format is incorrect - record {idx}: {e}"))
            })
        })
        .collect()
}

/// Full response handling: status first, then body validation.
pub fn load_from_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<HeroCollection, LoadError> {
    check_status(status, status_text)?;
    let heroes = parse_heroes(body)?;
    tracing::info!(count = heroes.len(), "Loaded hero collection");
    Ok(heroes.into())
}
