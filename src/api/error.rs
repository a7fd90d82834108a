//! Error taxonomy for the students API.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Server-supplied mapping from field name to validation message, as carried
/// by the 422 response envelope.
pub type FieldErrors = HashMap<String, String>;

/// 422 response body: `{"error": {"<field>": "<message>", ...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ValidationEnvelope {
    pub error: FieldErrors,
}

/// Failures an API operation can produce.
///
/// Cancellation is deliberately absent: an aborted request never yields a
/// value at all. Nothing here is retried or escalated; every error stays
/// local to the operation that produced it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network unreachable, timeout, TLS failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any non-2xx status other than 422. Held opaque, never rendered
    /// field-by-field.
    #[error("server returned HTTP {status}")]
    Status { status: u16, body: String },

    /// HTTP 422 with a structured field-error map.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// A 2xx body that does not deserialize into the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL does not parse.
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

impl ApiError {
    /// The field-error map, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
