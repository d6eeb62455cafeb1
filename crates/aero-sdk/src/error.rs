//! Error taxonomy at the service boundary.

use thiserror::Error;

/// A failed service interaction.
///
/// Service rejections (quota, authorization, field validation) carry the
/// server's message verbatim; the client never overrides or rephrases them.
/// Transport failures are a distinct, generic connectivity category.
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("{detail}")]
    Service { status: u16, detail: String },
    #[error("could not reach the service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("not logged in")]
    NotAuthenticated,
}

impl SdkError {
    /// Extract the server's rejection detail from an error response body.
    ///
    /// The service reports `{"detail": ...}` on auth/validation failures and
    /// `{"error": ...}` on quota refusals; fall back to the raw body.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("detail")
                    .or_else(|| v.get("error"))
                    .and_then(|d| d.as_str().map(str::to_string))
            })
            .unwrap_or(body);
        SdkError::Service { status, detail }
    }
}
