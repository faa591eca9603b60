use thiserror::Error;

/// Failure modes of a backend call.
///
/// The UI folds `Http` and `Status` into one user-facing message;
/// `Malformed` is surfaced separately so schema drift is visible instead
/// of rendering as missing chart data.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, DNS, or other transport failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}")]
    Status { status: u16, body: String },

    /// The backend answered 2xx but the body did not match the report
    /// schema.
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ClientError {
    /// True for the decode-failure kind, which gets its own user-facing
    /// message.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ClientError::Malformed(_))
    }
}
