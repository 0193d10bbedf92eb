use thiserror::Error;

/// Failure modes of a registration request.
///
/// `Transport` and `Timeout` mean no response object was ever received;
/// `Status` carries the HTTP status of a response that was not a success.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
    #[error("no response from server: {0}")]
    Transport(String),
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
