//! Submission handling: runs the registration call and maps its outcome to
//! the message shown above the form.

use std::future::Future;

use api::{ApiError, RegisterClient, RegisterRequest};
use thiserror::Error;
use tracing::{info, warn};

/// Every failure a form can report. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Invalid Entry")]
    InvalidEntry,
    #[error("No Server Response")]
    NoServerResponse,
    #[error("Request Timed Out")]
    TimedOut,
    #[error("Username Taken")]
    UsernameTaken,
    #[error("Registration Failed")]
    RegistrationFailed,
    #[error("Sign In Unavailable")]
    SignInUnavailable,
}

impl From<&ApiError> for SubmitError {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Transport(_) => Self::NoServerResponse,
            ApiError::Timeout(_) => Self::TimedOut,
            ApiError::Status { status: 409, .. } => Self::UsernameTaken,
            ApiError::Status { .. } | ApiError::Endpoint(_) => Self::RegistrationFailed,
        }
    }
}

/// Anything that can accept a registration. The real implementation is
/// [`RegisterClient`]; tests plug in canned outcomes.
pub trait Registrar {
    /// Resolves to the success status, or the reason no success was reached.
    fn register(&self, request: &RegisterRequest) -> impl Future<Output = Result<u16, ApiError>>;
}

impl Registrar for RegisterClient {
    fn register(&self, request: &RegisterRequest) -> impl Future<Output = Result<u16, ApiError>> {
        RegisterClient::register(self, request)
    }
}

/// Issues exactly one registration request and classifies the result.
pub async fn submit_registration<R: Registrar>(
    registrar: &R,
    request: &RegisterRequest,
) -> Result<(), SubmitError> {
    match registrar.register(request).await {
        Ok(status) => {
            info!(status, user = %request.user, "sign-up succeeded");
            Ok(())
        }
        Err(err) => {
            let mapped = SubmitError::from(&err);
            warn!(error = %err, reported = %mapped, "sign-up failed");
            Err(mapped)
        }
    }
}
