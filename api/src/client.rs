//! Registration client. Posts the credentials as JSON, bounds the call with the
//! configured timeout and classifies the outcome. Never logs the password.

use std::fmt;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::timing::with_timeout;

/// Maximum number of error body characters kept on [`ApiError::Status`].
const MAX_ERROR_CHARS: usize = 200;

/// Wire body of `POST /api/register`.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub user: String,
    pub pwd: String,
}

impl RegisterRequest {
    pub fn new(user: impl Into<String>, pwd: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            pwd: pwd.into(),
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("user", &self.user)
            .field("pwd", &"<redacted>")
            .finish()
    }
}

/// Only these statuses count as a completed registration.
pub fn is_success(status: u16) -> bool {
    matches!(status, 200 | 201)
}

#[derive(Clone, Debug)]
pub struct RegisterClient {
    http: Client,
    config: ApiConfig,
}

impl RegisterClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Client configured from the build/runtime environment.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::load())
    }

    /// Sends one registration request and returns the success status (200 or 201).
    ///
    /// The timeout covers the whole exchange, including reading the body of a
    /// rejected response.
    ///
    /// # Errors
    /// - [`ApiError::Endpoint`] if the request cannot be built.
    /// - [`ApiError::Transport`] if no response was received.
    /// - [`ApiError::Timeout`] if the exchange did not finish within the configured timeout.
    /// - [`ApiError::Status`] for any response other than 200 or 201.
    pub async fn register(&self, request: &RegisterRequest) -> Result<u16, ApiError> {
        let url = self.config.register_url()?;
        debug!(%url, user = %request.user, "sending registration request");

        let exchange = async {
            let response = self.http.post(url).json(request).send().await?;
            let status = response.status().as_u16();
            if is_success(status) {
                return Ok::<_, reqwest::Error>((status, String::new()));
            }
            let body = response.text().await.unwrap_or_default();
            Ok((status, body))
        };

        let timeout_ms = self.config.timeout_ms;
        let (status, body) = with_timeout(timeout_ms, exchange)
            .await
            .ok_or(ApiError::Timeout(timeout_ms))?
            .map_err(|err| map_request_error(err, timeout_ms))?;

        if is_success(status) {
            info!(status, user = %request.user, "registration accepted");
            return Ok(status);
        }

        warn!(status, user = %request.user, "registration rejected");
        Err(ApiError::Status {
            status,
            message: sanitize_body(&body),
        })
    }
}

fn map_request_error(err: reqwest::Error, timeout_ms: u64) -> ApiError {
    if err.is_builder() {
        ApiError::Endpoint(err.to_string())
    } else if err.is_timeout() {
        ApiError::Timeout(timeout_ms)
    } else {
        ApiError::Transport(err.to_string())
    }
}

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::net::TcpListener;
    use std::time::Duration;

    use anyhow::{anyhow, Result};
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(base: &str, timeout_ms: u64) -> RegisterClient {
        RegisterClient::new(ApiConfig {
            api_base_url: base.to_string(),
            timeout_ms,
            ..ApiConfig::default()
        })
    }

    async fn server_responding(status: u16) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(ResponseTemplate::new(status).set_body_string("server says no"))
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn only_200_and_201_are_success() {
        assert!(is_success(200));
        assert!(is_success(201));
        assert!(!is_success(202));
        assert!(!is_success(204));
        assert!(!is_success(409));
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", RegisterRequest::new("alice_01", "Abcdef1!"));
        assert!(rendered.contains("alice_01"));
        assert!(!rendered.contains("Abcdef1!"));
    }

    #[test]
    fn sanitize_body_truncates_and_defaults() {
        assert_eq!(sanitize_body("   "), "Request failed.");
        assert_eq!(sanitize_body(&"x".repeat(500)).len(), MAX_ERROR_CHARS);
    }

    #[tokio::test]
    async fn register_posts_json_body() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({ "user": "alice_01", "pwd": "Abcdef1!" })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), 5_000);
        let status = client
            .register(&RegisterRequest::new("alice_01", "Abcdef1!"))
            .await?;
        assert_eq!(status, 201);
        Ok(())
    }

    #[tokio::test]
    async fn register_accepts_200() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = server_responding(200).await;
        let status = client_for(&server.uri(), 5_000)
            .register(&RegisterRequest::new("alice_01", "Abcdef1!"))
            .await?;
        assert_eq!(status, 200);
        Ok(())
    }

    #[tokio::test]
    async fn register_surfaces_conflict_status() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = server_responding(409).await;
        let err = client_for(&server.uri(), 5_000)
            .register(&RegisterRequest::new("alice_01", "Abcdef1!"))
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert_eq!(err.status(), Some(409));
        assert!(err.to_string().contains("server says no"));
        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_other_2xx() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = server_responding(202).await;
        let err = client_for(&server.uri(), 5_000)
            .register(&RegisterRequest::new("alice_01", "Abcdef1!"))
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert_eq!(err.status(), Some(202));
        Ok(())
    }

    #[tokio::test]
    async fn register_times_out_on_slow_server() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_millis(2_000)))
            .mount(&server)
            .await;

        let err = client_for(&server.uri(), 50)
            .register(&RegisterRequest::new("alice_01", "Abcdef1!"))
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert_eq!(err, ApiError::Timeout(50));
        Ok(())
    }

    #[tokio::test]
    async fn register_times_out_when_rejection_body_stalls() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        // Sends a 409 status line, promises a body and never finishes it.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await?;
            let mut buf = [0_u8; 4096];
            let _ = socket.read(&mut buf).await?;
            socket
                .write_all(b"HTTP/1.1 409 Conflict\r\nContent-Length: 100\r\n\r\npartial")
                .await?;
            socket.flush().await?;
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok::<_, std::io::Error>(())
        });

        let outcome = tokio::time::timeout(
            Duration::from_secs(3),
            client_for(&format!("http://{addr}"), 200)
                .register(&RegisterRequest::new("alice_01", "Abcdef1!")),
        )
        .await?;
        server.abort();

        assert_eq!(outcome, Err(ApiError::Timeout(200)));
        Ok(())
    }

    #[tokio::test]
    async fn register_reports_transport_failure() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        // Reserve a port, then release it so nothing is listening there.
        let addr = TcpListener::bind("127.0.0.1:0")?.local_addr()?;

        let err = client_for(&format!("http://{addr}"), 5_000)
            .register(&RegisterRequest::new("alice_01", "Abcdef1!"))
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_bad_endpoint_without_sending() {
        let err = client_for("not a url", 5_000)
            .register(&RegisterRequest::new("alice_01", "Abcdef1!"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Endpoint(_)));
    }
}
