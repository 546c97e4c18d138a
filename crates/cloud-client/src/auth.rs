//! Hosted identity provider client
//!
//! Talks to the provider's REST surface and keeps the session token in
//! an interior slot; the rest of the app only sees the
//! [`IdentityProvider`] trait.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use ct_core::auth::{IdentityProvider, SignInStep, SignUpStep, UserIdentity};
use ct_core::error::AuthError;

use crate::config::ClientConfig;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfirmRequest<'a> {
    username: &'a str,
    confirmation_code: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    next_step: SignUpStep,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    next_step: SignInStep,
    #[serde(default)]
    token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RejectionBody {
    message: String,
}

/// [`IdentityProvider`] over the hosted provider's REST API
pub struct HttpIdentityProvider {
    client: Client,
    config: ClientConfig,
    token: RwLock<Option<String>>,
}

impl HttpIdentityProvider {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            token: RwLock::new(None),
        }
    }

    /// Turn a non-success response into an [`AuthError`], carrying the
    /// provider's message verbatim so literal matches still work.
    ///
    /// Status codes are deliberately not inspected here: a credential
    /// mismatch may arrive as 400 or 401 depending on the provider,
    /// and only the session check treats 401 as "no session".
    async fn rejection(response: Response) -> AuthError {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<RejectionBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        AuthError::rejected(message)
    }

    fn transport(e: reqwest::Error) -> AuthError {
        AuthError::Transport(e.to_string())
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpStep, AuthError> {
        let response = self
            .client
            .post(self.config.url("/auth/sign-up"))
            .json(&CredentialsRequest {
                username: email,
                password,
            })
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body: SignUpResponse = response.json().await.map_err(Self::transport)?;
        Ok(body.next_step)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SignInStep, AuthError> {
        let response = self
            .client
            .post(self.config.url("/auth/sign-in"))
            .json(&CredentialsRequest {
                username: email,
                password,
            })
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body: SignInResponse = response.json().await.map_err(Self::transport)?;
        if body.next_step == SignInStep::Done {
            *self.token.write().await = body.token;
            debug!("Session token stored");
        }
        Ok(body.next_step)
    }

    async fn confirm_sign_up(&self, email: &str, code: &str) -> Result<SignUpStep, AuthError> {
        let response = self
            .client
            .post(self.config.url("/auth/confirm"))
            .json(&ConfirmRequest {
                username: email,
                confirmation_code: code,
            })
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body: SignUpResponse = response.json().await.map_err(Self::transport)?;
        Ok(body.next_step)
    }

    async fn current_user(&self) -> Result<UserIdentity, AuthError> {
        let token = self
            .token
            .read()
            .await
            .clone()
            .ok_or(AuthError::NotAuthenticated)?;

        let response = self
            .client
            .get(self.config.url("/auth/me"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(Self::transport)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(AuthError::NotAuthenticated);
        }
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response.json().await.map_err(Self::transport)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        // The local session ends even when the remote call fails
        let token = self.token.write().await.take();

        let Some(token) = token else {
            return Ok(());
        };

        let response = self
            .client
            .post(self.config.url("/auth/sign-out"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::auth::INCORRECT_CREDENTIALS;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn find_header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n")
    }

    /// Drain one request off the socket, body included, so the client
    /// never sees a reset before reading our response.
    async fn read_request(socket: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(header_end) = find_header_end(&buf) {
                let headers = String::from_utf8_lossy(&buf[..header_end]);
                let content_length = headers
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        if name.eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    return;
                }
            }
        }
    }

    /// One-shot provider answering the scripted responses in order.
    async fn scripted_provider(responses: Vec<(u16, &'static str)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                read_request(&mut socket).await;
                let reason = match status {
                    200 => "OK",
                    400 => "Bad Request",
                    401 => "Unauthorized",
                    _ => "Error",
                };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.ok();
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_current_user_without_token_is_not_authenticated() {
        let provider = HttpIdentityProvider::new(ClientConfig::new("http://127.0.0.1:1"));
        let result = provider.current_user().await;
        assert!(matches!(result, Err(AuthError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn test_sign_in_401_keeps_provider_message_verbatim() {
        let base_url = scripted_provider(vec![(
            401,
            r#"{"message": "Incorrect username or password."}"#,
        )])
        .await;
        let provider = HttpIdentityProvider::new(ClientConfig::new(base_url));

        let result = provider.sign_in("user@example.com", "wrong1").await;
        match result {
            Err(AuthError::Rejected { message }) => {
                assert_eq!(message, INCORRECT_CREDENTIALS);
            }
            other => panic!("Expected a rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sign_in_rejection_reaches_credential_specific_message() {
        let base_url = scripted_provider(vec![(
            401,
            r#"{"message": "Incorrect username or password."}"#,
        )])
        .await;
        let provider = HttpIdentityProvider::new(ClientConfig::new(base_url));

        let outcome = ct_core::auth::sign_in(&provider, "user@example.com", "wrong1").await;
        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), "Incorrect email or password, try again");
    }

    #[tokio::test]
    async fn test_current_user_401_is_not_authenticated() {
        let base_url = scripted_provider(vec![
            (200, r#"{"nextStep": "DONE", "token": "tok-1"}"#),
            (401, r#"{"message": "The incoming token has expired"}"#),
        ])
        .await;
        let provider = HttpIdentityProvider::new(ClientConfig::new(base_url));

        let step = provider.sign_in("user@example.com", "secret1").await.unwrap();
        assert_eq!(step, SignInStep::Done);

        let result = provider.current_user().await;
        assert!(matches!(result, Err(AuthError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn test_sign_out_without_token_is_a_no_op() {
        let provider = HttpIdentityProvider::new(ClientConfig::new("http://127.0.0.1:1"));
        assert!(provider.sign_out().await.is_ok());
    }

    #[test]
    fn test_rejection_body_parses_message() {
        let body: RejectionBody =
            serde_json::from_str(r#"{"message": "Incorrect username or password."}"#).unwrap();
        assert_eq!(body.message, "Incorrect username or password.");
    }
}
