use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared_types::{
    AppError, PasswordResetRequest, Profile, Session, SignInRequest, SignUpRequest,
    GENERIC_ERROR_MESSAGE,
};

use crate::AuthService;

/// Shown when the auth API cannot be reached at all.
pub const UNREACHABLE_MESSAGE: &str =
    "Impossible de joindre le service d'authentification. Vérifiez votre connexion.";

/// Auth collaborator backed by a remote JSON API.
///
/// Routes, relative to `base_url`:
/// - `POST auth/signin`, `POST auth/signup` → `Session`
/// - `POST auth/recover`
/// - `POST auth/signout` (bearer)
/// - `GET auth/profile` (bearer) → `Profile`, 401 when the session is gone
///
/// The access token lives in memory only.
pub struct HttpAuthService {
    http: reqwest::Client,
    base_url: String,
    token: Mutex<Option<String>>,
}

impl HttpAuthService {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
            token: Mutex::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_session(&self) -> bool {
        self.token().is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store_token(&self, token: Option<String>) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Send a request; non-2xx answers become the message to display.
    async fn send(&self, request: RequestBuilder) -> Result<Response, String> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "auth API unreachable");
            UNREACHABLE_MESSAGE.to_string()
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "auth API request failed");
        Err(AppError::friendly_message(&body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
        response.json::<T>().await.map_err(|e| {
            tracing::warn!(error = %e, "unexpected auth API payload");
            GENERIC_ERROR_MESSAGE.to_string()
        })
    }

    async fn open_session(&self, response: Response) -> Result<Profile, String> {
        let session: Session = Self::decode(response).await?;
        self.store_token(Some(session.access_token));
        Ok(session.profile)
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    async fn sign_in(&self, request: &SignInRequest) -> Result<Profile, AppError> {
        tracing::debug!(email = %request.email, "POST auth/signin");
        let response = self
            .send(self.http.post(self.url("auth/signin")).json(request))
            .await
            .map_err(AppError::sign_in)?;
        self.open_session(response).await.map_err(AppError::sign_in)
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Profile, AppError> {
        tracing::debug!(email = %request.email, role = %request.role, "POST auth/signup");
        let response = self
            .send(self.http.post(self.url("auth/signup")).json(request))
            .await
            .map_err(AppError::sign_up)?;
        self.open_session(response).await.map_err(AppError::sign_up)
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        let Some(token) = self.token() else {
            return Ok(());
        };
        // The local session ends whatever the API answers.
        self.store_token(None);
        tracing::debug!("POST auth/signout");
        self.send(self.http.post(self.url("auth/signout")).bearer_auth(token))
            .await
            .map(|_| ())
            .map_err(AppError::sign_out)
    }

    async fn reset_password(&self, email: &str) -> Result<(), AppError> {
        tracing::debug!(%email, "POST auth/recover");
        let body = PasswordResetRequest {
            email: email.to_string(),
        };
        self.send(self.http.post(self.url("auth/recover")).json(&body))
            .await
            .map(|_| ())
            .map_err(AppError::reset)
    }

    async fn current_profile(&self) -> Result<Option<Profile>, AppError> {
        let Some(token) = self.token() else {
            return Ok(None);
        };
        tracing::debug!("GET auth/profile");
        let response = self
            .http
            .get(self.url("auth/profile"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "auth API unreachable");
                AppError::profile(UNREACHABLE_MESSAGE)
            })?;

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::info!("session expired, dropping access token");
            self.store_token(None);
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "profile request failed");
            return Err(AppError::profile(AppError::friendly_message(&body)));
        }

        Self::decode(response)
            .await
            .map(Some)
            .map_err(AppError::profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let svc = HttpAuthService::new("https://auth.example.org/");
        assert_eq!(svc.base_url(), "https://auth.example.org");
        assert_eq!(svc.url("auth/signin"), "https://auth.example.org/auth/signin");
    }

    #[test]
    fn new_service_has_no_session() {
        assert!(!HttpAuthService::new("http://localhost").has_session());
    }

    #[tokio::test]
    async fn profile_without_session_skips_network() {
        // Port 9 is discard; no request is made without a token.
        let svc = HttpAuthService::new("http://127.0.0.1:9");
        assert_eq!(svc.current_profile().await.unwrap(), None);
    }

    #[tokio::test]
    async fn sign_out_without_session_is_noop() {
        let svc = HttpAuthService::new("http://127.0.0.1:9");
        assert!(svc.sign_out().await.is_ok());
    }
}
