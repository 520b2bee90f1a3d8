use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use async_trait::async_trait;
use shared_types::{AppError, AuthBackend, AuthSettings, Profile, SignInRequest, SignUpRequest};

use crate::{HttpAuthService, MemoryAuthService};

/// Operations the front-end needs from the auth/profile backend.
///
/// Futures are not required to be `Send`: the UI drives them on a
/// single-threaded executor (the browser event loop on web).
#[async_trait(?Send)]
pub trait AuthService {
    /// Authenticate with email and password. Returns the user's profile.
    async fn sign_in(&self, request: &SignInRequest) -> Result<Profile, AppError>;

    /// Create an account and open a session for it.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Profile, AppError>;

    /// Close the current session.
    async fn sign_out(&self) -> Result<(), AppError>;

    /// Ask the backend to email a reset link. Every failure is `ResetFailed`.
    async fn reset_password(&self, email: &str) -> Result<(), AppError>;

    /// Profile of the signed-in user, `None` when there is no session.
    async fn current_profile(&self) -> Result<Option<Profile>, AppError>;
}

/// Shared handle to the auth collaborator, cheap to clone into components.
#[derive(Clone)]
pub struct AuthClient(Rc<dyn AuthService>);

impl AuthClient {
    pub fn new(service: impl AuthService + 'static) -> Self {
        Self(Rc::new(service))
    }
}

impl Deref for AuthClient {
    type Target = dyn AuthService;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Two handles are equal when they point at the same collaborator.
impl PartialEq for AuthClient {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthClient").finish_non_exhaustive()
    }
}

/// Build the collaborator selected by `settings`.
pub fn connect(settings: &AuthSettings) -> AuthClient {
    match settings.backend {
        AuthBackend::Http => {
            tracing::info!(base_url = %settings.base_url, "using HTTP auth backend");
            AuthClient::new(HttpAuthService::new(&settings.base_url))
        }
        AuthBackend::Memory => {
            tracing::info!(
                accounts = settings.demo_accounts.len(),
                "using in-memory auth backend"
            );
            AuthClient::new(MemoryAuthService::from_accounts(&settings.demo_accounts))
        }
    }
}
