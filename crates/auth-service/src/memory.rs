use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use shared_types::{AppError, DemoAccount, Profile, SignInRequest, SignUpRequest};

use crate::AuthService;

const INVALID_CREDENTIALS: &str = "Email ou mot de passe incorrect";
const EMAIL_TAKEN: &str = "Un compte existe déjà avec cet email";
const UNKNOWN_EMAIL: &str = "Aucun compte associé à cet email";

struct Account {
    password: String,
    profile: Profile,
}

#[derive(Default)]
struct MemoryState {
    /// Keyed by normalized email.
    accounts: HashMap<String, Account>,
    signed_in: Option<String>,
    reset_requests: Vec<String>,
}

/// In-process auth collaborator backed by a map of accounts.
///
/// Used when `auth.backend = "memory"` and as a deterministic stand-in in
/// tests. Nothing is persisted.
#[derive(Default)]
pub struct MemoryAuthService {
    state: Mutex<MemoryState>,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl MemoryAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_accounts(accounts: &[DemoAccount]) -> Self {
        accounts.iter().fold(Self::new(), |service, account| {
            service.with_account(&account.email, &account.password, account.profile())
        })
    }

    /// Register an account up front.
    pub fn with_account(self, email: &str, password: &str, profile: Profile) -> Self {
        self.state().accounts.insert(
            normalize_email(email),
            Account {
                password: password.to_string(),
                profile,
            },
        );
        self
    }

    /// Emails a reset link was "sent" to, oldest first.
    pub fn reset_requests(&self) -> Vec<String> {
        self.state().reset_requests.clone()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait(?Send)]
impl AuthService for MemoryAuthService {
    async fn sign_in(&self, request: &SignInRequest) -> Result<Profile, AppError> {
        let email = normalize_email(&request.email);
        let mut state = self.state();
        let profile = match state.accounts.get(&email) {
            Some(account) if account.password == request.password => account.profile.clone(),
            _ => {
                tracing::info!(%email, "sign-in rejected");
                return Err(AppError::sign_in(INVALID_CREDENTIALS));
            }
        };
        state.signed_in = Some(email);
        Ok(profile)
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Profile, AppError> {
        let email = normalize_email(&request.email);
        let mut state = self.state();
        if state.accounts.contains_key(&email) {
            return Err(AppError::sign_up(EMAIL_TAKEN));
        }
        let profile = request.to_profile();
        state.accounts.insert(
            email.clone(),
            Account {
                password: request.password.clone(),
                profile: profile.clone(),
            },
        );
        state.signed_in = Some(email);
        Ok(profile)
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        self.state().signed_in = None;
        Ok(())
    }

    async fn reset_password(&self, email: &str) -> Result<(), AppError> {
        let email = normalize_email(email);
        let mut state = self.state();
        if !state.accounts.contains_key(&email) {
            return Err(AppError::reset(UNKNOWN_EMAIL));
        }
        state.reset_requests.push(email);
        Ok(())
    }

    async fn current_profile(&self) -> Result<Option<Profile>, AppError> {
        let state = self.state();
        Ok(state
            .signed_in
            .as_ref()
            .and_then(|email| state.accounts.get(email))
            .map(|account| account.profile.clone()))
    }
}
