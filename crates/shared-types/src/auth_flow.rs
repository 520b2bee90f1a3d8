//! View state for the authentication screens.
//!
//! These types hold no I/O. Pages keep them in signals and drive them around
//! calls to the auth collaborator.

use crate::AppError;

/// Which variant of the shared auth form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    /// The forgot-password link is only offered next to the sign-in form.
    pub fn offers_password_reset(self) -> bool {
        matches!(self, AuthMode::SignIn)
    }
}

/// Observable phase of the forgot-password page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPhase {
    #[default]
    Input,
    Loading,
    Success,
}

/// Forgot-password form state.
///
/// `Input → Loading` on [`begin`](ResetForm::begin), then
/// `Loading → Success` or `Loading → Input` (with `error` set) on
/// [`settle`](ResetForm::settle). `Success` is terminal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResetForm {
    pub email: String,
    pub phase: ResetPhase,
    pub error: Option<String>,
}

impl ResetForm {
    pub fn set_email(&mut self, email: impl Into<String>) {
        if self.phase == ResetPhase::Input {
            self.email = email.into();
        }
    }

    /// Start a submission. Returns the email to send, or `None` when a
    /// request is already in flight or the link was already sent.
    pub fn begin(&mut self) -> Option<String> {
        if self.phase != ResetPhase::Input {
            return None;
        }
        self.phase = ResetPhase::Loading;
        self.error = None;
        Some(self.email.clone())
    }

    /// Record the collaborator's answer. Ignored unless a request is in flight.
    pub fn settle(&mut self, result: Result<(), AppError>) {
        if self.phase != ResetPhase::Loading {
            return;
        }
        match result {
            Ok(()) => self.phase = ResetPhase::Success,
            Err(err) => {
                self.phase = ResetPhase::Input;
                self.error = Some(err.message);
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ResetPhase::Loading
    }

    /// The address the link went to, once the request succeeded.
    pub fn sent_to(&self) -> Option<&str> {
        match self.phase {
            ResetPhase::Success => Some(&self.email),
            _ => None,
        }
    }
}
