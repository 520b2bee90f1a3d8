use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback shown when the collaborator gives no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Une erreur est survenue. Veuillez réessayer.";

/// Which auth operation failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    SignInFailed,
    SignUpFailed,
    SignOutFailed,
    ResetFailed,
    ProfileUnavailable,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::SignInFailed => write!(f, "SignInFailed"),
            AppErrorKind::SignUpFailed => write!(f, "SignUpFailed"),
            AppErrorKind::SignOutFailed => write!(f, "SignOutFailed"),
            AppErrorKind::ResetFailed => write!(f, "ResetFailed"),
            AppErrorKind::ProfileUnavailable => write!(f, "ProfileUnavailable"),
        }
    }
}

/// Error surfaced by the auth collaborator.
///
/// `message` is human readable and is shown to the user as-is; pages never
/// inspect `kind` to rewrite it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn sign_in(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::SignInFailed, message)
    }

    pub fn sign_up(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::SignUpFailed, message)
    }

    pub fn sign_out(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::SignOutFailed, message)
    }

    pub fn reset(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ResetFailed, message)
    }

    pub fn profile(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ProfileUnavailable, message)
    }

    /// Extract the message from a JSON error body returned by the auth API.
    ///
    /// Looks at `message`, `msg`, `error_description` and `error` in that
    /// order, also inside a nested `error` object. Returns `None` when the
    /// body is not JSON or carries no non-empty string under those keys.
    pub fn message_from_body(body: &str) -> Option<String> {
        const KEYS: &[&str] = &["message", "msg", "error_description", "error"];

        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        let pick = |v: &serde_json::Value| {
            KEYS.iter()
                .filter_map(|k| v.get(*k).and_then(|m| m.as_str()))
                .map(str::trim)
                .find(|m| !m.is_empty())
                .map(str::to_string)
        };

        pick(&value).or_else(|| value.get("error").and_then(pick))
    }

    /// Message from a JSON error body, or the generic fallback.
    pub fn friendly_message(body: &str) -> String {
        Self::message_from_body(body).unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
