use serde::{Deserialize, Serialize};

use crate::{Profile, Role};

/// Which auth collaborator the front-end talks to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthBackend {
    /// Remote auth API over HTTP.
    Http,
    /// Local in-memory accounts, for development.
    #[default]
    Memory,
}

impl AuthBackend {
    /// Parse a backend name, `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "http" => Some(AuthBackend::Http),
            "memory" => Some(AuthBackend::Memory),
            _ => None,
        }
    }
}

/// An account seeded into the in-memory backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl DemoAccount {
    pub fn profile(&self) -> Profile {
        Profile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role.clone(),
            is_online: true,
        }
    }
}

pub const DEFAULT_AUTH_API_URL: &str = "http://localhost:8000";

fn default_base_url() -> String {
    DEFAULT_AUTH_API_URL.to_string()
}

/// `[auth]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSettings {
    #[serde(default)]
    pub backend: AuthBackend,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub demo_accounts: Vec<DemoAccount>,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            backend: AuthBackend::default(),
            base_url: default_base_url(),
            demo_accounts: Vec::new(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthSettings,
}

impl AppConfig {
    /// Apply `AUTH_BACKEND` / `AUTH_API_URL` overrides from `lookup`.
    ///
    /// Unknown backend names and empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(backend) = lookup("AUTH_BACKEND").and_then(|v| AuthBackend::parse(&v)) {
            self.auth.backend = backend;
        }
        if let Some(url) = lookup("AUTH_API_URL") {
            let url = url.trim();
            if !url.is_empty() {
                self.auth.base_url = url.trim_end_matches('/').to_string();
            }
        }
        self
    }
}
