use serde::{Deserialize, Serialize};
use std::fmt;

/// Role carried by an authenticated profile.
///
/// Only the exact tags `patient`, `doctor` and `admin` are known roles. Any
/// other tag, including a differently cased one, is `Unrecognized` and keeps
/// its raw value so it serializes back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
    Unrecognized(String),
}

/// Roles a visitor may pick when creating an account.
pub const SELF_SERVICE_ROLES: &[Role] = &[Role::Patient, Role::Doctor];

impl Role {
    /// Parse a role tag. Never fails: unknown tags become `Unrecognized`.
    /// Matching is exact; tags are neither trimmed nor case-folded.
    pub fn parse(s: &str) -> Self {
        match s {
            "patient" => Role::Patient,
            "doctor" => Role::Doctor,
            "admin" => Role::Admin,
            _ => Role::Unrecognized(s.to_string()),
        }
    }

    /// Wire tag for this role.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
            Role::Unrecognized(raw) => raw,
        }
    }

    /// French label used in selectors.
    pub fn label(&self) -> &str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Médecin",
            Role::Admin => "Administrateur",
            Role::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Unrecognized(_))
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::parse(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user's display attributes, owned by the auth collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub is_online: bool,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// The raw role tag when it is not one the front-end dispatches on.
    pub fn unrecognized_role(&self) -> Option<&str> {
        match &self.role {
            Role::Unrecognized(raw) => Some(raw),
            _ => None,
        }
    }
}

/// Whether the profile has arrived from the auth collaborator yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    #[default]
    NotLoaded,
    Loaded(Profile),
}

impl ProfileState {
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            ProfileState::NotLoaded => None,
            ProfileState::Loaded(profile) => Some(profile),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ProfileState::Loaded(_))
    }
}

impl From<Option<Profile>> for ProfileState {
    fn from(profile: Option<Profile>) -> Self {
        profile.map_or(ProfileState::NotLoaded, ProfileState::Loaded)
    }
}
