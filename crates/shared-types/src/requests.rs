use serde::{Deserialize, Serialize};

use crate::{Profile, Role};

/// Credentials for an email/password sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Account creation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl SignUpRequest {
    /// The profile the new account is expected to carry.
    pub fn to_profile(&self) -> Profile {
        Profile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role.clone(),
            is_online: true,
        }
    }
}

/// Request a password reset link for an email address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Returned by sign-in and sign-up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub profile: Profile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_request_uses_camel_case_keys() {
        let req = SignUpRequest {
            email: "a@b.fr".into(),
            password: "secret".into(),
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            role: Role::Patient,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["firstName"], "Ana");
        assert_eq!(value["lastName"], "Lopez");
        assert_eq!(value["role"], "patient");
    }

    #[test]
    fn sign_up_profile_mirrors_request() {
        let req = SignUpRequest {
            email: "a@b.fr".into(),
            password: "secret".into(),
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            role: Role::Doctor,
        };
        let profile = req.to_profile();
        assert_eq!(profile.full_name(), "Ana Lopez");
        assert_eq!(profile.role, Role::Doctor);
    }

    #[test]
    fn session_deserializes_from_api_json() {
        let json = r#"{
            "accessToken": "tok-123",
            "profile": {"firstName": "Ana", "lastName": "Lopez", "role": "admin", "isOnline": true}
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.access_token, "tok-123");
        assert_eq!(session.profile.role, Role::Admin);
    }
}
