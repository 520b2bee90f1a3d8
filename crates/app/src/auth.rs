use auth_service::AuthClient;
use dioxus::prelude::*;
use shared_types::{Profile, ProfileState};

/// Global authentication state: the collaborator every page talks to and
/// the profile of whoever is signed in.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub client: AuthClient,
    pub profile: Signal<ProfileState>,
}

impl AuthState {
    pub fn new(client: AuthClient) -> Self {
        Self {
            client,
            profile: Signal::new(ProfileState::NotLoaded),
        }
    }

    pub fn set_profile(&mut self, profile: Profile) {
        if let Some(raw) = profile.unrecognized_role() {
            tracing::warn!(role = %raw, "profile has an unrecognized role");
        }
        self.profile.set(ProfileState::Loaded(profile));
    }

    pub fn clear_profile(&mut self) {
        self.profile.set(ProfileState::NotLoaded);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
