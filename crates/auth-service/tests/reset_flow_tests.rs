//! Forgot-password submission (`submit_password_reset`) driven against
//! substitute collaborators.

use async_trait::async_trait;
use auth_service::{submit_password_reset, AuthClient, AuthService, MemoryAuthService};
use pretty_assertions::assert_eq;
use shared_types::{
    AppError, Profile, ResetForm, ResetPhase, Role, SignInRequest, SignUpRequest,
};

/// Collaborator whose reset call always rejects with a fixed message.
struct RejectingReset(&'static str);

#[async_trait(?Send)]
impl AuthService for RejectingReset {
    async fn sign_in(&self, _: &SignInRequest) -> Result<Profile, AppError> {
        Err(AppError::sign_in("unused"))
    }

    async fn sign_up(&self, _: &SignUpRequest) -> Result<Profile, AppError> {
        Err(AppError::sign_up("unused"))
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn reset_password(&self, _: &str) -> Result<(), AppError> {
        Err(AppError::reset(self.0))
    }

    async fn current_profile(&self) -> Result<Option<Profile>, AppError> {
        Ok(None)
    }
}

/// Submit the form once and record the phase after every update.
async fn submit(service: &dyn AuthService, form: &mut ResetForm) -> Vec<ResetPhase> {
    let mut phases = vec![form.phase];
    submit_password_reset(service, |edit| {
        edit(form);
        phases.push(form.phase);
    })
    .await;
    phases
}

fn known_account() -> MemoryAuthService {
    MemoryAuthService::new().with_account(
        "camille@clinique.test",
        "pw",
        Profile {
            first_name: "Camille".into(),
            last_name: "Lefèvre".into(),
            role: Role::Patient,
            is_online: false,
        },
    )
}

#[tokio::test]
async fn successful_reset_reaches_success_and_shows_submitted_email() {
    let client = AuthClient::new(known_account());
    let mut form = ResetForm::default();
    form.set_email("camille@clinique.test");

    let phases = submit(&*client, &mut form).await;

    assert_eq!(
        phases,
        vec![ResetPhase::Input, ResetPhase::Loading, ResetPhase::Success]
    );
    assert_eq!(form.sent_to(), Some("camille@clinique.test"));
    assert_eq!(form.error, None);
}

#[tokio::test]
async fn rejected_reset_returns_to_input_with_exact_message() {
    let message = "Trop de demandes. Réessayez dans 60 secondes.";
    let client = AuthClient::new(RejectingReset(message));
    let mut form = ResetForm::default();
    form.set_email("camille@clinique.test");

    let phases = submit(&*client, &mut form).await;

    assert_eq!(
        phases,
        vec![ResetPhase::Input, ResetPhase::Loading, ResetPhase::Input]
    );
    assert_eq!(form.error.as_deref(), Some(message));
    assert_eq!(form.sent_to(), None);
}

#[tokio::test]
async fn user_can_resubmit_after_a_failure() {
    let client = AuthClient::new(known_account());
    let mut form = ResetForm::default();
    form.set_email("typo@clinique.test");

    submit(&*client, &mut form).await;
    assert_eq!(form.phase, ResetPhase::Input);
    assert!(form.error.is_some());

    form.set_email("camille@clinique.test");
    let phases = submit(&*client, &mut form).await;

    assert_eq!(phases.last(), Some(&ResetPhase::Success));
    assert_eq!(form.error, None);
    assert_eq!(form.sent_to(), Some("camille@clinique.test"));
}

#[tokio::test]
async fn submit_after_success_does_not_call_the_collaborator() {
    let service = known_account();
    let mut form = ResetForm::default();
    form.set_email("camille@clinique.test");

    submit(&service, &mut form).await;
    assert_eq!(service.reset_requests().len(), 1);

    let phases = submit(&service, &mut form).await;

    assert_eq!(phases, vec![ResetPhase::Success, ResetPhase::Success]);
    assert_eq!(service.reset_requests().len(), 1);
    assert_eq!(form.sent_to(), Some("camille@clinique.test"));
}
