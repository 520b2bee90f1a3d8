use shared_types::ResetForm;

use crate::AuthService;

/// Submit the forgot-password form: `begin`, ask `service` for a reset link,
/// then `settle` with the answer.
///
/// `update` runs an edit against wherever the form lives (a signal in the
/// UI, a plain value in tests). It is called once before the request and,
/// when a request was made, once after it. A form that is already loading or
/// done is left alone and `service` is not called.
pub async fn submit_password_reset<F>(service: &dyn AuthService, mut update: F)
where
    F: FnMut(&mut dyn FnMut(&mut ResetForm)),
{
    let mut email = None;
    update(&mut |form| email = form.begin());
    let Some(email) = email else {
        return;
    };

    let result = service.reset_password(&email).await;
    match &result {
        Ok(()) => tracing::info!(%email, "password reset link requested"),
        Err(e) => tracing::warn!(%email, error = %e, "password reset request failed"),
    }

    let mut result = Some(result);
    update(&mut |form| {
        if let Some(result) = result.take() {
            form.settle(result);
        }
    });
}
