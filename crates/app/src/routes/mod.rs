use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdStethoscope};
use dioxus_free_icons::Icon;
use shared_types::Profile;
use shared_ui::{Button, ButtonSize, ButtonVariant};

use crate::auth::use_auth;

pub mod auth_form;
pub mod auth_page;
pub mod dashboard;
pub mod forgot_password;
pub mod not_found;
pub mod register;

use auth_page::AuthPage;
use dashboard::Dashboard;
use forgot_password::ForgotPassword;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/auth")]
    AuthPage {},
    #[route("/register")]
    Register {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Confirms the session before rendering protected routes, redirecting to
/// the sign-in page when there is none.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();
    let client = auth.client.clone();

    let session = use_resource(move || {
        let client = client.clone();
        async move { client.current_profile().await }
    });

    let result = session.read().as_ref().cloned();
    match result {
        Some(Ok(Some(profile))) => {
            if auth.profile.peek().profile() != Some(&profile) {
                auth.set_profile(profile);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(outcome) => {
            if let Err(e) = outcome {
                tracing::warn!(error = %e, "could not confirm session");
            }
            if auth.profile.peek().is_loaded() {
                auth.clear_profile();
            }
            navigator().push(Route::AuthPage {});
            rsx! {}
        }
        // Still checking; the dashboard shows its own loading indicator.
        None => rsx! { Outlet::<Route> {} },
    }
}

/// Shell around every signed-in page.
#[component]
fn AppLayout() -> Element {
    let auth = use_auth();
    let display_name = auth
        .profile
        .read()
        .profile()
        .map(Profile::full_name)
        .unwrap_or_default();

    let sign_out = move |_: MouseEvent| {
        let mut auth = auth.clone();
        async move {
            if let Err(e) = auth.client.sign_out().await {
                tracing::warn!(error = %e, "sign-out failed, ending local session anyway");
            }
            auth.clear_profile();
            navigator().push(Route::AuthPage {});
        }
    };

    rsx! {
        div { class: "app-shell",
            header { class: "app-navbar",
                div { class: "app-brand",
                    Icon::<LdStethoscope> { icon: LdStethoscope, width: 22, height: 22 }
                    span { class: "app-brand-name", "Espace clinique" }
                }
                div { class: "app-navbar-user",
                    if !display_name.is_empty() {
                        span { class: "app-navbar-name", "{display_name}" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: sign_out,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Se déconnecter"
                    }
                }
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
