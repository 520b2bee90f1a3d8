use dioxus::prelude::*;
use shared_types::AuthMode;
use shared_ui::Card;

use crate::routes::auth_form::AuthForm;
use crate::routes::Route;

/// Sign-in page. Toggles between signing in and creating an account; the
/// password reset link is only offered while signing in.
#[component]
pub fn AuthPage() -> Element {
    let mut mode = use_signal(AuthMode::default);
    let current = mode();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                AuthForm {
                    mode: current,
                    on_toggle: move |_| mode.set(current.toggled()),
                }
                if current.offers_password_reset() {
                    div { class: "auth-forgot",
                        Link { to: Route::ForgotPassword {}, class: "auth-link", "Mot de passe oublié ?" }
                    }
                }
            }
        }
    }
}
