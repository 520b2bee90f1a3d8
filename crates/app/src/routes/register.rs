use dioxus::prelude::*;
use shared_types::AuthMode;
use shared_ui::Card;

use crate::routes::auth_form::AuthForm;
use crate::routes::Route;

/// Standalone registration page.
#[component]
pub fn Register() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                AuthForm {
                    mode: AuthMode::SignUp,
                    on_toggle: move |_| {
                        navigator().push(Route::AuthPage {});
                    },
                }
            }
        }
    }
}
