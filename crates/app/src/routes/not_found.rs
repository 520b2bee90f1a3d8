use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page introuvable" }
                p { class: "not-found-message",
                    "La page "
                    code { "{path}" }
                    " n'existe pas."
                }
                Link { to: Route::AuthPage {}, class: "auth-link", "Retour à la connexion" }
            }
        }
    }
}
