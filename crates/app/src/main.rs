use dioxus::prelude::*;

mod auth;
mod routes;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = auth_service::config::load_config();
        AuthState::new(auth_service::connect(&config.auth))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Espace clinique" }
        Router::<Route> {}
    }
}
