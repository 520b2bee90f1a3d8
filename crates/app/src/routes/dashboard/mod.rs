use dioxus::prelude::*;
use shared_types::{ProfileState, Role};
use shared_ui::{Badge, BadgeVariant, Spinner, SpinnerSize};

use crate::auth::use_auth;

mod admin;
mod doctor;
mod patient;

use admin::AdminDashboard;
use doctor::DoctorDashboard;
use patient::PatientDashboard;

/// Dashboard route. Dispatches on the signed-in user's role.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let profile = auth.profile.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        DashboardView { profile }
    }
}

/// Renders exactly one of: the loading indicator, the dashboard for a
/// recognized role, or the unrecognized-role message.
#[component]
pub fn DashboardView(profile: ProfileState) -> Element {
    let ProfileState::Loaded(profile) = profile else {
        return rsx! {
            div { class: "dashboard-loading",
                Spinner { size: SpinnerSize::Large }
            }
        };
    };

    let full_name = profile.full_name();
    let role_tag = profile.role.as_str().to_string();
    let (presence, presence_variant) = if profile.is_online {
        ("En ligne", BadgeVariant::Success)
    } else {
        ("Hors ligne", BadgeVariant::Outline)
    };

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                div {
                    h1 { class: "dashboard-greeting", "Bonjour, {full_name}" }
                    p { class: "dashboard-subtitle", "Dashboard {role_tag}" }
                }
                Badge { variant: presence_variant, class: "dashboard-presence", "{presence}" }
            }
            {role_view(&profile.role)}
        }
    }
}

fn role_view(role: &Role) -> Element {
    match role {
        Role::Patient => rsx! { PatientDashboard {} },
        Role::Doctor => rsx! { DoctorDashboard {} },
        Role::Admin => rsx! { AdminDashboard {} },
        Role::Unrecognized(_) => rsx! {
            div { class: "dashboard-unknown-role", "Rôle non reconnu" }
        },
    }
}

/// One shortcut card on a role dashboard.
#[component]
fn DashboardTile(icon: Element, title: String, description: String) -> Element {
    rsx! {
        div { class: "dashboard-tile",
            div { class: "dashboard-tile-icon", {icon} }
            div {
                h3 { class: "dashboard-tile-title", "{title}" }
                p { class: "dashboard-tile-description", "{description}" }
            }
        }
    }
}
