use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdSettings, LdShield, LdUserCheck};
use dioxus_free_icons::Icon;

use super::DashboardTile;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        section { class: "dashboard-panel dashboard-admin",
            h2 { class: "dashboard-panel-title", "Administration" }
            div { class: "dashboard-tiles",
                DashboardTile {
                    icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 20, height: 20 } },
                    title: "Comptes utilisateurs",
                    description: "Validez et gérez les comptes patients et praticiens.",
                }
                DashboardTile {
                    icon: rsx! { Icon::<LdShield> { icon: LdShield, width: 20, height: 20 } },
                    title: "Accès et rôles",
                    description: "Attribuez les rôles et contrôlez les permissions.",
                }
                DashboardTile {
                    icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 20, height: 20 } },
                    title: "Activité",
                    description: "Connexions récentes et état du service.",
                }
                DashboardTile {
                    icon: rsx! { Icon::<LdSettings> { icon: LdSettings, width: 20, height: 20 } },
                    title: "Paramètres",
                    description: "Configuration de l'établissement.",
                }
            }
        }
    }
}
