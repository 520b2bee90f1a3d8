use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdCalendar, LdClipboardList, LdUsers};
use dioxus_free_icons::Icon;

use super::DashboardTile;

#[component]
pub fn DoctorDashboard() -> Element {
    rsx! {
        section { class: "dashboard-panel dashboard-doctor",
            h2 { class: "dashboard-panel-title", "Espace praticien" }
            div { class: "dashboard-tiles",
                DashboardTile {
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 } },
                    title: "Planning du jour",
                    description: "Vos consultations à venir.",
                }
                DashboardTile {
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
                    title: "Mes patients",
                    description: "Dossiers et historiques de vos patients.",
                }
                DashboardTile {
                    icon: rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 20, height: 20 } },
                    title: "Comptes rendus",
                    description: "Rédigez et signez vos comptes rendus.",
                }
                DashboardTile {
                    icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 20, height: 20 } },
                    title: "Suivi",
                    description: "Alertes et constantes à surveiller.",
                }
            }
        }
    }
}
