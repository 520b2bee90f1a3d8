use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdFileText, LdMessageSquare, LdPill};
use dioxus_free_icons::Icon;

use super::DashboardTile;

#[component]
pub fn PatientDashboard() -> Element {
    rsx! {
        section { class: "dashboard-panel dashboard-patient",
            h2 { class: "dashboard-panel-title", "Mon espace patient" }
            div { class: "dashboard-tiles",
                DashboardTile {
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 } },
                    title: "Mes rendez-vous",
                    description: "Consultez et planifiez vos prochaines consultations.",
                }
                DashboardTile {
                    icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 } },
                    title: "Mon dossier médical",
                    description: "Retrouvez vos comptes rendus et résultats d'analyses.",
                }
                DashboardTile {
                    icon: rsx! { Icon::<LdPill> { icon: LdPill, width: 20, height: 20 } },
                    title: "Mes ordonnances",
                    description: "Accédez à vos prescriptions en cours.",
                }
                DashboardTile {
                    icon: rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 20, height: 20 } },
                    title: "Messagerie",
                    description: "Échangez avec votre équipe soignante.",
                }
            }
        }
    }
}
