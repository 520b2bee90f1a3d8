use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Error,
    Success,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Error => "error",
            AlertVariant::Success => "success",
        }
    }
}

/// Inline message banner. Shows a close button when `on_dismiss` is set.
#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "alert", None, false),
        Attribute::new("data-style", variant.class(), None, false),
        Attribute::new("role", "alert", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div { class: "alert-message", {children} }
            if let Some(handler) = on_dismiss {
                button {
                    r#type: "button",
                    class: "alert-dismiss",
                    aria_label: "Fermer",
                    onclick: move |_| handler.call(()),
                    Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_renders_message_verbatim() {
        let html = dioxus_ssr::render_element(rsx! {
            Alert { "Utilisateur introuvable" }
        });
        assert!(html.contains("Utilisateur introuvable"));
        assert!(html.contains(r#"data-style="error""#));
        assert!(!html.contains("alert-dismiss"));
    }

    #[test]
    fn dismissible_alert_has_close_button() {
        let html = dioxus_ssr::render_element(rsx! {
            Alert { on_dismiss: move |_| {}, "Oups" }
        });
        assert!(html.contains("alert-dismiss"));
        assert!(html.contains(r#"aria-label="Fermer""#));
    }
}
