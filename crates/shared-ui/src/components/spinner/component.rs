use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "sm",
            SpinnerSize::Large => "lg",
        }
    }
}

/// Rotating ring shown while something loads.
#[component]
pub fn Spinner(
    #[props(default)] size: SpinnerSize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "spinner", None, false),
        Attribute::new("data-size", size.class(), None, false),
        Attribute::new("role", "status", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_renders_status_role_and_size() {
        let html = dioxus_ssr::render_element(rsx! { Spinner { size: SpinnerSize::Small } });
        assert!(html.contains(r#"role="status""#));
        assert!(html.contains(r#"data-size="sm""#));
    }
}
