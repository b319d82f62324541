use dioxus::prelude::*;

use crate::attrs::merge_attributes;

/// A form-field label wired to its control via `for`.
///
/// Disabled is a purely visual state here; the label stays associated with
/// its control either way. The required marker is decoration and hidden from
/// assistive tech, callers are expected to set `required`/`aria-required` on
/// the control itself.
#[component]
pub fn InputLabel(
    #[props(default)] html_for: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "input-label", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            r#for: if !html_for.is_empty() { html_for.clone() },
            "data-disabled": if disabled { "true" },
            ..merged,
            {children}
            if required {
                span { class: "input-label-required", aria_hidden: "true", "*" }
            }
        }
    }
}
