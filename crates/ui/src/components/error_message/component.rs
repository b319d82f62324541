use dioxus::prelude::*;

use crate::attrs::merge_attributes;

/// A field-level validation message announced as an alert.
///
/// Renders nothing when the message is empty, so `aria-describedby`
/// references to its id must only be emitted while a message is present.
#[component]
pub fn ErrorMessage(
    #[props(default)] id: String,
    #[props(default)] message: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    if message.is_empty() {
        return rsx! {};
    }

    let base = vec![Attribute::new("class", "error-message", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            id: if !id.is_empty() { id.clone() },
            role: "alert",
            ..merged,
            "{message}"
        }
    }
}
