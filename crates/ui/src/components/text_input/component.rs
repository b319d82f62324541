use dioxus::prelude::*;

use crate::components::controlled::use_value_source;
use crate::components::error_message::ErrorMessage;
use crate::components::input_label::InputLabel;
use crate::id::use_field_ids;

/// A text input composed with its label, hint and error message.
///
/// The hint and error elements get generated ids (or ids derived from the
/// caller-supplied `id`) and are wired into the input's `aria-describedby`.
/// The error id is only referenced while an error is actually rendered.
#[component]
pub fn TextInputField(
    #[props(default)] label: String,
    /// Controlled value. Supply exactly one of `value` / `initial_value`.
    #[props(default)]
    value: Option<String>,
    /// Starting value in uncontrolled mode.
    #[props(default)]
    initial_value: Option<String>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] hint: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] on_change: Option<EventHandler<String>>,
) -> Element {
    let source = use_value_source(&value);
    let mut owned = use_signal(|| initial_value.clone().unwrap_or_default());

    let text = if source.is_controlled() {
        value.clone().unwrap_or_default()
    } else {
        owned.read().clone()
    };

    let ids = use_field_ids(id);
    let has_hint = hint.as_deref().is_some_and(|h| !h.is_empty());
    let has_error = error.as_deref().is_some_and(|e| !e.is_empty());
    let described_by = ids.described_by(has_hint, has_error).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "text-field", "data-disabled": if disabled { "true" },
            if !label.is_empty() {
                InputLabel {
                    html_for: ids.field.clone(),
                    required,
                    disabled,
                    "{label}"
                }
            }
            input {
                id: ids.field.clone(),
                class: "text-field-input",
                r#type: "{input_type}",
                value: "{text}",
                placeholder: if !placeholder.is_empty() { placeholder.clone() },
                disabled,
                aria_invalid: if has_error { "true" },
                aria_describedby: if !described_by.is_empty() { described_by.clone() },
                oninput: move |evt: FormEvent| {
                    let next = evt.value();
                    if !source.is_controlled() {
                        owned.set(next.clone());
                    }
                    if let Some(handler) = &on_change {
                        handler.call(next);
                    }
                },
            }
            if has_hint {
                span { id: ids.hint.clone(), class: "text-field-hint",
                    {hint.clone().unwrap_or_default()}
                }
            }
            ErrorMessage { id: ids.error.clone(), message: error.clone().unwrap_or_default() }
        }
    }
}
