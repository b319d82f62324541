use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use dioxus_free_icons::Icon;

use crate::components::controlled::use_value_source;
use crate::components::error_message::ErrorMessage;
use crate::components::select::SelectOption;
use crate::id::use_field_ids;

use super::label_state::label_state;

/// A select whose label doubles as the placeholder.
///
/// The label floats (small, raised) whenever the listbox is open or a value
/// is selected, and rests centered otherwise. Its position and color are
/// derived on every render from (open, value, invalid); nothing about the
/// label is stored.
#[component]
pub fn SelectFloatingLabel(
    label: String,
    options: Vec<SelectOption>,
    /// Controlled selection. Supply exactly one of `value` / `initial_value`.
    #[props(default)]
    value: Option<String>,
    /// Starting selection in uncontrolled mode.
    #[props(default)]
    initial_value: Option<String>,
    /// Forced listbox state. Leave `None` to let the component own it.
    #[props(default)]
    open: Option<bool>,
    #[props(default = false)] invalid: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] described_by: String,
    #[props(default)] on_change: Option<EventHandler<String>>,
    #[props(default)] on_open_change: Option<EventHandler<bool>>,
) -> Element {
    let source = use_value_source(&value);
    let mut owned = use_signal(|| initial_value.clone());

    let selection = if source.is_controlled() {
        value.clone()
    } else {
        owned.read().clone()
    };

    let mut owned_open = use_signal(|| false);
    let effective_open = open.unwrap_or(*owned_open.read()) && !disabled;

    let mut set_open = move |next: bool| {
        if next && disabled {
            return;
        }
        if open.is_none() {
            owned_open.set(next);
        }
        if let Some(handler) = &on_open_change {
            handler.call(next);
        }
    };

    let selected_label = options
        .iter()
        .find(|option| Some(&option.value) == selection.as_ref())
        .map(|option| option.label.clone());
    let has_value = selected_label.is_some();
    let shown = selected_label.unwrap_or_default();

    let state = label_state(effective_open, has_value, invalid);
    let expanded = if effective_open { "true" } else { "false" };
    let trigger_id = id.unwrap_or_default();

    // (value, label, selected) per option row
    let option_rows: Vec<(String, String, bool)> = options
        .iter()
        .map(|option| {
            (
                option.value.clone(),
                option.label.clone(),
                Some(&option.value) == selection.as_ref(),
            )
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "select-floating",
            "data-open": if effective_open { "true" },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    evt.prevent_default();
                    set_open(false);
                }
            },
            button {
                id: if !trigger_id.is_empty() { trigger_id.clone() },
                r#type: "button",
                class: "select-floating-trigger",
                role: "combobox",
                aria_haspopup: "listbox",
                aria_expanded: expanded,
                aria_invalid: if invalid { "true" },
                aria_describedby: if !described_by.is_empty() { described_by.clone() },
                disabled,
                onclick: move |_| set_open(!effective_open),
                span {
                    class: "select-floating-text",
                    "data-position": state.position.class(),
                    "data-color": state.color.class(),
                    "{label}"
                }
                span { class: "select-floating-value", "{shown}" }
                Icon::<LdChevronDown> { icon: LdChevronDown, width: 14, height: 14 }
            }
            if effective_open {
                div { class: "select-backdrop", onclick: move |_| set_open(false) }
                div { class: "select-listbox", role: "listbox",
                    for (opt_value, opt_label, is_selected) in option_rows {
                        button {
                            r#type: "button",
                            class: "select-option",
                            role: "option",
                            aria_selected: if is_selected { "true" } else { "false" },
                            "data-selected": if is_selected { "true" },
                            onclick: move |_| {
                                // re-committing the current choice is a no-op
                                if !is_selected {
                                    if !source.is_controlled() {
                                        owned.set(Some(opt_value.clone()));
                                    }
                                    if let Some(handler) = &on_change {
                                        handler.call(opt_value.clone());
                                    }
                                }
                                set_open(false);
                            },
                            "{opt_label}"
                        }
                    }
                }
            }
        }
    }
}

/// [`SelectFloatingLabel`] wrapped with hint and error wiring.
///
/// Generated (or caller-derived) ids connect the hint and error elements to
/// the trigger's `aria-describedby`; the error presence also drives the
/// label's error color.
#[component]
pub fn SelectFloatingLabelField(
    label: String,
    options: Vec<SelectOption>,
    /// Controlled selection. Supply exactly one of `value` / `initial_value`.
    #[props(default)]
    value: Option<String>,
    /// Starting selection in uncontrolled mode.
    #[props(default)]
    initial_value: Option<String>,
    #[props(default)] hint: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] on_change: Option<EventHandler<String>>,
    #[props(default)] on_open_change: Option<EventHandler<bool>>,
) -> Element {
    let ids = use_field_ids(id);
    let has_hint = hint.as_deref().is_some_and(|h| !h.is_empty());
    let has_error = error.as_deref().is_some_and(|e| !e.is_empty());
    let described_by = ids.described_by(has_hint, has_error).unwrap_or_default();

    rsx! {
        div { class: "select-floating-field",
            SelectFloatingLabel {
                label,
                options,
                value,
                initial_value,
                invalid: has_error,
                disabled,
                id: Some(ids.field.clone()),
                described_by,
                on_change: move |next: String| {
                    if let Some(handler) = &on_change {
                        handler.call(next);
                    }
                },
                on_open_change: move |next: bool| {
                    if let Some(handler) = &on_open_change {
                        handler.call(next);
                    }
                },
            }
            if has_hint {
                span { id: ids.hint.clone(), class: "select-floating-hint",
                    {hint.clone().unwrap_or_default()}
                }
            }
            ErrorMessage { id: ids.error.clone(), message: error.clone().unwrap_or_default() }
        }
    }
}
