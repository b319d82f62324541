use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use dioxus_free_icons::Icon;

use crate::components::controlled::use_value_source;

/// One choice in a [`Select`] listbox.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A listbox-backed select.
///
/// The trigger is a `combobox` button; options render as `option` elements
/// inside a `listbox` panel. Committing an option fires `on_change` and
/// closes; re-committing the already-selected option just closes. Escape and
/// outside click close without changing the value.
#[component]
pub fn Select(
    options: Vec<SelectOption>,
    /// Controlled selection. Supply exactly one of `value` / `initial_value`.
    #[props(default)]
    value: Option<String>,
    /// Starting selection in uncontrolled mode.
    #[props(default)]
    initial_value: Option<String>,
    #[props(default = "Select...".to_string())] placeholder: String,
    /// Forced listbox state. Leave `None` to let the component own it.
    #[props(default)]
    open: Option<bool>,
    #[props(default = false)] disabled: bool,
    #[props(default)] id: Option<String>,
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
    let shown = selected_label.unwrap_or_else(|| placeholder.clone());
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
            class: "select",
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
                class: "select-trigger",
                role: "combobox",
                aria_haspopup: "listbox",
                aria_expanded: expanded,
                disabled,
                onclick: move |_| set_open(!effective_open),
                span {
                    class: "select-value",
                    "data-placeholder": if !has_value { "true" },
                    "{shown}"
                }
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
