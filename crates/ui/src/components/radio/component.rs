use dioxus::prelude::*;

use crate::attrs::merge_attributes;
use crate::components::controlled::use_value_source;

/// Group state shared with child radios through context.
#[derive(Clone, Copy)]
pub(crate) struct RadioGroupCtx {
    selected: Signal<Option<String>>,
    disabled: Signal<bool>,
    commit: Callback<String>,
}

/// A `radiogroup` container. Child [`Radio`] items read the group's
/// selection and disabled state from context.
#[component]
pub fn RadioGroup(
    /// Controlled selection. Supply exactly one of `value` / `initial_value`.
    #[props(default)]
    value: Option<String>,
    /// Starting selection in uncontrolled mode.
    #[props(default)]
    initial_value: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_change: Option<EventHandler<String>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let source = use_value_source(&value);
    let mut selected = use_signal(|| value.clone().or(initial_value.clone()));
    let mut group_disabled = use_signal(|| disabled);

    // keep the shared signals in step with the props
    let mut last_seen = use_signal(|| value.clone());
    if source.is_controlled() && *last_seen.read() != value {
        last_seen.set(value.clone());
        selected.set(value.clone());
    }
    if *group_disabled.read() != disabled {
        group_disabled.set(disabled);
    }

    let commit = use_callback(move |next: String| {
        if !source.is_controlled() {
            selected.set(Some(next.clone()));
        }
        if let Some(handler) = &on_change {
            handler.call(next);
        }
    });

    use_context_provider(|| RadioGroupCtx {
        selected,
        disabled: group_disabled,
        commit,
    });

    let base = vec![Attribute::new("class", "radio-group", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { role: "radiogroup", ..merged, {children} }
    }
}

/// One selectable item inside a [`RadioGroup`].
///
/// Selecting fires the group's `on_change`; clicking the already-selected
/// radio does nothing (radios do not deselect). Disabled, on the item or
/// inherited from the group, cuts activation but leaves `aria-checked`
/// reflecting the actual selection.
#[component]
pub fn Radio(
    value: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_context::<RadioGroupCtx>();
    let checked = ctx.selected.read().as_deref() == Some(value.as_str());
    let is_disabled = disabled || *ctx.disabled.read();

    let base = vec![Attribute::new("class", "radio", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            role: "radio",
            disabled: is_disabled,
            aria_checked: if checked { "true" } else { "false" },
            aria_disabled: if is_disabled { "true" },
            "data-checked": if checked { "true" },
            onclick: move |_| {
                if is_disabled || checked {
                    return;
                }
                ctx.commit.call(value.clone());
            },
            ..merged,
            span { class: "radio-indicator", aria_hidden: "true" }
            span { class: "radio-label", {children} }
        }
    }
}
