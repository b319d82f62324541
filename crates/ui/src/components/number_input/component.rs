use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdChevronUp};
use dioxus_free_icons::Icon;

use crate::components::controlled::use_value_source;
use crate::id::use_field_ids;

use super::step::{
    at_bound, clamp_f64, format_number, parse_number, step_value, StepDirection,
};

/// A numeric field with increment/decrement controls.
///
/// Steps are applied in decimal arithmetic and clamped into `[min, max]`;
/// each button disables itself once the value sits at its bound. ArrowUp and
/// ArrowDown move one step, PageUp and PageDown move ten, Home and End jump
/// to the bounds. An empty field steps from a zero baseline.
#[component]
pub fn NumberInput(
    /// Controlled value. Supply exactly one of `value` / `initial_value`.
    #[props(default)]
    value: Option<f64>,
    /// Starting value in uncontrolled mode.
    #[props(default)]
    initial_value: Option<f64>,
    #[props(default)] min: Option<f64>,
    #[props(default)] max: Option<f64>,
    #[props(default = 1.0)] step: f64,
    #[props(default = false)] disabled: bool,
    #[props(default)] placeholder: String,
    #[props(default)] id: Option<String>,
    #[props(default)] on_change: Option<EventHandler<f64>>,
) -> Element {
    let source = use_value_source(&value);
    let mut owned = use_signal(|| initial_value);
    let mut draft = use_signal(|| {
        value
            .or(initial_value)
            .map(|v| format_number(v, step))
            .unwrap_or_default()
    });

    let mut last_seen = use_signal(|| value);
    if source.is_controlled() && *last_seen.read() != value {
        last_seen.set(value);
        draft.set(value.map(|v| format_number(v, step)).unwrap_or_default());
    }

    let effective = if source.is_controlled() {
        value
    } else {
        *owned.read()
    };

    let mut commit = move |next: f64| {
        if !source.is_controlled() {
            owned.set(Some(next));
        }
        if let Some(handler) = &on_change {
            handler.call(next);
        }
    };

    let mut apply_step = move |direction: StepDirection, magnitude: u32| {
        let text = draft.read().clone();
        let current = parse_number(&text).or(effective);
        let next = step_value(current, direction, magnitude, step, min, max);
        // stepping against a bound changes nothing and fires nothing
        if current == Some(next) {
            return;
        }
        draft.set(format_number(next, step));
        commit(next);
    };

    let mut jump_to = move |bound: f64| {
        if effective == Some(bound) {
            return;
        }
        draft.set(format_number(bound, step));
        commit(bound);
    };

    let at_max = at_bound(effective, max, true);
    let at_min = at_bound(effective, min, false);
    let ids = use_field_ids(id);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "number-input", "data-disabled": if disabled { "true" },
            input {
                id: ids.field.clone(),
                class: "number-input-field",
                r#type: "text",
                inputmode: "decimal",
                value: "{draft}",
                placeholder: if !placeholder.is_empty() { placeholder.clone() },
                disabled,
                oninput: move |evt: FormEvent| {
                    let text = evt.value();
                    draft.set(text.clone());
                    if let Some(typed) = parse_number(&text) {
                        commit(clamp_f64(typed, min, max));
                    } else {
                        tracing::trace!(draft = %text, "number draft not committable");
                    }
                },
                onblur: move |_| {
                    let text = draft.read().clone();
                    if parse_number(&text).is_some() {
                        if let Some(current) = effective {
                            draft.set(format_number(current, step));
                        }
                    }
                },
                onkeydown: move |evt: KeyboardEvent| match evt.key() {
                    Key::ArrowUp => {
                        evt.prevent_default();
                        if !disabled {
                            apply_step(StepDirection::Up, 1);
                        }
                    }
                    Key::ArrowDown => {
                        evt.prevent_default();
                        if !disabled {
                            apply_step(StepDirection::Down, 1);
                        }
                    }
                    Key::PageUp => {
                        evt.prevent_default();
                        if !disabled {
                            apply_step(StepDirection::Up, 10);
                        }
                    }
                    Key::PageDown => {
                        evt.prevent_default();
                        if !disabled {
                            apply_step(StepDirection::Down, 10);
                        }
                    }
                    Key::Home => {
                        if let Some(min) = min {
                            evt.prevent_default();
                            if !disabled {
                                jump_to(min);
                            }
                        }
                    }
                    Key::End => {
                        if let Some(max) = max {
                            evt.prevent_default();
                            if !disabled {
                                jump_to(max);
                            }
                        }
                    }
                    _ => {}
                },
            }
            div { class: "number-input-controls",
                button {
                    r#type: "button",
                    class: "number-input-step",
                    aria_label: "Increment",
                    disabled: disabled || at_max,
                    onclick: move |_| {
                        if !disabled && !at_max {
                            apply_step(StepDirection::Up, 1);
                        }
                    },
                    Icon::<LdChevronUp> { icon: LdChevronUp, width: 12, height: 12 }
                }
                button {
                    r#type: "button",
                    class: "number-input-step",
                    aria_label: "Decrement",
                    disabled: disabled || at_min,
                    onclick: move |_| {
                        if !disabled && !at_min {
                            apply_step(StepDirection::Down, 1);
                        }
                    },
                    Icon::<LdChevronDown> { icon: LdChevronDown, width: 12, height: 12 }
                }
            }
        }
    }
}
