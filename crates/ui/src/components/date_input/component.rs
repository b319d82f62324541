use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCalendar;
use dioxus_free_icons::Icon;
use time::Date;

use crate::components::button::{Button, ButtonVariant};
use crate::components::calendar::Calendar;
use crate::components::controlled::use_value_source;
use crate::id::use_field_ids;

use super::parse::{format_date, parse_date, parse_date_in_range};

/// A date field with a calendar popover.
///
/// The typed draft is re-parsed on every keystroke against MM/DD/YYYY;
/// `on_change` fires only for valid dates inside the optional bounds.
/// Rejected drafts stay in the field untouched. Blur rewrites a valid draft
/// into canonical form and leaves anything else alone.
///
/// The popover opens on focus or on the trigger icon, and closes on outside
/// click, Escape, a committed Enter, or a grid selection. `open` forces the
/// popover state from outside; `disabled` suppresses every opening path.
#[component]
pub fn DateInput(
    /// Controlled value. Supply exactly one of `value` / `initial_value`.
    #[props(default)]
    value: Option<Date>,
    /// Starting value in uncontrolled mode.
    #[props(default)]
    initial_value: Option<Date>,
    #[props(default)] min: Option<Date>,
    #[props(default)] max: Option<Date>,
    /// Forced popover state. Leave `None` to let the component own it.
    #[props(default)]
    open: Option<bool>,
    /// Override for "today" in the popover grid. Defaults to the current UTC date.
    #[props(default)]
    today: Option<Date>,
    #[props(default = "MM/DD/YYYY".to_string())] placeholder: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] on_change: Option<EventHandler<Date>>,
    #[props(default)] on_open_change: Option<EventHandler<bool>>,
) -> Element {
    let source = use_value_source(&value);
    let mut owned = use_signal(|| initial_value);
    let mut draft = use_signal(|| {
        value
            .or(initial_value)
            .map(format_date)
            .unwrap_or_default()
    });

    // Controlled values set from outside replace the draft; the guard keeps
    // this from fighting the user mid-keystroke.
    let mut last_seen = use_signal(|| value);
    if source.is_controlled() && *last_seen.read() != value {
        last_seen.set(value);
        draft.set(value.map(format_date).unwrap_or_default());
    }

    let effective = if source.is_controlled() {
        value
    } else {
        *owned.read()
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

    let mut commit = move |date: Date| {
        // re-committing the current value is a no-op
        if effective == Some(date) {
            return;
        }
        if !source.is_controlled() {
            owned.set(Some(date));
        }
        if let Some(handler) = &on_change {
            handler.call(date);
        }
    };

    let ids = use_field_ids(id);
    let expanded = if effective_open { "true" } else { "false" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "date-input", "data-open": if effective_open { "true" },
            div { class: "date-input-control",
                input {
                    id: ids.field.clone(),
                    class: "date-input-field",
                    r#type: "text",
                    role: "combobox",
                    aria_haspopup: "dialog",
                    aria_expanded: expanded,
                    value: "{draft}",
                    placeholder: "{placeholder}",
                    disabled,
                    onfocus: move |_| set_open(true),
                    oninput: move |evt: FormEvent| {
                        let text = evt.value();
                        draft.set(text.clone());
                        match parse_date_in_range(&text, min, max) {
                            Ok(date) => commit(date),
                            Err(err) => {
                                tracing::trace!(?err, "date draft rejected");
                            }
                        }
                    },
                    onblur: move |_| {
                        let text = draft.read().clone();
                        if let Ok(date) = parse_date(&text) {
                            draft.set(format_date(date));
                        }
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        match evt.key() {
                            Key::Enter => {
                                let text = draft.read().clone();
                                if let Ok(date) = parse_date_in_range(&text, min, max) {
                                    evt.prevent_default();
                                    commit(date);
                                    draft.set(format_date(date));
                                    set_open(false);
                                }
                            }
                            Key::Escape => {
                                evt.prevent_default();
                                set_open(false);
                            }
                            _ => {}
                        }
                    },
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled,
                    aria_label: "Open calendar",
                    onclick: move |_| set_open(true),
                    Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 }
                }
            }
            if effective_open {
                div { class: "date-input-backdrop", onclick: move |_| set_open(false) }
                div {
                    class: "date-input-popover",
                    role: "dialog",
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Escape {
                            evt.prevent_default();
                            set_open(false);
                        }
                    },
                    // Mounted fresh on each open, so it starts from the
                    // committed value even after rejected drafts.
                    Calendar {
                        initial_value: effective,
                        initial_month: effective,
                        today,
                        min,
                        max,
                        on_change: move |date: Date| {
                            commit(date);
                            draft.set(format_date(date));
                        },
                        on_close: move |_| set_open(false),
                    }
                }
            }
        }
    }
}
