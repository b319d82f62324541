use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdChevronRight};
use dioxus_free_icons::Icon;
use time::{Date, Month, OffsetDateTime};

use crate::attrs::merge_attributes;
use crate::components::button::{Button, ButtonVariant};
use crate::components::controlled::use_value_source;

use super::grid::{
    day_kind, in_range, month_grid, shift_month, CalendarDayKind, WEEKDAY_LABELS,
};

/// One cell of the date grid.
///
/// Interactive kinds render as a `button` with `role="gridcell"`, so pointer
/// and Enter/Space activation behave identically. `DayOfWeek` and `Empty`
/// cells are plain containers: no button semantics, no events, regardless of
/// the props supplied. Selection stays visible on `aria-selected` even while
/// disabled; only the activation paths are cut.
#[component]
pub fn CalendarDay(
    #[props(default)] kind: CalendarDayKind,
    #[props(default = false)] selected: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_select: Option<EventHandler<()>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "calendar-day", None, false),
        Attribute::new("data-kind", kind.class(), None, false),
    ];
    let merged = merge_attributes(vec![base, attributes]);

    if !kind.is_interactive() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div { role: kind.role(), ..merged, {children} }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            role: "gridcell",
            disabled,
            aria_selected: if selected { "true" } else { "false" },
            aria_disabled: if disabled { "true" },
            aria_current: if kind == CalendarDayKind::Today { "date" },
            "data-selected": if selected { "true" },
            onclick: move |_| {
                if disabled {
                    return;
                }
                if let Some(handler) = &on_select {
                    handler.call(());
                }
            },
            ..merged,
            {children}
        }
    }
}

/// A view-switching tab (e.g. days/months/years) for calendar chrome.
#[component]
pub fn CalendarTab(
    #[props(default = false)] active: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_activate: Option<EventHandler<()>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "calendar-tab", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            role: "tab",
            disabled,
            aria_selected: if active { "true" } else { "false" },
            aria_disabled: if disabled { "true" },
            "data-active": if active { "true" },
            onclick: move |_| {
                if disabled {
                    return;
                }
                if let Some(handler) = &on_activate {
                    handler.call(());
                }
            },
            ..merged,
            {children}
        }
    }
}

/// Month title with previous/next navigation.
#[component]
pub fn CalendarHeader(
    year: i32,
    month: Month,
    #[props(default)] on_previous: Option<EventHandler<()>>,
    #[props(default)] on_next: Option<EventHandler<()>>,
    #[props(default = false)] previous_disabled: bool,
    #[props(default = false)] next_disabled: bool,
) -> Element {
    let title = format!("{month} {year}");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "calendar-header",
            Button {
                variant: ButtonVariant::Ghost,
                disabled: previous_disabled,
                aria_label: "Previous month",
                onclick: move |_| {
                    if let Some(handler) = &on_previous {
                        handler.call(());
                    }
                },
                Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
            }
            div { class: "calendar-header-title", "{title}" }
            Button {
                variant: ButtonVariant::Ghost,
                disabled: next_disabled,
                aria_label: "Next month",
                onclick: move |_| {
                    if let Some(handler) = &on_next {
                        handler.call(());
                    }
                },
                Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
            }
        }
    }
}

/// A month grid with selection.
///
/// Owns the displayed month/year; selection is controlled via `value` or
/// owned internally starting from `initial_value`. Picking a day fires
/// `on_change` with that date and then `on_close`, in that order.
#[component]
pub fn Calendar(
    /// Controlled selection. Supply exactly one of `value` / `initial_value`.
    #[props(default)]
    value: Option<Date>,
    /// Starting selection in uncontrolled mode.
    #[props(default)]
    initial_value: Option<Date>,
    /// Month shown first when nothing is selected yet.
    #[props(default)]
    initial_month: Option<Date>,
    /// Override for "today". Defaults to the current UTC date.
    #[props(default)]
    today: Option<Date>,
    #[props(default)] min: Option<Date>,
    #[props(default)] max: Option<Date>,
    #[props(default)] on_change: Option<EventHandler<Date>>,
    #[props(default)] on_close: Option<EventHandler<()>>,
) -> Element {
    let source = use_value_source(&value);
    let mut owned = use_signal(|| initial_value);

    let selection = if source.is_controlled() {
        value
    } else {
        *owned.read()
    };

    let today = today.unwrap_or_else(|| OffsetDateTime::now_utc().date());
    let mut cursor = use_signal(|| {
        let anchor = value.or(initial_value).or(initial_month).unwrap_or(today);
        (anchor.year(), anchor.month())
    });
    let (year, month) = *cursor.read();

    let days = month_grid(year, month);
    let previous_disabled = shift_month(year, month, false).is_none();
    let next_disabled = shift_month(year, month, true).is_none();

    // (date, kind, selected, disabled, label) per cell, one Vec per week row
    let weeks: Vec<Vec<(Date, CalendarDayKind, bool, bool, String)>> = days
        .chunks(7)
        .map(|week| {
            week.iter()
                .copied()
                .map(|date| {
                    (
                        date,
                        day_kind(date, year, month, today),
                        selection == Some(date),
                        !in_range(date, min, max),
                        date.day().to_string(),
                    )
                })
                .collect()
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "calendar",
            CalendarHeader {
                year,
                month,
                previous_disabled,
                next_disabled,
                on_previous: move |_| {
                    let (y, m) = *cursor.read();
                    if let Some(shifted) = shift_month(y, m, false) {
                        cursor.set(shifted);
                    }
                },
                on_next: move |_| {
                    let (y, m) = *cursor.read();
                    if let Some(shifted) = shift_month(y, m, true) {
                        cursor.set(shifted);
                    }
                },
            }
            div { role: "grid", class: "calendar-grid",
                div { role: "row", class: "calendar-week",
                    for label in WEEKDAY_LABELS {
                        CalendarDay { kind: CalendarDayKind::DayOfWeek, "{label}" }
                    }
                }
                for week in weeks {
                    div { role: "row", class: "calendar-week",
                        for (date, kind, selected, day_disabled, label) in week {
                            CalendarDay {
                                kind,
                                selected,
                                disabled: day_disabled,
                                on_select: move |_| {
                                    tracing::debug!(%date, "calendar day selected");
                                    if !selected {
                                        if !source.is_controlled() {
                                            owned.set(Some(date));
                                        }
                                        if let Some(handler) = &on_change {
                                            handler.call(date);
                                        }
                                    }
                                    if let Some(handler) = &on_close {
                                        handler.call(());
                                    }
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
