use time::{Date, Duration, Month};

/// The discrete kinds a day cell can take. Kind and selection/enablement are
/// independent axes: a disabled cell keeps its kind and its selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarDayKind {
    #[default]
    Default,
    Today,
    PreviousMonth,
    NextMonth,
    /// Weekday header cell. Non-interactive.
    DayOfWeek,
    /// Filler cell with no date. Non-interactive.
    Empty,
}

impl CalendarDayKind {
    pub fn class(&self) -> &'static str {
        match self {
            CalendarDayKind::Default => "default",
            CalendarDayKind::Today => "today",
            CalendarDayKind::PreviousMonth => "previous-month",
            CalendarDayKind::NextMonth => "next-month",
            CalendarDayKind::DayOfWeek => "day-of-week",
            CalendarDayKind::Empty => "empty",
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            CalendarDayKind::DayOfWeek => "columnheader",
            _ => "gridcell",
        }
    }

    /// Header and filler cells never respond to pointer or key events,
    /// even when a handler is supplied.
    pub fn is_interactive(&self) -> bool {
        !matches!(
            self,
            CalendarDayKind::DayOfWeek | CalendarDayKind::Empty
        )
    }
}

/// Weekday column headers, Sunday first.
pub(crate) const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Number of cells in the fixed six-week grid.
pub(crate) const GRID_CELLS: usize = 42;

/// The dates shown for a month: a fixed six-week window starting on the
/// Sunday on or before the 1st, so the layout never jumps between months.
pub(crate) fn month_grid(year: i32, month: Month) -> Vec<Date> {
    let Ok(first) = Date::from_calendar_date(year, month, 1) else {
        return Vec::new();
    };
    let lead = i64::from(first.weekday().number_days_from_sunday());
    let Some(start) = first.checked_sub(Duration::days(lead)) else {
        return Vec::new();
    };

    let mut days = Vec::with_capacity(GRID_CELLS);
    let mut cursor = start;
    for _ in 0..GRID_CELLS {
        days.push(cursor);
        match cursor.checked_add(Duration::days(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    days
}

/// Classify a grid date relative to the displayed month and today.
pub(crate) fn day_kind(date: Date, year: i32, month: Month, today: Date) -> CalendarDayKind {
    let shown = (year, u8::from(month));
    let own = (date.year(), u8::from(date.month()));
    if own < shown {
        CalendarDayKind::PreviousMonth
    } else if own > shown {
        CalendarDayKind::NextMonth
    } else if date == today {
        CalendarDayKind::Today
    } else {
        CalendarDayKind::Default
    }
}

/// Whether a date lies within the optional inclusive bounds.
pub(crate) fn in_range(date: Date, min: Option<Date>, max: Option<Date>) -> bool {
    if let Some(min) = min {
        if date < min {
            return false;
        }
    }
    if let Some(max) = max {
        if date > max {
            return false;
        }
    }
    true
}

/// Step the displayed month, refusing to leave the supported date range.
pub(crate) fn shift_month(year: i32, month: Month, forward: bool) -> Option<(i32, Month)> {
    let (y, m) = if forward {
        match month {
            Month::December => (year.checked_add(1)?, Month::January),
            _ => (year, month.next()),
        }
    } else {
        match month {
            Month::January => (year.checked_sub(1)?, Month::December),
            _ => (year, month.previous()),
        }
    };
    Date::from_calendar_date(y, m, 1).ok().map(|_| (y, m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use time::macros::date;

    #[test]
    fn grid_starts_on_the_sunday_before_the_first() {
        // March 2024 starts on a Friday
        let days = month_grid(2024, Month::March);
        assert_eq!(days.len(), GRID_CELLS);
        assert_eq!(days[0], date!(2024 - 02 - 25));
        assert_eq!(days[5], date!(2024 - 03 - 01));
        assert_eq!(days[41], date!(2024 - 04 - 06));
    }

    #[test]
    fn grid_when_month_starts_on_sunday_has_no_lead() {
        // September 2024 starts on a Sunday
        let days = month_grid(2024, Month::September);
        assert_eq!(days[0], date!(2024 - 09 - 01));
    }

    #[test]
    fn day_kind_partitions_the_grid() {
        let today = date!(2024 - 03 - 15);
        assert_eq!(
            day_kind(date!(2024 - 02 - 29), 2024, Month::March, today),
            CalendarDayKind::PreviousMonth
        );
        assert_eq!(
            day_kind(date!(2024 - 04 - 01), 2024, Month::March, today),
            CalendarDayKind::NextMonth
        );
        assert_eq!(
            day_kind(date!(2024 - 03 - 15), 2024, Month::March, today),
            CalendarDayKind::Today
        );
        assert_eq!(
            day_kind(date!(2024 - 03 - 14), 2024, Month::March, today),
            CalendarDayKind::Default
        );
    }

    #[test]
    fn day_kind_crosses_year_boundaries() {
        let today = date!(2024 - 01 - 10);
        assert_eq!(
            day_kind(date!(2023 - 12 - 31), 2024, Month::January, today),
            CalendarDayKind::PreviousMonth
        );
        assert_eq!(
            day_kind(date!(2025 - 01 - 01), 2024, Month::December, today),
            CalendarDayKind::NextMonth
        );
    }

    #[test]
    fn in_range_is_inclusive() {
        let min = Some(date!(2024 - 03 - 01));
        let max = Some(date!(2024 - 03 - 31));
        assert!(in_range(date!(2024 - 03 - 01), min, max));
        assert!(in_range(date!(2024 - 03 - 31), min, max));
        assert!(!in_range(date!(2024 - 02 - 29), min, max));
        assert!(!in_range(date!(2024 - 04 - 01), min, max));
        assert!(in_range(date!(1900 - 01 - 01), None, None));
    }

    #[test]
    fn shift_month_wraps_years() {
        assert_eq!(
            shift_month(2024, Month::December, true),
            Some((2025, Month::January))
        );
        assert_eq!(
            shift_month(2024, Month::January, false),
            Some((2023, Month::December))
        );
        assert_eq!(
            shift_month(2024, Month::June, true),
            Some((2024, Month::July))
        );
    }

    #[test]
    fn variant_classes_are_exhaustive_and_distinct() {
        let kinds = [
            CalendarDayKind::Default,
            CalendarDayKind::Today,
            CalendarDayKind::PreviousMonth,
            CalendarDayKind::NextMonth,
            CalendarDayKind::DayOfWeek,
            CalendarDayKind::Empty,
        ];
        let mut classes: Vec<&str> = kinds.iter().map(|k| k.class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), kinds.len());
    }

    #[test]
    fn only_header_and_filler_cells_are_inert() {
        assert!(CalendarDayKind::Default.is_interactive());
        assert!(CalendarDayKind::Today.is_interactive());
        assert!(CalendarDayKind::PreviousMonth.is_interactive());
        assert!(CalendarDayKind::NextMonth.is_interactive());
        assert!(!CalendarDayKind::DayOfWeek.is_interactive());
        assert!(!CalendarDayKind::Empty.is_interactive());
        assert_eq!(CalendarDayKind::DayOfWeek.role(), "columnheader");
        assert_eq!(CalendarDayKind::Empty.role(), "gridcell");
    }
}
