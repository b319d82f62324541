use thiserror::Error;
use time::Date;

/// Why a typed date draft was rejected.
///
/// Rejection is silent at the component boundary; the taxonomy exists so
/// callers embedding the parser directly can distinguish the cases.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DateParseError {
    /// The text does not match the MM/DD/YYYY pattern.
    #[error("text does not match the MM/DD/YYYY pattern")]
    Pattern,
    /// Pattern matched but the combination is not a real calendar date.
    #[error("no such calendar date")]
    InvalidDate,
    /// A real date, but outside the configured min/max bounds.
    #[error("date is outside the allowed range")]
    OutOfRange,
}

/// Parse draft text against the fixed MM/DD/YYYY pattern.
///
/// Two-digit month and day and a four-digit year are required, so drafts
/// stay rejected while the user is mid-entry.
pub fn parse_date(text: &str) -> Result<Date, DateParseError> {
    Date::parse(
        text.trim(),
        time::macros::format_description!("[month]/[day]/[year]"),
    )
    .map_err(|err| match err {
        // Components parsed but don't form a real date (e.g. 02/31/2024)
        time::error::Parse::TryFromParsed(_) => DateParseError::InvalidDate,
        _ => DateParseError::Pattern,
    })
}

/// Parse and additionally enforce inclusive bounds.
pub fn parse_date_in_range(
    text: &str,
    min: Option<Date>,
    max: Option<Date>,
) -> Result<Date, DateParseError> {
    let date = parse_date(text)?;
    if min.is_some_and(|min| date < min) || max.is_some_and(|max| date > max) {
        return Err(DateParseError::OutOfRange);
    }
    Ok(date)
}

/// Canonical MM/DD/YYYY rendering of a date.
pub fn format_date(date: Date) -> String {
    date.format(time::macros::format_description!("[month]/[day]/[year]"))
        .unwrap_or_default()
}
