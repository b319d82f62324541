use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Smallest step the control will accept; guards against a zero step
/// freezing the buttons.
const MIN_STEP: f64 = 0.000_001;

/// Decimal places beyond which f64 inputs are carrying binary noise, not
/// intent (`0.1 + 0.2` arrives as `0.30000000000000004`).
const MAX_PRECISION: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepDirection {
    Up,
    Down,
}

/// Convert through the shortest decimal rendering, so `0.1f64` becomes the
/// exact decimal `0.1` rather than its binary neighbour.
pub(crate) fn decimal_from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&format!("{value}")).unwrap_or(Decimal::ZERO)
}

fn decimals_of(value: Decimal) -> u32 {
    let text = value.normalize().to_string();
    text.split('.').nth(1).map(|part| part.len() as u32).unwrap_or(0)
}

fn clamp(value: Decimal, min: Option<Decimal>, max: Option<Decimal>) -> Decimal {
    let mut next = value;
    if let Some(min) = min {
        next = next.max(min);
    }
    if let Some(max) = max {
        next = next.min(max);
    }
    next
}

/// Render a value with no more precision than the value and step carry.
pub(crate) fn format_number(value: f64, step: f64) -> String {
    let value = decimal_from_f64(value);
    let step = decimal_from_f64(step.abs().max(MIN_STEP));
    let precision = decimals_of(value)
        .max(decimals_of(step))
        .min(MAX_PRECISION);
    let text = value.round_dp(precision).normalize().to_string();
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

/// Parse draft text into a number. Incomplete drafts (`-`, `.`, `-.`, empty)
/// are not numbers yet and parse to nothing.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "." || trimmed == "-." {
        return None;
    }
    Decimal::from_str(trimmed).ok()?.to_f64()
}

/// Clamp a typed value into the bounds.
pub(crate) fn clamp_f64(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    clamp(
        decimal_from_f64(value),
        min.map(decimal_from_f64),
        max.map(decimal_from_f64),
    )
    .to_f64()
    .unwrap_or(value)
}

/// One stepper transition.
///
/// `magnitude` is the number of steps to apply: 1 for the buttons and arrow
/// keys, 10 for PageUp/PageDown. An empty value steps from a zero baseline
/// in both directions. All arithmetic is decimal, so fractional steps never
/// accumulate binary drift, and the result is clamped into the bounds.
pub(crate) fn step_value(
    current: Option<f64>,
    direction: StepDirection,
    magnitude: u32,
    step: f64,
    min: Option<f64>,
    max: Option<f64>,
) -> f64 {
    let step = decimal_from_f64(step.abs().max(MIN_STEP));
    let base = current.map(decimal_from_f64).unwrap_or(Decimal::ZERO);
    let delta = step * Decimal::from(magnitude);
    let next = match direction {
        StepDirection::Up => base + delta,
        StepDirection::Down => base - delta,
    };
    let precision = decimals_of(base)
        .max(decimals_of(step))
        .min(MAX_PRECISION);
    let next = next.round_dp(precision);
    clamp(next, min.map(decimal_from_f64), max.map(decimal_from_f64))
        .to_f64()
        .unwrap_or(0.0)
}

/// Whether the value already sits at a bound, which disables the matching
/// button. An empty value is never at a bound.
pub(crate) fn at_bound(current: Option<f64>, bound: Option<f64>, upper: bool) -> bool {
    match (current, bound) {
        (Some(value), Some(bound)) => {
            if upper {
                value >= bound
            } else {
                value <= bound
            }
        }
        _ => false,
    }
}
