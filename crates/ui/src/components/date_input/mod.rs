mod component;
mod parse;

pub use component::*;
pub use parse::{format_date, parse_date, parse_date_in_range, DateParseError};
