mod component;
mod grid;

pub use component::*;
pub use grid::CalendarDayKind;
