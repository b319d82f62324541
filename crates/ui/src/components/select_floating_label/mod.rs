mod component;
mod label_state;

pub use component::*;
pub use label_state::{label_state, FloatingLabelState, LabelColor, LabelPosition};
