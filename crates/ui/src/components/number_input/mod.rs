mod component;
mod step;

pub use component::*;
