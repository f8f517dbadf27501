mod canvas;
pub mod painter;

pub use canvas::*;
