#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod canvas_viewport;
pub mod diagram_canvas;
pub mod error_list;
pub mod importer;
pub mod legend;
pub mod segment_tooltip;
pub mod settings;
