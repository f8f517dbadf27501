#![allow(clippy::implicit_hasher)]

pub mod logging;
pub mod models;
pub mod components;
pub mod import;
pub mod constants;
pub mod time;
pub mod geometry;
pub mod error;
pub mod segments;
pub mod colors;
pub mod layout;
pub mod diagram;
pub mod theme;

pub use components::app::App;
