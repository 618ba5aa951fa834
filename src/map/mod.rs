//! Map presenter: read-only views of the territory store

pub mod display;

pub use display::{display, render};
