//! Paint model shared between the application and renderers.
//!
//! Scope is color representation only; geometry types live in `coords`.

mod color;

pub use color::Color;
