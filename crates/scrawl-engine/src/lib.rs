//! Scrawl engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the drawing application:
//! window lifecycle, per-frame ticking, input translation, stroke
//! interpolation, and point rendering.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
