//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code is responsible for translating platform events into
//! `InputEvent`s; all positions are in framebuffer (physical) pixels, the
//! units the stroke interpolation gap and NDC conversion are defined in.

mod frame;
mod state;
mod stroke;
mod types;

pub mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use stroke::{StrokeConfig, StrokeInterpolator};
pub use types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
