//! Coordinate and geometry types shared across the engine.
//!
//! Canonical CPU space:
//! - Framebuffer pixels (physical, not DPI-scaled)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Stored scene geometry is in NDC (`[-1, 1]` both axes, origin center,
//! +Y up); `Viewport` owns the conversion between the two spaces.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
