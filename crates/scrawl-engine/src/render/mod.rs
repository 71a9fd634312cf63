//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipeline, buffers).
//!
//! Convention:
//! - scene geometry is already in NDC
//! - the viewport uniform carries the framebuffer size, used only to map
//!   pixel-sized extents (dot diameters) into NDC offsets

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
