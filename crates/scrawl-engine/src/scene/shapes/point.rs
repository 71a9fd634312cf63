use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, SceneList};

/// Point draw payload.
///
/// `pos` is in NDC, fixed at insertion time; a point is never repositioned
/// after it enters the scene. `size` is the dot diameter in framebuffer
/// pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointCmd {
    pub pos: Vec2,
    pub color: Color,
    pub size: f32,
}

impl PointCmd {
    #[inline]
    pub const fn new(pos: Vec2, color: Color, size: f32) -> Self {
        Self { pos, color, size }
    }
}

impl SceneList {
    /// Records a point at an NDC position.
    #[inline]
    pub fn push_point(&mut self, pos: Vec2, color: Color, size: f32) {
        self.push(DrawCmd::Point(PointCmd::new(pos, color, size)));
    }
}
