use super::Vec2;

/// Active viewport rectangle in framebuffer pixels.
///
/// This is the mapping between framebuffer space and NDC. It must be re-read
/// from the surface at the moment of each conversion rather than cached: a
/// window resize can change it between any two input events.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport anchored at the origin, the shape produced by a resize.
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Converts a framebuffer-pixel position to normalized device coordinates.
    ///
    /// NDC covers `[-1, 1]` on both axes with the origin at the viewport
    /// center and +Y pointing up (framebuffer +Y points down, hence the flip).
    #[inline]
    pub fn to_ndc(self, p: Vec2) -> Vec2 {
        Vec2::new(
            2.0 * (p.x - self.x) / self.width - 1.0,
            1.0 - 2.0 * (p.y - self.y) / self.height,
        )
    }

    /// Converts an NDC position back to framebuffer pixels.
    ///
    /// Exact inverse of [`to_ndc`](Self::to_ndc) for the same viewport
    /// snapshot, up to floating-point rounding.
    #[inline]
    pub fn from_ndc(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.x + (p.x + 1.0) * 0.5 * self.width,
            self.y + (1.0 - p.y) * 0.5 * self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    // ── to_ndc ────────────────────────────────────────────────────────────

    #[test]
    fn center_maps_to_origin() {
        let vp = Viewport::from_size(800.0, 600.0);
        assert!(close(vp.to_ndc(Vec2::new(400.0, 300.0)), Vec2::zero()));
    }

    #[test]
    fn top_left_maps_to_minus_one_plus_one() {
        let vp = Viewport::from_size(800.0, 600.0);
        assert!(close(vp.to_ndc(Vec2::zero()), Vec2::new(-1.0, 1.0)));
    }

    #[test]
    fn bottom_right_maps_to_plus_one_minus_one() {
        let vp = Viewport::from_size(800.0, 600.0);
        assert!(close(vp.to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn offset_viewport_shifts_the_mapping() {
        // A viewport not anchored at the origin, e.g. after glViewport-style
        // letterboxing. The viewport center still maps to NDC (0, 0).
        let vp = Viewport::new(100.0, 50.0, 200.0, 100.0);
        assert!(close(vp.to_ndc(Vec2::new(200.0, 100.0)), Vec2::zero()));
        assert!(close(vp.to_ndc(Vec2::new(100.0, 50.0)), Vec2::new(-1.0, 1.0)));
    }

    // ── round-trip ────────────────────────────────────────────────────────

    #[test]
    fn round_trip_reproduces_framebuffer_position() {
        let vp = Viewport::new(10.0, 20.0, 1920.0, 1080.0);
        for &(x, y) in &[(10.0, 20.0), (973.5, 557.25), (1930.0, 1100.0), (0.0, 0.0)] {
            let p = Vec2::new(x, y);
            assert!(close(vp.from_ndc(vp.to_ndc(p)), p), "round-trip failed for {p:?}");
        }
    }

    // ── validity ──────────────────────────────────────────────────────────

    #[test]
    fn zero_area_viewport_is_invalid() {
        assert!(!Viewport::from_size(0.0, 600.0).is_valid());
        assert!(!Viewport::from_size(800.0, 0.0).is_valid());
        assert!(Viewport::from_size(800.0, 600.0).is_valid());
    }
}
