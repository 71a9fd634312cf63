use crate::coords::{Vec2, Viewport};
use crate::paint::Color;
use crate::scene::SceneList;

/// Stroke tuning parameters.
///
/// `gap` is the maximum spacing between consecutive inserted points, in
/// framebuffer pixels. It is a tuning parameter, not a contract: smaller
/// values give denser strokes at the cost of registry growth.
#[derive(Debug, Copy, Clone)]
pub struct StrokeConfig {
    pub gap: f32,
    pub color: Color,
    pub size: f32,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            gap: 10.0,
            color: Color::BLACK,
            size: 8.0,
        }
    }
}

/// Converts a press-to-release stream of pointer positions into a dense,
/// evenly spaced sequence of point insertions.
///
/// Fast pointer motion delivers sparse samples; drawing only those would
/// leave visible gaps in the stroke. On each move, intermediate points are
/// inserted along the segment from the last recorded position so that
/// consecutive points are at most `gap` framebuffer pixels apart.
///
/// Session invariant: `last_pos` is `Some` iff at least one position has
/// been recorded since the session became active; it is cleared exactly when
/// the session ends, so a new session can never interpolate against a stale
/// position.
#[derive(Debug, Default)]
pub struct StrokeInterpolator {
    config: StrokeConfig,
    active: bool,
    last_pos: Option<Vec2>,
}

impl StrokeInterpolator {
    pub fn new(config: StrokeConfig) -> Self {
        Self {
            config,
            active: false,
            last_pos: None,
        }
    }

    #[inline]
    pub fn config(&self) -> StrokeConfig {
        self.config
    }

    /// Whether a drag session is in progress.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Begins a drag session at `pos` (framebuffer pixels).
    ///
    /// Inserts one point immediately so a stationary click leaves a mark,
    /// and seeds `last_pos` for subsequent interpolation.
    pub fn on_press(&mut self, pos: Vec2, viewport: Viewport, scene: &mut SceneList) {
        self.active = true;
        self.insert(pos, viewport, scene);
        self.last_pos = Some(pos);
    }

    /// Ends the drag session.
    ///
    /// Clears `last_pos` so the next session starts fresh.
    pub fn on_release(&mut self) {
        self.active = false;
        self.last_pos = None;
    }

    /// Handles a pointer move to `pos` (framebuffer pixels).
    ///
    /// Outside a session this is a no-op. Inside a session, inserts
    /// `ceil(d / gap)` points along the segment from the last recorded
    /// position, the final one landing exactly on `pos`. A zero-distance
    /// move inserts nothing and leaves `last_pos` unchanged; both are
    /// defined no-op branches, not errors.
    pub fn on_move(&mut self, pos: Vec2, viewport: Viewport, scene: &mut SceneList) {
        if !self.active {
            return;
        }

        // First sample of the session: nothing to interpolate against yet.
        let Some(last) = self.last_pos else {
            self.last_pos = Some(pos);
            return;
        };

        let delta = pos - last;
        let dist = delta.length();
        if dist <= 0.0 {
            return;
        }

        let steps = (dist / self.config.gap.max(f32::MIN_POSITIVE)).ceil() as u32;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.insert(last + delta * t, viewport, scene);
        }

        // Track the reported position, not the last interpolated one; with
        // t = 1 they coincide.
        self.last_pos = Some(pos);
    }

    fn insert(&self, pos: Vec2, viewport: Viewport, scene: &mut SceneList) {
        // The viewport is read at conversion time by the caller; a degenerate
        // viewport (minimized window) has no defined NDC mapping.
        if !viewport.is_valid() {
            return;
        }
        scene.push_point(viewport.to_ndc(pos), self.config.color, self.config.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    const VP: Viewport = Viewport::new(0.0, 0.0, 800.0, 600.0);

    fn stroke(gap: f32) -> StrokeInterpolator {
        StrokeInterpolator::new(StrokeConfig { gap, ..StrokeConfig::default() })
    }

    /// Framebuffer positions of all scene points, recovered through the
    /// inverse viewport mapping.
    fn framebuffer_points(scene: &SceneList) -> Vec<Vec2> {
        scene
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Point(p) => VP.from_ndc(p.pos),
            })
            .collect()
    }

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(
            (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3,
            "expected {b:?}, got {a:?}"
        );
    }

    // ── press / release ───────────────────────────────────────────────────

    #[test]
    fn press_inserts_exactly_one_point() {
        let mut s = stroke(10.0);
        let mut scene = SceneList::new();

        s.on_press(Vec2::new(400.0, 300.0), VP, &mut scene);

        assert_eq!(scene.len(), 1);
        assert_close(framebuffer_points(&scene)[0], Vec2::new(400.0, 300.0));
    }

    #[test]
    fn stationary_click_yields_one_point() {
        // Press followed immediately by release with no intervening move.
        let mut s = stroke(10.0);
        let mut scene = SceneList::new();

        s.on_press(Vec2::new(100.0, 100.0), VP, &mut scene);
        s.on_release();

        assert_eq!(scene.len(), 1);
        assert!(!s.is_active());
    }

    #[test]
    fn press_converts_to_ndc() {
        let mut s = stroke(10.0);
        let mut scene = SceneList::new();

        s.on_press(Vec2::new(400.0, 300.0), VP, &mut scene);

        match scene.items()[0] {
            DrawCmd::Point(p) => {
                assert!((p.pos.x).abs() < 1e-6);
                assert!((p.pos.y).abs() < 1e-6);
            }
        }
    }

    // ── interpolation ─────────────────────────────────────────────────────

    #[test]
    fn move_interpolates_ceil_distance_over_gap_points() {
        // Drag from (0,0) to (25,0) with gap 10: ceil(25/10) = 3 points.
        let mut s = stroke(10.0);
        let mut scene = SceneList::new();

        s.on_press(Vec2::new(0.0, 0.0), VP, &mut scene);
        s.on_move(Vec2::new(25.0, 0.0), VP, &mut scene);

        // 1 from the press + 3 interpolated.
        assert_eq!(scene.len(), 4);

        let pts = framebuffer_points(&scene);
        // Final point lands exactly on the reported position (t = 1).
        assert_close(pts[3], Vec2::new(25.0, 0.0));
    }

    #[test]
    fn consecutive_points_are_at_most_gap_apart() {
        let mut s = stroke(10.0);
        let mut scene = SceneList::new();

        s.on_press(Vec2::new(3.0, 7.0), VP, &mut scene);
        s.on_move(Vec2::new(160.0, 92.0), VP, &mut scene);
        s.on_move(Vec2::new(141.0, 305.5), VP, &mut scene);

        let pts = framebuffer_points(&scene);
        for pair in pts.windows(2) {
            // Tolerance covers the NDC round-trip.
            assert!(
                pair[0].distance(pair[1]) <= 10.0 + 1e-2,
                "gap exceeded between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn unit_gap_inserts_ceil_distance_points() {
        let mut s = stroke(1.0);
        let mut scene = SceneList::new();

        s.on_press(Vec2::new(0.0, 0.0), VP, &mut scene);
        s.on_move(Vec2::new(4.5, 0.0), VP, &mut scene);

        // ceil(4.5 / 1) = 5 interpolated points, plus the press point.
        assert_eq!(scene.len(), 6);
    }

    #[test]
    fn zero_distance_move_inserts_nothing() {
        let mut s = stroke(10.0);
        let mut scene = SceneList::new();

        let pos = Vec2::new(50.0, 50.0);
        s.on_press(pos, VP, &mut scene);
        let before = scene.len();

        s.on_move(pos, VP, &mut scene);

        assert_eq!(scene.len(), before);
        // A subsequent real move still interpolates from the same anchor.
        s.on_move(Vec2::new(50.0, 65.0), VP, &mut scene);
        assert_eq!(scene.len(), before + 2); // ceil(15/10) = 2
    }

    #[test]
    fn move_while_inactive_has_no_effect() {
        let mut s = stroke(10.0);
        let mut scene = SceneList::new();

        s.on_move(Vec2::new(10.0, 10.0), VP, &mut scene);
        s.on_move(Vec2::new(200.0, 200.0), VP, &mut scene);

        assert!(scene.is_empty());
    }

    // ── sessions ──────────────────────────────────────────────────────────

    #[test]
    fn sessions_do_not_interpolate_across_each_other() {
        let mut s = stroke(10.0);
        let mut scene = SceneList::new();

        // Session A ends far from where session B starts.
        s.on_press(Vec2::new(0.0, 0.0), VP, &mut scene);
        s.on_move(Vec2::new(20.0, 0.0), VP, &mut scene);
        s.on_release();
        let after_a = scene.len();

        // If last_pos leaked, this press+move would bridge the 400px jump.
        s.on_press(Vec2::new(400.0, 300.0), VP, &mut scene);
        s.on_move(Vec2::new(405.0, 300.0), VP, &mut scene);

        // 1 press point + ceil(5/10) = 1 interpolated point.
        assert_eq!(scene.len(), after_a + 2);
    }

    #[test]
    fn registry_never_shrinks() {
        let mut s = stroke(10.0);
        let mut scene = SceneList::new();
        let mut prev = 0;

        let script: &[(&str, f32, f32)] = &[
            ("press", 10.0, 10.0),
            ("move", 40.0, 10.0),
            ("move", 40.0, 10.0),
            ("release", 0.0, 0.0),
            ("move", 500.0, 400.0),
            ("press", 500.0, 400.0),
            ("move", 505.0, 403.0),
            ("release", 0.0, 0.0),
        ];
        for &(kind, x, y) in script {
            match kind {
                "press" => s.on_press(Vec2::new(x, y), VP, &mut scene),
                "move" => s.on_move(Vec2::new(x, y), VP, &mut scene),
                _ => s.on_release(),
            }
            assert!(scene.len() >= prev, "registry shrank after {kind}");
            prev = scene.len();
        }
    }

    // ── degenerate viewport ───────────────────────────────────────────────

    #[test]
    fn degenerate_viewport_skips_insertion() {
        let mut s = stroke(10.0);
        let mut scene = SceneList::new();

        s.on_press(Vec2::new(5.0, 5.0), VP, &mut scene);
        // Minimized window: zero-area viewport has no NDC mapping.
        s.on_move(Vec2::new(30.0, 5.0), Viewport::from_size(0.0, 0.0), &mut scene);

        assert_eq!(scene.len(), 1);
        // The session itself continues; the next valid-viewport move resumes.
        s.on_move(Vec2::new(35.0, 5.0), VP, &mut scene);
        assert!(scene.len() > 1);
    }
}
