use scrawl_engine::coords::{Vec2, Viewport};
use scrawl_engine::core::{App, AppControl, FrameCtx};
use scrawl_engine::input::{
    InputEvent, Key, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
    StrokeConfig, StrokeInterpolator,
};
use scrawl_engine::paint::Color;
use scrawl_engine::render::shapes::point::PointRenderer;
use scrawl_engine::scene::SceneList;
use scrawl_engine::time::FrameMetrics;

/// The drawing application.
///
/// Owns the scene registry, the stroke interpolator's session state, and the
/// frame metrics recorder; the runtime owns the window and GPU surface. Each
/// frame: record metrics, react to input, render the accumulated scene.
pub struct DrawApp {
    title: String,
    background: Color,

    scene: SceneList,
    stroke: StrokeInterpolator,
    metrics: FrameMetrics,
    points: PointRenderer,
}

impl DrawApp {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            background: Color::WHITE,
            scene: SceneList::new(),
            stroke: StrokeInterpolator::new(StrokeConfig::default()),
            metrics: FrameMetrics::new(),
            points: PointRenderer::new(),
        }
    }

    /// Feeds one frame's input events into the stroke interpolator.
    ///
    /// Events are replayed in arrival order so a press and its moves that
    /// land in the same frame interpolate correctly. `viewport` is the
    /// current framebuffer viewport, re-read by the caller each frame; it is
    /// the conversion basis for every insertion in that frame.
    fn apply_input(&mut self, events: &[InputEvent], viewport: Viewport) {
        for ev in events {
            match ev {
                InputEvent::PointerButton(PointerButtonEvent {
                    button: MouseButton::Left,
                    state,
                    x,
                    y,
                }) => match state {
                    MouseButtonState::Pressed => {
                        self.stroke.on_press(Vec2::new(*x, *y), viewport, &mut self.scene);
                    }
                    MouseButtonState::Released => {
                        self.stroke.on_release();
                    }
                },

                InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                    self.stroke.on_move(Vec2::new(*x, *y), viewport, &mut self.scene);
                }

                // A focus loss can swallow the matching release; end the
                // session so the next press starts fresh.
                InputEvent::Focused(false) => {
                    self.stroke.on_release();
                }

                _ => {}
            }
        }
    }
}

impl App for DrawApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Some(report) = self.metrics.record(ctx.time.now) {
            ctx.window.set_title(&format!(
                "{} @ {} FPS - {:.3}ms/frame",
                self.title, report.fps, report.ms_per_frame
            ));
            log::debug!("{} fps, {:.3} ms/frame", report.fps, report.ms_per_frame);
        }

        if ctx.input_frame.keys_pressed.contains(&Key::Escape) {
            log::info!("escape pressed, closing");
            return AppControl::Exit;
        }

        self.apply_input(&ctx.input_frame.events, ctx.framebuffer_viewport());

        let scene = &self.scene;
        let points = &mut self.points;
        ctx.render(self.background, |rctx, target| {
            points.render(rctx, target, scene);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(0.0, 0.0, 800.0, 600.0);

    fn press(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
        })
    }

    fn release(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Released,
            x,
            y,
        })
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    // ── event wiring ──────────────────────────────────────────────────────

    #[test]
    fn click_inserts_one_point() {
        let mut app = DrawApp::new("test");
        app.apply_input(&[press(10.0, 10.0), release(10.0, 10.0)], VP);
        assert_eq!(app.scene.len(), 1);
    }

    #[test]
    fn drag_across_one_frame_interpolates() {
        let mut app = DrawApp::new("test");
        // Press and a 25px move arriving in the same frame's event batch:
        // 1 press point + ceil(25/10) = 3 interpolated points.
        app.apply_input(&[press(0.0, 0.0), moved(25.0, 0.0), release(25.0, 0.0)], VP);
        assert_eq!(app.scene.len(), 4);
    }

    #[test]
    fn moves_without_a_press_draw_nothing() {
        let mut app = DrawApp::new("test");
        app.apply_input(&[moved(5.0, 5.0), moved(100.0, 100.0)], VP);
        assert!(app.scene.is_empty());
    }

    #[test]
    fn right_button_does_not_draw() {
        let mut app = DrawApp::new("test");
        app.apply_input(
            &[InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Right,
                state: MouseButtonState::Pressed,
                x: 10.0,
                y: 10.0,
            })],
            VP,
        );
        assert!(app.scene.is_empty());
    }

    #[test]
    fn focus_loss_ends_the_session() {
        let mut app = DrawApp::new("test");
        app.apply_input(&[press(10.0, 10.0)], VP);
        app.apply_input(&[InputEvent::Focused(false)], VP);
        let after_loss = app.scene.len();

        // Moves after the swallowed release must not extend the old stroke.
        app.apply_input(&[moved(300.0, 300.0)], VP);
        assert_eq!(app.scene.len(), after_loss);
    }

    #[test]
    fn sessions_span_frames() {
        let mut app = DrawApp::new("test");
        // Press in one frame, move in a later one: the session persists
        // across event batches until the release arrives.
        app.apply_input(&[press(0.0, 0.0)], VP);
        app.apply_input(&[moved(15.0, 0.0)], VP);
        app.apply_input(&[release(15.0, 0.0)], VP);
        // 1 press point + ceil(15/10) = 2 interpolated points.
        assert_eq!(app.scene.len(), 3);
    }
}
