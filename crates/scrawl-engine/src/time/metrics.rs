use std::time::{Duration, Instant};

/// One reporting window's worth of aggregate frame statistics.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MetricsReport {
    /// Whole frames per second over the window, rounded down.
    pub fps: u32,

    /// Mean frame duration over the window, in milliseconds.
    pub ms_per_frame: f64,
}

/// Fixed-window frame rate estimator.
///
/// Counts frames between checkpoints at least one reporting interval apart.
/// The derived FPS is accurate in the aggregate over each window, not
/// instantaneously; a sliding-window estimator is deliberately out of scope.
///
/// Callers pass the timestamp in rather than reading the clock here, which
/// keeps the recorder deterministic under test.
#[derive(Debug)]
pub struct FrameMetrics {
    checkpoint: Option<Instant>,
    frames: u32,
    interval: Duration,
}

impl FrameMetrics {
    pub fn new() -> Self {
        Self::with_interval(Duration::from_secs(1))
    }

    /// Creates a recorder with a custom reporting interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            checkpoint: None,
            frames: 0,
            interval,
        }
    }

    /// Records one frame at `now`.
    ///
    /// The very first call only establishes the checkpoint; that frame is
    /// not counted. Returns `Some` exactly when a full reporting interval
    /// has elapsed since the checkpoint, at which point the counter resets
    /// and the checkpoint advances to `now`.
    pub fn record(&mut self, now: Instant) -> Option<MetricsReport> {
        let Some(checkpoint) = self.checkpoint else {
            self.checkpoint = Some(now);
            return None;
        };

        self.frames += 1;

        let elapsed = now.saturating_duration_since(checkpoint);
        if elapsed < self.interval {
            return None;
        }

        let elapsed_secs = elapsed.as_secs_f64();
        let report = MetricsReport {
            fps: (self.frames as f64 / elapsed_secs).floor() as u32,
            ms_per_frame: elapsed_secs * 1000.0 / self.frames as f64,
        };

        self.frames = 0;
        self.checkpoint = Some(now);

        Some(report)
    }
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── first frame ───────────────────────────────────────────────────────

    #[test]
    fn first_record_only_establishes_checkpoint() {
        let mut m = FrameMetrics::new();
        assert_eq!(m.record(Instant::now()), None);
    }

    // ── reporting window ──────────────────────────────────────────────────

    #[test]
    fn sixty_ticks_over_one_second_reports_sixty_fps() {
        let mut m = FrameMetrics::new();
        let t0 = Instant::now();
        let step = Duration::from_secs_f64(1.0 / 60.0);

        // Tick 0 establishes the checkpoint; ticks 1..=60 are counted, the
        // 60th landing exactly one second after the checkpoint.
        assert_eq!(m.record(t0), None);

        for i in 1..=59u32 {
            assert_eq!(m.record(t0 + step * i), None);
        }

        let report = m
            .record(t0 + Duration::from_secs(1))
            .expect("60th tick must report");
        assert_eq!(report.fps, 60);
        assert!((report.ms_per_frame - 1000.0 / 60.0).abs() < 0.5);
    }

    #[test]
    fn no_report_before_interval_elapses() {
        let mut m = FrameMetrics::new();
        let t0 = Instant::now();

        assert_eq!(m.record(t0), None);
        for i in 1..10u32 {
            assert_eq!(m.record(t0 + Duration::from_millis(50 * u64::from(i))), None);
        }
    }

    #[test]
    fn counter_resets_after_report() {
        let mut m = FrameMetrics::new();
        let t0 = Instant::now();

        m.record(t0);
        let report = m.record(t0 + Duration::from_secs(1));
        assert!(report.is_some());

        // Next window starts from zero counted frames: a tick shortly after
        // must not report, and a tick a second later reports only the frames
        // of the new window.
        assert_eq!(m.record(t0 + Duration::from_millis(1500)), None);
        let second = m
            .record(t0 + Duration::from_secs(2))
            .expect("second window must report");
        assert_eq!(second.fps, 2);
    }

    #[test]
    fn slow_frames_report_low_fps() {
        // 500 ms frames: each one-second window counts 2 frames.
        let mut m = FrameMetrics::new();
        let t0 = Instant::now();

        m.record(t0);
        let mut report = None;
        for i in 1..=4u32 {
            report = m.record(t0 + Duration::from_millis(500 * u64::from(i)));
        }

        let report = report.expect("interval elapsed");
        assert_eq!(report.fps, 2);
        assert!((report.ms_per_frame - 500.0).abs() < 1e-6);
    }

    #[test]
    fn custom_interval_is_honored() {
        let mut m = FrameMetrics::with_interval(Duration::from_millis(100));
        let t0 = Instant::now();

        m.record(t0);
        assert_eq!(m.record(t0 + Duration::from_millis(50)), None);
        assert!(m.record(t0 + Duration::from_millis(100)).is_some());
    }
}
