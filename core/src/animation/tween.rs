//! Height interpolation sampled once per animation frame.

use super::easing::ease_in_out_cubic;
use crate::timing::Millis;

/// One sample of a running tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenFrame {
    pub height: f64,
    pub progress: f64,
    /// True on the one frame where progress first reached 1
    pub completed: bool,
}

/// Eased transition between two heights over a fixed duration.
///
/// There is no cancel: once started a tween runs to completion. Callers
/// that must not overlap tweens refuse to start a new one instead.
#[derive(Debug, Clone)]
pub struct HeightTween {
    from: f64,
    to: f64,
    duration: Millis,
    start: Millis,
    finished: bool,
}

impl HeightTween {
    pub fn new(from: f64, to: f64, duration_ms: u32, start: Millis) -> Self {
        Self {
            from,
            to,
            duration: duration_ms as Millis,
            start,
            finished: false,
        }
    }

    /// Linear progress at `now`, clamped to `[0, 1]`.
    pub fn progress(&self, now: Millis) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Sample the tween. `completed` is reported exactly once, on the first
    /// sample at or past the end.
    pub fn sample(&mut self, now: Millis) -> TweenFrame {
        let progress = self.progress(now);
        let height = if progress >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * ease_in_out_cubic(progress)
        };
        let completed = progress >= 1.0 && !self.finished;
        if completed {
            self.finished = true;
        }
        TweenFrame {
            height,
            progress,
            completed,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
