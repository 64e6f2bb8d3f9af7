//! Frame-stepped tween used by the headless device for scroll animations

use std::time::Duration;

/// Easing curve, resolved from a device easing id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Accelerates from rest.
    EaseIn,
    /// Decelerates to rest.
    EaseOut,
    /// Accelerates then decelerates.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Resolve an easing id such as `"easeFromTo"` or `"easeOutQuad"`.
    /// Unknown ids fall back to linear.
    pub fn from_id(id: &str) -> Self {
        if id == "easeFromTo" || id.starts_with("easeInOut") {
            Easing::EaseInOut
        } else if id == "easeFrom" || id.starts_with("easeIn") {
            Easing::EaseIn
        } else if id == "easeTo" || id.starts_with("easeOut") {
            Easing::EaseOut
        } else {
            Easing::Linear
        }
    }

    /// Quadratic curves over `t` in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// Tween of one scroll offset, quantised to whole frames.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    active: bool,
    start: f32,
    target: f32,
    elapsed: Duration,
    duration: Duration,
    frame: Duration,
    easing: Easing,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            frame: Duration::ZERO,
            easing: Easing::default(),
        }
    }
}

impl ScrollAnimator {
    /// Idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tween is running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Destination of the current tween.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Begin a tween from `current` to `target`. A zero fps steps continuously.
    pub fn start(
        &mut self,
        current: f32,
        target: f32,
        duration: Duration,
        fps: u32,
        easing: Easing,
    ) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.duration = duration;
        self.frame = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / fps
        };
        self.easing = easing;
    }

    /// Advance by `dt`. Returns the offset to apply, or `None` when inactive.
    /// The final tick returns the exact target and deactivates.
    pub fn tick(&mut self, dt: Duration) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        // Offsets only change on frame boundaries.
        let shown = if self.frame.is_zero() {
            self.elapsed
        } else {
            let frames = self.elapsed.as_nanos() / self.frame.as_nanos();
            self.frame * u32::try_from(frames).unwrap_or(u32::MAX)
        };
        let t = (shown.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        Some(self.start + (self.target - self.start) * self.easing.apply(t))
    }

    /// Cancel the current animation immediately, leaving the offset as is.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}
