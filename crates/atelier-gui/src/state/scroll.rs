//! Page scroll position and the smooth scroll animation.

use std::time::Duration;

use iced::time::Instant;

/// Length of a section-to-section scroll.
pub const SCROLL_DURATION: Duration = Duration::from_millis(450);

/// A running scroll from one offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now`. Exactly the target once the duration has passed.
    pub fn offset_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out_cubic(progress)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Last known scroll offset plus any running animation.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    offset: f32,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Record an offset reported by the scrollable.
    pub fn observe(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Start scrolling from the current offset to `target`.
    pub fn animate_to(&mut self, target: f32, now: Instant) {
        self.animation = Some(ScrollAnimation::new(
            self.offset,
            target,
            now,
            SCROLL_DURATION,
        ));
    }

    /// Advance the animation. Returns the offset to apply, if any.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation?;
        let offset = animation.offset_at(now);
        if animation.is_finished(now) {
            self.animation = None;
        }
        self.offset = offset;
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_endpoints() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(100.0, 900.0, start, SCROLL_DURATION);
        assert_eq!(anim.offset_at(start), 100.0);
        assert_eq!(anim.offset_at(start + SCROLL_DURATION), 900.0);
        assert_eq!(anim.offset_at(start + SCROLL_DURATION * 3), 900.0);
        assert!(anim.is_finished(start + SCROLL_DURATION));
        assert!(!anim.is_finished(start + SCROLL_DURATION / 2));
    }

    #[test]
    fn test_animation_is_monotonic() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(800.0, 0.0, start, SCROLL_DURATION);
        let mut last = f32::MAX;
        for step in 0..=45 {
            let offset = anim.offset_at(start + Duration::from_millis(step * 10));
            assert!(offset <= last, "step {step}: {offset} > {last}");
            last = offset;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn test_tick_clears_finished_animation() {
        let start = Instant::now();
        let mut scroll = ScrollState::default();
        scroll.observe(40.0);
        scroll.animate_to(640.0, start);
        assert!(scroll.is_animating());

        let mid = scroll.tick(start + SCROLL_DURATION / 2).unwrap();
        assert!(mid > 40.0 && mid < 640.0);
        assert!(scroll.is_animating());

        assert_eq!(scroll.tick(start + SCROLL_DURATION), Some(640.0));
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(start + SCROLL_DURATION * 2), None);
        assert_eq!(scroll.offset(), 640.0);
    }
}
