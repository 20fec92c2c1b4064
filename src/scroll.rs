//! Eased wheel scrolling.
//!
//! Wheel input moves a target position; every animation frame the rendered
//! position closes a fixed fraction of the remaining distance until it is
//! close enough to snap.

/// Fraction of the remaining distance covered per frame
pub const DEFAULT_LERP: f64 = 0.1;
/// Remaining distance below which the animation snaps to the target
const SETTLE_PX: f64 = 0.5;
/// Pixels per wheel "line" (`WheelEvent.deltaMode == 1`)
const LINE_HEIGHT_PX: f64 = 16.0;

/// `WheelEvent.deltaMode` values
pub const DELTA_PIXEL: u32 = 0;
pub const DELTA_LINE: u32 = 1;
pub const DELTA_PAGE: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
    lerp: f64,
    animating: bool,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(DEFAULT_LERP)
    }
}

impl SmoothScroll {
    pub fn new(lerp: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            lerp: lerp.clamp(0.01, 1.0),
            animating: false,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Resync with the real scroll position, e.g. after an anchor jump or
    /// keyboard scroll. Ignored mid-animation.
    pub fn sync(&mut self, position: f64) {
        if !self.animating {
            self.current = position;
            self.target = position;
        }
    }

    /// Move the target by `delta` pixels, keeping it inside `[0, max]`.
    pub fn scroll_by(&mut self, delta: f64, max: f64) {
        self.target = (self.target + delta).clamp(0.0, max.max(0.0));
        self.animating = (self.target - self.current).abs() >= SETTLE_PX;
        if !self.animating {
            self.current = self.target;
        }
    }

    /// Advance one frame and return the position to render.
    pub fn step(&mut self) -> f64 {
        if !self.animating {
            return self.current;
        }
        self.current += (self.target - self.current) * self.lerp;
        if (self.target - self.current).abs() < SETTLE_PX {
            self.current = self.target;
            self.animating = false;
        }
        self.current
    }
}

/// Convert a wheel delta to pixels.
pub fn normalize_delta(delta: f64, mode: u32, viewport: f64) -> f64 {
    match mode {
        DELTA_LINE => delta * LINE_HEIGHT_PX,
        DELTA_PAGE => delta * viewport,
        _ => delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_clamped_to_scroll_range() {
        let mut scroll = SmoothScroll::default();
        scroll.scroll_by(-200.0, 1000.0);
        assert_eq!(scroll.target(), 0.0);
        assert!(!scroll.is_animating());

        scroll.scroll_by(5000.0, 1000.0);
        assert_eq!(scroll.target(), 1000.0);
        assert!(scroll.is_animating());
    }

    #[test]
    fn easing_converges_and_settles_on_target() {
        let mut scroll = SmoothScroll::default();
        scroll.scroll_by(300.0, 1000.0);

        let mut last = 0.0;
        let mut frames = 0;
        while scroll.is_animating() {
            let pos = scroll.step();
            assert!(pos > last && pos <= 300.0);
            last = pos;
            frames += 1;
            assert!(frames < 200, "did not settle");
        }
        assert_eq!(scroll.current(), 300.0);
        assert_eq!(scroll.step(), 300.0);
    }

    #[test]
    fn sync_is_ignored_while_animating() {
        let mut scroll = SmoothScroll::default();
        scroll.sync(400.0);
        assert_eq!(scroll.current(), 400.0);

        scroll.scroll_by(100.0, 1000.0);
        scroll.sync(0.0);
        assert_eq!(scroll.target(), 500.0);
    }

    #[test]
    fn negative_range_pins_to_top() {
        let mut scroll = SmoothScroll::default();
        scroll.scroll_by(50.0, -10.0);
        assert_eq!(scroll.target(), 0.0);
    }

    #[test]
    fn delta_modes() {
        assert_eq!(normalize_delta(3.0, DELTA_PIXEL, 800.0), 3.0);
        assert_eq!(normalize_delta(3.0, DELTA_LINE, 800.0), 48.0);
        assert_eq!(normalize_delta(1.0, DELTA_PAGE, 800.0), 800.0);
    }
}
