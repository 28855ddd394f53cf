//! Frame throttling for a mostly static screen.
//!
//! While anything animates every frame is drawn. An idle machine is only
//! redrawn when its fingerprint changes, or at a slow keep-alive rate.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Whether to draw a frame at `now_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let due = !self.has_rendered
            || animating
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;
        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }
}

/// FNV-1a over a handful of words describing what is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint(u64);

impl Default for Fingerprint {
    fn default() -> Self {
        Self(0xcbf2_9ce4_8422_2325)
    }
}

impl Fingerprint {
    pub fn push(mut self, word: u64) -> Self {
        for byte in word.to_le_bytes() {
            self.0 ^= byte as u64;
            self.0 = self.0.wrapping_mul(0x0000_0100_0000_01b3);
        }
        self
    }

    pub fn finish(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_always_renders() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 7, false));
    }

    #[test]
    fn static_frames_throttled_until_change() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 7, false));
        assert!(!t.should_render(16, 7, false));
        assert!(!t.should_render(249, 7, false));
        assert!(t.should_render(250, 7, false));
        assert!(t.should_render(266, 8, false));
    }

    #[test]
    fn animating_frames_always_render() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1, true));
        assert!(t.should_render(16, 1, true));
        assert!(t.should_render(32, 1, true));
    }

    #[test]
    fn fingerprint_is_order_sensitive() {
        let a = Fingerprint::default().push(1).push(2).finish();
        let b = Fingerprint::default().push(2).push(1).finish();
        assert_ne!(a, b);
        assert_eq!(a, Fingerprint::default().push(1).push(2).finish());
    }
}
