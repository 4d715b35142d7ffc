//! Skip redraws when nothing on screen changed.
//!
//! The snake only moves once per simulation step, so most frames would repaint
//! an identical picture. Frames are drawn when the snapshot fingerprint changes,
//! after [`RenderThrottle::force`], or once per refresh interval as a fallback.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Make the next `should_render` call return true (e.g. after a resize).
    pub fn force(&mut self) {
        self.last_fingerprint = None;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms;
        if !changed && !stale {
            return false;
        }
        self.last_render_ms = now_ms;
        self.last_fingerprint = Some(fingerprint);
        true
    }
}
