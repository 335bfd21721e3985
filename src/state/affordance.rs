// Fullscreen exit control: shown on tap, hidden again after a quiet period.

pub const DEFAULT_EXIT_CONTROL_MS: u32 = 2000;

/// The deadline doubles as the single timer handle. Re-arming replaces it,
/// so an expiry carrying an older deadline can never hide the control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExitAffordance {
    visible: bool,
    deadline: Option<f64>,
    hide_after_ms: f64,
}

impl Default for ExitAffordance {
    fn default() -> Self {
        Self::new(DEFAULT_EXIT_CONTROL_MS)
    }
}

impl ExitAffordance {
    pub fn new(hide_after_ms: u32) -> Self {
        Self {
            visible: false,
            deadline: None,
            hide_after_ms: hide_after_ms as f64,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    pub fn arm(&mut self, now: f64) {
        self.visible = true;
        self.deadline = Some(now + self.hide_after_ms);
    }

    pub fn disarm(&mut self) {
        self.visible = false;
        self.deadline = None;
    }

    /// Hides the control if `now` has reached the pending deadline.
    pub fn expire(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.disarm();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_shows_then_hides_after_quiet_period() {
        let mut a = ExitAffordance::default();
        assert!(!a.visible());
        a.arm(0.0);
        assert!(a.visible());
        assert!(!a.expire(1999.0));
        assert!(a.visible());
        assert!(a.expire(2000.0));
        assert!(!a.visible());
        assert_eq!(a.deadline(), None);
    }

    #[test]
    fn second_tap_restarts_countdown() {
        let mut a = ExitAffordance::default();
        a.arm(0.0);
        a.arm(1000.0);
        // Timer armed by the first tap fires with its own deadline
        assert!(!a.expire(2000.0));
        assert!(a.visible());
        assert!(!a.expire(2999.0));
        assert!(a.expire(3000.0));
        assert!(!a.visible());
    }

    #[test]
    fn disarm_cancels_pending_hide() {
        let mut a = ExitAffordance::new(500);
        a.arm(100.0);
        a.disarm();
        assert!(!a.visible());
        assert!(!a.expire(10_000.0));
    }
}
