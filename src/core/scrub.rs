use super::constants::{SCRUB_LAG_SEC, SCRUB_SNAP_EPSILON};

/// Lag-smoothed follower of a raw scroll progress.
///
/// The displayed value approaches the target exponentially and is within ~2%
/// of it after `lag_sec`. A zero lag follows the target exactly.
#[derive(Clone, Copy, Debug)]
pub struct Scrub {
    value: f32,
    target: f32,
    lag_sec: f32,
}

impl Default for Scrub {
    fn default() -> Self {
        Self::new(SCRUB_LAG_SEC)
    }
}

impl Scrub {
    pub fn new(lag_sec: f32) -> Self {
        Self {
            value: 0.0,
            target: 0.0,
            lag_sec: lag_sec.max(0.0),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target.clamp(0.0, 1.0);
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }

    /// Advance by `dt_sec`; returns true when the value changed.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        if self.is_settled() {
            return false;
        }
        if self.lag_sec <= 0.0 {
            self.value = self.target;
            return true;
        }
        // tau = lag/4 leaves e^-4 (< 2%) of the gap after one lag period
        let tau = self.lag_sec * 0.25;
        let alpha = 1.0 - (-dt_sec.max(0.0) / tau).exp();
        self.value += (self.target - self.value) * alpha;
        if (self.target - self.value).abs() < SCRUB_SNAP_EPSILON {
            self.value = self.target;
        }
        true
    }
}
