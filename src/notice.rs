//! Flags that raise on demand and drop back after a fixed duration.
//!
//! Used for short-lived messages such as "item added". Time is passed in by the
//! caller (seconds, see [`crate::util::time`]) so the flag works the same in
//! tests and in the app.

/// A boolean that is true for `duration` seconds after each `raise`
#[derive(Debug, Clone, PartialEq)]
pub struct TransientFlag {
    raised_at: Option<f64>,
    duration: f64,
}

impl TransientFlag {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            raised_at: None,
            duration: duration_secs.max(0.0),
        }
    }

    /// Raises the flag, restarting the timer if it was already up
    pub fn raise(&mut self, now: f64) {
        self.raised_at = Some(now);
    }

    /// Lowers the flag early
    pub fn cancel(&mut self) {
        self.raised_at = None;
    }

    pub fn is_raised(&self, now: f64) -> bool {
        self.remaining(now).is_some()
    }

    /// Seconds until the flag drops, if it is up
    pub fn remaining(&self, now: f64) -> Option<f64> {
        let raised_at = self.raised_at?;
        let left = raised_at + self.duration - now;
        (left > 0.0).then_some(left)
    }

    /// Clears an expired flag. Returns true if it dropped on this call.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.raised_at.is_some() && !self.is_raised(now) {
            self.raised_at = None;
            return true;
        }
        false
    }

    pub fn set_duration(&mut self, duration_secs: f64) {
        self.duration = duration_secs.max(0.0);
    }
}
