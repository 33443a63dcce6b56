//! Resend cooldown for the password reset form.
//!
//! The page drives [`Cooldown::tick`] from a one-second timer; this type only
//! counts.

#[cfg(test)]
#[path = "cooldown_test.rs"]
mod cooldown_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cooldown {
    remaining: u32,
}

impl Cooldown {
    /// Begin a cooldown of `secs` seconds, replacing any running one.
    pub fn start(&mut self, secs: u32) {
        self.remaining = secs;
    }

    /// Advance one second. Returns whether the cooldown is still running.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_active()
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.remaining > 0
    }

    #[must_use]
    pub fn remaining(self) -> u32 {
        self.remaining
    }

    /// Button caption.
    #[must_use]
    pub fn label(self) -> String {
        if self.is_active() {
            format!("Resend in {}s", self.remaining)
        } else {
            "Send reset link".to_owned()
        }
    }
}
