//! Startup progress bar

/// Fixed-step progress, driven by a repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingBar {
    pct: u32,
    step: u32,
}

impl LoadingBar {
    pub fn new(step: u32) -> Self {
        Self {
            pct: 0,
            step: step.clamp(1, 100),
        }
    }

    /// Advance one timer tick; returns the new percentage (capped at 100)
    pub fn tick(&mut self) -> u32 {
        self.pct = (self.pct + self.step).min(100);
        self.pct
    }

    pub fn percent(&self) -> u32 {
        self.pct
    }

    pub fn is_complete(&self) -> bool {
        self.pct >= 100
    }

    /// Ticks needed from empty to full
    pub fn total_ticks(&self) -> u32 {
        100_u32.div_ceil(self.step)
    }
}
