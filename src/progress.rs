// src/progress.rs
//
// Cosmetic load progress. Browsers don't report how far an iframe has got, so
// this only creeps toward a ceiling until the real load event finishes it.

pub const CEILING: f64 = 88.0;
pub const TICK_MS: u32 = 280;
pub const MIN_STEP: f64 = 0.4;
pub const GAP_FACTOR: f64 = 0.09;
/// How long 100% stays on screen before the bar hides.
pub const FINISH_HOLD_MS: u32 = 350;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Hidden,
    Running,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    value: f64,
    phase: ProgressPhase,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            value: 0.0,
            phase: ProgressPhase::Hidden,
        }
    }
}

impl Progress {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != ProgressPhase::Hidden
    }

    /// Whole percent for the label.
    pub fn percent(&self) -> u32 {
        self.value.floor() as u32
    }

    pub fn start(&mut self) {
        self.value = 0.0;
        self.phase = ProgressPhase::Running;
    }

    /// Advance one timer tick. The step shrinks with the remaining gap but
    /// never drops below `MIN_STEP`, and the value never passes `CEILING`.
    pub fn tick(&mut self) {
        if self.phase != ProgressPhase::Running {
            return;
        }
        let step = ((CEILING - self.value) * GAP_FACTOR).max(MIN_STEP);
        self.value = (self.value + step).min(CEILING);
    }

    pub fn finish(&mut self) {
        self.value = 100.0;
        self.phase = ProgressPhase::Complete;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
