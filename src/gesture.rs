// src/gesture.rs
//
// Vertical swipe-to-dismiss tracking for the action sheet.

/// Net downward travel, in px, that dismisses regardless of speed.
pub const DISMISS_DISTANCE: f64 = 80.0;
/// Flick speed, in px/ms, that dismisses regardless of distance.
pub const DISMISS_VELOCITY: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Dismiss,
    Restore,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragStart {
    y: f64,
    time_ms: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<DragStart>,
}

impl SwipeTracker {
    /// Arm a drag. Refused while the sheet's content is scrolled, so that
    /// scrolling inside the sheet isn't hijacked.
    pub fn begin(&mut self, y: f64, time_ms: f64, scroll_top: f64) -> bool {
        if scroll_top > 0.0 {
            self.start = None;
            return false;
        }
        self.start = Some(DragStart { y, time_ms });
        true
    }

    /// Offset to apply to the sheet while dragging. The sheet never moves
    /// above its resting position.
    pub fn move_to(&self, y: f64) -> Option<f64> {
        self.start.map(|start| (y - start.y).max(0.0))
    }

    pub fn end(&mut self, y: f64, time_ms: f64) -> Option<SwipeOutcome> {
        let start = self.start.take()?;
        let displacement = y - start.y;
        let elapsed = (time_ms - start.time_ms).max(1.0);
        let velocity = displacement / elapsed;

        if displacement > DISMISS_DISTANCE || velocity > DISMISS_VELOCITY {
            Some(SwipeOutcome::Dismiss)
        } else {
            Some(SwipeOutcome::Restore)
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}
