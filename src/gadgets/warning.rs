//! Transient warning overlay with a cancellable clear deadline.

#[derive(Debug, Clone)]
pub struct WarningOverlay {
    hold_ms: u64,
    clear_at: Option<u64>,
}

impl WarningOverlay {
    pub fn new(hold_ms: u64) -> Self {
        Self {
            hold_ms,
            clear_at: None,
        }
    }

    /// Show the overlay, replacing any pending clear with a fresh one.
    pub fn trigger(&mut self, now_ms: u64) {
        self.clear_at = Some(now_ms.saturating_add(self.hold_ms));
    }

    /// Hide the overlay once its deadline has passed. Clearing twice is harmless.
    pub fn sync(&mut self, now_ms: u64) {
        if matches!(self.clear_at, Some(deadline) if now_ms >= deadline) {
            self.clear_at = None;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.clear_at.is_some()
    }

    /// Milliseconds until the overlay hides, if it is up.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.clear_at.map(|deadline| deadline.saturating_sub(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_exactly_after_hold() {
        let mut overlay = WarningOverlay::new(3000);
        assert!(!overlay.is_visible());

        overlay.trigger(2000);
        overlay.sync(4999);
        assert!(overlay.is_visible());
        assert_eq!(overlay.remaining_ms(4999), Some(1));

        overlay.sync(5000);
        assert!(!overlay.is_visible());
        assert_eq!(overlay.remaining_ms(5000), None);
    }

    #[test]
    // A second trigger pushes the deadline out instead of stacking clears.
    fn retrigger_resets_delay() {
        let mut overlay = WarningOverlay::new(3000);
        overlay.trigger(0);
        overlay.trigger(2000);
        overlay.sync(3000);
        assert!(overlay.is_visible());
        overlay.sync(4999);
        assert!(overlay.is_visible());
        overlay.sync(5000);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn clearing_when_clear_is_a_no_op() {
        let mut overlay = WarningOverlay::new(3000);
        overlay.sync(10_000);
        overlay.sync(20_000);
        assert!(!overlay.is_visible());
    }
}
