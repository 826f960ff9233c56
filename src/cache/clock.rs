//! Recency Clock Module
//!
//! Cache-wide logical counter that hands out recency stamps.

use crate::cache::Stamp;

// == Recency Clock ==
/// Monotonic counter stamping entries at insert and at successful lookup.
///
/// The clock is a plain value: `tick` does not mutate it but returns the
/// stamp for the current step together with the advanced clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecencyClock {
    now: u64,
}

impl RecencyClock {
    // == Constructor ==
    /// Creates a clock reading zero.
    pub fn new() -> Self {
        Self { now: 0 }
    }

    // == Now ==
    /// Current reading; the stamp the next write will receive.
    pub fn now(self) -> u64 {
        self.now
    }

    // == Tick ==
    /// Returns the stamp for the current step and the clock advanced by one.
    pub fn tick(self) -> (Stamp, Self) {
        let stamp = Stamp(self.now);
        (stamp, Self { now: self.now + 1 })
    }

    // == Reached ==
    /// True once the clock has counted at least `limit` steps.
    pub fn reached(self, limit: usize) -> bool {
        self.now >= limit as u64
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_zero() {
        assert_eq!(RecencyClock::new().now(), 0);
        assert_eq!(RecencyClock::default(), RecencyClock::new());
    }

    #[test]
    fn test_tick_stamps_current_then_advances() {
        let clock = RecencyClock::new();

        let (first, clock) = clock.tick();
        let (second, clock) = clock.tick();

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert_eq!(clock.now(), 2);
    }

    #[test]
    fn test_tick_leaves_original_untouched() {
        let clock = RecencyClock::new();
        let _ = clock.tick();
        assert_eq!(clock.now(), 0);
    }

    #[test]
    fn test_reached() {
        let (_, clock) = RecencyClock::new().tick();

        assert!(clock.reached(0));
        assert!(clock.reached(1));
        assert!(!clock.reached(2));
    }
}
