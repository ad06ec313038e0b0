//! Rotating display-item state machine.
//!
//! One item out of a fixed ordered set is visible at a time. The automatic
//! timer and the manual next/previous/jump controls all go through the same
//! transitions, so a tick that lands right after a manual jump is ordinary
//! behavior rather than a conflict, and the timer keeps running across
//! manual input. The timer itself is owned by the hosting component as a
//! tracked task and released on exit.

/// Position within a fixed-length item cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// A carousel over `len` items, starting at the first.
    ///
    /// `len` must be at least 1.
    pub fn new(len: usize) -> Self {
        debug_assert!(len >= 1, "carousel requires at least one item");
        Self { len, current: 0 }
    }

    /// Number of items in the cycle, always at least 1.
    pub fn item_count(&self) -> usize {
        self.len
    }

    /// Index of the visible item, always in `[0, len)`.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Step forward, wrapping. Shared by the auto-advance timer and the
    /// manual "next" control.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// Step backward, wrapping.
    pub fn rewind(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jump straight to `index`.
    ///
    /// Passing an out-of-range index is a caller bug, not a runtime
    /// condition to recover from.
    pub fn jump(&mut self, index: usize) {
        debug_assert!(index < self.len, "carousel index {index} out of range");
        self.current = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Entity;
    use proptest::prelude::*;
    use std::time::Duration;

    #[test]
    fn advance_and_rewind_wrap() {
        let mut c = Carousel::new(3);
        c.advance();
        c.advance();
        c.advance();
        assert_eq!(c.current(), 0);

        c.rewind();
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn single_item_carousel_stays_put() {
        let mut c = Carousel::new(1);
        c.advance();
        c.rewind();
        c.jump(0);
        assert_eq!(c.current(), 0);
    }

    proptest! {
        #[test]
        fn full_cycle_returns_to_start(len in 1usize..32, start in 0usize..32) {
            let mut c = Carousel::new(len);
            c.jump(start % len);
            let origin = c.current();
            for _ in 0..len {
                c.advance();
            }
            prop_assert_eq!(c.current(), origin);
        }

        #[test]
        fn rewind_undoes_advance(len in 1usize..32, start in 0usize..32) {
            let mut c = Carousel::new(len);
            c.jump(start % len);
            let origin = c.current();

            c.advance();
            c.rewind();
            prop_assert_eq!(c.current(), origin);

            c.rewind();
            c.advance();
            prop_assert_eq!(c.current(), origin);
        }
    }

    // Four items, three automatic ticks (15 s of simulated time), a manual
    // jump back to the first item, then one more tick.
    #[tokio::test(start_paused = true)]
    async fn timer_and_manual_jump_share_transitions() {
        let state = Entity::new(Carousel::new(4));

        let ticker_state = state.clone();
        let ticker = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(5));
            interval.tick().await; // immediate first tick
            loop {
                interval.tick().await;
                let _ = ticker_state.update(Carousel::advance);
            }
        });

        tokio::time::sleep(Duration::from_secs(16)).await;
        assert_eq!(state.read(Carousel::current).unwrap(), 3);

        state.update(|c| c.jump(0)).unwrap();
        assert_eq!(state.read(Carousel::current).unwrap(), 0);

        // The timer never paused; the next tick lands at t = 20 s.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(state.read(Carousel::current).unwrap(), 1);

        ticker.abort();
    }
}
