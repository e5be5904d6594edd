//! Millisecond timestamps for the scheduler tick and the jiggler.
//!
//! The device clock is a free-running millisecond counter that wraps, so a
//! [`Timestamp`] must never be compared with `<`/`>` directly. Use
//! [`Timestamp::elapsed_since`], which subtracts with wrapping.
use embassy_time::{Duration, Instant};

/// A point in time on a wrapping millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timestamp(u32);

impl Timestamp {
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`, correct across one wrap of the counter.
    pub const fn elapsed_since(self, earlier: Timestamp) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Returns `true` once at least `interval` has passed since `earlier`.
    pub fn has_elapsed(self, earlier: Timestamp, interval: Duration) -> bool {
        self.elapsed_since(earlier) as u64 >= interval.as_millis()
    }
}

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Clock backed by the embassy time driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // Truncation is the wrap
        Timestamp::from_millis(Instant::now().as_millis() as u32)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_elapsed_across_wrap() {
        let before = Timestamp::from_millis(u32::MAX - 40);
        let after = Timestamp::from_millis(59);
        assert_eq!(after.elapsed_since(before), 100);
        assert!(after.has_elapsed(before, Duration::from_millis(100)));
        assert!(!after.has_elapsed(before, Duration::from_millis(101)));
    }

    #[test]
    fn test_elapsed_same_instant() {
        let t = Timestamp::from_millis(1234);
        assert_eq!(t.elapsed_since(t), 0);
        assert!(t.has_elapsed(t, Duration::from_millis(0)));
    }
}
