use std::sync::atomic::{AtomicI64, Ordering};

use anchor_lang::prelude::*;

/// Source of the current unix timestamp.
pub trait TimeSource {
    fn now(&self) -> Result<i64>;
}

/// The cluster clock sysvar.
#[derive(Clone, Copy, Debug, Default)]
pub struct SysvarClock;

impl TimeSource for SysvarClock {
    fn now(&self) -> Result<i64> {
        Ok(Clock::get()?.unix_timestamp)
    }
}

/// Settable clock for off-chain hosts and deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock(AtomicI64);

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self(AtomicI64::new(now))
    }

    pub fn set(&self, now: i64) {
        self.0.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.0.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Result<i64> {
        Ok(self.0.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_moves_only_when_told() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now().unwrap(), 1_000);
        clock.advance(86_400);
        assert_eq!(clock.now().unwrap(), 87_400);
        clock.set(5);
        assert_eq!(clock.now().unwrap(), 5);
    }
}
