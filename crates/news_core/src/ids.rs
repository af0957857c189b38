use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("current time cannot be represented as nanoseconds since the epoch")]
    OutOfRange,
    #[error("current time is before the unix epoch")]
    BeforeEpoch,
}

pub trait NanosClock {
    fn now_nanos(&self) -> Result<i64, ClockError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl NanosClock for SystemClock {
    fn now_nanos(&self) -> Result<i64, ClockError> {
        let nanos = Utc::now()
            .timestamp_nanos_opt()
            .ok_or(ClockError::OutOfRange)?;
        if nanos < 0 {
            return Err(ClockError::BeforeEpoch);
        }
        Ok(nanos)
    }
}

/// Issues news identifiers as decimal nanosecond timestamps.
///
/// One generator lives for the whole process. When the clock has not moved
/// past the last issued value the id is bumped to `last + 1`, so ids from a
/// single process are strictly increasing.
#[derive(Debug, Default)]
pub struct NewsIdGenerator<C = SystemClock> {
    clock: C,
    last_issued: Mutex<Option<i64>>,
}

impl<C: NanosClock> NewsIdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last_issued: Mutex::new(None),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn next_id(&self) -> Result<String, ClockError> {
        let now = self.clock.now_nanos()?;
        let mut last_issued = self
            .last_issued
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let id = match *last_issued {
            Some(previous) if now <= previous => {
                previous.checked_add(1).ok_or(ClockError::OutOfRange)?
            }
            _ => now,
        };
        *last_issued = Some(id);
        Ok(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FrozenClock(i64);

    impl NanosClock for FrozenClock {
        fn now_nanos(&self) -> Result<i64, ClockError> {
            Ok(self.0)
        }
    }

    struct ScriptedClock {
        readings: Mutex<Vec<i64>>,
    }

    impl NanosClock for ScriptedClock {
        fn now_nanos(&self) -> Result<i64, ClockError> {
            Ok(self.readings.lock().expect("poisoned mutex").remove(0))
        }
    }

    #[test]
    fn system_clock_reads_positive_nanos() {
        let nanos = SystemClock.now_nanos().expect("clock should read");
        assert!(nanos > 1_600_000_000_000_000_000);
    }

    #[test]
    fn first_id_is_the_clock_reading() {
        let ids = NewsIdGenerator::new(FrozenClock(1_700_000_000_000_000_123));
        assert_eq!(
            ids.next_id().expect("id should be issued"),
            "1700000000000000123"
        );
    }

    #[test]
    fn frozen_clock_still_yields_distinct_ids() {
        let ids = NewsIdGenerator::new(FrozenClock(500));
        let first = ids.next_id().expect("id should be issued");
        let second = ids.next_id().expect("id should be issued");
        let third = ids.next_id().expect("id should be issued");

        assert_eq!(first, "500");
        assert_eq!(second, "501");
        assert_eq!(third, "502");
    }

    #[test]
    fn clock_going_backwards_does_not_reuse_ids() {
        let ids = NewsIdGenerator::new(ScriptedClock {
            readings: Mutex::new(vec![1_000, 900, 2_000]),
        });

        assert_eq!(ids.next_id().expect("id"), "1000");
        assert_eq!(ids.next_id().expect("id"), "1001");
        assert_eq!(ids.next_id().expect("id"), "2000");
    }

    #[test]
    fn overflowing_bump_reports_out_of_range() {
        let ids = NewsIdGenerator::new(FrozenClock(i64::MAX));
        ids.next_id().expect("first id should be issued");
        assert_eq!(ids.next_id(), Err(ClockError::OutOfRange));
    }
}
