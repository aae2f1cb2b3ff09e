use super::Readiness;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{trace, warn};

/// Returned when the probe never reported ready within the timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unavailable {
    pub waited: Duration,
}

/// Whole milliseconds in `duration`, clamped to `u64::MAX`.
pub fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Polls `probe` every `interval` until it is ready or `timeout` has passed.
/// The probe is always checked at least once.
pub fn wait_until_ready<R: Readiness + ?Sized>(
    probe: &R,
    timeout: Duration,
    interval: Duration,
) -> Result<(), Unavailable> {
    let started = Instant::now();
    loop {
        if probe.is_ready() {
            return Ok(());
        }
        let waited = started.elapsed();
        if waited >= timeout {
            warn!(waited_ms = millis(waited), "store did not become ready");
            return Err(Unavailable { waited });
        }
        trace!(waited_ms = millis(waited), "store not ready, polling");
        thread::sleep(interval.min(timeout - waited));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingProbe {
        ready_after: u32,
        calls: Cell<u32>,
    }

    impl Readiness for CountingProbe {
        fn is_ready(&self) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.calls.get() > self.ready_after
        }
    }

    #[test]
    fn millis_clamps_huge_durations() {
        assert_eq!(millis(Duration::from_millis(1500)), 1500);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn ready_probe_returns_immediately() {
        let probe = CountingProbe {
            ready_after: 0,
            calls: Cell::new(0),
        };
        let result = wait_until_ready(&probe, Duration::ZERO, Duration::from_millis(1));
        assert!(result.is_ok());
        assert_eq!(probe.calls.get(), 1);
    }

    #[test]
    fn keeps_polling_until_ready() {
        let probe = CountingProbe {
            ready_after: 3,
            calls: Cell::new(0),
        };
        let result = wait_until_ready(&probe, Duration::from_secs(5), Duration::from_millis(1));
        assert!(result.is_ok());
        assert_eq!(probe.calls.get(), 4);
    }

    #[test]
    fn gives_up_after_timeout() {
        let probe = CountingProbe {
            ready_after: u32::MAX,
            calls: Cell::new(0),
        };
        let result = wait_until_ready(&probe, Duration::from_millis(20), Duration::from_millis(5));
        let unavailable = result.expect_err("probe should time out");
        assert!(unavailable.waited >= Duration::from_millis(20));
        assert!(probe.calls.get() >= 2);
    }
}
