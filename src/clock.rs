use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Frame clock consumed by the controller layer.
///
/// Must never go backwards. Vibration durations are measured in the same
/// units, so both sides use [`Duration`].
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Time elapsed since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Rc<T> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_shared_clock_reads_through() {
        let clock = Rc::new(MonotonicClock::new());
        let shared = Rc::clone(&clock);
        assert!(shared.now() >= Duration::ZERO);
        assert!(clock.now() >= Duration::ZERO);
    }
}
