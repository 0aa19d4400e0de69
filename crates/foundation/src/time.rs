/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Time(pub f64); // seconds

/// Tracks elapsed wall-clock time between consecutive ticks.
///
/// The first call after construction (or reset) reports a zero delta so a
/// freshly mounted animation never jumps ahead.
#[derive(Debug, Default)]
pub struct TickClock {
    last: Option<Time>,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delta(&mut self, now: Time) -> f64 {
        let dt = match self.last {
            Some(prev) => (now.0 - prev.0).max(0.0),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{TickClock, Time};

    #[test]
    fn first_delta_is_zero() {
        let mut clock = TickClock::new();
        assert_eq!(clock.delta(Time(5.0)), 0.0);
        assert_eq!(clock.delta(Time(5.25)), 0.25);
    }

    #[test]
    fn reset_forgets_previous_tick() {
        let mut clock = TickClock::new();
        clock.delta(Time(1.0));
        clock.reset();
        assert_eq!(clock.delta(Time(10.0)), 0.0);
    }

    #[test]
    fn time_never_runs_backwards() {
        let mut clock = TickClock::new();
        clock.delta(Time(2.0));
        assert_eq!(clock.delta(Time(1.0)), 0.0);
    }
}
