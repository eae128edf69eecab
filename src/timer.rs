use std::time::Duration;

/// Repeating interval driven by the frame clock.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTimer {
    interval: f32,
    elapsed: f32,
    cancelled: bool,
}

impl IntervalTimer {
    pub fn start(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32(),
            elapsed: 0.0,
            cancelled: false,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Advance by `dt` seconds and return how many ticks fell due, saturating
    /// at `u32::MAX`. A zero interval fires once per call.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.cancelled {
            return 0;
        }
        if self.interval <= 0.0 {
            return 1;
        }

        self.elapsed += dt;
        if self.elapsed < self.interval {
            return 0;
        }
        let due = (self.elapsed / self.interval).floor();
        self.elapsed %= self.interval;
        due as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut t = IntervalTimer::start(Duration::from_millis(500));
        assert_eq!(t.advance(0.25), 0);
        assert_eq!(t.advance(0.25), 1);
        assert_eq!(t.advance(0.3), 0);
        assert_eq!(t.advance(0.25), 1);
    }

    #[test]
    fn long_steps_fire_every_missed_tick() {
        let mut t = IntervalTimer::start(Duration::from_secs(1));
        assert_eq!(t.advance(3.5), 3);
        assert_eq!(t.advance(0.5), 1);
    }

    #[test]
    fn huge_step_over_tiny_interval_terminates() {
        let mut t = IntervalTimer::start(Duration::from_millis(1));
        assert!(t.advance(100_000.0) >= 1);
        assert!(t.elapsed < t.interval());
        assert_eq!(t.advance(0.0), 0);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut t = IntervalTimer::start(Duration::from_secs(1));
        t.cancel();
        assert!(t.is_cancelled());
        assert_eq!(t.advance(10.0), 0);
    }

    #[test]
    fn zero_interval_fires_each_step() {
        let mut t = IntervalTimer::start(Duration::ZERO);
        assert_eq!(t.advance(0.016), 1);
        assert_eq!(t.advance(5.0), 1);
    }
}
