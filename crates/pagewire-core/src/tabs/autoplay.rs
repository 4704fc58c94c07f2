//! Auto-advance timer
//!
//! A group holds at most one pending timer. Starting a timer replaces the
//! previous one and bumps the generation, so a handle taken from an older
//! timer can be recognised as stale and can never fire.

use std::time::Duration;

use crate::motion::timing::progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTimer {
    /// Item whose progress fill this timer drives
    pub index: usize,
    pub started_at: Duration,
    pub deadline: Duration,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct AutoAdvance {
    duration: Duration,
    timer: Option<ProgressTimer>,
    generation: u64,
}

impl AutoAdvance {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            timer: None,
            generation: 0,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start a timer for `index` at `at`, cancelling any pending one
    pub fn start(&mut self, index: usize, at: Duration) -> ProgressTimer {
        self.cancel();
        self.generation += 1;
        let timer = ProgressTimer {
            index,
            started_at: at,
            deadline: at + self.duration,
            generation: self.generation,
        };
        self.timer = Some(timer);
        timer
    }

    /// Drop the pending timer without firing it
    pub fn cancel(&mut self) -> Option<ProgressTimer> {
        self.timer.take()
    }

    pub fn pending(&self) -> Option<&ProgressTimer> {
        self.timer.as_ref()
    }

    /// True while `timer` is the one that will fire
    pub fn is_current(&self, timer: &ProgressTimer) -> bool {
        self.timer
            .as_ref()
            .is_some_and(|t| t.generation == timer.generation)
    }

    /// Linear fill fraction of the pending timer at `now`
    pub fn fill(&self, now: Duration) -> Option<(usize, f64)> {
        self.timer
            .as_ref()
            .map(|t| (t.index, progress(t.started_at, self.duration, now)))
    }

    /// Remove and return the pending timer if its deadline has passed
    pub fn take_expired(&mut self, now: Duration) -> Option<ProgressTimer> {
        if self.timer.is_some_and(|t| t.deadline <= now) {
            self.timer.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_expires_at_deadline() {
        let mut auto = AutoAdvance::new(ms(5000));
        auto.start(0, ms(1100));

        assert!(auto.take_expired(ms(6099)).is_none());
        let fired = auto.take_expired(ms(6100)).unwrap();
        assert_eq!(fired.index, 0);
        assert_eq!(fired.deadline, ms(6100));
        assert!(auto.pending().is_none());
    }

    #[test]
    fn test_restart_makes_old_timer_stale() {
        let mut auto = AutoAdvance::new(ms(5000));
        let first = auto.start(0, ms(0));
        let second = auto.start(2, ms(2300));

        assert!(!auto.is_current(&first));
        assert!(auto.is_current(&second));
        // The old deadline passes without anything firing
        assert!(auto.take_expired(ms(5000)).is_none());
        assert_eq!(auto.take_expired(ms(7300)).unwrap().index, 2);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut auto = AutoAdvance::new(ms(1000));
        let timer = auto.start(1, ms(0));
        auto.cancel();
        assert!(!auto.is_current(&timer));
        assert!(auto.take_expired(ms(10_000)).is_none());
    }

    #[test]
    fn test_fill_fraction() {
        let mut auto = AutoAdvance::new(ms(1000));
        assert!(auto.fill(ms(0)).is_none());
        auto.start(1, ms(500));
        assert_eq!(auto.fill(ms(750)), Some((1, 0.25)));
        assert_eq!(auto.fill(ms(5000)), Some((1, 1.0)));
    }
}
