//! Deadline-driven state machines for the two field timers.
//!
//! Both timers are pure: they are told the current time and report what is
//! due, so a host can drive them from a real clock and tests can drive them
//! from made-up timestamps. Times are [`Duration`]s since an arbitrary epoch
//! (the host uses the moment it started).
//!
//! | Timer | States |
//! |-------|--------|
//! | [`GrowthTimer`] | `Idle → Arming → Saturated` |
//! | [`DecayTimer`] | `Idle ⇄ Pending` |

use std::time::Duration;

/// Repeating creation timer that arms once and stops after a fixed number of
/// ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthTimer {
    /// Waiting for the page to be scrolled far enough.
    #[default]
    Idle,
    /// Ticking every interval.
    Arming {
        /// Ticks fired so far.
        ticks: usize,
        /// When the next tick is due.
        next_tick: Duration,
    },
    /// All ticks fired. Never re-arms.
    Saturated,
}

impl GrowthTimer {
    /// Start ticking if still idle. Returns `true` if the timer was armed.
    pub fn arm(&mut self, now: Duration, interval: Duration) -> bool {
        if *self != GrowthTimer::Idle {
            return false;
        }
        *self = GrowthTimer::Arming {
            ticks: 0,
            next_tick: now + interval,
        };
        true
    }

    /// Fire every tick due at `now`, up to `total` ticks over the timer's life.
    ///
    /// Returns how many ticks fired during this call.
    pub fn poll(&mut self, now: Duration, interval: Duration, total: usize) -> usize {
        let mut fired = 0;
        while let GrowthTimer::Arming { ticks, next_tick } = *self {
            if ticks >= total {
                *self = GrowthTimer::Saturated;
                break;
            }
            if next_tick > now {
                break;
            }
            fired += 1;
            *self = if ticks + 1 >= total {
                GrowthTimer::Saturated
            } else {
                GrowthTimer::Arming {
                    ticks: ticks + 1,
                    next_tick: next_tick + interval,
                }
            };
        }
        fired
    }

    /// When the next tick is due, if one is pending.
    pub fn deadline(&self) -> Option<Duration> {
        match *self {
            GrowthTimer::Arming { next_tick, .. } => Some(next_tick),
            _ => None,
        }
    }

    #[inline]
    pub fn is_saturated(&self) -> bool {
        *self == GrowthTimer::Saturated
    }
}

/// Trailing debounce: fires once, a fixed delay after the last touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecayTimer {
    #[default]
    Idle,
    Pending {
        due: Duration,
    },
}

impl DecayTimer {
    /// Restart the countdown from `now`.
    pub fn touch(&mut self, now: Duration, delay: Duration) {
        *self = DecayTimer::Pending { due: now + delay };
    }

    /// Returns `true` exactly once when the countdown has elapsed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match *self {
            DecayTimer::Pending { due } if due <= now => {
                *self = DecayTimer::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Duration> {
        match *self {
            DecayTimer::Pending { due } => Some(due),
            DecayTimer::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_growth_ticks_on_schedule() {
        let mut timer = GrowthTimer::default();
        assert!(timer.arm(ms(0), INTERVAL));

        assert_eq!(timer.poll(ms(99), INTERVAL, 20), 0);
        assert_eq!(timer.poll(ms(100), INTERVAL, 20), 1);
        assert_eq!(timer.poll(ms(350), INTERVAL, 20), 2);
        assert_eq!(timer.deadline(), Some(ms(400)));
    }

    #[test]
    fn test_growth_saturates_after_total_ticks() {
        let mut timer = GrowthTimer::default();
        timer.arm(ms(1000), INTERVAL);

        assert_eq!(timer.poll(ms(2900), INTERVAL, 20), 19);
        assert!(!timer.is_saturated());
        assert_eq!(timer.poll(ms(3000), INTERVAL, 20), 1);
        assert!(timer.is_saturated());
        assert_eq!(timer.poll(ms(10_000), INTERVAL, 20), 0);
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn test_growth_arms_once() {
        let mut timer = GrowthTimer::default();
        assert!(timer.arm(ms(0), INTERVAL));
        assert!(!timer.arm(ms(50), INTERVAL));
        assert_eq!(timer.deadline(), Some(ms(100)));

        timer.poll(ms(5000), INTERVAL, 3);
        assert!(!timer.arm(ms(6000), INTERVAL));
        assert!(timer.is_saturated());
    }

    #[test]
    fn test_growth_idle_never_fires() {
        let mut timer = GrowthTimer::default();
        assert_eq!(timer.poll(ms(100_000), INTERVAL, 20), 0);
        assert_eq!(timer, GrowthTimer::Idle);
    }

    #[test]
    fn test_growth_with_zero_total() {
        let mut timer = GrowthTimer::default();
        timer.arm(ms(0), INTERVAL);
        assert_eq!(timer.poll(ms(0), INTERVAL, 0), 0);
        assert!(timer.is_saturated());
    }

    #[test]
    fn test_decay_fires_once() {
        let mut timer = DecayTimer::default();
        timer.touch(ms(0), ms(150));

        assert!(!timer.poll(ms(149)));
        assert!(timer.poll(ms(150)));
        assert!(!timer.poll(ms(151)));
        assert_eq!(timer, DecayTimer::Idle);
    }

    #[test]
    fn test_decay_debounces() {
        let mut timer = DecayTimer::default();
        timer.touch(ms(0), ms(150));
        timer.touch(ms(100), ms(150));

        assert!(!timer.poll(ms(200)));
        assert_eq!(timer.deadline(), Some(ms(250)));
        assert!(timer.poll(ms(250)));
    }
}
