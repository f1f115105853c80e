//! Daily reading streak bookkeeping.
//!
//! Days are local calendar day numbers (days since the Unix epoch in the
//! reader's time zone), so comparisons ignore the time of day.

use log::debug;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
const MS_PER_MINUTE: i64 = 60 * 1000;

/// Local calendar day for a Unix timestamp in milliseconds.
pub fn local_day(unix_ms: i64, utc_offset_minutes: i16) -> i64 {
    unix_ms
        .saturating_add(i64::from(utc_offset_minutes) * MS_PER_MINUTE)
        .div_euclid(MS_PER_DAY)
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StreakState {
    pub days_streak: u32,
    /// `None` until the first recorded reading.
    pub last_read_day: Option<i64>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StreakUpdate {
    pub state: StreakState,
    /// Whether `state` differs from the input and should be persisted.
    pub changed: bool,
}

impl StreakState {
    pub const fn new() -> Self {
        Self {
            days_streak: 0,
            last_read_day: None,
        }
    }

    /// Applies the day rollover for `today` and, when `read_today` is set,
    /// records a reading.
    ///
    /// Missing more than one day breaks the streak. A reading on the day
    /// after the last one (or the very first reading) extends it; a reading
    /// after a break starts a new streak at 1; further readings on the same
    /// day change nothing.
    pub fn update(self, today: i64, read_today: bool) -> StreakUpdate {
        let gap = self.last_read_day.map(|day| today.saturating_sub(day));
        let mut days_streak = self.days_streak;

        if gap.is_some_and(|gap| gap > 1) {
            days_streak = 0;
        }

        let mut last_read_day = self.last_read_day;
        if read_today {
            match gap {
                None | Some(1) => days_streak = days_streak.saturating_add(1),
                Some(gap) if gap > 1 => days_streak = 1,
                _ => {}
            }
            last_read_day = Some(today);
        }

        let state = Self {
            days_streak,
            last_read_day,
        };
        let changed = state != self;
        if changed {
            debug!(
                "streak: update today={} gap={:?} read={} streak={}->{}",
                today, gap, read_today, self.days_streak, state.days_streak
            );
        }
        StreakUpdate { state, changed }
    }

    /// Streak as it should be displayed on `today`, without recording anything.
    pub fn current(&self, today: i64) -> u32 {
        match self.last_read_day {
            Some(day) if today.saturating_sub(day) > 1 => 0,
            _ => self.days_streak,
        }
    }
}
