//! Live "now" tracking for the calendar.
//!
//! The UI refreshes its clock every minute and once more right after local
//! midnight, so today/tomorrow flip without waiting for the next minute tick.

use chrono::{Duration, NaiveDate, NaiveDateTime};

pub const TICK_INTERVAL_MS: u32 = 60 * 1000;

/// Time left until the next local midnight. Never zero, so a timer armed
/// exactly at midnight waits a full day instead of firing in a loop.
pub fn until_midnight(now: NaiveDateTime) -> Duration {
    let next_midnight = now
        .date()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0));
    match next_midnight {
        Some(midnight) => midnight - now,
        None => Duration::days(1),
    }
}

/// [`until_midnight`] in whole milliseconds, rounded up so the timer lands
/// after midnight rather than just before it.
pub fn millis_until_midnight(now: NaiveDateTime) -> u32 {
    let left = until_midnight(now);
    let millis = left.num_milliseconds() + i64::from(left.subsec_nanos() % 1_000_000 != 0);
    u32::try_from(millis.max(1)).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayChange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    now: NaiveDateTime,
}

impl Clock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    pub fn tomorrow(&self) -> Option<NaiveDate> {
        self.today().succ_opt()
    }

    /// Move the clock to `now`, reporting when the calendar day changed.
    pub fn advance(&mut self, now: NaiveDateTime) -> Option<DayChange> {
        let previous = self.today();
        self.now = now;
        if previous != now.date() {
            tracing::info!(from = %previous, to = %now.date(), "new day registered");
            Some(DayChange {
                from: previous,
                to: now.date(),
            })
        } else {
            None
        }
    }
}
