use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::timezone::TimeComponents;
use crate::shared::types::ClockData;
use crate::utils::format::DisplayFormat;

/// State behind `use_clock`: the last sampled instant and whether sampling continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveClock {
    running: bool,
    time: DateTime<Utc>,
    initially_enabled: bool,
}

impl LiveClock {
    pub fn new(enabled: bool, now: DateTime<Utc>) -> Self {
        Self {
            running: enabled,
            time: now,
            initially_enabled: enabled,
        }
    }

    /// Follows a change of the `enabled` option. Returns true when the state changed.
    /// [`LiveClock::reset`] still returns to the state given to [`LiveClock::new`].
    pub fn set_enabled(&mut self, enabled: bool, now: DateTime<Utc>) -> bool {
        if self.running == enabled {
            return false;
        }
        self.running = enabled;
        self.time = now;
        true
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.running {
            self.time = now;
        }
        self.running
    }

    pub fn start(&mut self, now: DateTime<Utc>) {
        self.running = true;
        self.time = now;
    }

    pub fn resume(&mut self, now: DateTime<Utc>) {
        self.start(now);
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.running = self.initially_enabled;
        self.time = now;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn snapshot(&self, tz: Tz, format: &DisplayFormat) -> ClockData {
        let c = TimeComponents::from_datetime(&self.time.with_timezone(&tz));
        let (hours, am_pm) = format.hours(u64::from(c.hour));
        ClockData {
            year: c.year,
            month: c.month,
            day: c.day,
            week: c.week,
            is_leap: c.is_leap_year,
            hours,
            minutes: format.minutes(u64::from(c.minute)),
            seconds: format.seconds(u64::from(c.second)),
            milliseconds: c.millisecond,
            am_pm,
            is_running: self.running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::format::Meridiem;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 29, h, m, s).unwrap()
    }

    #[test]
    fn tick_samples_only_while_running() {
        let mut clock = LiveClock::new(true, at(10, 0, 0));
        assert!(clock.tick(at(10, 0, 1)));
        assert_eq!(clock.time(), at(10, 0, 1));

        clock.pause();
        assert!(!clock.tick(at(10, 0, 5)));
        assert_eq!(clock.time(), at(10, 0, 1));

        clock.resume(at(10, 0, 9));
        assert!(clock.is_running());
        assert_eq!(clock.time(), at(10, 0, 9));
    }

    #[test]
    fn reset_restores_the_configured_state() {
        let mut clock = LiveClock::new(false, at(8, 0, 0));
        clock.start(at(8, 0, 1));
        clock.reset(at(8, 0, 2));
        assert!(!clock.is_running());
        assert_eq!(clock.time(), at(8, 0, 2));

        let mut clock = LiveClock::new(true, at(8, 0, 0));
        clock.pause();
        clock.reset(at(8, 1, 0));
        assert!(clock.is_running());
    }

    #[test]
    fn set_enabled_reports_changes() {
        let mut clock = LiveClock::new(true, at(8, 0, 0));
        assert!(!clock.set_enabled(true, at(8, 0, 1)));
        assert!(clock.set_enabled(false, at(8, 0, 2)));
        assert!(!clock.is_running());
        assert_eq!(clock.time(), at(8, 0, 2));
    }

    #[test]
    fn reset_ignores_later_enabled_changes() {
        let mut clock = LiveClock::new(true, at(8, 0, 0));
        clock.set_enabled(false, at(8, 0, 1));
        clock.reset(at(8, 0, 2));
        assert!(clock.is_running());

        let mut clock = LiveClock::new(false, at(8, 0, 0));
        clock.set_enabled(true, at(8, 0, 1));
        clock.reset(at(8, 0, 2));
        assert!(!clock.is_running());
    }

    #[test]
    fn snapshot_projects_into_the_timezone() {
        let clock = LiveClock::new(true, at(23, 5, 9) + Duration::milliseconds(250));
        let format = DisplayFormat {
            use_24_hours: false,
            pad_hours: true,
            pad_minutes: true,
            pad_seconds: false,
        };
        let data = clock.snapshot(chrono_tz::Asia::Tokyo, &format);
        assert_eq!((data.year, data.month, data.day), (2024, 3, 1));
        assert_eq!(data.hours.to_string(), "08");
        assert_eq!(data.minutes.to_string(), "05");
        assert_eq!(data.seconds.to_string(), "9");
        assert_eq!(data.milliseconds, 250);
        assert_eq!(data.am_pm, Some(Meridiem::Am));
        assert!(data.is_leap);
        assert!(data.is_running);

        let data = clock.snapshot(Tz::UTC, &DisplayFormat::default());
        assert_eq!(data.hours.to_string(), "23");
        assert_eq!(data.am_pm, None);
        assert_eq!(data.day, 29);
    }
}
