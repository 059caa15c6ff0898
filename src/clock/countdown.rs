//! Countdown budget: Idle -> Running <-> Paused -> Completed.
//!
//! Completed is terminal until [`Countdown::reset`]. The budget is decremented by the
//! configured cadence on every tick rather than re-measured against the clock.

use chrono::{DateTime, Datelike, Duration, Local, Utc};
use chrono_tz::Tz;
use dioxus::logger::tracing::{debug, info};

use super::parse::{parse_time_value_at, TimeValue};
use super::timezone::{is_leap_year, timezone_or_utc};
use crate::shared::types::{CountdownData, CountdownOptions};
use crate::utils::format::{DisplayFormat, TimeField};

const SECOND_MS: u64 = 1_000;
const MINUTE_MS: u64 = 60 * SECOND_MS;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;
const WEEK_MS: u64 = 7 * DAY_MS;
const YEAR_MS: u64 = 365 * DAY_MS;
const MONTH_MS: u64 = YEAR_MS / 12;

/// The parts of [`CountdownOptions`] that define the budget.
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownConfig {
    pub target_date: Option<TimeValue>,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub auto_start: bool,
    pub cadence_ms: u32,
    pub timezone: String,
}

impl From<&CountdownOptions> for CountdownConfig {
    fn from(options: &CountdownOptions) -> Self {
        Self {
            target_date: options.target_date.clone(),
            hours: options.hours,
            minutes: options.minutes,
            seconds: options.seconds,
            auto_start: options.enabled,
            cadence_ms: options.update_frequency.max(1),
            timezone: options.timezone.clone(),
        }
    }
}

impl CountdownConfig {
    /// The explicit target if it parses, otherwise `now` plus the relative duration
    /// (one hour when no positive duration is given). Durations past the end of
    /// the representable calendar saturate at [`DateTime::<Utc>::MAX_UTC`].
    pub fn target_instant(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let explicit = parse_time_value_at(self.target_date.as_ref(), now.with_timezone(&Local));
        if let Some(target) = explicit {
            return target;
        }
        let (h, m, s) = (self.hours.max(0), self.minutes.max(0), self.seconds.max(0));
        let duration = if h == 0 && m == 0 && s == 0 {
            Duration::try_hours(1)
        } else {
            relative_duration(h, m, s)
        };
        duration
            .and_then(|duration| now.checked_add_signed(duration))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

fn relative_duration(hours: i64, minutes: i64, seconds: i64) -> Option<Duration> {
    Duration::try_hours(hours)?
        .checked_add(&Duration::try_minutes(minutes)?)?
        .checked_add(&Duration::try_seconds(seconds)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    Idle,
    Running,
    Paused,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Not running; nothing changed.
    Inactive,
    Running { remaining_ms: u64 },
    /// Reached zero on this tick. Reported once per run.
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    config: CountdownConfig,
    target: DateTime<Utc>,
    tz: Tz,
    /// Budget at the last reset.
    initial_ms: u64,
    remaining_ms: u64,
    phase: CountdownPhase,
}

impl Countdown {
    pub fn new(config: CountdownConfig, now: DateTime<Utc>) -> Self {
        let target = config.target_instant(now);
        let mut countdown = Self {
            config,
            target,
            tz: Tz::UTC,
            initial_ms: 0,
            remaining_ms: 0,
            phase: CountdownPhase::Idle,
        };
        countdown.reset(now);
        countdown
    }

    /// Rebuilds the budget when `config` differs from the current one.
    pub fn reconfigure(&mut self, config: CountdownConfig, now: DateTime<Utc>) {
        if self.config != config {
            self.config = config;
            self.reset(now);
        }
    }

    /// Recomputes the budget from the configuration, not from the elapsed state.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.target = self.config.target_instant(now);
        self.tz = timezone_or_utc(&self.config.timezone);
        self.remaining_ms = u64::try_from((self.target - now).num_milliseconds()).unwrap_or(0);
        self.initial_ms = self.remaining_ms;
        self.phase = if self.remaining_ms == 0 {
            CountdownPhase::Completed
        } else if self.config.auto_start {
            CountdownPhase::Running
        } else {
            CountdownPhase::Idle
        };
        debug!(
            "[countdown] reset to {} ms, target {}, {:?}",
            self.remaining_ms, self.target, self.phase
        );
    }

    pub fn tick(&mut self) -> CountdownTick {
        if self.phase != CountdownPhase::Running {
            return CountdownTick::Inactive;
        }
        self.remaining_ms = self
            .remaining_ms
            .saturating_sub(u64::from(self.config.cadence_ms));
        if self.remaining_ms == 0 {
            self.phase = CountdownPhase::Completed;
            info!("[countdown] completed at target {}", self.target);
            return CountdownTick::Completed;
        }
        CountdownTick::Running {
            remaining_ms: self.remaining_ms,
        }
    }

    /// Begins ticking from the current budget. Refused once completed.
    pub fn start(&mut self) -> bool {
        match self.phase {
            CountdownPhase::Idle | CountdownPhase::Paused if self.remaining_ms > 0 => {
                self.phase = CountdownPhase::Running;
                true
            }
            _ => false,
        }
    }

    pub fn resume(&mut self) -> bool {
        self.start()
    }

    pub fn pause(&mut self) -> bool {
        if self.phase == CountdownPhase::Running {
            self.phase = CountdownPhase::Paused;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == CountdownPhase::Running
    }

    pub fn is_completed(&self) -> bool {
        self.phase == CountdownPhase::Completed
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn initial_ms(&self) -> u64 {
        self.initial_ms
    }

    pub fn snapshot(&self, format: &DisplayFormat) -> CountdownData {
        if self.is_completed() {
            // an elapsed countdown reads 0, not 12 AM
            let am_pm = format.hours(0).1;
            return CountdownData {
                years: 0,
                months: 0,
                days: 0,
                weeks: 0,
                hours: TimeField::new(0, format.pad_hours),
                minutes: format.minutes(0),
                seconds: format.seconds(0),
                milliseconds: 0,
                am_pm,
                is_leap: false,
                is_completed: true,
                is_running: false,
                total_milliseconds: 0,
                initial_milliseconds: self.initial_ms,
            };
        }

        let parts = DurationParts::from_millis(self.remaining_ms);
        let (hours, am_pm) = format.hours(parts.hours);
        let target_year = self.target.with_timezone(&self.tz).year();
        CountdownData {
            years: parts.years,
            months: parts.months,
            days: parts.days,
            weeks: parts.weeks,
            hours,
            minutes: format.minutes(parts.minutes),
            seconds: format.seconds(parts.seconds),
            milliseconds: parts.milliseconds,
            am_pm,
            is_leap: is_leap_year(target_year),
            is_completed: false,
            is_running: self.is_running(),
            total_milliseconds: self.remaining_ms,
            initial_milliseconds: self.initial_ms,
        }
    }
}

/// Calendar-style breakdown of a duration. Years are 365 days and months a twelfth
/// of that; every field except `years` and `weeks` wraps at the next unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub weeks: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
}

impl DurationParts {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            years: ms / YEAR_MS,
            months: (ms / MONTH_MS) % 12,
            days: (ms / DAY_MS) % 365,
            weeks: ms / WEEK_MS,
            hours: (ms / HOUR_MS) % 24,
            minutes: (ms / MINUTE_MS) % 60,
            seconds: (ms / SECOND_MS) % 60,
            milliseconds: ms % SECOND_MS,
        }
    }
}
