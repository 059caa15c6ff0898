use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use dioxus::logger::tracing::warn;

use super::error::ClockError;

/// Calendar and time-of-day fields of an instant seen from one timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeComponents {
    /// 0-23
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub day: u32,
    pub week: u32,
    pub is_leap_year: bool,
}

impl TimeComponents {
    pub fn from_datetime<T: TimeZone>(at: &DateTime<T>) -> Self {
        let date = at.date_naive();
        Self {
            hour: at.hour(),
            minute: at.minute(),
            second: at.second(),
            // leap seconds report nanoseconds past 1e9
            millisecond: (at.nanosecond() / 1_000_000).min(999),
            year: date.year(),
            month: date.month(),
            day: date.day(),
            week: week_of_year(date),
            is_leap_year: is_leap_year(date.year()),
        }
    }

    /// Hour on the 12-hour dial, 0-11.
    pub fn dial_hour(&self) -> u32 {
        self.hour % 12
    }
}

pub fn resolve_timezone(id: &str) -> Result<Tz, ClockError> {
    id.parse::<Tz>()
        .map_err(|_| ClockError::UnknownTimezone(id.to_string()))
}

/// Projects `instant` into `timezone`, or the system timezone when none (or an empty id) is given.
pub fn project_strict(
    instant: DateTime<Utc>,
    timezone: Option<&str>,
) -> Result<TimeComponents, ClockError> {
    match timezone.filter(|id| !id.is_empty()) {
        None => Ok(TimeComponents::from_datetime(&instant.with_timezone(&Local))),
        Some(id) => {
            let tz = resolve_timezone(id)?;
            Ok(TimeComponents::from_datetime(&instant.with_timezone(&tz)))
        }
    }
}

/// Like [`project_strict`], but an unknown timezone falls back to UTC.
pub fn project(instant: DateTime<Utc>, timezone: Option<&str>) -> TimeComponents {
    project_strict(instant, timezone).unwrap_or_else(|err| {
        warn!("[timezone] {err}; falling back to UTC");
        TimeComponents::from_datetime(&instant)
    })
}

/// The zone used by the hooks: a known IANA zone, or UTC.
pub fn timezone_or_utc(timezone: &str) -> Tz {
    resolve_timezone(timezone).unwrap_or_else(|err| {
        warn!("[timezone] {err}; falling back to UTC");
        Tz::UTC
    })
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Weeks start on Sunday and week 1 contains 1 January. Late-December days whose
/// week already contains the next 1 January count as week 1.
pub fn week_of_year(date: NaiveDate) -> u32 {
    let weekday = date.weekday().num_days_from_sunday();
    let rolls_over = date
        .checked_add_signed(Duration::days(i64::from(6 - weekday)))
        .is_some_and(|saturday| saturday.year() > date.year());
    if rolls_over {
        return 1;
    }
    let ordinal0 = date.ordinal0();
    let jan1_weekday = (weekday + 7 - ordinal0 % 7) % 7;
    (ordinal0 + jan1_weekday) / 7 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 34, 56).unwrap() + Duration::milliseconds(789)
    }

    #[test]
    fn projects_into_named_zone() {
        let c = project_strict(instant(), Some("Asia/Tokyo")).unwrap();
        assert_eq!((c.hour, c.minute, c.second, c.millisecond), (21, 34, 56, 789));
        assert_eq!((c.year, c.month, c.day), (2024, 1, 1));
        assert!(c.is_leap_year);
    }

    #[test]
    fn projection_can_shift_the_date() {
        let c = project_strict(instant(), Some("Pacific/Auckland")).unwrap();
        assert_eq!((c.month, c.day, c.hour), (1, 2, 1));

        let c = project_strict(instant(), Some("America/Los_Angeles")).unwrap();
        assert_eq!((c.month, c.day, c.hour), (1, 1, 4));
    }

    #[test]
    fn no_timezone_means_local() {
        let local = instant().with_timezone(&Local);
        let c = project_strict(instant(), None).unwrap();
        assert_eq!(c, TimeComponents::from_datetime(&local));
        assert_eq!(project_strict(instant(), Some("")).unwrap(), c);
    }

    #[test]
    fn unknown_timezone_is_an_error_when_strict() {
        assert_eq!(
            project_strict(instant(), Some("Mars/Olympus_Mons")),
            Err(ClockError::UnknownTimezone("Mars/Olympus_Mons".into()))
        );
    }

    #[test]
    fn unknown_timezone_falls_back_to_utc() {
        let c = project(instant(), Some("Mars/Olympus_Mons"));
        assert_eq!((c.hour, c.minute), (12, 34));
        assert_eq!(timezone_or_utc("nowhere"), Tz::UTC);
        assert_eq!(timezone_or_utc("Europe/Rome"), Tz::Europe__Rome);
    }

    #[test]
    fn dial_hour_wraps_at_twelve() {
        let c = project_strict(instant(), Some("UTC")).unwrap();
        assert_eq!(c.hour, 12);
        assert_eq!(c.dial_hour(), 0);
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn sunday_based_week_numbers() {
        let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        // 2024-01-01 is a Monday
        assert_eq!(week_of_year(date(1, 1)), 1);
        assert_eq!(week_of_year(date(1, 6)), 1);
        assert_eq!(week_of_year(date(1, 7)), 2);
        assert_eq!(week_of_year(date(12, 28)), 52);
        // the week of Sunday 29 December holds 1 January 2025
        assert_eq!(week_of_year(date(12, 29)), 1);
        assert_eq!(week_of_year(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()), 1);
    }
}
