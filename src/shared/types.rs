use serde::{Deserialize, Deserializer, Serialize};

use crate::clock::angles::SecondHandBehavior;
use crate::clock::arcs::ArcDirection;
use crate::clock::parse::TimeValue;
use crate::utils::format::{DisplayFormat, Meridiem, TimeField};

/// Length and thickness are fractions: length of the clock radius, size of the clock size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandOptions {
    pub color: Option<String>,
    pub opacity: f64,
    pub length: f64,
    pub size: f64,
}

impl HandOptions {
    pub fn hour() -> Self {
        Self {
            color: None,
            opacity: 1.0,
            length: 0.4,
            size: 0.017,
        }
    }

    pub fn minute() -> Self {
        Self {
            color: None,
            opacity: 1.0,
            length: 0.57,
            size: 0.011,
        }
    }

    pub fn second() -> Self {
        Self {
            color: None,
            opacity: 1.0,
            length: 0.68,
            size: 0.006,
        }
    }
}

/// A hand as written in options: every field optional, missing ones taken from the
/// hand's own defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialHand {
    color: Option<String>,
    opacity: Option<f64>,
    length: Option<f64>,
    size: Option<f64>,
}

impl PartialHand {
    fn over(self, base: HandOptions) -> HandOptions {
        HandOptions {
            color: self.color.or(base.color),
            opacity: self.opacity.unwrap_or(base.opacity),
            length: self.length.unwrap_or(base.length),
            size: self.size.unwrap_or(base.size),
        }
    }
}

fn hour_hand<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HandOptions, D::Error> {
    PartialHand::deserialize(deserializer).map(|hand| hand.over(HandOptions::hour()))
}

fn minute_hand<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HandOptions, D::Error> {
    PartialHand::deserialize(deserializer).map(|hand| hand.over(HandOptions::minute()))
}

fn second_hand<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HandOptions, D::Error> {
    PartialHand::deserialize(deserializer).map(|hand| hand.over(HandOptions::second()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArcOptions {
    pub enabled: bool,
    /// Time the arc starts from; without it the arc has no extent.
    pub from: Option<TimeValue>,
    pub direction: ArcDirection,
    pub color: Option<String>,
    pub opacity: f64,
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            from: None,
            direction: ArcDirection::Clockwise,
            color: None,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockOptions {
    /// Pixels.
    pub size: f64,
    pub color: Option<String>,
    /// IANA identifier; `None` shows local time.
    pub timezone: Option<String>,
    pub running: bool,
    /// Time to show. While running it is the starting point.
    pub value: Option<TimeValue>,
    pub second_hand_behavior: SecondHandBehavior,

    #[serde(default = "HandOptions::hour", deserialize_with = "hour_hand")]
    pub hour_hand: HandOptions,
    #[serde(default = "HandOptions::minute", deserialize_with = "minute_hand")]
    pub minute_hand: HandOptions,
    #[serde(default = "HandOptions::second", deserialize_with = "second_hand")]
    pub second_hand: HandOptions,

    pub hour_ticks_color: Option<String>,
    pub hour_ticks_opacity: f64,
    pub minute_ticks_color: Option<String>,
    pub minute_ticks_opacity: f64,

    pub primary_numbers_color: Option<String>,
    pub primary_numbers_opacity: f64,
    pub secondary_numbers_color: Option<String>,
    pub secondary_numbers_opacity: f64,
    /// Fraction of the radius, 0.5 to 0.95.
    pub hour_numbers_distance: f64,

    pub hours_arc: ArcOptions,
    pub minutes_arc: ArcOptions,
    pub seconds_arc: ArcOptions,
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            size: 400.0,
            color: None,
            timezone: None,
            running: true,
            value: None,
            second_hand_behavior: SecondHandBehavior::Smooth,
            hour_hand: HandOptions::hour(),
            minute_hand: HandOptions::minute(),
            second_hand: HandOptions::second(),
            hour_ticks_color: None,
            hour_ticks_opacity: 1.0,
            minute_ticks_color: None,
            minute_ticks_opacity: 1.0,
            primary_numbers_color: None,
            primary_numbers_opacity: 1.0,
            secondary_numbers_color: None,
            secondary_numbers_opacity: 1.0,
            hour_numbers_distance: 0.75,
            hours_arc: ArcOptions::default(),
            minutes_arc: ArcOptions::default(),
            seconds_arc: ArcOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockHookOptions {
    pub enabled: bool,
    pub timezone: String,
    /// Milliseconds between refreshes.
    pub update_frequency: u32,
    #[serde(flatten)]
    pub display: DisplayFormat,
}

impl Default for ClockHookOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            timezone: "UTC".to_string(),
            update_frequency: 1_000,
            display: DisplayFormat::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountdownOptions {
    pub enabled: bool,
    pub timezone: String,
    /// Milliseconds between refreshes; also the amount removed per tick.
    pub update_frequency: u32,
    /// Takes precedence over the relative duration below.
    pub target_date: Option<TimeValue>,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    #[serde(flatten)]
    pub display: DisplayFormat,
}

impl Default for CountdownOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            timezone: "UTC".to_string(),
            update_frequency: 1_000,
            target_date: None,
            hours: 0,
            minutes: 0,
            seconds: 0,
            display: DisplayFormat::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockData {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub week: u32,
    pub is_leap: bool,
    pub hours: TimeField,
    pub minutes: TimeField,
    pub seconds: TimeField,
    pub milliseconds: u32,
    pub am_pm: Option<Meridiem>,
    pub is_running: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownData {
    pub years: u64,
    /// Whole months left within the current year of the duration, 0-11, each 1/12
    /// of a 365-day year. Zero-based, unlike a calendar month number (1-12).
    pub months: u64,
    /// 0-364
    pub days: u64,
    pub weeks: u64,
    pub hours: TimeField,
    pub minutes: TimeField,
    pub seconds: TimeField,
    pub milliseconds: u64,
    pub am_pm: Option<Meridiem>,
    /// Leap-year flag of the target instant's year.
    pub is_leap: bool,
    pub is_completed: bool,
    pub is_running: bool,
    pub total_milliseconds: u64,
    /// Budget at the last reset, for progress displays.
    pub initial_milliseconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_options_fill_missing_fields_with_defaults() {
        let options: ClockOptions = serde_json::from_str(
            r#"{
                "size": 300,
                "timezone": "Europe/Rome",
                "secondHandBehavior": "tick-half",
                "minuteHand": { "color": "blue.6", "opacity": 0.5, "length": 0.6, "size": 0.01 },
                "hoursArc": { "enabled": true, "from": "12:00", "direction": "counterClockwise" }
            }"#,
        )
        .unwrap();
        assert_eq!(options.size, 300.0);
        assert_eq!(options.timezone.as_deref(), Some("Europe/Rome"));
        assert_eq!(options.second_hand_behavior, SecondHandBehavior::TickHalf);
        assert_eq!(options.minute_hand.color.as_deref(), Some("blue.6"));
        assert_eq!(options.hour_hand, HandOptions::hour());
        assert_eq!(options.second_hand, HandOptions::second());
        assert!(options.running);
        assert_eq!(options.hour_numbers_distance, 0.75);
        assert!(options.hours_arc.enabled);
        assert_eq!(options.hours_arc.direction, ArcDirection::CounterClockwise);
        assert_eq!(options.hours_arc.opacity, 1.0);
        assert!(!options.seconds_arc.enabled);
    }

    #[test]
    fn partial_hands_keep_their_own_defaults() {
        let options: ClockOptions = serde_json::from_str(
            r#"{ "secondHand": { "color": "red.6" }, "hourHand": { "length": 0.5 } }"#,
        )
        .unwrap();
        assert_eq!(options.second_hand.color.as_deref(), Some("red.6"));
        assert_eq!(options.second_hand.size, HandOptions::second().size);
        assert_eq!(options.second_hand.length, HandOptions::second().length);
        assert_eq!(options.hour_hand.length, 0.5);
        assert_eq!(options.hour_hand.size, HandOptions::hour().size);
        assert_eq!(options.minute_hand, HandOptions::minute());
    }

    #[test]
    fn hook_options_read_flat_display_flags() {
        let options: CountdownOptions =
            serde_json::from_str(r#"{ "minutes": 5, "use24Hours": false, "padSeconds": true }"#)
                .unwrap();
        assert_eq!(options.minutes, 5);
        assert_eq!(options.timezone, "UTC");
        assert!(!options.display.use_24_hours);
        assert!(options.display.pad_seconds);
        assert!(!options.display.pad_hours);

        let options: ClockHookOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ClockHookOptions::default());
    }
}
