use std::fmt;

use serde::{Deserialize, Serialize};

pub fn pad2(n: u64) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

/// Rounds to two decimals, the precision used for emitted angles and opacities.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A numeric time field, optionally zero-padded to two digits when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeField {
    pub value: u64,
    pub padded: bool,
}

impl TimeField {
    pub fn new(value: u64, padded: bool) -> Self {
        Self { value, padded }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.padded {
            f.write_str(&pad2(self.value))
        } else {
            write!(f, "{}", self.value)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        })
    }
}

/// 0-23 to 1-12 with its AM/PM tag.
pub fn twelve_hour(hour: u64) -> (u64, Meridiem) {
    let meridiem = if hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
    match hour % 12 {
        0 => (12, meridiem),
        h => (h, meridiem),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayFormat {
    pub use_24_hours: bool,
    pub pad_hours: bool,
    pub pad_minutes: bool,
    pub pad_seconds: bool,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            use_24_hours: true,
            pad_hours: false,
            pad_minutes: false,
            pad_seconds: false,
        }
    }
}

impl DisplayFormat {
    /// The AM/PM tag is only present in 12-hour mode.
    pub fn hours(&self, hour: u64) -> (TimeField, Option<Meridiem>) {
        if self.use_24_hours {
            (TimeField::new(hour, self.pad_hours), None)
        } else {
            let (hour, meridiem) = twelve_hour(hour);
            (TimeField::new(hour, self.pad_hours), Some(meridiem))
        }
    }

    pub fn minutes(&self, minute: u64) -> TimeField {
        TimeField::new(minute, self.pad_minutes)
    }

    pub fn seconds(&self, second: u64) -> TimeField {
        TimeField::new(second, self.pad_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digits() {
        assert_eq!(pad2(1), "01");
        assert_eq!(pad2(5), "05");
        assert_eq!(pad2(10), "10");
        assert_eq!(TimeField::new(7, true).to_string(), "07");
        assert_eq!(TimeField::new(7, false).to_string(), "7");
    }

    #[test]
    fn converts_to_twelve_hour() {
        assert_eq!(twelve_hour(15), (3, Meridiem::Pm));
        assert_eq!(twelve_hour(0), (12, Meridiem::Am));
        assert_eq!(twelve_hour(12), (12, Meridiem::Pm));
        assert_eq!(twelve_hour(11), (11, Meridiem::Am));
    }

    #[test]
    fn display_format_applies_per_field_padding() {
        let format = DisplayFormat {
            use_24_hours: false,
            pad_hours: true,
            pad_minutes: false,
            pad_seconds: true,
        };
        let (hours, meridiem) = format.hours(21);
        assert_eq!(hours.to_string(), "09");
        assert_eq!(meridiem, Some(Meridiem::Pm));
        assert_eq!(format.minutes(4).to_string(), "4");
        assert_eq!(format.seconds(4).to_string(), "04");
        assert_eq!(DisplayFormat::default().hours(21).1, None);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(304.999), 305.0);
        assert_eq!(round2(0.123), 0.12);
    }
}
