//! Hand angles and hour-number placement.
//!
//! Angles are degrees clockwise from 12 o'clock. Hand angles are used as
//! rotation transforms and are not normalized here; arc math normalizes
//! them itself.

use serde::{Deserialize, Serialize};

use super::timezone::TimeComponents;

/// How finely the second hand moves within one second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecondHandBehavior {
    /// One jump per second.
    Tick,
    /// Two jumps per second.
    TickHalf,
    /// Eight jumps per second.
    TickHighFreq,
    /// Continuous sweep.
    #[default]
    Smooth,
}

impl SecondHandBehavior {
    /// Refresh cadence in milliseconds needed to show this behavior faithfully.
    pub fn cadence_ms(self) -> u32 {
        match self {
            SecondHandBehavior::Smooth => 16,
            SecondHandBehavior::TickHalf => 500,
            SecondHandBehavior::TickHighFreq => 125,
            SecondHandBehavior::Tick => 1_000,
        }
    }
}

pub fn hour_angle(hour: u32, minute: u32) -> f64 {
    f64::from(hour % 12) * 30.0 + f64::from(minute) * 0.5
}

pub fn minute_angle(minute: u32) -> f64 {
    f64::from(minute) * 6.0
}

pub fn second_angle(second: u32, millisecond: u32, behavior: SecondHandBehavior) -> f64 {
    let s = f64::from(second);
    let ms = f64::from(millisecond);
    let position = match behavior {
        SecondHandBehavior::Tick => s,
        SecondHandBehavior::TickHalf => s + (ms / 500.0).floor() * 0.5,
        SecondHandBehavior::TickHighFreq => s + (ms / 125.0).floor() * 0.125,
        SecondHandBehavior::Smooth => s + ms / 1000.0,
    };
    position * 6.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];

    pub fn angle(self, c: &TimeComponents, behavior: SecondHandBehavior) -> f64 {
        match self {
            HandKind::Hour => hour_angle(c.dial_hour(), c.minute),
            HandKind::Minute => minute_angle(c.minute),
            HandKind::Second => second_angle(c.second, c.millisecond, behavior),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HandKind::Hour => "hour",
            HandKind::Minute => "minute",
            HandKind::Second => "second",
        }
    }
}

/// The three hand rotations for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn from_components(c: &TimeComponents, behavior: SecondHandBehavior) -> Self {
        Self {
            hour: HandKind::Hour.angle(c, behavior),
            minute: HandKind::Minute.angle(c, behavior),
            second: HandKind::Second.angle(c, behavior),
        }
    }

    pub fn get(&self, hand: HandKind) -> f64 {
        match hand {
            HandKind::Hour => self.hour,
            HandKind::Minute => self.minute,
            HandKind::Second => self.second,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberTier {
    /// 12, 3, 6 and 9
    Primary,
    Secondary,
}

impl NumberTier {
    pub fn of(value: u32) -> Self {
        if value % 3 == 0 {
            NumberTier::Primary
        } else {
            NumberTier::Secondary
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberPlacement {
    pub value: u32,
    pub tier: NumberTier,
    pub x: f64,
    pub y: f64,
}

/// Places hour label `value` (1-12) on a circle of `clock_radius * radius_fraction`
/// around the clock center `(clock_radius, clock_radius)`.
pub fn number_position(value: u32, radius_fraction: f64, clock_radius: f64) -> NumberPlacement {
    let index = if value == 12 { 0 } else { value };
    let angle = (f64::from(index) * 30.0 - 90.0).to_radians();
    let radius = clock_radius * radius_fraction;
    NumberPlacement {
        value,
        tier: NumberTier::of(value),
        x: clock_radius + radius * angle.cos(),
        y: clock_radius + radius * angle.sin(),
    }
}

/// All twelve labels, 12 first and then clockwise.
pub fn number_placements(radius_fraction: f64, clock_radius: f64) -> Vec<NumberPlacement> {
    [12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]
        .into_iter()
        .map(|value| number_position(value, radius_fraction, clock_radius))
        .collect()
}
