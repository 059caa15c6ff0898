//! Everything the `Clock` component draws for one instant, computed up front.

use chrono::{DateTime, Local, Utc};

use super::angles::{number_placements, HandAngles, HandKind, NumberPlacement, NumberTier};
use super::arcs::{hand_sector, SectorGeometry};
use super::color::ColorResolver;
use super::parse::parse_time_value_at;
use super::ticks::{tick_marks, TickKind, TickMark};
use super::timezone::{project, TimeComponents};
use crate::shared::types::{ArcOptions, ClockOptions, HandOptions};
use crate::utils::format::round2;

const HOUR_TICK_LENGTH: f64 = 0.1;
const HOUR_TICK_WIDTH: f64 = 0.008;
const MINUTE_TICK_LENGTH: f64 = 0.05;
const MINUTE_TICK_WIDTH: f64 = 0.003;
const COUNTERWEIGHT_LENGTH: f64 = 0.12;
const CENTER_DOT_SIZE: f64 = 0.02;
const NUMBER_FONT_SIZE: f64 = 0.065;

#[derive(Debug, Clone, PartialEq)]
pub struct HandGeometry {
    pub kind: HandKind,
    pub angle: f64,
    /// In px from the center.
    pub length: f64,
    pub thickness: f64,
    pub opacity: f64,
    pub color: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickStyle {
    pub length: f64,
    pub width: f64,
    pub opacity: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberLabel {
    pub placement: NumberPlacement,
    pub opacity: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcSector {
    pub hand: HandKind,
    pub geometry: SectorGeometry,
    pub opacity: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClockFace {
    pub size: f64,
    pub radius: f64,
    /// Face fill; `None` leaves it to the stylesheet.
    pub face_color: Option<String>,
    pub components: TimeComponents,
    pub hands: Vec<HandGeometry>,
    pub counterweight: f64,
    pub counterweight_thickness: f64,
    pub center_dot: f64,
    pub ticks: Vec<TickMark>,
    pub hour_ticks: TickStyle,
    pub minute_ticks: TickStyle,
    pub numbers: Vec<NumberLabel>,
    pub number_font_size: f64,
    pub arcs: Vec<ArcSector>,
}

impl ClockFace {
    pub fn compute(
        options: &ClockOptions,
        instant: DateTime<Utc>,
        colors: &dyn ColorResolver,
    ) -> Self {
        let size = options.size;
        let radius = size / 2.0;
        let timezone = options.timezone.as_deref();
        let behavior = options.second_hand_behavior;
        let components = project(instant, timezone);
        let angles = HandAngles::from_components(&components, behavior);

        let hands = HandKind::ALL
            .into_iter()
            .map(|kind| {
                let hand = hand_options(options, kind);
                HandGeometry {
                    kind,
                    angle: angles.get(kind),
                    length: radius * hand.length,
                    thickness: size * hand.size,
                    opacity: round2(hand.opacity),
                    color: colors.resolve(hand.color.as_deref()),
                    visible: hand.opacity != 0.0,
                }
            })
            .collect();

        let numbers = number_placements(options.hour_numbers_distance, radius)
            .into_iter()
            .filter_map(|placement| {
                let (opacity, color) = match placement.tier {
                    NumberTier::Primary => (
                        options.primary_numbers_opacity,
                        &options.primary_numbers_color,
                    ),
                    NumberTier::Secondary => (
                        options.secondary_numbers_opacity,
                        &options.secondary_numbers_color,
                    ),
                };
                (opacity != 0.0).then(|| NumberLabel {
                    placement,
                    opacity: round2(opacity),
                    color: colors.resolve(color.as_deref()),
                })
            })
            .collect();

        // arc origins are read on the same local day as the displayed instant
        let today = instant.with_timezone(&Local);
        let arcs = HandKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let arc = arc_options(options, kind);
                if !arc.enabled || arc.opacity == 0.0 {
                    return None;
                }
                let origin = parse_time_value_at(arc.from.as_ref(), today)
                    .map(|at| project(at, timezone));
                let geometry = hand_sector(
                    kind,
                    origin.as_ref(),
                    angles.get(kind),
                    behavior,
                    radius,
                    hand_options(options, kind).length,
                    arc.direction,
                );
                (!geometry.is_empty()).then(|| ArcSector {
                    hand: kind,
                    geometry,
                    opacity: round2(arc.opacity),
                    color: colors.resolve(arc.color.as_deref()),
                })
            })
            .collect();

        Self {
            size,
            radius,
            face_color: options
                .color
                .as_deref()
                .map(|color| colors.resolve(Some(color))),
            components,
            hands,
            counterweight: radius * COUNTERWEIGHT_LENGTH,
            counterweight_thickness: size * HandOptions::second().size * 3.0,
            center_dot: size * CENTER_DOT_SIZE,
            ticks: tick_marks(options.hour_ticks_opacity, options.minute_ticks_opacity),
            hour_ticks: TickStyle {
                length: radius * HOUR_TICK_LENGTH,
                width: size * HOUR_TICK_WIDTH,
                opacity: round2(options.hour_ticks_opacity),
                color: colors.resolve(options.hour_ticks_color.as_deref()),
            },
            minute_ticks: TickStyle {
                length: radius * MINUTE_TICK_LENGTH,
                width: size * MINUTE_TICK_WIDTH,
                opacity: round2(options.minute_ticks_opacity),
                color: colors.resolve(options.minute_ticks_color.as_deref()),
            },
            numbers,
            number_font_size: size * NUMBER_FONT_SIZE,
            arcs,
        }
    }

    pub fn hand(&self, kind: HandKind) -> Option<&HandGeometry> {
        self.hands.iter().find(|hand| hand.kind == kind)
    }

    pub fn tick_style(&self, kind: TickKind) -> &TickStyle {
        match kind {
            TickKind::Hour => &self.hour_ticks,
            TickKind::Minute => &self.minute_ticks,
        }
    }
}

fn hand_options(options: &ClockOptions, kind: HandKind) -> &HandOptions {
    match kind {
        HandKind::Hour => &options.hour_hand,
        HandKind::Minute => &options.minute_hand,
        HandKind::Second => &options.second_hand,
    }
}

fn arc_options(options: &ClockOptions, kind: HandKind) -> &ArcOptions {
    match kind {
        HandKind::Hour => &options.hours_arc,
        HandKind::Minute => &options.minutes_arc,
        HandKind::Second => &options.seconds_arc,
    }
}
