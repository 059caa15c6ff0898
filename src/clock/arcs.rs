//! Pie-slice progress arcs drawn between an origin time and a live hand.

use serde::{Deserialize, Serialize};

use super::angles::{HandKind, SecondHandBehavior};
use super::timezone::TimeComponents;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArcDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// Folds any angle into [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    let folded = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to 360.0
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}

/// Angular distance covered when travelling from `start` to `end` in `direction`.
pub fn travel_delta(start: f64, end: f64, direction: ArcDirection) -> f64 {
    let (start, end) = (normalize_degrees(start), normalize_degrees(end));
    match direction {
        ArcDirection::Clockwise => normalize_degrees(end - start),
        ArcDirection::CounterClockwise => normalize_degrees(start - end),
    }
}

/// Point at `deg` (clockwise from 12 o'clock) on a circle around `(cx, cy)`.
pub fn point_on_dial(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = (deg - 90.0).to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectorGeometry {
    pub path: String,
    pub delta: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

impl SectorGeometry {
    /// A zero-length span has no area and nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.delta == 0.0
    }
}

/// Closed sector path: center, out to `start`, along the rim to `end`, back to center.
pub fn sector_path(
    center: (f64, f64),
    radius: f64,
    start: f64,
    end: f64,
    direction: ArcDirection,
) -> SectorGeometry {
    let (cx, cy) = center;
    let delta = travel_delta(start, end, direction);
    let large_arc = delta >= 180.0;
    let sweep = direction == ArcDirection::Clockwise;

    let path = if delta == 0.0 {
        format!("M {cx:.3} {cy:.3} Z")
    } else {
        let (x0, y0) = point_on_dial(cx, cy, radius, normalize_degrees(start));
        let (x1, y1) = point_on_dial(cx, cy, radius, normalize_degrees(end));
        format!(
            "M {cx:.3} {cy:.3} L {x0:.3} {y0:.3} A {radius:.3} {radius:.3} 0 {} {} {x1:.3} {y1:.3} Z",
            u8::from(large_arc),
            u8::from(sweep),
        )
    };

    SectorGeometry {
        path,
        delta,
        large_arc,
        sweep,
    }
}

/// Sector swept by `hand` from the time `origin` to its live angle. Without an origin the
/// sector collapses onto the live hand and is empty.
pub fn hand_sector(
    hand: HandKind,
    origin: Option<&TimeComponents>,
    live_angle: f64,
    behavior: SecondHandBehavior,
    clock_radius: f64,
    hand_length: f64,
    direction: ArcDirection,
) -> SectorGeometry {
    let start = origin.map_or(live_angle, |c| hand.angle(c, behavior));
    sector_path(
        (clock_radius, clock_radius),
        clock_radius * hand_length,
        start,
        live_angle,
        direction,
    )
}
