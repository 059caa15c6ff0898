/// Hour ticks come first (12), then one entry per minute position (60).
pub const TICK_COUNT: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Hour,
    Minute,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub kind: TickKind,
    pub index: u32,
    pub angle: f64,
    pub visible: bool,
}

/// Minute positions that coincide with an hour tick are never visible.
pub fn tick_marks(hour_ticks_opacity: f64, minute_ticks_opacity: f64) -> Vec<TickMark> {
    let hours = (0..12).map(|i| TickMark {
        kind: TickKind::Hour,
        index: i,
        angle: f64::from(i) * 30.0,
        visible: hour_ticks_opacity != 0.0,
    });
    let minutes = (0..60).map(|i| TickMark {
        kind: TickKind::Minute,
        index: i,
        angle: f64::from(i) * 6.0,
        visible: minute_ticks_opacity != 0.0 && i % 5 != 0,
    });
    hours.chain(minutes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(ticks: &[TickMark], kind: TickKind) -> usize {
        ticks.iter().filter(|t| t.kind == kind && t.visible).count()
    }

    #[test]
    fn seventy_two_positions() {
        let ticks = tick_marks(1.0, 1.0);
        assert_eq!(ticks.len(), TICK_COUNT);
        assert_eq!(visible(&ticks, TickKind::Hour), 12);
        assert_eq!(visible(&ticks, TickKind::Minute), 48);
        assert_eq!(ticks[12 + 7].angle, 42.0);
    }

    #[test]
    fn zero_opacity_hides_a_group() {
        let ticks = tick_marks(0.0, 0.4);
        assert_eq!(ticks.len(), TICK_COUNT);
        assert_eq!(visible(&ticks, TickKind::Hour), 0);
        assert_eq!(visible(&ticks, TickKind::Minute), 48);

        let ticks = tick_marks(0.4, 0.0);
        assert_eq!(visible(&ticks, TickKind::Hour), 12);
        assert_eq!(visible(&ticks, TickKind::Minute), 0);
    }
}
