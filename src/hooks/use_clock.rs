use chrono::Utc;
use dioxus::prelude::*;

use super::ticker::use_ticker;
use crate::clock::live::LiveClock;
use crate::clock::timezone::timezone_or_utc;
use crate::shared::types::{ClockData, ClockHookOptions};

/// Start/pause/resume/reset for a [`use_clock`] instance.
#[derive(Clone, Copy, PartialEq)]
pub struct ClockControls {
    state: Signal<LiveClock>,
}

impl ClockControls {
    pub fn start(mut self) {
        self.state.write().start(Utc::now());
    }

    pub fn pause(mut self) {
        self.state.write().pause();
    }

    pub fn resume(mut self) {
        self.state.write().resume(Utc::now());
    }

    /// Back to the configured `enabled` state, showing the current time.
    pub fn reset(mut self) {
        self.state.write().reset(Utc::now());
    }
}

#[derive(Clone, PartialEq)]
pub struct UseClock {
    pub data: ClockData,
    pub controls: ClockControls,
}

/// The current time in `options.timezone`, refreshed every `update_frequency` ms.
pub fn use_clock(options: ClockHookOptions) -> UseClock {
    let mut state = use_signal(|| LiveClock::new(options.enabled, Utc::now()));
    let running = use_memo(move || state.read().is_running());
    let ticker = use_ticker();

    let tz = use_memo(use_reactive((&options.timezone,), |(timezone,)| {
        timezone_or_utc(&timezone)
    }));

    use_effect(use_reactive((&options.enabled,), move |(enabled,)| {
        state.write().set_enabled(enabled, Utc::now());
    }));

    use_effect(use_reactive(
        (&options.update_frequency,),
        move |(update_frequency,)| {
            let cadence = running().then_some(update_frequency);
            ticker.every(cadence, move || {
                state.write().tick(Utc::now());
            });
        },
    ));

    let data = state.read().snapshot(tz(), &options.display);
    UseClock {
        data,
        controls: ClockControls { state },
    }
}
