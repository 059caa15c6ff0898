use chrono::Utc;
use dioxus::prelude::*;

use super::ticker::use_ticker;
use crate::clock::countdown::{Countdown, CountdownConfig, CountdownTick};
use crate::shared::types::{CountdownData, CountdownOptions};

#[derive(Clone, Copy, PartialEq)]
pub struct CountdownControls {
    state: Signal<Countdown>,
}

impl CountdownControls {
    pub fn start(mut self) -> bool {
        self.state.write().start()
    }

    pub fn pause(mut self) -> bool {
        self.state.write().pause()
    }

    pub fn resume(mut self) -> bool {
        self.state.write().resume()
    }

    /// Rebuilds the budget from the options, not from what is left.
    pub fn reset(mut self) {
        self.state.write().reset(Utc::now());
    }
}

#[derive(Clone, PartialEq)]
pub struct UseClockCountdown {
    pub data: CountdownData,
    pub controls: CountdownControls,
}

/// Counts down to `options.target_date`, or to now plus the configured duration.
/// `on_complete` fires once each time the budget reaches zero.
pub fn use_clock_countdown(
    options: CountdownOptions,
    on_complete: Option<EventHandler<()>>,
) -> UseClockCountdown {
    let config = CountdownConfig::from(&options);
    let mut state = use_signal({
        let config = config.clone();
        move || Countdown::new(config, Utc::now())
    });
    let running = use_memo(move || state.read().is_running());
    let ticker = use_ticker();

    // latest handler without re-arming the timer
    let mut callback = use_hook(|| CopyValue::new(None::<EventHandler<()>>));
    callback.set(on_complete);

    use_effect(use_reactive((&config,), move |(config,)| {
        state.write().reconfigure(config, Utc::now());
    }));

    use_effect(use_reactive((&config.cadence_ms,), move |(cadence_ms,)| {
        let cadence = running().then_some(cadence_ms);
        ticker.every(cadence, move || {
            let event = state.write().tick();
            if event == CountdownTick::Completed {
                if let Some(handler) = callback.cloned() {
                    handler.call(());
                }
            }
        });
    }));

    let data = state.read().snapshot(&options.display);
    UseClockCountdown {
        data,
        controls: CountdownControls { state },
    }
}
