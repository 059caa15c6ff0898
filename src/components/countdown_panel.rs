use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::clock::angles::SecondHandBehavior;
use crate::components::{Clock, ProgressRing};
use crate::hooks::use_clock_countdown;
use crate::shared::types::{ClockOptions, CountdownOptions};
use crate::utils::format::DisplayFormat;

#[allow(non_snake_case)]
#[component]
pub fn CountdownPanel() -> Element {
    let mut minutes = use_signal(|| 1_i64);
    let mut finished = use_signal(|| 0_u32);

    let options = CountdownOptions {
        minutes: minutes(),
        display: DisplayFormat {
            pad_hours: true,
            pad_minutes: true,
            pad_seconds: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let countdown = use_clock_countdown(
        options,
        Some(EventHandler::new(move |_| {
            info!("[countdown_panel] countdown finished");
            *finished.write() += 1;
        })),
    );
    let data = &countdown.data;
    let controls = countdown.controls;

    let fraction = progress_fraction(data.total_milliseconds, data.initial_milliseconds);
    // remaining time drawn as a paused clock face
    let mirror = ClockOptions {
        size: 160.0,
        running: false,
        value: Some(
            format!(
                "{}:{}:{}",
                data.hours.value, data.minutes.value, data.seconds.value
            )
            .into(),
        ),
        second_hand_behavior: SecondHandBehavior::Tick,
        ..Default::default()
    };

    rsx! {
        div { class: "card countdown",
            h2 { class: "card-title", "Countdown" }
            div { class: "toolbar",
                label {
                    "Minutes "
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{minutes}",
                        oninput: move |evt| {
                            if let Ok(value) = evt.value().parse::<i64>() {
                                minutes.set(value);
                            }
                        },
                    }
                }
            }
            div { class: "countdown-body",
                ProgressRing { fraction, size: 200.0, stroke: 10.0, track_class: "ring-track", progress_class: "ring-progress",
                    div { class: "readout", "{data.hours}:{data.minutes}:{data.seconds}" }
                }
                Clock { options: mirror }
            }
            if data.is_completed {
                p { class: "card-caption done", "Done. Finished {finished} time(s)." }
            } else if data.weeks > 0 || data.days > 0 {
                p { class: "card-caption", "{data.weeks} weeks, {data.days} days left" }
            }
            div { class: "controls",
                if data.is_running {
                    button { onclick: move |_| { controls.pause(); }, "Pause" }
                } else {
                    button {
                        disabled: data.is_completed,
                        onclick: move |_| { controls.resume(); },
                        "Start"
                    }
                }
                button { onclick: move |_| controls.reset(), "Reset" }
            }
        }
    }
}

/// Share of the budget still left, 0 when there was no budget.
fn progress_fraction(remaining_ms: u64, initial_ms: u64) -> f64 {
    if initial_ms == 0 {
        0.0
    } else {
        remaining_ms as f64 / initial_ms as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::countdown::{Countdown, CountdownConfig};
    use chrono::{TimeZone, Utc};

    #[test]
    fn default_hour_budget_drives_the_ring() {
        // a zero minutes field falls back to one hour
        let options = CountdownOptions::default();
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut countdown = Countdown::new(CountdownConfig::from(&options), now);
        for _ in 0..900 {
            countdown.tick();
        }
        let data = countdown.snapshot(&options.display);
        assert_eq!(progress_fraction(data.total_milliseconds, data.initial_milliseconds), 0.75);
    }

    #[test]
    fn empty_budget_shows_no_progress() {
        assert_eq!(progress_fraction(0, 0), 0.0);
        assert_eq!(progress_fraction(30_000, 60_000), 0.5);
    }
}
