use dioxus::prelude::*;

use crate::components::Clock;
use crate::hooks::use_clock;
use crate::shared::types::{ClockHookOptions, ClockOptions};
use crate::utils::format::DisplayFormat;

const ZONES: &[(&str, &str)] = &[
    ("Rome", "Europe/Rome"),
    ("New York", "America/New_York"),
    ("Tokyo", "Asia/Tokyo"),
    ("Kolkata", "Asia/Kolkata"),
    ("Auckland", "Pacific/Auckland"),
    ("UTC", "UTC"),
];

#[allow(non_snake_case)]
#[component]
pub fn WorldClocks() -> Element {
    let mut twelve_hour = use_signal(|| false);

    rsx! {
        div { class: "toolbar",
            label {
                input {
                    r#type: "checkbox",
                    checked: twelve_hour(),
                    onchange: move |evt| twelve_hour.set(evt.checked()),
                }
                " 12-hour"
            }
        }
        div { class: "card-grid",
            for (city, zone) in ZONES.iter().copied() {
                ZoneCard { key: "{zone}", city, timezone: zone, twelve_hour: twelve_hour() }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn ZoneCard(city: &'static str, timezone: &'static str, twelve_hour: bool) -> Element {
    let clock = use_clock(ClockHookOptions {
        timezone: timezone.to_string(),
        display: DisplayFormat {
            use_24_hours: !twelve_hour,
            pad_hours: true,
            pad_minutes: true,
            pad_seconds: true,
        },
        ..Default::default()
    });
    let data = &clock.data;
    let controls = clock.controls;
    let am_pm = data.am_pm.map(|m| format!(" {m}")).unwrap_or_default();
    let leap = if data.is_leap { " (leap year)" } else { "" };

    rsx! {
        div { class: "card",
            h2 { class: "card-title", "{city}" }
            Clock {
                options: ClockOptions {
                    size: 180.0,
                    timezone: Some(timezone.to_string()),
                    running: data.is_running,
                    ..Default::default()
                },
            }
            div { class: "readout", "{data.hours}:{data.minutes}:{data.seconds}{am_pm}" }
            p { class: "card-caption",
                "{data.year}-{data.month:02}-{data.day:02}, week {data.week}{leap}"
            }
            div { class: "controls",
                if data.is_running {
                    button { onclick: move |_| controls.pause(), "Pause" }
                } else {
                    button { onclick: move |_| controls.resume(), "Resume" }
                }
                button { onclick: move |_| controls.reset(), "Reset" }
            }
        }
    }
}
