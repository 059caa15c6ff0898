use chrono::Utc;
use dioxus::prelude::*;

use crate::clock::angles::HandKind;
use crate::clock::color::ThemeColors;
use crate::clock::face::ClockFace;
use crate::clock::scheduler::{ClockScheduler, SchedulerConfig};
use crate::hooks::use_ticker;
use crate::shared::types::ClockOptions;

// gap between the rim and the outer end of a tick
const TICK_INSET: f64 = 0.02;

fn rotate(angle: f64, c: f64) -> String {
    format!("rotate({angle:.2} {c} {c})")
}

/// Analog clock drawn as one SVG.
#[allow(non_snake_case)]
#[component]
pub fn Clock(#[props(default)] options: ClockOptions, #[props(default)] class: String) -> Element {
    let config = SchedulerConfig {
        running: options.running,
        value: options.value.clone(),
        behavior: options.second_hand_behavior,
    };
    let mut scheduler = use_signal({
        let config = config.clone();
        move || ClockScheduler::new(config, Utc::now())
    });
    let mut now = use_signal(Utc::now);
    let ticker = use_ticker();

    // running flag, value or second-hand behavior changed: swap the timer
    use_effect(use_reactive((&config,), move |(config,)| {
        let at = Utc::now();
        let plan = scheduler.write().configure(config, at);
        now.set(at);
        ticker.install(plan, move || now.set(Utc::now()));
    }));

    let instant = scheduler.read().displayed_instant(now());
    let face = ClockFace::compute(&options, instant, &ThemeColors);

    let size = face.size;
    let c = face.radius;
    let inset = size * TICK_INSET;
    let face_fill = face
        .face_color
        .clone()
        .unwrap_or_else(|| "var(--clock-face)".to_string());

    let ticks = face.ticks.iter().filter(|t| t.visible).map(|tick| {
        let style = face.tick_style(tick.kind);
        (
            format!("{:?}-{}", tick.kind, tick.index),
            inset + style.length,
            style.clone(),
            rotate(tick.angle, c),
        )
    });
    let hands = face.hands.iter().filter(|h| h.visible).map(|hand| {
        let tail = if hand.kind == HandKind::Second {
            c + face.counterweight
        } else {
            c
        };
        (hand.clone(), c - hand.length, tail, rotate(hand.angle, c))
    });
    let second = face.hand(HandKind::Second).filter(|h| h.visible).cloned();
    let second_transform = second.as_ref().map(|h| rotate(h.angle, c)).unwrap_or_default();
    let counterweight_tip = c + face.counterweight;
    let center_radius = face.center_dot / 2.0;

    rsx! {
        div { class: "dial-clock {class}", style: "width:{size}px;height:{size}px",
            svg { width: "{size}", height: "{size}", view_box: "0 0 {size} {size}",
                circle { class: "dial-clock-face", cx: "{c}", cy: "{c}", r: "{c}", fill: "{face_fill}" }

                for (key, y2, style, transform) in ticks {
                    line {
                        key: "{key}",
                        x1: "{c}", y1: "{inset}", x2: "{c}", y2: "{y2}",
                        stroke: "{style.color}",
                        stroke_width: "{style.width}",
                        opacity: "{style.opacity}",
                        transform: "{transform}",
                    }
                }

                for arc in face.arcs.iter() {
                    path {
                        key: "{arc.hand.name()}-arc",
                        class: "dial-clock-arc",
                        d: "{arc.geometry.path}",
                        fill: "{arc.color}",
                        opacity: "{arc.opacity}",
                    }
                }

                for label in face.numbers.iter() {
                    text {
                        key: "n{label.placement.value}",
                        class: "dial-clock-number",
                        x: "{label.placement.x:.3}",
                        y: "{label.placement.y:.3}",
                        text_anchor: "middle",
                        dominant_baseline: "central",
                        font_size: "{face.number_font_size}",
                        fill: "{label.color}",
                        opacity: "{label.opacity}",
                        "{label.placement.value}"
                    }
                }

                for (hand, tip, tail, transform) in hands {
                    line {
                        key: "{hand.kind.name()}",
                        class: "dial-clock-hand dial-clock-hand-{hand.kind.name()}",
                        x1: "{c}", y1: "{tail}", x2: "{c}", y2: "{tip}",
                        stroke: "{hand.color}",
                        stroke_width: "{hand.thickness}",
                        stroke_linecap: "round",
                        opacity: "{hand.opacity}",
                        transform: "{transform}",
                    }
                }

                if let Some(second) = second {
                    line {
                        class: "dial-clock-counterweight",
                        x1: "{c}", y1: "{c}", x2: "{c}", y2: "{counterweight_tip}",
                        stroke: "{second.color}",
                        stroke_width: "{face.counterweight_thickness}",
                        stroke_linecap: "round",
                        opacity: "{second.opacity}",
                        transform: "{second_transform}",
                    }
                    circle {
                        class: "dial-clock-center",
                        cx: "{c}", cy: "{c}", r: "{center_radius}",
                        fill: "{second.color}",
                        opacity: "{second.opacity}",
                    }
                }
            }
        }
    }
}
