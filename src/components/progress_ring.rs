use dioxus::prelude::*;

use crate::clock::arcs::point_on_dial;

/// Open arc from 12 o'clock covering `fraction` of a full turn.
fn ring_path(c: f64, r: f64, fraction: f64) -> String {
    // a full turn would start and end on the same point
    let sweep = (fraction.clamp(0.0, 1.0) * 360.0).min(359.99);
    let (x0, y0) = point_on_dial(c, c, r, 0.0);
    let (x1, y1) = point_on_dial(c, c, r, sweep);
    let large_arc = u8::from(sweep >= 180.0);
    format!("M {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x1:.3} {y1:.3}")
}

#[allow(non_snake_case)]
#[component]
pub fn ProgressRing(
    fraction: f64,
    size: f64,
    stroke: f64,
    #[props(default)] track_class: String,
    #[props(default)] progress_class: String,
    children: Element,
) -> Element {
    let c = size / 2.0;
    let r = c - stroke / 2.0 - 1.0; // small padding

    let track_d = ring_path(c, r, 1.0);
    let progress_d = ring_path(c, r, fraction);
    let view_box = format!("0 0 {size} {size}");
    let container_style = format!("width:{size}px;height:{size}px");

    rsx! {
        div { class: "progress-ring", style: "{container_style}",
            svg { width: "{size}", height: "{size}", view_box: "{view_box}",
                // Track
                path { class: "{track_class}", d: "{track_d}", fill: "none", stroke: "currentColor", stroke_width: "{stroke}", stroke_linecap: "round" }
                // Progress
                if fraction > 0.0 {
                    path { class: "{progress_class}", d: "{progress_d}", fill: "none", stroke: "currentColor", stroke_width: "{stroke}", stroke_linecap: "round" }
                }
            }
            // Center content
            div { class: "progress-ring-center", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_ring_ends_at_three_o_clock() {
        assert_eq!(
            ring_path(50.0, 40.0, 0.25),
            "M 50.000 10.000 A 40.000 40.000 0 0 1 90.000 50.000"
        );
    }

    #[test]
    fn long_rings_use_the_large_arc() {
        assert!(ring_path(50.0, 40.0, 0.75).contains(" 0 1 1 "));
        assert!(ring_path(50.0, 40.0, 2.0).contains(" 0 1 1 "));
    }
}
