use dioxus::prelude::*;

use crate::components::Clock;
use crate::shared::presets::clock_presets;

#[allow(non_snake_case)]
#[component]
pub fn Gallery() -> Element {
    let presets = use_hook(clock_presets);

    rsx! {
        div { class: "card-grid",
            for preset in presets {
                div { key: "{preset.title}", class: "card",
                    h2 { class: "card-title", "{preset.title}" }
                    Clock { options: preset.options.clone() }
                    p { class: "card-caption", "{preset.description}" }
                }
            }
        }
    }
}
