use dioxus::prelude::*;

use crate::components::{CountdownPanel, Gallery, WorldClocks};
use crate::CLOCK_CSS;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Gallery {},
        #[route("/world")]
        WorldClocks {},
        #[route("/countdown")]
        CountdownPanel {},
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: CLOCK_CSS }
        document::Meta { name: "theme-color", content: "#020618" }
        document::Meta { name: "color-scheme", content: "dark" }
        Router::<Route> {}
    }
}

#[allow(non_snake_case)]
#[component]
fn Shell() -> Element {
    rsx! {
        // Page container
        div { class: "page",
            nav { class: "nav",
                Link { to: Route::Gallery {}, "Gallery" }
                Link { to: Route::WorldClocks {}, "World" }
                Link { to: Route::CountdownPanel {}, "Countdown" }
            }
            Outlet::<Route> {}
        }
    }
}
