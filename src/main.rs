use dioxus::prelude::*;

mod app;
mod clock;
mod components;
mod hooks;
mod shared;
mod utils;

#[cfg(feature = "server")]
mod server;

pub const CLOCK_CSS: Asset = asset!("/assets/clock.css");

fn main() {
    #[cfg(feature = "server")]
    server::init_tracing();

    dioxus::launch(app::App);
}
