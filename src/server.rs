#![cfg(feature = "server")]

use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

/// Log filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
