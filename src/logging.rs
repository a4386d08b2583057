//! Logging and tracing setup.
//!
//! The library itself only emits `tracing` events; binaries and tests that
//! want to see them call [`init_tracing`].

use std::sync::Once;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Installs the global subscriber, as plain text or as JSON lines.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Only the first
/// call has any effect, and an already installed subscriber is left alone.
pub fn init_tracing(json: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let text_layer = (!json).then(|| fmt::layer().with_target(true));
        let json_layer = json.then(|| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
        });

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(text_layer)
            .with(json_layer)
            .try_init();

        info!(json, "norscope logging ready");
    });
}
