//! Logging subscriber initialisation.
//!
//! In the browser events go to the developer console. Native builds (tests)
//! write to stdout instead.

use tracing_subscriber::{
    filter::LevelFilter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init() -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(true);

    #[cfg(target_arch = "wasm32")]
    let fmt_layer = fmt_layer.with_writer(tracing_web::MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(LevelFilter::INFO)
        .try_init()
}
