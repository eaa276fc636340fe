//! Browser entry point of the tutoring client.
//!
//! Build for `wasm32-unknown-unknown`; the native binary only reports that it
//! has nothing to do.

mod config;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod logging;

#[cfg(target_arch = "wasm32")]
fn main() {
    let (config, config_error) = config::load();
    logging::init(config.log.max_level());
    if let Some(e) = config_error {
        tracing::warn!(
            "invalid {}, using defaults: {}",
            tutoring::ClientConfig::filename(),
            e
        );
    }
    app::start(config);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    tracing_subscriber::fmt().init();
    let (config, _) = config::load();
    tracing::error!(
        "the tutoring client runs in the browser against {}; build it for wasm32",
        config.endpoints.profile
    );
}
