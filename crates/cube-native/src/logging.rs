use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` once. `RUST_LOG` wins over the `info` default.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                // wgpu is chatty at info
                builder
                    .filter_level(log::LevelFilter::Info)
                    .filter_module("wgpu_core", log::LevelFilter::Warn)
                    .filter_module("wgpu_hal", log::LevelFilter::Warn);
            }
        }
        builder.init();
        log::debug!("logging initialized");
    });
}
