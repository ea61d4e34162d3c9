//! Logger initialization.
//!
//! The picker core only talks to the `log` facade; the host binary decides
//! where records go. Here that is `env_logger` on stderr, so stdout stays
//! clean for the replay output.

use std::sync::Once;

use crate::config::LogLevel;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// `RUST_LOG`, when set, takes precedence over `level` (e.g.
/// `RUST_LOG=kreate_picker=trace`). Subsequent calls are ignored.
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(level.to_level_filter());
        }

        builder.target(env_logger::Target::Stderr);
        builder.init();

        log::debug!("logging initialized");
    });
}
