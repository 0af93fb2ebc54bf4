//! Logging initialisation via tracing-subscriber.
//!
//! Diagnostics go to stderr so they never interleave with the console on
//! stdout. Call [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
///
/// `level` accepts `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"` or any
/// `EnvFilter` directive. When it does not parse, `RUST_LOG` is used instead.
pub fn init(level: &str) -> Result<(), String> {
    let filter = match EnvFilter::try_new(level) {
        Ok(filter) => filter,
        Err(level_err) => EnvFilter::try_from_default_env().map_err(|env_err| {
            format!("invalid log level '{level}': {level_err}; RUST_LOG parse failed: {env_err}")
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("failed to set subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_succeeds_or_already_init() {
        // Another test may have installed the subscriber first.
        match init("warn") {
            Ok(()) => {}
            Err(msg) => assert!(msg.contains("set subscriber"), "{msg}"),
        }
    }
}
