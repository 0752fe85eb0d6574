//! Logger setup for the command-line tool.
//!
//! Logs go to stderr through `env_logger`, reports go to stdout. `RUST_LOG`
//! takes precedence over the `--log-level` flag when it is set.

use env_logger::{Builder, Env, Target};

/// Initialize the global logger. Calling it twice is harmless.
pub fn init(level: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init("debug");
        init("info");
        log::debug!("logger initialized");
    }
}
