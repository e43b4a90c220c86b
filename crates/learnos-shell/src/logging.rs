use tracing_subscriber::{EnvFilter, fmt};

/// Logs go to stderr so they do not interleave with the REPL on stdout.
/// Defaults to `warn`; `RUST_LOG` overrides, `LEARNOS_LOG_JSON=1` switches to JSON.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let use_json = std::env::var("LEARNOS_LOG_JSON")
        .map(|value| value == "1")
        .unwrap_or(false);

    if use_json {
        let _ = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .json()
            .with_writer(std::io::stderr)
            .try_init();
    } else {
        let _ = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
