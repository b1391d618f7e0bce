use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global tracing subscriber.
///
/// Logs go to stderr so they never land between a prompt and the professor's
/// answer on stdout. `RUST_LOG` wins over `config.log_filter`.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
