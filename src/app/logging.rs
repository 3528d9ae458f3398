use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Install the stderr `fmt` subscriber
///
/// Falls back to `info` when the directive does not parse. Calling this more
/// than once keeps the first subscriber.
pub fn init_tracing(directive: &str) {
    let (filter, invalid) = match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if let (true, Some(e)) = (installed, invalid) {
        warn!(directive, error = %e, "Invalid log filter, using info");
    }
}
