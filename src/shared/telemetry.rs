use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber on stderr, filtered by `RUST_LOG` (default `info`).
///
/// Panics if a global subscriber is already set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the prompt and the replies
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
