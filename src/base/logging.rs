//! Console logging shared by both binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Map a `-v` count to a tracing level.
///
/// - No flag: INFO level
/// - -v: DEBUG level
/// - -vv or more: TRACE level
pub fn level_for(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Install the global subscriber, writing to stderr so stdout stays free for CI tooling.
pub fn init(verbose: u8) {
    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level_for(verbose));

    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_ansi(false)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry().with(level_filter).with(stderr).init();
}
