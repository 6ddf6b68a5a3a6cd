//! Diagnostic tracing for the marker
//!
//! Game reports and result files are the product output. Tracing describes
//! the agent's own decisions (spawns, guesses, truncated output) and always
//! goes to stderr so it never mixes with a printed transcript.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when neither `--log` nor `RUST_LOG` says otherwise
const DEFAULT_DIRECTIVE: LevelFilter = LevelFilter::WARN;

/// Install the stderr subscriber
///
/// `directives` (the CLI `--log` value) takes precedence over `RUST_LOG`.
///
/// ```bash
/// hangman_marker --log hangman_marker=debug solve hangman.py
/// RUST_LOG=hangman_marker::transport=trace hangman_marker batch
/// ```
pub fn init(directives: Option<&str>) {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(directives.or(from_env.as_deref()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Parse filter directives, falling back to warnings only
///
/// Invalid directives are skipped rather than rejected.
fn build_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_DIRECTIVE.into())
        .parse_lossy(directives.unwrap_or_default().trim())
}
