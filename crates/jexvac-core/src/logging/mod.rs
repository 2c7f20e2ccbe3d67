use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging.
///
/// Logs are JSON lines on stderr so stdout stays reserved for the report.
/// Only error-level events are emitted unless `verbose` is set, in which
/// case info-level and above are emitted. `RUST_LOG` directives still apply.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "error" };

    let mut filter = EnvFilter::from_default_env();
    for target in ["jexvac", "jexvac_core"] {
        if let Ok(directive) = format!("{target}={level}").parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
