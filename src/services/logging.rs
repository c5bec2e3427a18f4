use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` wins over
/// `--verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("recite=debug")
        } else {
            EnvFilter::new("recite=warn")
        }
    });

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .try_init();
}
